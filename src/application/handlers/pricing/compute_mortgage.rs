//! ComputeMortgageHandler - Prices an annuity loan.

use crate::domain::pricing::{price_mortgage, MortgageInput, MortgageQuote};
use crate::ports::ComputationSummary;

use super::{ComputationRecorder, ComputeError};

#[derive(Debug, Clone)]
pub struct ComputeMortgageCommand {
    pub calculator_id: String,
    pub input: MortgageInput,
}

pub struct ComputeMortgageHandler {
    recorder: ComputationRecorder,
}

impl ComputeMortgageHandler {
    pub fn new(recorder: ComputationRecorder) -> Self {
        Self { recorder }
    }

    /// Returns the unrounded quote; rounding is left to presentation.
    pub async fn handle(&self, cmd: ComputeMortgageCommand) -> Result<MortgageQuote, ComputeError> {
        let quote = price_mortgage(cmd.input)?;

        self.recorder
            .record(
                &cmd.calculator_id,
                ComputationSummary::Mortgage {
                    amount: cmd.input.amount,
                    rate: cmd.input.rate,
                    years: cmd.input.years,
                    monthly: quote.rounded().monthly,
                },
            )
            .await;

        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::pricing::recorder::test_support::*;
    use std::sync::Arc;

    fn handler() -> (ComputeMortgageHandler, Arc<RecordingMeter>, Arc<RecordingNotifier>) {
        let meter = Arc::new(RecordingMeter::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let handler =
            ComputeMortgageHandler::new(ComputationRecorder::new(meter.clone(), notifier.clone()));
        (handler, meter, notifier)
    }

    fn cmd(amount: f64, rate: f64, years: i64) -> ComputeMortgageCommand {
        ComputeMortgageCommand {
            calculator_id: "calc_1".to_string(),
            input: MortgageInput {
                amount,
                rate,
                years,
            },
        }
    }

    #[tokio::test]
    async fn computes_and_records() {
        let (handler, meter, notifier) = handler();

        let quote = handler.handle(cmd(1_000_000.0, 12.0, 1)).await.unwrap();

        assert_eq!(quote.rounded().monthly, 88_848.79);
        assert_eq!(meter.recorded(), vec!["calc_1"]);
        assert!(matches!(
            notifier.events()[0].summary,
            ComputationSummary::Mortgage { monthly, years: 1, .. } if monthly == 88_848.79
        ));
    }

    #[tokio::test]
    async fn invalid_input_is_not_recorded() {
        let (handler, meter, notifier) = handler();

        assert!(handler.handle(cmd(0.0, 12.0, 1)).await.is_err());
        assert!(handler.handle(cmd(5e307, 0.0, 1)).await.is_err());

        assert!(meter.recorded().is_empty());
        assert!(notifier.events().is_empty());
    }
}
