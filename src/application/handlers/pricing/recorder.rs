//! Post-computation side effects.

use std::sync::Arc;

use crate::domain::foundation::CalculatorId;
use crate::ports::{ComputationEvent, ComputationNotifier, ComputationSummary, UsageMeter};

/// Meters a computation and hands its summary to the notifier.
#[derive(Clone)]
pub struct ComputationRecorder {
    meter: Arc<dyn UsageMeter>,
    notifier: Arc<dyn ComputationNotifier>,
}

impl ComputationRecorder {
    pub fn new(meter: Arc<dyn UsageMeter>, notifier: Arc<dyn ComputationNotifier>) -> Self {
        Self { meter, notifier }
    }

    /// Storage failures are logged; the caller's response is unaffected.
    pub async fn record(&self, calculator_id: &str, summary: ComputationSummary) {
        let calculator_id = calculator_id.trim();

        if let Err(e) = self.meter.record_computation(calculator_id).await {
            tracing::warn!(%calculator_id, error = %e, "Failed to record computation");
        }

        if let Ok(id) = CalculatorId::new(calculator_id) {
            self.notifier.notify(ComputationEvent {
                calculator_id: id,
                summary,
            });
        }
    }
}
