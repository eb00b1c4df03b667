//! ComputeLayeredHandler - Prices a layered selection.

use std::sync::Arc;

use crate::domain::foundation::CalculatorId;
use crate::domain::pricing::{price_layered, LayeredQuote};
use crate::ports::{ComputationSummary, ConfigStore};

use super::super::config::load_layered_config;
use super::{ComputationRecorder, ComputeError};

/// Command to price a set of selected options.
#[derive(Debug, Clone)]
pub struct ComputeLayeredCommand {
    /// Raw id from the request; blank or malformed ids price against defaults.
    pub calculator_id: String,
    pub selected: Vec<String>,
}

pub struct ComputeLayeredHandler {
    configs: Arc<dyn ConfigStore>,
    recorder: ComputationRecorder,
}

impl ComputeLayeredHandler {
    pub fn new(configs: Arc<dyn ConfigStore>, recorder: ComputationRecorder) -> Self {
        Self { configs, recorder }
    }

    pub async fn handle(&self, cmd: ComputeLayeredCommand) -> Result<LayeredQuote, ComputeError> {
        let calculator_id = CalculatorId::new(cmd.calculator_id.trim()).ok();
        let config = load_layered_config(self.configs.as_ref(), calculator_id.as_ref()).await?;

        let quote = price_layered(&config, &cmd.selected);

        self.recorder
            .record(
                &cmd.calculator_id,
                ComputationSummary::Layered {
                    selected_option_ids: quote.selected_option_ids.clone(),
                    total: quote.total,
                },
            )
            .await;

        Ok(quote)
    }
}
