//! ComputeDistanceHandler - Prices a delivery between two addresses.

use std::sync::Arc;

use crate::domain::foundation::CalculatorId;
use crate::domain::pricing::{DistanceOutcome, DistancePricer, DistanceRequest, PricingError};
use crate::ports::{ComputationSummary, ConfigStore};

use super::super::config::load_distance_config;
use super::{ComputationRecorder, ComputeError};

#[derive(Debug, Clone)]
pub struct ComputeDistanceCommand {
    pub calculator_id: String,
    pub request: DistanceRequest,
}

pub struct ComputeDistanceHandler {
    pricer: DistancePricer,
    configs: Arc<dyn ConfigStore>,
    recorder: ComputationRecorder,
}

impl ComputeDistanceHandler {
    pub fn new(
        pricer: DistancePricer,
        configs: Arc<dyn ConfigStore>,
        recorder: ComputationRecorder,
    ) -> Self {
        Self {
            pricer,
            configs,
            recorder,
        }
    }

    /// Geo failures are returned unmetered.
    pub async fn handle(&self, cmd: ComputeDistanceCommand) -> Result<DistanceOutcome, ComputeError> {
        cmd.request.validate().map_err(PricingError::from)?;

        let calculator_id = CalculatorId::new(cmd.calculator_id.trim()).ok();
        let config = load_distance_config(self.configs.as_ref(), calculator_id.as_ref()).await?;

        let outcome = self.pricer.price(&config, &cmd.request).await?;

        self.recorder
            .record(
                &cmd.calculator_id,
                ComputationSummary::Distance {
                    from: cmd.request.from.trim().to_string(),
                    to: cmd.request.to.trim().to_string(),
                    vehicle: cmd.request.vehicle.clone(),
                    round_trip: cmd.request.round_trip,
                    distance_km: outcome.quote.distance_total_km,
                    total: outcome.quote.price_total,
                },
            )
            .await;

        Ok(outcome)
    }
}
