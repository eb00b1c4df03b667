//! Pricing command handlers.
//!
//! Public endpoints: the caller is anonymous and `calculator_id` only selects
//! the tariff and the usage counter. Every successful computation is metered
//! and announced; neither side effect can fail the computation.

mod compute_distance;
mod compute_layered;
mod compute_mortgage;
mod errors;
mod recorder;

pub use compute_distance::{ComputeDistanceCommand, ComputeDistanceHandler};
pub use compute_layered::{ComputeLayeredCommand, ComputeLayeredHandler};
pub use compute_mortgage::{ComputeMortgageCommand, ComputeMortgageHandler};
pub use errors::ComputeError;
pub use recorder::ComputationRecorder;
