//! Pricing engine.
//!
//! Pure computation for the layered, distance and mortgage calculator types.
//! Only [`DistancePricer`] touches the outside world, through the geocoding
//! and routing ports.

mod distance;
mod errors;
mod geo;
mod layered;
mod mortgage;

pub use distance::{
    price_distance, DistanceConfig, DistanceOutcome, DistancePricer, DistanceQuote,
    DistanceRequest,
};
pub use errors::PricingError;
pub use geo::{GeoPoint, RoutePlan};
pub use layered::{default_selection, price_layered, LayerOption, LayeredConfig, LayeredQuote};
pub use mortgage::{price_mortgage, MortgageInput, MortgageQuote};
