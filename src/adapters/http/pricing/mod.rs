//! HTTP adapter for the public pricing endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    DistanceCalcRequest, DistanceCalcResponse, LayeredCalcRequest, LayeredCalcResponse,
    MortgageCalcRequest, MortgageCalcResponse, RoutePointResponse,
};
pub use handlers::PricingAppState;
pub use routes::pricing_router;
