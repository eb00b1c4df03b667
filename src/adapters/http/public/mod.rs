//! HTTP adapter for public widget links.

mod handlers;
mod routes;

pub use handlers::{PublicAppState, PublicCalculatorResponse};
pub use routes::public_router;
