//! HTTP adapters - REST API implementations.
//!
//! Each endpoint group has its own module with DTOs, handlers and routes.
//! [`api_router`] assembles them behind the shared middleware stack.

pub mod account;
pub mod calculators;
pub mod configs;
pub mod error;
pub mod middleware;
pub mod pricing;
pub mod public;
mod router;

pub use error::ErrorResponse;
pub use router::{api_router, ApiPorts, ApiState};
