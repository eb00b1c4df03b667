//! HTTP adapter for per-calculator configuration documents.
//!
//! Request and response bodies are the camelCase config documents themselves.

mod handlers;
mod routes;

pub use handlers::ConfigsAppState;
pub use routes::configs_router;
