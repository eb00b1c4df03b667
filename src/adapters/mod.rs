//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - JWT session validation and a mock validator for tests
//! - `geo` - Nominatim-style geocoding and OSRM-style routing
//! - `http` - axum REST API
//! - `memory` - In-process persistence for tests and database-less runs
//! - `notification` - Bot API sender and the background dispatcher
//! - `postgres` - sqlx persistence

pub mod auth;
pub mod geo;
pub mod http;
pub mod memory;
pub mod notification;
pub mod postgres;
