//! Calculator configuration handlers.

mod access;
mod effective;
mod get_config;
mod update_config;

pub use access::authorize_calculator;
pub use effective::{load_distance_config, load_layered_config};
pub use get_config::{GetConfigHandler, GetConfigQuery};
pub use update_config::{UpdateConfigCommand, UpdateConfigHandler};
