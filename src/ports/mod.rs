//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `CalculatorRepository` - Calculator records
//! - `ConfigStore` - Per-calculator pricing configuration documents
//! - `PlanRepository` - Plan catalog storage
//! - `TenantDirectory` - Tenant accounts and notification targets
//! - `UsageMeter` - Atomic computation counters
//! - `LeadCounter` - Lead totals per tenant
//!
//! ## External Service Ports
//!
//! - `Geocoder` / `RouteProvider` - Address resolution and driving routes
//! - `MessageSender` - Bot API delivery
//! - `ComputationNotifier` - Non-blocking hand-off of computation summaries
//! - `SessionValidator` - Bearer token validation

mod calculator_repository;
mod config_store;
mod geocoder;
mod lead_counter;
mod notifier;
mod plan_repository;
mod route_provider;
mod session_validator;
mod tenant_directory;
mod usage_meter;

pub use calculator_repository::{CalculatorRepository, LimitedInsert};
pub use config_store::ConfigStore;
pub use geocoder::{GeoError, Geocoder};
pub use lead_counter::LeadCounter;
pub use notifier::{
    ComputationEvent, ComputationNotifier, ComputationSummary, MessageSender, SendError,
};
pub use plan_repository::PlanRepository;
pub use route_provider::RouteProvider;
pub use session_validator::SessionValidator;
pub use tenant_directory::{NotificationTarget, TenantDirectory};
pub use usage_meter::UsageMeter;
