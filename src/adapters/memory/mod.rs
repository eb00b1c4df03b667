//! In-memory adapters.
//!
//! Process-local implementations of the persistence ports, used by tests and
//! for running the service without a database. Cloned handles share state.

mod calculator_repository;
mod config_store;
mod lead_counter;
mod plan_repository;
mod tenant_directory;

pub use calculator_repository::InMemoryCalculatorRepository;
pub use config_store::InMemoryConfigStore;
pub use lead_counter::InMemoryLeadCounter;
pub use plan_repository::InMemoryPlanRepository;
pub use tenant_directory::InMemoryTenantDirectory;
