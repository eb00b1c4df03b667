//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Handlers take their collaborators as `Arc<dyn Port>` and never touch
//! infrastructure directly.

pub mod handlers;

pub use handlers::{
    // Pricing
    ComputationRecorder, ComputeDistanceCommand, ComputeDistanceHandler, ComputeError,
    ComputeLayeredCommand, ComputeLayeredHandler, ComputeMortgageCommand, ComputeMortgageHandler,
    // Calculators
    CreateCalculatorCommand, CreateCalculatorHandler, DeleteCalculatorCommand,
    DeleteCalculatorHandler, GetPublicCalculatorHandler, GetPublicCalculatorQuery,
    ListCalculatorsHandler, PublicCalculatorView,
    // Configs
    GetConfigHandler, GetConfigQuery, UpdateConfigCommand, UpdateConfigHandler,
    // Account
    AccountError, AccountOverview, GetOverviewHandler, ListPlansHandler, SetTelegramChatCommand,
    SetTelegramChatHandler, UsageReporter,
};
