//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod account;
pub mod calculator;
pub mod config;
pub mod pricing;

pub use account::{
    AccountError, AccountOverview, GetOverviewHandler, ListPlansHandler, SetTelegramChatCommand,
    SetTelegramChatHandler, UsageReporter,
};
pub use calculator::{
    CreateCalculatorCommand, CreateCalculatorHandler, DeleteCalculatorCommand,
    DeleteCalculatorHandler, GetPublicCalculatorHandler, GetPublicCalculatorQuery,
    ListCalculatorsHandler, PublicCalculatorView,
};
pub use config::{GetConfigHandler, GetConfigQuery, UpdateConfigCommand, UpdateConfigHandler};
pub use pricing::{
    ComputationRecorder, ComputeDistanceCommand, ComputeDistanceHandler, ComputeError,
    ComputeLayeredCommand, ComputeLayeredHandler, ComputeMortgageCommand, ComputeMortgageHandler,
};
