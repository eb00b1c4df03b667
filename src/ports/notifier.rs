//! Notification ports.
//!
//! Pricing handlers hand a [`ComputationEvent`] to a [`ComputationNotifier`]
//! and move on. The notifier resolves the owner's chat and delivers the
//! message through a [`MessageSender`] on its own schedule.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::CalculatorId;

/// What was computed, in enough detail to write a summary.
#[derive(Debug, Clone, PartialEq)]
pub enum ComputationSummary {
    Layered {
        selected_option_ids: Vec<String>,
        total: f64,
    },
    Distance {
        from: String,
        to: String,
        vehicle: String,
        round_trip: bool,
        distance_km: f64,
        total: f64,
    },
    Mortgage {
        amount: f64,
        rate: f64,
        years: i64,
        monthly: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputationEvent {
    pub calculator_id: CalculatorId,
    pub summary: ComputationSummary,
}

/// Accepts computation events without blocking the caller.
///
/// Implementations must never fail the caller; overload is handled by
/// dropping events.
pub trait ComputationNotifier: Send + Sync {
    fn notify(&self, event: ComputationEvent);
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SendError {
    #[error("request timed out")]
    Timeout,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("bot API rejected message with status {0}")]
    Rejected(u16),
}

/// Delivers a text message to a chat.
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), SendError>;
}
