//! Computation notifications.
//!
//! - `dispatcher` - bounded background queue in front of a `MessageSender`
//! - `telegram` - Bot API `sendMessage` delivery
//! - `message` - summary text for the tenant's chat
//!
//! [`DisabledNotifier`] stands in when no bot token is configured.

mod dispatcher;
mod message;
mod telegram;

pub use dispatcher::{spawn_dispatcher, DispatcherHandle, DispatcherSettings, NotificationDispatcher};
pub use message::render_summary;
pub use telegram::{build_client, TelegramSender};

use crate::ports::{ComputationEvent, ComputationNotifier};

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledNotifier;

impl ComputationNotifier for DisabledNotifier {
    fn notify(&self, event: ComputationEvent) {
        tracing::trace!(calculator_id = %event.calculator_id, "Notifications disabled");
    }
}
