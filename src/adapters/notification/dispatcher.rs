//! Bounded notification queue with a supervised delivery worker.
//!
//! ```text
//! handler ──notify()──▶ mpsc (bounded) ──▶ worker ──spawn──▶ delivery task
//!                          full => drop        │ semaphore caps in-flight
//!                                              └ watch => shutdown
//! ```
//!
//! Each delivery resolves the calculator owner's chat through the
//! `TenantDirectory`, renders the summary and sends it. Failures and
//! panics are logged and never reach the request that triggered them.

use std::sync::Arc;

use tokio::sync::mpsc::error::TrySendError;
use tokio::sync::{mpsc, watch, Semaphore};
use tokio::task::{JoinError, JoinHandle, JoinSet};

use crate::ports::{ComputationEvent, ComputationNotifier, MessageSender, TenantDirectory};

use super::message::render_summary;

/// Queue bounds.
#[derive(Debug, Clone, Copy)]
pub struct DispatcherSettings {
    pub queue_capacity: usize,
    pub max_concurrent: usize,
}

impl Default for DispatcherSettings {
    fn default() -> Self {
        Self {
            queue_capacity: 256,
            max_concurrent: 8,
        }
    }
}

/// Producer side, shared with the request handlers.
#[derive(Clone)]
pub struct NotificationDispatcher {
    queue: mpsc::Sender<ComputationEvent>,
}

impl ComputationNotifier for NotificationDispatcher {
    fn notify(&self, event: ComputationEvent) {
        match self.queue.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                tracing::warn!(
                    calculator_id = %event.calculator_id,
                    "Notification queue full, dropping notification"
                );
            }
            Err(TrySendError::Closed(event)) => {
                tracing::debug!(
                    calculator_id = %event.calculator_id,
                    "Notification worker stopped, dropping notification"
                );
            }
        }
    }
}

/// Owns the worker task.
pub struct DispatcherHandle {
    shutdown: watch::Sender<bool>,
    worker: JoinHandle<()>,
}

impl DispatcherHandle {
    /// Stops accepting queued events and waits for in-flight deliveries.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        if let Err(e) = self.worker.await {
            tracing::error!(error = %e, "Notification worker terminated abnormally");
        }
    }
}

/// Starts the delivery worker on the current runtime.
pub fn spawn_dispatcher(
    directory: Arc<dyn TenantDirectory>,
    sender: Arc<dyn MessageSender>,
    settings: DispatcherSettings,
) -> (NotificationDispatcher, DispatcherHandle) {
    let (queue, events) = mpsc::channel(settings.queue_capacity.max(1));
    let (shutdown, shutdown_rx) = watch::channel(false);

    let worker = tokio::spawn(run_worker(
        events,
        shutdown_rx,
        directory,
        sender,
        Arc::new(Semaphore::new(settings.max_concurrent.max(1))),
    ));

    (
        NotificationDispatcher { queue },
        DispatcherHandle { shutdown, worker },
    )
}

async fn run_worker(
    mut events: mpsc::Receiver<ComputationEvent>,
    mut shutdown: watch::Receiver<bool>,
    directory: Arc<dyn TenantDirectory>,
    sender: Arc<dyn MessageSender>,
    permits: Arc<Semaphore>,
) {
    let mut deliveries = JoinSet::new();

    loop {
        tokio::select! {
            biased;

            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }

            Some(finished) = deliveries.join_next() => log_finished(finished),

            next = events.recv() => {
                let Some(event) = next else { break };
                let Ok(permit) = permits.clone().acquire_owned().await else { break };

                let directory = directory.clone();
                let sender = sender.clone();
                deliveries.spawn(async move {
                    let _permit = permit;
                    deliver(directory.as_ref(), sender.as_ref(), event).await;
                });
            }
        }
    }

    while let Some(finished) = deliveries.join_next().await {
        log_finished(finished);
    }
    tracing::info!("Notification worker stopped");
}

fn log_finished(finished: Result<(), JoinError>) {
    if let Err(e) = finished {
        tracing::error!(error = %e, "Notification delivery task failed");
    }
}

async fn deliver(
    directory: &dyn TenantDirectory,
    sender: &dyn MessageSender,
    event: ComputationEvent,
) {
    let calculator_id = &event.calculator_id;

    let target = match directory.notification_target(calculator_id).await {
        Ok(Some(target)) => target,
        Ok(None) => {
            tracing::debug!(%calculator_id, "No chat configured for calculator owner");
            return;
        }
        Err(e) => {
            tracing::warn!(%calculator_id, error = %e, "Notification target lookup failed");
            return;
        }
    };

    let text = render_summary(&target, calculator_id.as_str(), &event.summary);
    match sender.send(&target.chat_id, &text).await {
        Ok(()) => tracing::debug!(%calculator_id, "Notification delivered"),
        Err(e) => tracing::warn!(%calculator_id, error = %e, "Notification delivery failed"),
    }
}
