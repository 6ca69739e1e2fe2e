//! Bot runner: startup handshake and supervision of the two loops.
//!
//! Both tasks are spawned from one place and connected only by the bounded
//! hand-off queue, so either one exiting is observable here: the runner
//! cancels the shared token and joins both before returning.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument, warn};

use crate::dispatch::Dispatcher;
use crate::error::{BotError, Result};
use crate::poller::UpdatePoller;
use crate::registry::HandlerRegistry;
use crate::transport::Transport;

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);
const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// Wires transport, registry, poller and dispatcher together.
///
/// Construction takes ownership of the registry, so all registration is
/// complete before the dispatch loop can read it.
pub struct Bot {
    transport: Arc<dyn Transport>,
    registry: HandlerRegistry,
    poll_interval: Duration,
    queue_capacity: usize,
}

impl Bot {
    pub fn new(transport: Arc<dyn Transport>, registry: HandlerRegistry) -> Self {
        Self {
            transport,
            registry,
            poll_interval: DEFAULT_POLL_INTERVAL,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }

    /// Sets the sleep between update fetches.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Sets the hand-off queue capacity (the poller blocks when it is full).
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity.max(1);
        self
    }

    /// Runs the bot until ctrl-c.
    #[instrument(skip(self))]
    pub async fn run(self) -> Result<()> {
        let cancel = CancellationToken::new();
        let signal_token = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("shutdown signal received");
                signal_token.cancel();
            }
        });
        self.run_until(cancel).await
    }

    /// Runs the bot until `cancel` fires (or either loop exits). The startup
    /// handshake runs first: a failed `getMe` is fatal and nothing is
    /// spawned.
    pub async fn run_until(self, cancel: CancellationToken) -> Result<()> {
        let identity = self
            .transport
            .get_me()
            .await
            .map_err(|e| BotError::InvalidIdentity(e.to_string()))?;
        let botname = identity.username.clone().unwrap_or_default();

        info!(
            bot_id = identity.id,
            botname = %botname,
            "identity resolved; starting pipeline"
        );

        let (tx, rx) = mpsc::channel(self.queue_capacity);
        let poller = UpdatePoller::new(self.transport.clone(), tx, self.poll_interval);
        let dispatcher = Dispatcher::new(rx, self.registry, botname);

        let mut poll_task = tokio::spawn(poller.run(cancel.clone()));
        let mut dispatch_task = tokio::spawn(dispatcher.run(cancel.clone()));

        // Whichever task exits first (cancellation, closed queue, panic)
        // takes the other one down with it.
        tokio::select! {
            result = &mut poll_task => {
                if let Err(e) = result {
                    error!(error = %e, "update poller task failed");
                } else if !cancel.is_cancelled() {
                    warn!("update poller exited; stopping dispatch loop");
                }
                cancel.cancel();
                if let Err(e) = dispatch_task.await {
                    error!(error = %e, "dispatch task failed");
                }
            }
            result = &mut dispatch_task => {
                if let Err(e) = result {
                    error!(error = %e, "dispatch task failed");
                } else if !cancel.is_cancelled() {
                    warn!("dispatch loop exited; stopping update poller");
                }
                cancel.cancel();
                if let Err(e) = poll_task.await {
                    error!(error = %e, "update poller task failed");
                }
            }
        }

        info!("bot stopped");
        Ok(())
    }
}
