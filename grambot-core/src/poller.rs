//! Update poller: the producer side of the pipeline.
//!
//! Repeatedly fetches updates from the transport, pushes the nested message
//! payloads onto the bounded hand-off queue, and advances the resume offset.
//! Transport failures are retried with capped exponential backoff; the queue
//! exerts backpressure by blocking the poller when the dispatcher lags.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::transport::Transport;
use crate::types::Update;

const INITIAL_BACKOFF: Duration = Duration::from_millis(500);
const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Long-running producer loop. One instance feeds exactly one [`Dispatcher`]
/// (single-producer/single-consumer); the queue is the only state shared
/// between them.
///
/// [`Dispatcher`]: crate::dispatch::Dispatcher
pub struct UpdatePoller {
    transport: Arc<dyn Transport>,
    queue: mpsc::Sender<Value>,
    poll_interval: Duration,
    offset: Option<i64>,
}

impl UpdatePoller {
    pub fn new(
        transport: Arc<dyn Transport>,
        queue: mpsc::Sender<Value>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            transport,
            queue,
            poll_interval,
            offset: None,
        }
    }

    /// Runs until `cancel` fires or the consumer side of the queue is
    /// dropped. Fetch errors back off and retry; the backoff resets after a
    /// successful fetch.
    pub async fn run(mut self, cancel: CancellationToken) {
        info!("update poller started");
        let mut backoff = INITIAL_BACKOFF;

        loop {
            let updates = tokio::select! {
                _ = cancel.cancelled() => break,
                result = self.transport.get_updates(self.offset) => match result {
                    Ok(updates) => {
                        backoff = INITIAL_BACKOFF;
                        updates
                    }
                    Err(e) => {
                        warn!(
                            error = %e,
                            retry_in_ms = backoff.as_millis() as u64,
                            "fetching updates failed; backing off"
                        );
                        tokio::select! {
                            _ = cancel.cancelled() => break,
                            _ = sleep(backoff) => {}
                        }
                        backoff = (backoff * 2).min(MAX_BACKOFF);
                        continue;
                    }
                },
            };

            for Update { update_id, message } in updates {
                match message {
                    Some(payload) => {
                        // send() blocks when the queue is full: backpressure
                        // against a slow dispatcher.
                        let enqueued = tokio::select! {
                            _ = cancel.cancelled() => return,
                            result = self.queue.send(payload) => result.is_ok(),
                        };
                        if !enqueued {
                            info!("hand-off queue closed; update poller stopping");
                            return;
                        }
                        debug!(update_id = update_id, "message payload enqueued");
                    }
                    None => {
                        debug!(update_id = update_id, "update without message; skipped");
                    }
                }
                // The offset advances once per update, message or not, so
                // skipped updates are never re-delivered.
                self.offset = Some(update_id + 1);
            }

            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = sleep(self.poll_interval) => {}
            }
        }

        info!("update poller stopped");
    }
}
