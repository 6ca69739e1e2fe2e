//! Dispatch loop: the single consumer of the hand-off queue.
//!
//! Pops one raw payload at a time, parses it, resolves a handler via the
//! registry, and invokes it. Parse failures and handler failures are
//! isolated per item: logged, never fatal to the loop.

use serde_json::Value;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::parser::parse_message;
use crate::registry::HandlerRegistry;

/// Long-running consumer loop. Owns the registry (registration is complete
/// before construction) and the bot username captured at startup for command
/// normalization.
pub struct Dispatcher {
    queue: mpsc::Receiver<Value>,
    registry: HandlerRegistry,
    botname: String,
}

impl Dispatcher {
    pub fn new(queue: mpsc::Receiver<Value>, registry: HandlerRegistry, botname: String) -> Self {
        Self {
            queue,
            registry,
            botname,
        }
    }

    /// Runs until `cancel` fires or the producer side of the queue closes.
    /// Handlers run synchronously, one at a time, in arrival order.
    pub async fn run(mut self, cancel: CancellationToken) {
        info!(botname = %self.botname, "dispatch loop started");

        loop {
            let raw = tokio::select! {
                _ = cancel.cancelled() => break,
                item = self.queue.recv() => match item {
                    Some(raw) => raw,
                    None => {
                        info!("hand-off queue closed; dispatch loop stopping");
                        break;
                    }
                },
            };

            self.dispatch_one(raw).await;
        }

        info!("dispatch loop stopped");
    }

    /// Processes one raw payload: parse, classify, resolve, invoke.
    async fn dispatch_one(&self, raw: Value) {
        let message = match parse_message(&raw, &self.botname) {
            Ok(message) => message,
            Err(e) => {
                // One malformed payload must not stop ingestion.
                error!(error = %e, "failed to parse message payload; skipping");
                return;
            }
        };

        debug!(
            message_id = message.id,
            chat_id = message.chat_id(),
            is_command = message.is_command,
            command = %message.command,
            "message parsed"
        );

        let handler = match self.registry.resolve(&message) {
            Some(handler) => handler,
            None => {
                debug!(
                    message_id = message.id,
                    chat_id = message.chat_id(),
                    "no handler registered; ignoring"
                );
                return;
            }
        };

        if let Err(e) = handler.handle(&message).await {
            error!(
                error = %e,
                message_id = message.id,
                chat_id = message.chat_id(),
                "handler failed"
            );
        }
    }
}
