//! Handler trait and the dispatch registry.
//!
//! The registry maps command words and exact text matches to handlers. It is
//! an explicitly constructed value passed into the dispatch loop — no global
//! singleton; registration finishes before the loop takes ownership of it.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::HandlerError;
use crate::types::Message;

/// User-supplied callable invoked with a parsed [`Message`] when a command or
/// exact-text match resolves. Errors are logged by the dispatch loop and
/// never stop ingestion.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, message: &Message) -> Result<(), HandlerError>;
}

type HandlerFuture = Pin<Box<dyn Future<Output = Result<(), HandlerError>> + Send>>;

struct FnHandler {
    f: Box<dyn Fn(Message) -> HandlerFuture + Send + Sync>,
}

#[async_trait]
impl Handler for FnHandler {
    async fn handle(&self, message: &Message) -> Result<(), HandlerError> {
        (self.f)(message.clone()).await
    }
}

/// Wraps a plain async closure as a [`Handler`], so simple bots can register
/// functions without defining a handler type.
pub fn handler_fn<F, Fut>(f: F) -> Arc<dyn Handler>
where
    F: Fn(Message) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), HandlerError>> + Send + 'static,
{
    Arc::new(FnHandler {
        f: Box::new(move |message| Box::pin(f(message))),
    })
}

/// Command-word and exact-text handler mappings.
///
/// Registration is last-write-wins: registering the same key twice silently
/// replaces the earlier handler. Resolution misses are `None`, never an
/// error — the dispatch loop treats them as no-ops.
#[derive(Default)]
pub struct HandlerRegistry {
    commands: HashMap<String, Arc<dyn Handler>>,
    messages: HashMap<String, Arc<dyn Handler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for a command word (case-sensitive, no leading
    /// slash). Overwrites any existing handler for the same word.
    pub fn register_command(&mut self, command: impl Into<String>, handler: Arc<dyn Handler>) {
        self.commands.insert(command.into(), handler);
    }

    /// Bulk [`HandlerRegistry::register_command`].
    pub fn register_commands<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (S, Arc<dyn Handler>)>,
        S: Into<String>,
    {
        for (command, handler) in entries {
            self.register_command(command, handler);
        }
    }

    /// Registers a handler for an exact text match. Overwrites any existing
    /// handler for the same text.
    pub fn register_text(&mut self, text: impl Into<String>, handler: Arc<dyn Handler>) {
        self.messages.insert(text.into(), handler);
    }

    /// Resolves a parsed message to a handler: by command word when the
    /// message is a command, otherwise by exact text. `None` when the message
    /// has no text or nothing matches.
    pub fn resolve(&self, message: &Message) -> Option<Arc<dyn Handler>> {
        if message.is_command {
            self.commands.get(&message.command).cloned()
        } else {
            message
                .text
                .as_ref()
                .and_then(|text| self.messages.get(text))
                .cloned()
        }
    }
}
