//! Error types for the bot core.
//!
//! [`BotError`] is the top-level error; [`TransportError`], [`ParseError`] and
//! [`HandlerError`] are the per-component kinds the pipeline distinguishes.

use serde_json::Value;
use thiserror::Error;

/// Top-level error for grambot (identity, transport, parsing, handler, config, IO).
#[derive(Error, Debug)]
pub enum BotError {
    /// The startup handshake failed: credentials were rejected or the identity
    /// response was unusable. Fatal — the bot never starts polling.
    #[error("invalid bot identity: {0}")]
    InvalidIdentity(String),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from the wire transport (HTTP failure or an API-level rejection).
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("api error: {0}")]
    Api(String),
}

/// A raw record that could not be mapped to a domain type. Carries the
/// offending record so callers can log or inspect it.
#[derive(Error, Debug)]
#[error("unable to parse record ({reason}): {record}")]
pub struct ParseError {
    pub record: Value,
    pub reason: String,
}

impl ParseError {
    pub(crate) fn new(record: &Value, reason: impl Into<String>) -> Self {
        Self {
            record: record.clone(),
            reason: reason.into(),
        }
    }
}

/// Errors produced by user handlers. Never fatal to the dispatch loop.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("{0}")]
    Other(String),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
