//! # grambot-core
//!
//! Core update-ingestion and dispatch pipeline for a long-polling chat bot:
//! domain types ([`Message`], [`Chat`], [`User`]), the JSON [`parser`], the
//! [`HandlerRegistry`], and the two long-running loops ([`UpdatePoller`] and
//! [`Dispatcher`]) supervised by [`Bot`]. Transport-agnostic; the wire client
//! lives in grambot-telegram.

pub mod dispatch;
pub mod error;
pub mod logger;
pub mod parser;
pub mod poller;
pub mod registry;
pub mod runner;
pub mod transport;
pub mod types;

pub use dispatch::Dispatcher;
pub use error::{BotError, HandlerError, ParseError, Result, TransportError};
pub use logger::init_tracing;
pub use poller::UpdatePoller;
pub use registry::{handler_fn, Handler, HandlerRegistry};
pub use runner::Bot;
pub use transport::Transport;
pub use types::{BotIdentity, Chat, Entity, Message, Update, User};
