//! Transport seam between the core pipeline and the wire client.

use async_trait::async_trait;

use crate::error::TransportError;
use crate::types::{BotIdentity, Update};

/// The inbound operations the core pipeline needs from a wire client.
///
/// `get_me` runs once during the startup handshake; `get_updates` is the
/// long-poll fetch, returning updates in platform order. Outbound sends are
/// transport-specific surface (see grambot-telegram) and are consumed by
/// handlers, not by the core.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Resolves the bot's own identity.
    async fn get_me(&self) -> Result<BotIdentity, TransportError>;

    /// Fetches updates with ids >= `offset` (all pending updates when
    /// `None`), in the order the platform returns them.
    async fn get_updates(&self, offset: Option<i64>) -> Result<Vec<Update>, TransportError>;
}
