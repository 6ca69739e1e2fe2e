//! Wire-envelope types returned by the transport.

use serde::Deserialize;
use serde_json::Value;

/// One polling result item: a monotonically increasing id, optionally
/// wrapping a raw message record. Updates without a message (e.g. edits)
/// still advance the polling offset.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Value>,
}

/// The bot's own identity, resolved once at startup via the transport's
/// `getMe` operation. The username feeds command normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct BotIdentity {
    pub id: i64,
    #[serde(default)]
    pub is_bot: bool,
    pub first_name: String,
    #[serde(default)]
    pub username: Option<String>,
}
