//! Parsing of raw platform JSON records into domain types.
//!
//! Pure and side-effect-free: these functions never touch the network or the
//! hand-off queue. Failures are [`ParseError`]s carrying the offending
//! record; absent *optional* fields map to `None`, never to an error.

use serde_json::Value;

use crate::error::ParseError;
use crate::types::{Chat, Entity, Message, User};

fn require_i64(raw: &Value, key: &str) -> Result<i64, ParseError> {
    raw.get(key)
        .and_then(Value::as_i64)
        .ok_or_else(|| ParseError::new(raw, format!("missing or non-integer `{}`", key)))
}

fn require_bool(raw: &Value, key: &str) -> Result<bool, ParseError> {
    raw.get(key)
        .and_then(Value::as_bool)
        .ok_or_else(|| ParseError::new(raw, format!("missing or non-boolean `{}`", key)))
}

fn require_str<'a>(raw: &'a Value, key: &str) -> Result<&'a str, ParseError> {
    raw.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| ParseError::new(raw, format!("missing or non-string `{}`", key)))
}

fn optional_string(raw: &Value, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Parses a raw user record. `id`, `is_bot` and `first_name` are required;
/// `last_name` and `username` are optional.
pub fn parse_user(raw: &Value) -> Result<User, ParseError> {
    Ok(User {
        id: require_i64(raw, "id")?,
        is_bot: require_bool(raw, "is_bot")?,
        first_name: require_str(raw, "first_name")?.to_string(),
        last_name: optional_string(raw, "last_name"),
        username: optional_string(raw, "username"),
    })
}

/// Parses a raw chat record, classifying it by its `type` tag. An unknown
/// tag fails with a [`ParseError`] carrying the record.
pub fn parse_chat(raw: &Value) -> Result<Chat, ParseError> {
    let id = require_i64(raw, "id")?;

    match require_str(raw, "type")? {
        "private" => Ok(Chat::Private {
            id,
            username: optional_string(raw, "username"),
            first_name: optional_string(raw, "first_name"),
            last_name: optional_string(raw, "last_name"),
        }),
        "group" => Ok(Chat::Group {
            id,
            title: optional_string(raw, "title"),
        }),
        "supergroup" => Ok(Chat::Supergroup {
            id,
            title: optional_string(raw, "title"),
        }),
        other => Err(ParseError::new(raw, format!("unknown chat type `{}`", other))),
    }
}

/// Parses one entity list entry. Entries must be objects with a string
/// `type` and non-negative `offset`/`length`; anything else is a
/// [`ParseError`] (carrying the whole message record via `record`).
fn parse_entity(raw: &Value, record: &Value) -> Result<Entity, ParseError> {
    let kind = raw
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| ParseError::new(record, "entity missing string `type`"))?
        .to_string();
    let offset = raw
        .get("offset")
        .and_then(Value::as_u64)
        .ok_or_else(|| ParseError::new(record, "entity missing numeric `offset`"))?
        as usize;
    let length = raw
        .get("length")
        .and_then(Value::as_u64)
        .ok_or_else(|| ParseError::new(record, "entity missing numeric `length`"))?
        as usize;

    Ok(Entity {
        offset,
        length,
        kind,
    })
}

fn parse_entities(raw: &Value, record: &Value) -> Result<Vec<Entity>, ParseError> {
    raw.as_array()
        .ok_or_else(|| ParseError::new(record, "`entities` is not an array"))?
        .iter()
        .map(|entry| parse_entity(entry, record))
        .collect()
}

/// Parses a raw message record into a [`Message`], classifying its chat,
/// extracting the sender iff a `from` field is present, and applying command
/// derivation with `botname` (the bot's own username, used to strip
/// `@botname` mentions from command words).
pub fn parse_message(raw: &Value, botname: &str) -> Result<Message, ParseError> {
    let id = require_i64(raw, "message_id")?;
    let date = require_i64(raw, "date")?;

    let chat_raw = raw
        .get("chat")
        .ok_or_else(|| ParseError::new(raw, "missing `chat`"))?;
    let chat = parse_chat(chat_raw)?;

    let sender = match raw.get("from") {
        Some(user_raw) => Some(parse_user(user_raw)?),
        None => None,
    };

    let text = optional_string(raw, "text");
    let entities = match raw.get("entities") {
        Some(list) => Some(parse_entities(list, raw)?),
        None => None,
    };

    Ok(Message::new(id, date, chat, sender, text, entities, botname))
}
