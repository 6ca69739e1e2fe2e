//! Message type and its command derivation.

use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// A structured annotation on message text: `length` characters starting at
/// `offset`, tagged with a kind such as `bot_command` or `mention`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub offset: usize,
    pub length: usize,
    pub kind: String,
}

/// An incoming message, constructed once by the parser and immutable after.
///
/// If the entity list contains a `bot_command` entry, the command word is
/// extracted at construction: `command` holds the word (without the leading
/// slash or a trailing `@botname` mention) and `text` is rewritten to the
/// trimmed remainder after the command entity. Equality and hash are keyed
/// on `id` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    /// Send time as epoch seconds; see [`Message::date_time`] for the
    /// structured form.
    pub date: i64,
    pub chat: Chat,
    pub sender: Option<User>,
    pub text: Option<String>,
    pub entities: Option<Vec<Entity>>,
    pub is_command: bool,
    pub command: String,
}

impl Message {
    /// Builds a message and applies command derivation: the first
    /// `bot_command` entity (if any, and if there is text) marks the message
    /// as a command and splits its text.
    pub fn new(
        id: i64,
        date: i64,
        chat: Chat,
        sender: Option<User>,
        text: Option<String>,
        entities: Option<Vec<Entity>>,
        botname: &str,
    ) -> Self {
        let command_entity = entities
            .as_ref()
            .and_then(|list| list.iter().find(|e| e.kind == "bot_command"))
            .cloned();

        let derived = match (&command_entity, text.as_deref()) {
            (Some(entity), Some(raw)) => Some(split_command(raw, entity, botname)),
            _ => None,
        };

        let (is_command, command, text) = match derived {
            Some((command, rest)) => (true, command, Some(rest)),
            None => (false, String::new(), text),
        };

        Self {
            id,
            date,
            chat,
            sender,
            text,
            entities,
            is_command,
            command,
        }
    }

    /// Id of the owning chat.
    pub fn chat_id(&self) -> i64 {
        self.chat.id()
    }

    /// The send timestamp as a structured UTC date. Out-of-range timestamps
    /// fall back to the epoch.
    pub fn date_time(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.date, 0).unwrap_or_default()
    }
}

impl PartialEq for Message {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Message {}

impl Hash for Message {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Splits `text` at the command entity: returns the command word (leading
/// slash dropped, trailing `@botname` mention stripped, whitespace trimmed)
/// and the trimmed remainder after the entity.
///
/// Entity offsets count characters, so indexing is done over chars; a
/// truncated or out-of-range entity yields an empty command rather than a
/// panic.
fn split_command(text: &str, entity: &Entity, botname: &str) -> (String, String) {
    let chars: Vec<char> = text.chars().collect();
    let end = (entity.offset + entity.length).min(chars.len());
    let start = (entity.offset + 1).min(end);

    let body: String = chars[start..end].iter().collect();
    let rest: String = chars[end..].iter().collect();

    let command = body.trim();
    let mention = format!("@{}", botname);
    let command = if !botname.is_empty() {
        command.strip_suffix(mention.as_str()).unwrap_or(command)
    } else {
        command
    };

    (command.to_string(), rest.trim().to_string())
}
