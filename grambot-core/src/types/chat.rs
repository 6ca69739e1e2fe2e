//! Chat type, polymorphic over chat kind.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A chat the bot participates in. Variants carry the kind-specific optional
/// fields; the shared id is reachable through [`Chat::id`].
///
/// Equality and hash are keyed on id only, across variants: two chats with
/// the same id are equal regardless of kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Chat {
    Private {
        id: i64,
        username: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
    },
    Group {
        id: i64,
        title: Option<String>,
    },
    Supergroup {
        id: i64,
        title: Option<String>,
    },
}

impl Chat {
    /// Platform-unique chat id.
    pub fn id(&self) -> i64 {
        match self {
            Chat::Private { id, .. } | Chat::Group { id, .. } | Chat::Supergroup { id, .. } => *id,
        }
    }

    /// The wire `type` tag of this chat kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Chat::Private { .. } => "private",
            Chat::Group { .. } => "group",
            Chat::Supergroup { .. } => "supergroup",
        }
    }
}

impl PartialEq for Chat {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Chat {}

impl Hash for Chat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}
