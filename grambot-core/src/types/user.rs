//! User identity type.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A platform user. Immutable after construction; equality and hash are keyed
/// solely on `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub is_bot: bool,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, first_name: &str) -> User {
        User {
            id,
            is_bot: false,
            first_name: first_name.to_string(),
            last_name: None,
            username: None,
        }
    }

    #[test]
    fn test_equality_keyed_on_id_only() {
        assert_eq!(user(7, "Alice"), user(7, "Bob"));
        assert_ne!(user(7, "Alice"), user(8, "Alice"));
    }

    #[test]
    fn test_usable_as_set_key() {
        let mut seen = std::collections::HashSet::new();
        seen.insert(user(7, "Alice"));
        assert!(seen.contains(&user(7, "Bob")));
        assert!(!seen.contains(&user(9, "Alice")));
    }
}
