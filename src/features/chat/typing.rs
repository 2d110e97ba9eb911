//! Who is composing a message, per conversation.
//!
//! Purely in-memory signaling state. Entries never expire; a user stays
//! "typing" until explicitly cleared.

use std::collections::{BTreeSet, HashMap};

/// Typing indicators keyed by conversation id.
#[derive(Debug, Clone, Default)]
pub struct TypingIndicators {
    by_conversation: HashMap<String, BTreeSet<String>>,
}

impl TypingIndicators {
    /// Create an empty set of indicators.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `user_id` as typing (or not) in `conversation_id`.
    ///
    /// Idempotent in both directions.
    pub fn set(&mut self, conversation_id: &str, user_id: &str, is_typing: bool) {
        if is_typing {
            self.by_conversation
                .entry(conversation_id.to_string())
                .or_default()
                .insert(user_id.to_string());
        } else if let Some(users) = self.by_conversation.get_mut(conversation_id) {
            users.remove(user_id);
            if users.is_empty() {
                self.by_conversation.remove(conversation_id);
            }
        }
    }

    /// Users currently typing in a conversation, sorted.
    #[must_use]
    pub fn users(&self, conversation_id: &str) -> Vec<&str> {
        self.by_conversation
            .get(conversation_id)
            .map(|users| users.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_idempotent() {
        let mut typing = TypingIndicators::new();
        typing.set("c1", "u1", true);
        typing.set("c1", "u1", true);
        assert_eq!(typing.users("c1"), vec!["u1"]);

        typing.set("c1", "u1", false);
        typing.set("c1", "u1", false);
        assert!(typing.users("c1").is_empty());
    }

    #[test]
    fn test_users_sorted_and_scoped() {
        let mut typing = TypingIndicators::new();
        typing.set("c1", "zoe", true);
        typing.set("c1", "adam", true);
        typing.set("c2", "mia", true);

        assert_eq!(typing.users("c1"), vec!["adam", "zoe"]);
        assert_eq!(typing.users("c2"), vec!["mia"]);
        assert!(typing.users("missing").is_empty());
    }
}
