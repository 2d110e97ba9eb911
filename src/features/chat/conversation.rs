//! Conversations ("groups") that hold message threads.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::message::Message;

/// Kind of conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationKind {
    /// Explicitly created, any number of participants
    Group,
    /// Created lazily for a pair of users exchanging direct messages
    Direct,
}

impl std::fmt::Display for ConversationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Group => write!(f, "group"),
            Self::Direct => write!(f, "direct"),
        }
    }
}

/// A conversation and its cached summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique id
    pub id: String,
    /// Display name
    pub name: String,
    /// Group or direct
    pub kind: ConversationKind,
    /// Member user ids
    pub participants: BTreeSet<String>,
    /// Copy of the most recent message sent into this conversation
    pub last_message: Option<Message>,
    /// Messages received since the last explicit read-marking
    pub unread_count: u32,
    /// When the conversation was created
    pub created_at: DateTime<Utc>,
    /// When a message last arrived
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// Check if a user is a participant.
    #[must_use]
    pub fn has_participant(&self, user_id: &str) -> bool {
        self.participants.contains(user_id)
    }

    /// Check if this is the direct conversation for the unordered pair `{a, b}`.
    #[must_use]
    pub fn is_direct_pair(&self, a: &str, b: &str) -> bool {
        self.kind == ConversationKind::Direct && self.participants == pair(a, b)
    }

    /// Record a newly sent message.
    pub(crate) fn record_message(&mut self, message: &Message) {
        self.last_message = Some(message.clone());
        self.unread_count = self.unread_count.saturating_add(1);
        self.updated_at = message.timestamp;
    }
}

/// The participant set of a direct conversation between `a` and `b`.
#[must_use]
pub fn pair(a: &str, b: &str) -> BTreeSet<String> {
    [a.to_string(), b.to_string()].into_iter().collect()
}
