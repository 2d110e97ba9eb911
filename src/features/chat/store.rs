//! The messaging model.
//!
//! [`ChatStore`] owns every message and conversation, keeps the per-conversation
//! summaries (last message, unread counter) in step with sends, and resolves
//! direct messages into exactly one two-party conversation per user pair.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::conversation::{pair, Conversation, ConversationKind};
use super::message::{Message, NewMessage, Route, Target};
use super::typing::TypingIndicators;
use crate::core::{new_id, Clock, SystemClock};
use crate::error::EdudeskError;

/// Plain-data copy of a [`ChatStore`], for hosts that persist state.
///
/// Typing indicators are transient and not included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSnapshot {
    /// All messages, in insertion order
    pub messages: Vec<Message>,
    /// All conversations, in creation order
    pub conversations: Vec<Conversation>,
}

/// In-memory messages and conversations.
#[derive(Debug)]
pub struct ChatStore<C: Clock = SystemClock> {
    clock: C,
    messages: Vec<Message>,
    conversations: Vec<Conversation>,
    typing: TypingIndicators,
}

impl ChatStore<SystemClock> {
    /// Create an empty store on the wall clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ChatStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ChatStore<C> {
    /// Create an empty store reading time from `clock`.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            messages: Vec::new(),
            conversations: Vec::new(),
            typing: TypingIndicators::new(),
        }
    }

    /// Rebuild a store from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns `EdudeskError::InvariantViolation` if the snapshot holds two
    /// direct conversations for the same pair of users, a direct conversation
    /// that is not a pair, or duplicate conversation ids.
    pub fn restore(snapshot: ChatSnapshot, clock: C) -> Result<Self, EdudeskError> {
        let mut ids = HashSet::new();
        let mut pairs = HashSet::new();

        for conversation in &snapshot.conversations {
            if !ids.insert(conversation.id.as_str()) {
                return Err(EdudeskError::InvariantViolation(format!(
                    "conversation id {} appears twice",
                    conversation.id
                )));
            }

            if conversation.kind == ConversationKind::Direct {
                if conversation.participants.is_empty() || conversation.participants.len() > 2 {
                    return Err(EdudeskError::InvariantViolation(format!(
                        "direct conversation {} has {} participants",
                        conversation.id,
                        conversation.participants.len()
                    )));
                }
                if !pairs.insert(&conversation.participants) {
                    return Err(EdudeskError::InvariantViolation(format!(
                        "direct conversation {} duplicates an existing pair",
                        conversation.id
                    )));
                }
            }
        }

        debug!(
            messages = snapshot.messages.len(),
            conversations = snapshot.conversations.len(),
            "chat store restored"
        );

        Ok(Self {
            clock,
            messages: snapshot.messages,
            conversations: snapshot.conversations,
            typing: TypingIndicators::new(),
        })
    }

    /// Copy out the persistent state.
    #[must_use]
    pub fn snapshot(&self) -> ChatSnapshot {
        ChatSnapshot {
            messages: self.messages.clone(),
            conversations: self.conversations.clone(),
        }
    }

    /// All messages, in insertion order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// All conversations, in creation order.
    #[must_use]
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Look up a message by id.
    #[must_use]
    pub fn message(&self, id: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Look up a conversation by id.
    #[must_use]
    pub fn conversation(&self, id: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    fn conversation_mut(&mut self, id: &str) -> Option<&mut Conversation> {
        self.conversations.iter_mut().find(|c| c.id == id)
    }

    /// The two-party conversation between `a` and `b`, if one exists.
    #[must_use]
    pub fn direct_conversation(&self, a: &str, b: &str) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.is_direct_pair(a, b))
    }

    /// Create a multi-party conversation.
    pub fn create_group<I, S>(&mut self, name: &str, participants: I) -> &Conversation
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let now = self.clock.now();
        let conversation = Conversation {
            id: new_id(now),
            name: name.to_string(),
            kind: ConversationKind::Group,
            participants: participants.into_iter().map(Into::into).collect(),
            last_message: None,
            unread_count: 0,
            created_at: now,
            updated_at: now,
        };

        debug!(
            conversation_id = %conversation.id,
            participants = conversation.participants.len(),
            "group conversation created"
        );

        self.conversations.push(conversation);
        &self.conversations[self.conversations.len() - 1]
    }

    /// Add a member to a group conversation.
    ///
    /// Returns false if the conversation does not exist or is a direct one.
    pub fn add_participant(&mut self, conversation_id: &str, user_id: &str) -> bool {
        match self.conversation_mut(conversation_id) {
            Some(c) if c.kind == ConversationKind::Group => {
                c.participants.insert(user_id.to_string());
                true
            }
            _ => false,
        }
    }

    /// Remove a member from a group conversation.
    ///
    /// Returns false if the conversation does not exist or is a direct one.
    pub fn remove_participant(&mut self, conversation_id: &str, user_id: &str) -> bool {
        let removed = match self.conversation_mut(conversation_id) {
            Some(c) if c.kind == ConversationKind::Group => {
                c.participants.remove(user_id);
                true
            }
            _ => false,
        };
        if removed {
            self.typing.set(conversation_id, user_id, false);
        }
        removed
    }

    /// Send a message.
    ///
    /// Messages to a conversation refresh its summary. Direct messages are
    /// folded into the pair's two-party conversation, which is created on the
    /// first exchange and reused afterwards.
    ///
    /// Returns `None`, writing nothing, when the target conversation does not
    /// exist.
    pub fn send(&mut self, draft: NewMessage) -> Option<&Message> {
        let now = self.clock.now();

        let route = match draft.target {
            Target::Conversation(conversation_id) => {
                if self.conversation(&conversation_id).is_none() {
                    warn!(%conversation_id, "message to unknown conversation dropped");
                    return None;
                }
                Route::Grouped { conversation_id }
            }
            Target::Direct(recipient_id) => {
                let conversation_id = match self.direct_conversation(&draft.sender_id, &recipient_id)
                {
                    Some(existing) => existing.id.clone(),
                    None => self.open_direct(&draft.sender_id, &draft.sender_name, &recipient_id),
                };
                Route::Direct {
                    recipient_id,
                    conversation_id,
                }
            }
        };

        let message = Message {
            id: new_id(now),
            sender_id: draft.sender_id,
            sender_name: draft.sender_name,
            sender_role: draft.sender_role,
            content: draft.content,
            timestamp: now,
            is_read: false,
            route,
            kind: draft.kind,
            edited_at: None,
        };

        if let Some(conversation) = self.conversation_mut(message.conversation_id()) {
            conversation.record_message(&message);
        }
        self.typing
            .set(message.conversation_id(), &message.sender_id, false);

        debug!(
            message_id = %message.id,
            conversation_id = %message.conversation_id(),
            "message sent"
        );

        self.messages.push(message);
        self.messages.last()
    }

    fn open_direct(&mut self, sender_id: &str, sender_name: &str, recipient_id: &str) -> String {
        let now = self.clock.now();
        let conversation = Conversation {
            id: new_id(now),
            name: sender_name.to_string(),
            kind: ConversationKind::Direct,
            participants: pair(sender_id, recipient_id),
            last_message: None,
            unread_count: 0,
            created_at: now,
            updated_at: now,
        };
        let id = conversation.id.clone();

        debug!(conversation_id = %id, sender_id, recipient_id, "direct conversation opened");

        self.conversations.push(conversation);
        id
    }

    /// Mark one message read.
    ///
    /// Returns false if no message has this id. Unread counters are untouched.
    pub fn mark_message_read(&mut self, message_id: &str) -> bool {
        match self.messages.iter_mut().find(|m| m.id == message_id) {
            Some(message) => {
                message.is_read = true;
                true
            }
            None => false,
        }
    }

    /// Mark a conversation read on behalf of `user_id`.
    ///
    /// Every message in the conversation is marked read, and so is every direct
    /// message the user received or sent, whichever conversation it belongs
    /// to. The conversation's unread counter drops to zero.
    ///
    /// Returns false if the conversation does not exist; direct messages are
    /// marked either way.
    pub fn mark_conversation_read(&mut self, conversation_id: &str, user_id: &str) -> bool {
        // NOTE: the direct-message arm reaches outside the target conversation.
        let mut marked = 0_usize;
        for message in &mut self.messages {
            let in_conversation = message.conversation_id() == conversation_id;
            let touches_user = message
                .recipient_id()
                .is_some_and(|recipient| recipient == user_id || message.sender_id == user_id);
            if (in_conversation || touches_user) && !message.is_read {
                message.is_read = true;
                marked += 1;
            }
        }

        debug!(conversation_id, user_id, marked, "conversation marked read");

        match self.conversation_mut(conversation_id) {
            Some(conversation) => {
                conversation.unread_count = 0;
                true
            }
            None => false,
        }
    }

    /// Messages in a conversation, oldest first.
    ///
    /// Messages sharing a timestamp keep insertion order.
    #[must_use]
    pub fn messages_in_conversation(&self, conversation_id: &str) -> Vec<&Message> {
        let mut messages: Vec<_> = self
            .messages
            .iter()
            .filter(|m| m.conversation_id() == conversation_id)
            .collect();
        messages.sort_by_key(|m| m.timestamp);
        messages
    }

    /// Direct messages between two users in either direction, oldest first.
    #[must_use]
    pub fn messages_between(&self, a: &str, b: &str) -> Vec<&Message> {
        let mut messages: Vec<_> = self.messages.iter().filter(|m| m.is_between(a, b)).collect();
        messages.sort_by_key(|m| m.timestamp);
        messages
    }

    /// Conversations a user takes part in, most recently active first.
    #[must_use]
    pub fn conversations_for_user(&self, user_id: &str) -> Vec<&Conversation> {
        let mut conversations: Vec<_> = self
            .conversations
            .iter()
            .filter(|c| c.has_participant(user_id))
            .collect();
        conversations.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        conversations
    }

    /// Sum of unread counters across a user's conversations.
    #[must_use]
    pub fn unread_total(&self, user_id: &str) -> u32 {
        self.conversations
            .iter()
            .filter(|c| c.has_participant(user_id))
            .map(|c| c.unread_count)
            .sum()
    }

    /// Mark a user as typing (or not) in a conversation.
    pub fn set_typing(&mut self, conversation_id: &str, user_id: &str, is_typing: bool) {
        self.typing.set(conversation_id, user_id, is_typing);
    }

    /// Users typing in a conversation, sorted.
    #[must_use]
    pub fn typing_users(&self, conversation_id: &str) -> Vec<&str> {
        self.typing.users(conversation_id)
    }

    /// Permanently delete a message.
    ///
    /// The owning conversation's cached last message is not recomputed and may
    /// still show the deleted message.
    pub fn delete_message(&mut self, message_id: &str) -> Option<Message> {
        let index = self.messages.iter().position(|m| m.id == message_id)?;
        let removed = self.messages.remove(index);
        debug!(message_id, "message deleted");
        Some(removed)
    }

    /// Replace a message's content in place.
    ///
    /// The send timestamp is kept; `edited_at` records the edit.
    pub fn edit_message(&mut self, message_id: &str, content: &str) -> bool {
        let now = self.clock.now();
        match self.messages.iter_mut().find(|m| m.id == message_id) {
            Some(message) => {
                message.content = content.to_string();
                message.edited_at = Some(now);
                true
            }
            None => false,
        }
    }
}
