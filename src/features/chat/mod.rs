//! Messaging between dashboard users.
//!
//! Provides the in-memory chat model:
//! - Direct messages folded into one two-party conversation per pair
//! - Explicit multi-party group conversations
//! - Unread counters and read-marking
//! - Typing indicators

pub mod conversation;
pub mod message;
pub mod storage;
pub mod store;
pub mod typing;

pub use conversation::{Conversation, ConversationKind};
pub use message::{Attachment, Message, MessageKind, NewMessage, Role, Route, Target};
pub use storage::ChatStorage;
pub use store::{ChatSnapshot, ChatStore};
pub use typing::TypingIndicators;
