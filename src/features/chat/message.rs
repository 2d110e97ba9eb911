//! Chat messages and their routing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dashboard role of a message sender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// School administrator
    Admin,
    /// Teacher
    Teacher,
    /// Student
    #[default]
    Student,
    /// Parent or guardian
    Parent,
}

impl Role {
    /// Parse a role from string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "admin" | "a" => Some(Self::Admin),
            "teacher" | "t" => Some(Self::Teacher),
            "student" | "s" => Some(Self::Student),
            "parent" | "p" => Some(Self::Parent),
            _ => None,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Teacher => "Teacher",
            Self::Student => "Student",
            Self::Parent => "Parent",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// File metadata carried by file and image messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Original file name
    pub file_name: String,
    /// Where the file can be fetched
    pub file_url: String,
    /// Size in bytes
    pub file_size: u64,
}

/// Payload kind of a message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageKind {
    /// Plain text
    #[default]
    Text,
    /// A shared file
    File(Attachment),
    /// A shared image
    Image(Attachment),
}

impl MessageKind {
    /// The attachment, if this is a file or image message.
    #[must_use]
    pub const fn attachment(&self) -> Option<&Attachment> {
        match self {
            Self::Text => None,
            Self::File(a) | Self::Image(a) => Some(a),
        }
    }
}

/// Where a stored message lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "lowercase")]
pub enum Route {
    /// Sent into an existing conversation.
    Grouped {
        /// Target conversation
        conversation_id: String,
    },
    /// Addressed to one recipient and folded into their two-party conversation.
    Direct {
        /// Addressee
        recipient_id: String,
        /// The two-party conversation holding this message
        conversation_id: String,
    },
}

/// Where a new message should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// An existing conversation, by id.
    Conversation(String),
    /// A single recipient, by user id.
    Direct(String),
}

/// A message before it is stored.
#[derive(Debug, Clone)]
pub struct NewMessage {
    /// Author's user id
    pub sender_id: String,
    /// Author's display name
    pub sender_name: String,
    /// Author's role
    pub sender_role: Role,
    /// Message text
    pub content: String,
    /// Destination
    pub target: Target,
    /// Payload kind
    pub kind: MessageKind,
}

impl NewMessage {
    /// A text message to a single recipient.
    #[must_use]
    pub fn direct(
        sender_id: impl Into<String>,
        sender_name: impl Into<String>,
        sender_role: Role,
        recipient_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            sender_id: sender_id.into(),
            sender_name: sender_name.into(),
            sender_role,
            content: content.into(),
            target: Target::Direct(recipient_id.into()),
            kind: MessageKind::Text,
        }
    }

    /// A text message into an existing conversation.
    #[must_use]
    pub fn to_conversation(
        sender_id: impl Into<String>,
        sender_name: impl Into<String>,
        sender_role: Role,
        conversation_id: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            sender_id: sender_id.into(),
            sender_name: sender_name.into(),
            sender_role,
            content: content.into(),
            target: Target::Conversation(conversation_id.into()),
            kind: MessageKind::Text,
        }
    }

    /// Attach a file or image payload.
    #[must_use]
    pub fn with_kind(mut self, kind: MessageKind) -> Self {
        self.kind = kind;
        self
    }
}

/// A stored chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique id, sortable by creation time
    pub id: String,
    /// Author's user id
    pub sender_id: String,
    /// Author's display name
    pub sender_name: String,
    /// Author's role
    pub sender_role: Role,
    /// Message text
    pub content: String,
    /// When the message was sent
    pub timestamp: DateTime<Utc>,
    /// Whether the message has been read
    pub is_read: bool,
    /// Routing
    #[serde(flatten)]
    pub route: Route,
    /// Payload kind
    #[serde(default)]
    pub kind: MessageKind,
    /// When the content was last edited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_at: Option<DateTime<Utc>>,
}

impl Message {
    /// The conversation this message belongs to.
    #[must_use]
    pub fn conversation_id(&self) -> &str {
        match &self.route {
            Route::Grouped { conversation_id } | Route::Direct { conversation_id, .. } => {
                conversation_id
            }
        }
    }

    /// The direct recipient, if this is a direct message.
    #[must_use]
    pub fn recipient_id(&self) -> Option<&str> {
        match &self.route {
            Route::Direct { recipient_id, .. } => Some(recipient_id),
            Route::Grouped { .. } => None,
        }
    }

    /// Check if this message was exchanged directly between `a` and `b`.
    #[must_use]
    pub fn is_between(&self, a: &str, b: &str) -> bool {
        self.recipient_id().is_some_and(|recipient| {
            (self.sender_id == a && recipient == b) || (self.sender_id == b && recipient == a)
        })
    }

    /// Short preview of the content for list views.
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> String {
        if let Some(attachment) = self.kind.attachment() {
            if self.content.is_empty() {
                return format!("[{}]", attachment.file_name);
            }
        }

        if self.content.chars().count() > max_chars {
            let cut: String = self.content.chars().take(max_chars.saturating_sub(3)).collect();
            format!("{cut}...")
        } else {
            self.content.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn direct_message(sender: &str, recipient: &str) -> Message {
        Message {
            id: "01HZX".to_string(),
            sender_id: sender.to_string(),
            sender_name: sender.to_uppercase(),
            sender_role: Role::Teacher,
            content: "hello there".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
            is_read: false,
            route: Route::Direct {
                recipient_id: recipient.to_string(),
                conversation_id: "c1".to_string(),
            },
            kind: MessageKind::Text,
            edited_at: None,
        }
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("teacher"), Some(Role::Teacher));
        assert_eq!(Role::parse("P"), Some(Role::Parent));
        assert_eq!(Role::parse("janitor"), None);
    }

    #[test]
    fn test_route_accessors() {
        let msg = direct_message("a", "b");
        assert_eq!(msg.conversation_id(), "c1");
        assert_eq!(msg.recipient_id(), Some("b"));

        let mut grouped = msg;
        grouped.route = Route::Grouped {
            conversation_id: "g1".to_string(),
        };
        assert_eq!(grouped.conversation_id(), "g1");
        assert_eq!(grouped.recipient_id(), None);
    }

    #[test]
    fn test_is_between_either_direction() {
        let msg = direct_message("a", "b");
        assert!(msg.is_between("a", "b"));
        assert!(msg.is_between("b", "a"));
        assert!(!msg.is_between("a", "c"));
    }

    #[test]
    fn test_preview_truncates() {
        let mut msg = direct_message("a", "b");
        msg.content = "abcdefghijklmnop".to_string();
        assert_eq!(msg.preview(10), "abcdefg...");
        assert_eq!(msg.preview(40), "abcdefghijklmnop");
    }

    #[test]
    fn test_preview_attachment_without_text() {
        let mut msg = direct_message("a", "b");
        msg.content = String::new();
        msg.kind = MessageKind::File(Attachment {
            file_name: "homework.pdf".to_string(),
            file_url: "https://files.example/hw.pdf".to_string(),
            file_size: 2048,
        });
        assert_eq!(msg.preview(20), "[homework.pdf]");
    }

    #[test]
    fn test_serialized_shape() {
        let msg = direct_message("a", "b");
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(value["route"], "direct");
        assert_eq!(value["recipient_id"], "b");
        assert_eq!(value["conversation_id"], "c1");
        assert_eq!(value["kind"]["type"], "text");
        assert_eq!(value["sender_role"], "teacher");
    }
}
