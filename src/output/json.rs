//! JSON output formatting for edudesk.

use serde::Serialize;
use serde_json::json;

use crate::error::EdudeskError;
use crate::features::chat::{Conversation, Message};
use crate::features::focus::FocusRecord;

/// Format a message thread as JSON
///
/// # Errors
///
/// Returns `EdudeskError::Json` if JSON serialization fails.
pub fn format_messages_json(messages: &[&Message], title: &str) -> Result<String, EdudeskError> {
    let output = json!({
        "thread": title,
        "count": messages.len(),
        "items": messages
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a user's conversations as JSON
///
/// # Errors
///
/// Returns `EdudeskError::Json` if JSON serialization fails.
pub fn format_inbox_json(
    conversations: &[&Conversation],
    user_id: &str,
    unread_total: u32,
) -> Result<String, EdudeskError> {
    let output = json!({
        "user": user_id,
        "unread": unread_total,
        "count": conversations.len(),
        "items": conversations
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format completed sessions as JSON, most recent first
///
/// # Errors
///
/// Returns `EdudeskError::Json` if JSON serialization fails.
pub fn format_history_json(records: &[FocusRecord]) -> Result<String, EdudeskError> {
    let output = json!({
        "count": records.len(),
        "items": records.iter().rev().collect::<Vec<_>>()
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `EdudeskError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, EdudeskError> {
    Ok(serde_json::to_string_pretty(value)?)
}
