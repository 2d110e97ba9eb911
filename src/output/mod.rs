//! Output formatting for edudesk.
//!
//! Formatters for chat and focus data, pretty or JSON.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::EdudeskError;
use crate::features::chat::{Conversation, Message};
use crate::features::focus::{FocusRecord, FocusReport, TimerStatus};

pub use json::*;
pub use pretty::*;

/// Format a message thread based on output format
///
/// # Errors
///
/// Returns `EdudeskError::Json` if JSON serialization fails.
pub fn format_messages(
    messages: &[&Message],
    title: &str,
    format: OutputFormat,
) -> Result<String, EdudeskError> {
    match format {
        OutputFormat::Pretty => Ok(format_messages_pretty(messages, title)),
        OutputFormat::Json => format_messages_json(messages, title),
    }
}

/// Format a single message based on output format
///
/// # Errors
///
/// Returns `EdudeskError::Json` if JSON serialization fails.
pub fn format_message(message: &Message, format: OutputFormat) -> Result<String, EdudeskError> {
    match format {
        OutputFormat::Pretty => Ok(format_message_pretty(message)),
        OutputFormat::Json => to_json(message),
    }
}

/// Format a user's inbox based on output format
///
/// # Errors
///
/// Returns `EdudeskError::Json` if JSON serialization fails.
pub fn format_inbox(
    conversations: &[&Conversation],
    user_id: &str,
    unread_total: u32,
    format: OutputFormat,
) -> Result<String, EdudeskError> {
    match format {
        OutputFormat::Pretty => Ok(format_inbox_pretty(conversations, user_id, unread_total)),
        OutputFormat::Json => format_inbox_json(conversations, user_id, unread_total),
    }
}

/// Format timer status based on output format
///
/// # Errors
///
/// Returns `EdudeskError::Json` if JSON serialization fails.
pub fn format_timer_status(
    status: &TimerStatus,
    format: OutputFormat,
) -> Result<String, EdudeskError> {
    match format {
        OutputFormat::Pretty => Ok(format_timer_status_pretty(status)),
        OutputFormat::Json => to_json(status),
    }
}

/// Format completed-session history based on output format
///
/// # Errors
///
/// Returns `EdudeskError::Json` if JSON serialization fails.
pub fn format_history(
    records: &[FocusRecord],
    format: OutputFormat,
) -> Result<String, EdudeskError> {
    match format {
        OutputFormat::Pretty => Ok(format_history_pretty(records)),
        OutputFormat::Json => format_history_json(records),
    }
}

/// Format a focus report based on output format
///
/// # Errors
///
/// Returns `EdudeskError::Json` if JSON serialization fails.
pub fn format_report(report: &FocusReport, format: OutputFormat) -> Result<String, EdudeskError> {
    match format {
        OutputFormat::Pretty => Ok(report.format()),
        OutputFormat::Json => to_json(report),
    }
}
