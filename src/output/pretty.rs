use colored::Colorize;

use crate::features::chat::{Conversation, ConversationKind, Message, MessageKind};
use crate::features::focus::{
    format_duration_mmss, render_progress_bar, FocusRecord, SessionKind, TimerState, TimerStatus,
};

/// Format a message thread
pub fn format_messages_pretty(messages: &[&Message], title: &str) -> String {
    if messages.is_empty() {
        return format!("{title} (0 messages)\n  No messages");
    }

    let mut output = format!("{} ({} messages)\n", title, messages.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for message in messages {
        let marker = if message.is_read {
            " ".normal()
        } else {
            "●".blue()
        };
        let mut line = format!(
            "{} {} {} {}",
            marker,
            message.timestamp.format("%Y-%m-%d %H:%M").to_string().dimmed(),
            message.sender_name.bold(),
            format!("({})", message.sender_role).dimmed()
        );
        if message.edited_at.is_some() {
            line.push_str(&format!(" {}", "(edited)".dimmed()));
        }
        output.push_str(&line);
        output.push('\n');

        if !message.content.is_empty() {
            output.push_str(&format!("    {}\n", message.content));
        }
        if let Some(attachment) = message.kind.attachment() {
            let icon = match message.kind {
                MessageKind::Image(_) => "🖼",
                _ => "📎",
            };
            output.push_str(&format!(
                "    {} {} {}\n",
                icon,
                attachment.file_name.cyan(),
                format!("({} bytes)", attachment.file_size).dimmed()
            ));
        }
    }

    output
}

/// Format a single message
pub fn format_message_pretty(message: &Message) -> String {
    let mut output = format!("{}\n", message.preview(60).bold());
    output.push_str(&format!("  {}: {}\n", "ID".dimmed(), message.id));
    output.push_str(&format!(
        "  {}: {} ({}, {})\n",
        "From".dimmed(),
        message.sender_name,
        message.sender_id,
        message.sender_role
    ));
    if let Some(recipient) = message.recipient_id() {
        output.push_str(&format!("  {}: {}\n", "To".dimmed(), recipient));
    }
    output.push_str(&format!(
        "  {}: {}\n",
        "Conversation".dimmed(),
        message.conversation_id()
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Sent".dimmed(),
        message.timestamp.format("%Y-%m-%d %H:%M")
    ));
    if let Some(edited) = &message.edited_at {
        output.push_str(&format!(
            "  {}: {}\n",
            "Edited".dimmed(),
            edited.format("%Y-%m-%d %H:%M")
        ));
    }
    output.push_str(&format!(
        "  {}: {}\n",
        "Read".dimmed(),
        if message.is_read { "yes" } else { "no" }
    ));

    output
}

/// Format a user's conversation list
pub fn format_inbox_pretty(
    conversations: &[&Conversation],
    user_id: &str,
    unread_total: u32,
) -> String {
    let header = format!("Inbox for {user_id} ({unread_total} unread)");
    if conversations.is_empty() {
        return format!("{header}\n  No conversations");
    }

    let mut output = format!("{header}\n");
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for conversation in conversations {
        let kind = match conversation.kind {
            ConversationKind::Group => "#".cyan(),
            ConversationKind::Direct => "@".green(),
        };
        let mut line = format!("{} {}", kind, conversation.name.bold());
        if conversation.unread_count > 0 {
            line.push_str(&format!(
                "  {}",
                format!("{} unread", conversation.unread_count).yellow()
            ));
        }
        line.push_str(&format!("  {}", conversation.id.dimmed()));
        output.push_str(&line);
        output.push('\n');

        if let Some(last) = &conversation.last_message {
            output.push_str(&format!(
                "    {}: {}\n",
                last.sender_name.dimmed(),
                last.preview(50)
            ));
        }
    }

    output
}

/// Format timer status
pub fn format_timer_status_pretty(status: &TimerStatus) -> String {
    let kind = match status.kind {
        SessionKind::Focus => "🍅 Focus".red().bold(),
        SessionKind::Break => "☕ Break".green().bold(),
    };
    let state = match status.state {
        TimerState::Running => "running".green(),
        TimerState::Paused => "paused".yellow(),
        TimerState::Idle => "idle".dimmed(),
    };
    let remaining =
        format_duration_mmss(chrono::Duration::seconds(i64::from(status.remaining_seconds)));

    let mut output = format!("{kind} ({state})\n");
    output.push_str(&"─".repeat(40));
    output.push('\n');
    output.push_str(&format!("  {}: {}\n", "Remaining".dimmed(), remaining.bold()));
    output.push_str(&format!(
        "  {}: {} {:.0}%\n",
        "Progress".dimmed(),
        render_progress_bar(status.progress_percent / 100.0, 30),
        status.progress_percent
    ));
    output.push_str(&format!("  {}: {}\n", "Cycle".dimmed(), status.cycle));

    output
}

/// Format completed-session history, most recent first
pub fn format_history_pretty(records: &[FocusRecord]) -> String {
    if records.is_empty() {
        return "Focus History (0)\n  No completed sessions".to_string();
    }

    let mut output = format!("Focus History ({})\n", records.len());
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for record in records.iter().rev() {
        let kind = match record.kind {
            SessionKind::Focus => "🍅".normal(),
            SessionKind::Break => "☕".normal(),
        };
        output.push_str(&format!(
            "{} {} {:<6} {}m\n",
            kind,
            record
                .completed_at_local()
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .dimmed(),
            record.kind,
            record.duration_minutes
        ));
    }

    output
}
