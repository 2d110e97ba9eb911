//! Feature implementations for edudesk.
//!
//! - Chat: messages, conversations, unread counts, typing indicators
//! - Focus: pomodoro-style focus/break timer and its statistics

pub mod chat;
pub mod focus;
