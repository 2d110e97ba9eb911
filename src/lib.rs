//! edudesk - messaging and focus timer for a school dashboard
//!
//! Two stateful cores:
//! - [`features::chat`]: direct and group messaging with unread counts
//! - [`features::focus`]: a pomodoro-style focus/break timer with statistics
//!
//! Both read time through [`core::Clock`] and persist through plain snapshot
//! types; the CLI, TUI and SQLite storage are thin hosts around them.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::EdudeskError;
pub use features::chat::ChatStore;
pub use features::focus::FocusTimer;
