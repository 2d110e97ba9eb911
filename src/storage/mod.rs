//! Storage layer for edudesk.
//!
//! SQLite-backed persistence for the chat and focus cores. Each core is saved
//! as one JSON snapshot under a fixed key.

mod database;
mod migrations;
mod snapshots;

pub use database::Database;
pub use snapshots::{SnapshotStore, CHAT_KEY, FOCUS_KEY};
