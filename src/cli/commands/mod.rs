//! Command implementations for edudesk.

mod chat;
mod completions;
mod focus;

pub use chat::chat;
pub use completions::completions;
pub use focus::focus;
