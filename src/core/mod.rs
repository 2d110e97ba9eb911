//! Core abstractions for edudesk.
//!
//! Time and identity, shared by the chat and focus modules.

mod clock;
mod ids;

pub use clock::{Clock, ManualClock, SystemClock};
pub use ids::new_id;

#[cfg(test)]
pub use clock::MockClock;
