//! Focus/break timer.
//!
//! A pomodoro-style countdown alternating focus and break intervals, with a
//! history of completed intervals and the statistics derived from it.

pub mod session;
pub mod stats;
pub mod storage;
pub mod timer;

pub use session::{FocusRecord, SessionKind};
pub use stats::{DailyFocus, FocusReport, WeeklyStats};
pub use storage::FocusStorage;
pub use timer::{
    format_duration, format_duration_mmss, render_progress_bar, FocusSnapshot, FocusTimer,
    TimerSettings, TimerState, TimerStatus,
};
