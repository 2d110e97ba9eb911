//! Focus session kinds and completed-session records.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Kind of timed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    /// Work interval
    Focus,
    /// Rest interval
    Break,
}

impl SessionKind {
    /// The other kind.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Focus => Self::Break,
            Self::Break => Self::Focus,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Focus => "Focus",
            Self::Break => "Break",
        }
    }
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A completed interval. Immutable once appended to the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusRecord {
    /// Focus or break
    pub kind: SessionKind,
    /// Configured length of the interval in minutes
    pub duration_minutes: u32,
    /// When the interval finished
    pub completed_at: DateTime<Utc>,
}

impl FocusRecord {
    /// Completion time in the local timezone.
    #[must_use]
    pub fn completed_at_local(&self) -> DateTime<Local> {
        self.completed_at.with_timezone(&Local)
    }

    /// Calendar day of completion, local time.
    #[must_use]
    pub fn completed_on(&self) -> NaiveDate {
        self.completed_at_local().date_naive()
    }
}
