//! Focus timer persistence.
//!
//! Saves settings, counters and completed-session history under
//! [`FOCUS_KEY`]. A running countdown is never saved.

use super::timer::{FocusSnapshot, FocusTimer, TimerSettings};
use crate::core::Clock;
use crate::error::EdudeskError;
use crate::storage::{SnapshotStore, FOCUS_KEY};

/// Storage for the focus timer.
pub struct FocusStorage {
    snapshots: SnapshotStore,
}

impl FocusStorage {
    /// Open focus storage in the default database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn new() -> Result<Self, EdudeskError> {
        Ok(Self::with_snapshots(SnapshotStore::open()?))
    }

    /// Create storage over an existing snapshot store.
    #[must_use]
    pub const fn with_snapshots(snapshots: SnapshotStore) -> Self {
        Self { snapshots }
    }

    /// Load the saved timer, idle.
    ///
    /// `settings` override whatever was saved, so the configuration file
    /// stays authoritative for interval lengths.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read.
    pub fn load<C: Clock>(
        &self,
        settings: TimerSettings,
        clock: C,
    ) -> Result<FocusTimer<C>, EdudeskError> {
        let snapshot: FocusSnapshot = self.snapshots.load(FOCUS_KEY)?.unwrap_or_default();
        let mut timer = FocusTimer::restore(snapshot, clock);
        timer.configure(settings);
        Ok(timer)
    }

    /// Save the timer's persistent state.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn save<C: Clock>(&self, timer: &FocusTimer<C>) -> Result<(), EdudeskError> {
        self.snapshots.save(FOCUS_KEY, &timer.snapshot())
    }

    /// Delete all saved focus state. Returns whether anything was stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn clear(&self) -> Result<bool, EdudeskError> {
        self.snapshots.remove(FOCUS_KEY)
    }
}
