//! Chat store persistence.
//!
//! Persists the whole chat store as one snapshot under [`CHAT_KEY`].

use super::store::{ChatSnapshot, ChatStore};
use crate::core::Clock;
use crate::error::EdudeskError;
use crate::storage::{SnapshotStore, CHAT_KEY};

/// Storage for the chat store.
pub struct ChatStorage {
    snapshots: SnapshotStore,
}

impl ChatStorage {
    /// Open chat storage in the default database.
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

    /// Load the saved store, or an empty one if nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be read or breaks a store
    /// invariant.
    pub fn load<C: Clock>(&self, clock: C) -> Result<ChatStore<C>, EdudeskError> {
        let snapshot: ChatSnapshot = self.snapshots.load(CHAT_KEY)?.unwrap_or_default();
        ChatStore::restore(snapshot, clock)
    }

    /// Save the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn save<C: Clock>(&self, store: &ChatStore<C>) -> Result<(), EdudeskError> {
        self.snapshots.save(CHAT_KEY, &store.snapshot())
    }
}
