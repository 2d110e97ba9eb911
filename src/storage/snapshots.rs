//! Keyed JSON snapshots.

use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::Database;
use crate::error::EdudeskError;

/// Key holding the chat store snapshot.
pub const CHAT_KEY: &str = "chat-storage";

/// Key holding the focus timer snapshot.
pub const FOCUS_KEY: &str = "pomodoro-storage";

/// JSON documents stored by key.
pub struct SnapshotStore {
    db: Database,
}

impl SnapshotStore {
    /// Open the store in the default database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open() -> Result<Self, EdudeskError> {
        Ok(Self::with_database(Database::open()?))
    }

    /// Create a store over an existing database.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }

    /// Load and decode the document under `key`.
    ///
    /// Returns `None` if nothing was saved under that key.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the payload does not decode.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, EdudeskError> {
        let payload: Option<String> = self
            .db
            .connection()
            .query_row(
                "SELECT payload FROM snapshots WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| EdudeskError::Database(format!("Failed to load {key}: {e}")))?;

        payload
            .map(|p| serde_json::from_str(&p))
            .transpose()
            .map_err(EdudeskError::from)
    }

    /// Encode and store `value` under `key`, replacing any previous document.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the write fails.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), EdudeskError> {
        let payload = serde_json::to_string(value)?;
        self.db
            .connection()
            .execute(
                r"INSERT INTO snapshots (key, payload, updated_at) VALUES (?1, ?2, ?3)
                  ON CONFLICT(key) DO UPDATE SET
                    payload = excluded.payload,
                    updated_at = excluded.updated_at",
                params![key, payload, Utc::now().to_rfc3339()],
            )
            .map_err(|e| EdudeskError::Database(format!("Failed to save {key}: {e}")))?;
        tracing::debug!(key, bytes = payload.len(), "saved snapshot");
        Ok(())
    }

    /// Delete the document under `key`. Returns whether one existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn remove(&self, key: &str) -> Result<bool, EdudeskError> {
        let rows = self
            .db
            .connection()
            .execute("DELETE FROM snapshots WHERE key = ?1", [key])
            .map_err(|e| EdudeskError::Database(format!("Failed to remove {key}: {e}")))?;
        Ok(rows > 0)
    }
}
