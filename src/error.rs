//! Error types for edudesk.
//!
//! The chat and focus cores are infallible apart from snapshot restore; these
//! errors mostly come from the host layer (config, storage, terminal).

use thiserror::Error;

/// Errors surfaced by edudesk.
#[derive(Debug, Error)]
pub enum EdudeskError {
    /// Configuration could not be read, parsed, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The snapshot database failed.
    #[error("Database error: {0}")]
    Database(String),

    /// Filesystem I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record looked up by id does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A command argument was rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Restored state breaks an invariant the stores maintain.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// The terminal could not be set up or drawn to.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl EdudeskError {
    /// Exit code for the CLI.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) => 3,
            Self::InvalidArgument(_) => 2,
            _ => 1,
        }
    }
}
