use thiserror::Error;

use crate::BeerId;

/// Errors that can occur when interacting with the beer store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record exists with the given id.
    #[error("Beer not found: {0}")]
    NotFound(BeerId),

    /// A record with the same name already exists.
    #[error("Beer name already taken: {0}")]
    DuplicateName(String),

    /// The stored quantity changed between read and write.
    #[error(
        "Concurrency conflict for beer {id}: expected quantity {expected}, found {actual}"
    )]
    ConcurrencyConflict {
        id: BeerId,
        expected: i32,
        actual: i32,
    },

    /// A stored row could not be turned into a record.
    #[error("Invalid row: {0}")]
    InvalidRow(String),

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
