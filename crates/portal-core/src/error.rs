//! Error types for Cosplayer Portal

use thiserror::Error;

/// Main error type for portal operations.
///
/// None of these reach the user. Controllers log them and degrade to
/// session-only behavior.
#[derive(Error, Debug)]
pub enum PortalError {
    /// Preference storage could not be used
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// Tracing subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored preference holds a value outside its domain
    #[error("Invalid preference value for '{key}': {value}")]
    InvalidPreference { key: String, value: String },
}

/// Result type alias using PortalError
pub type PortalResult<T> = Result<T, PortalError>;
