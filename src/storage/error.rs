//! Storage error types.

use thiserror::Error;

/// Errors that can occur while reading or writing persisted values
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing medium failed
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded or the store file could not be decoded
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// The stored history is not a valid JSON array of entries
    #[error("Stored history under '{key}' is corrupt: {reason}")]
    CorruptHistory { key: String, reason: String },

    /// A lock guarding the store was poisoned by a panicking writer
    #[error("Storage lock poisoned")]
    LockPoisoned,
}
