//! Session error types.

use crate::config::ConfigError;
use crate::storage::StorageError;
use thiserror::Error;

/// Errors that can occur while opening a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
