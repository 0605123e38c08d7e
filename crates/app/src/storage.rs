//! Storage errors shared by the persistence ports.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("record already exists: {0}")]
    Duplicate(String),

    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}
