//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] roster_storage::StorageError),

    #[error("Configuration error: {0}")]
    Config(String),
}
