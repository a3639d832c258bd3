pub mod json_file;

use async_trait::async_trait;

use crate::models::Submission;

pub use json_file::JsonFileStore;

#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Corrupt(serde_json::Error),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(err) => write!(f, "Storage I/O error: {err}"),
            StorageError::Corrupt(err) => write!(f, "Storage data is unreadable: {err}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(err) => Some(err),
            StorageError::Corrupt(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Corrupt(err)
    }
}

/// Append-only sink for accepted submissions. Implementations must keep
/// insertion order and only report success once the record is durable.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn append(&self, submission: &Submission) -> Result<(), StorageError>;
}
