use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::models::Submission;

use super::{StorageError, SubmissionStore};

/// Record store backed by a single pretty-printed JSON array.
///
/// Every append rewrites the whole file. Appends are serialized through
/// `write_lock`, and the new contents land in a sibling temp file that is
/// renamed over the original, so readers never observe a half-written array.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file (and its parent directory) holding an empty array.
    /// No-op if the file already exists.
    async fn ensure_file(&self) -> Result<(), StorageError> {
        if fs::try_exists(&self.path).await? {
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, b"[]").await?;

        tracing::info!("Initialized submission store at {}", self.path.display());
        Ok(())
    }

    async fn load(&self) -> Result<Vec<Submission>, StorageError> {
        let raw = fs::read(&self.path).await?;
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_slice(&raw)?)
    }

    async fn save(&self, submissions: &[Submission]) -> Result<(), StorageError> {
        let body = serde_json::to_vec_pretty(submissions)?;

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        let mut file = fs::File::create(&tmp).await?;
        file.write_all(&body).await?;
        file.sync_all().await?;
        drop(file);

        if let Err(e) = fs::rename(&tmp, &self.path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl SubmissionStore for JsonFileStore {
    async fn append(&self, submission: &Submission) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;

        self.ensure_file().await?;
        let mut submissions = self.load().await?;
        submissions.push(submission.clone());
        self.save(&submissions).await?;

        tracing::debug!(
            "Stored submission {} ({} total)",
            submission.id,
            submissions.len()
        );
        Ok(())
    }
}
