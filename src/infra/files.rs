//! Paper file storage.
//!
//! Uploaded PDFs are stored outside the metadata store and addressed by
//! submission ID, so the workflow layer never carries file bytes around
//! in its records.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Paper store trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PaperStore: Send + Sync {
    /// Store the paper bytes for a submission, replacing any previous file.
    async fn put(&self, id: Uuid, bytes: &[u8]) -> AppResult<()>;

    /// Fetch the paper bytes for a submission.
    async fn get(&self, id: Uuid) -> AppResult<Vec<u8>>;
}

/// Filesystem-backed paper store: one `<submission-id>.pdf` per paper
/// under a configured directory.
pub struct FsPaperStore {
    dir: PathBuf,
}

impl FsPaperStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{id}.pdf"))
    }
}

#[async_trait]
impl PaperStore for FsPaperStore {
    async fn put(&self, id: Uuid, bytes: &[u8]) -> AppResult<()> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| AppError::internal(format!("creating uploads dir: {e}")))?;
        fs::write(self.path_for(id), bytes)
            .await
            .map_err(|e| AppError::internal(format!("writing paper file: {e}")))?;
        Ok(())
    }

    async fn get(&self, id: Uuid) -> AppResult<Vec<u8>> {
        match fs::read(self.path_for(id)).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(AppError::NotFound),
            Err(e) => Err(AppError::internal(format!("reading paper file: {e}"))),
        }
    }
}
