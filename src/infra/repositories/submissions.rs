//! Submission repository - paper metadata storage.
//!
//! Lifecycle transitions go through [`SubmissionRepository::update_with`],
//! which applies a mutation to a copy of the stored record under the
//! store's write guard and swaps it back only on success. Concurrent
//! transitions on the same submission therefore serialize, and a failed
//! transition leaves the stored record untouched.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::Submission;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Mutation applied to a submission inside the store's write guard.
pub type SubmissionMutation = Box<dyn FnOnce(&mut Submission) -> AppResult<()> + Send>;

/// Submission repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Insert a new submission
    async fn insert(&self, submission: Submission) -> AppResult<Submission>;

    /// Find submission by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Submission>>;

    /// List submissions owned by an author, newest first.
    async fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Submission>>;

    /// List submissions for a conference, newest first.
    async fn list_by_conference(&self, conference_id: Uuid) -> AppResult<Vec<Submission>>;

    /// Atomically apply a mutation to the stored submission.
    ///
    /// Fails with `NotFound` for an unknown ID; when the mutation fails
    /// the stored record is left unchanged and the error is returned.
    async fn update_with(&self, id: Uuid, mutate: SubmissionMutation) -> AppResult<Submission>;
}

/// In-memory submission store keyed by submission ID.
#[derive(Default)]
pub struct SubmissionStore {
    inner: Arc<RwLock<HashMap<Uuid, Submission>>>,
}

impl SubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn newest_first(mut items: Vec<Submission>) -> Vec<Submission> {
        items.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        items
    }
}

#[async_trait]
impl SubmissionRepository for SubmissionStore {
    async fn insert(&self, submission: Submission) -> AppResult<Submission> {
        self.inner
            .write()
            .await
            .insert(submission.id, submission.clone());
        Ok(submission)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Submission>> {
        Ok(self.inner.read().await.get(&id).cloned())
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Submission>> {
        let items = self
            .inner
            .read()
            .await
            .values()
            .filter(|s| s.owner_id == owner_id)
            .cloned()
            .collect();
        Ok(Self::newest_first(items))
    }

    async fn list_by_conference(&self, conference_id: Uuid) -> AppResult<Vec<Submission>> {
        let items = self
            .inner
            .read()
            .await
            .values()
            .filter(|s| s.conference_id == conference_id)
            .cloned()
            .collect();
        Ok(Self::newest_first(items))
    }

    async fn update_with(&self, id: Uuid, mutate: SubmissionMutation) -> AppResult<Submission> {
        let mut submissions = self.inner.write().await;
        let current = submissions.get(&id).ok_or(AppError::NotFound)?;

        // Mutate a copy; swap it in only if the mutation succeeds
        let mut updated = current.clone();
        mutate(&mut updated)?;
        submissions.insert(id, updated.clone());
        Ok(updated)
    }
}
