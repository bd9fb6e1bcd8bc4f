//! Conference repository - venue storage.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::Conference;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Conference repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ConferenceRepository: Send + Sync {
    /// Insert a new conference. Fails with `Conflict` when the code is
    /// already in use.
    async fn insert(&self, conference: Conference) -> AppResult<Conference>;

    /// Find conference by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Conference>>;

    /// List all conferences ordered by start date, then code.
    async fn list(&self) -> AppResult<Vec<Conference>>;
}

/// In-memory conference store keyed by conference ID.
#[derive(Default)]
pub struct ConferenceStore {
    inner: Arc<RwLock<HashMap<Uuid, Conference>>>,
}

impl ConferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConferenceRepository for ConferenceStore {
    async fn insert(&self, conference: Conference) -> AppResult<Conference> {
        let mut conferences = self.inner.write().await;
        if conferences.values().any(|c| c.code == conference.code) {
            return Err(AppError::conflict(format!(
                "conference with code {}",
                conference.code
            )));
        }
        conferences.insert(conference.id, conference.clone());
        Ok(conference)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Conference>> {
        Ok(self.inner.read().await.get(&id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Conference>> {
        let mut all: Vec<Conference> = self.inner.read().await.values().cloned().collect();
        all.sort_by(|a, b| {
            a.start_date
                .cmp(&b.start_date)
                .then_with(|| a.code.cmp(&b.code))
        });
        Ok(all)
    }
}
