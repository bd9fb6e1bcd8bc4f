//! User repository - account storage.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Emails are stored normalized (lowercase, trimmed); callers normalize
/// before lookup or insert.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. Fails with `Conflict` when the email is taken.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by normalized email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

/// In-memory user store keyed by user ID.
#[derive(Default)]
pub struct UserStore {
    inner: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn insert(&self, user: User) -> AppResult<User> {
        // Uniqueness check and insert under the same write guard
        let mut users = self.inner.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::conflict(format!(
                "account with email {}",
                user.email
            )));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.inner.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .inner
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}
