//! User service - account provisioning.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{normalize_email, parse_roles, require, Action, CurrentUser, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user account. The acting user must hold ADMIN.
    async fn create_user(
        &self,
        actor: &CurrentUser,
        email: String,
        full_name: String,
        password: String,
        roles: Vec<String>,
    ) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;
}

/// Concrete implementation of UserService backed by the user store.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(
        &self,
        actor: &CurrentUser,
        email: String,
        full_name: String,
        password: String,
        roles: Vec<String>,
    ) -> AppResult<User> {
        // Authorization first, before any input is inspected
        require(Action::CreateUser, &actor.roles)?;

        let roles = parse_roles(&roles)?;
        let email = normalize_email(&email);
        if full_name.trim().is_empty() {
            return Err(AppError::invalid_argument("full name is required"));
        }

        let password_hash = Password::new(&password)?.into_string();
        let user = User::new(email, full_name, password_hash, roles);

        tracing::info!(user_id = %user.id, "creating user account");
        self.users.insert(user).await
    }

    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use crate::infra::{MockUserRepository, UserStore};
    use std::collections::BTreeSet;

    fn admin() -> CurrentUser {
        CurrentUser {
            id: Uuid::new_v4(),
            email: "root@example.org".into(),
            roles: BTreeSet::from([Role::Admin]),
        }
    }

    fn chair() -> CurrentUser {
        CurrentUser {
            id: Uuid::new_v4(),
            email: "chair@example.org".into(),
            roles: BTreeSet::from([Role::Chair]),
        }
    }

    #[tokio::test]
    async fn test_admin_creates_user_with_normalized_email() {
        let service = UserManager::new(Arc::new(UserStore::new()));
        let user = service
            .create_user(
                &admin(),
                "  New@Example.ORG ".into(),
                "New Person".into(),
                "longenough".into(),
                vec!["AUTHOR".into(), "REVIEWER".into()],
            )
            .await
            .unwrap();

        assert_eq!(user.email, "new@example.org");
        assert!(user.has_role(Role::Author));
        assert!(user.has_role(Role::Reviewer));
    }

    #[tokio::test]
    async fn test_non_admin_is_forbidden_before_any_validation() {
        // The store must never be touched when authorization fails
        let mut repo = MockUserRepository::new();
        repo.expect_insert().never();
        let service = UserManager::new(Arc::new(repo));

        let err = service
            .create_user(
                &chair(),
                "x@example.org".into(),
                "X".into(),
                "longenough".into(),
                vec!["AUTHOR".into()],
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[tokio::test]
    async fn test_unknown_role_is_invalid_argument() {
        let service = UserManager::new(Arc::new(UserStore::new()));
        let err = service
            .create_user(
                &admin(),
                "x@example.org".into(),
                "X".into(),
                "longenough".into(),
                vec!["SUPERADMIN".into()],
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_duplicate_email_surfaces_conflict() {
        let service = UserManager::new(Arc::new(UserStore::new()));
        service
            .create_user(
                &admin(),
                "dup@example.org".into(),
                "First".into(),
                "longenough".into(),
                vec!["AUTHOR".into()],
            )
            .await
            .unwrap();

        let err = service
            .create_user(
                &admin(),
                "DUP@example.org".into(),
                "Second".into(),
                "longenough".into(),
                vec!["AUTHOR".into()],
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_short_password_is_rejected() {
        let service = UserManager::new(Arc::new(UserStore::new()));
        let err = service
            .create_user(
                &admin(),
                "x@example.org".into(),
                "X".into(),
                "short".into(),
                vec!["AUTHOR".into()],
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }
}
