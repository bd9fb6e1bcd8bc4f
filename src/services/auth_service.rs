//! Authentication service - login and token verification.
//!
//! Password hashing lives in the domain `Password` value object; this
//! service owns token issuance and the timing-safe login flow.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::Config;
use crate::domain::{normalize_email, Password, User, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub roles: Vec<String>,
    pub exp: i64,
    pub iat: i64,
}

/// Payload returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    /// Profile of the authenticated user
    pub user: UserResponse,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Login and return a JWT token with the user's profile
    async fn login(&self, email: String, password: String) -> AppResult<LoginResponse>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Generate a JWT for a user (shared helper to avoid duplication)
fn generate_token(user: &User, config: &Config) -> AppResult<String> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        roles: user.roles.iter().map(|r| r.to_string()).collect(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(token)
}

/// Verify a JWT and extract claims (shared helper)
fn verify_token_internal(token: &str, config: &Config) -> AppResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

/// Concrete implementation of AuthService backed by the user store.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    config: Config,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>, config: Config) -> Self {
        Self { users, config }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, email: String, password: String) -> AppResult<LoginResponse> {
        let email = normalize_email(&email);
        let user_result = self.users.find_by_email(&email).await?;

        // SECURITY: Perform password verification even if user doesn't exist
        // to prevent timing attacks that could enumerate valid emails.
        // We use a dummy hash that will always fail verification.
        let dummy_hash = "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

        let password_hash = match &user_result {
            Some(user) => user.password_hash.as_str(),
            None => dummy_hash,
        };

        let stored_password = Password::from_hash(password_hash.to_string());
        let password_valid = stored_password.verify(&password);

        // Only succeed if both user exists AND password is valid
        let user = match user_result {
            Some(user) if password_valid => user,
            _ => return Err(AppError::InvalidCredentials),
        };

        let token = generate_token(&user, &self.config)?;
        Ok(LoginResponse {
            token,
            user: UserResponse::from(user),
        })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        verify_token_internal(token, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use crate::infra::UserStore;
    use std::collections::BTreeSet;

    fn config() -> Config {
        Config::for_tests("0123456789abcdef0123456789abcdef", "uploads-test")
    }

    async fn store_with_user(email: &str, password: &str) -> Arc<UserStore> {
        let store = Arc::new(UserStore::new());
        let hash = Password::new(password).unwrap().into_string();
        let user = User::new(
            email.to_string(),
            "Login Tester".to_string(),
            hash,
            BTreeSet::from([Role::Author, Role::Reviewer]),
        );
        store.insert(user).await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_login_issues_verifiable_token_with_roles() {
        let store = store_with_user("who@example.org", "secret-pass").await;
        let auth = Authenticator::new(store, config());

        let resp = auth
            .login("who@example.org".into(), "secret-pass".into())
            .await
            .unwrap();
        assert_eq!(resp.user.email, "who@example.org");

        let claims = auth.verify_token(&resp.token).unwrap();
        assert_eq!(claims.email, "who@example.org");
        assert_eq!(claims.roles, vec!["AUTHOR", "REVIEWER"]);
        assert!(claims.exp > claims.iat);
    }

    #[tokio::test]
    async fn test_login_normalizes_email_case() {
        let store = store_with_user("case@example.org", "secret-pass").await;
        let auth = Authenticator::new(store, config());

        let resp = auth
            .login("  Case@Example.ORG ".into(), "secret-pass".into())
            .await
            .unwrap();
        assert_eq!(resp.user.email, "case@example.org");
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
        let store = store_with_user("who@example.org", "secret-pass").await;
        let auth = Authenticator::new(store, config());

        let wrong = auth
            .login("who@example.org".into(), "nope".into())
            .await
            .unwrap_err();
        let unknown = auth
            .login("ghost@example.org".into(), "nope".into())
            .await
            .unwrap_err();
        assert!(matches!(wrong, AppError::InvalidCredentials));
        assert!(matches!(unknown, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_garbage_token_is_rejected() {
        let store = Arc::new(UserStore::new());
        let auth = Authenticator::new(store, config());
        assert!(auth.verify_token("not-a-token").is_err());
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret_is_rejected() {
        let store = store_with_user("who@example.org", "secret-pass").await;
        let auth = Authenticator::new(store.clone(), config());
        let resp = auth
            .login("who@example.org".into(), "secret-pass".into())
            .await
            .unwrap();

        let other = Authenticator::new(
            store,
            Config::for_tests("ffffffffffffffffffffffffffffffff", "uploads-test"),
        );
        assert!(other.verify_token(&resp.token).is_err());
    }
}
