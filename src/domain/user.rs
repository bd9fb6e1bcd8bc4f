//! User domain entity and role model.

use std::collections::BTreeSet;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Capability labels controlling which workflow operations a user may
/// invoke. A user holds one or more of these.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Author,
    Reviewer,
    Tpc,
    Chair,
    Admin,
}

impl Role {
    /// Canonical wire spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Author => "AUTHOR",
            Role::Reviewer => "REVIEWER",
            Role::Tpc => "TPC",
            Role::Chair => "CHAIR",
            Role::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    /// Strict parse: only the canonical UPPERCASE spellings are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AUTHOR" => Ok(Role::Author),
            "REVIEWER" => Ok(Role::Reviewer),
            "TPC" => Ok(Role::Tpc),
            "CHAIR" => Ok(Role::Chair),
            "ADMIN" => Ok(Role::Admin),
            other => Err(AppError::invalid_argument(format!(
                "unknown role: {other}"
            ))),
        }
    }
}

/// Parse a list of role strings into a role set.
///
/// Rejects empty lists (every user holds at least one role) and any
/// non-canonical spelling. Duplicates collapse silently.
pub fn parse_roles<S: AsRef<str>>(raw: &[S]) -> AppResult<BTreeSet<Role>> {
    if raw.is_empty() {
        return Err(AppError::invalid_argument("at least one role is required"));
    }
    raw.iter().map(|s| s.as_ref().parse()).collect()
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub roles: BTreeSet<Role>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user. The caller supplies an already-hashed
    /// credential and a validated, non-empty role set.
    pub fn new(
        email: String,
        full_name: String,
        password_hash: String,
        roles: BTreeSet<Role>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            full_name,
            password_hash,
            roles,
            created_at: Utc::now(),
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// Authenticated principal carried through a request after token
/// verification. Holds the parsed role set so authorization checks
/// never re-touch the token.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub roles: BTreeSet<Role>,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            roles: user.roles.clone(),
        }
    }
}

/// User profile returned to clients (never carries the credential)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub roles: Vec<Role>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            roles: user.roles.into_iter().collect(),
            created_at: user.created_at,
        }
    }
}

/// Normalize an email for storage and lookup: trim and lowercase.
/// Uniqueness is case-insensitive.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
