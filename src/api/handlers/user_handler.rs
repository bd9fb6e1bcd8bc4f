//! User handlers: current-user profile and admin account provisioning.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CurrentUser, UserResponse};
use crate::errors::AppResult;
use crate::types::Created;

/// Admin request to create a user account
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Account email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "reviewer@conf.example.org")]
    pub email: String,
    /// Display name
    #[validate(length(min = 1, message = "Full name is required"))]
    #[schema(example = "Grace Hopper")]
    pub full_name: String,
    /// Initial password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
    /// Roles to grant, e.g. ["REVIEWER", "TPC"]
    #[validate(length(min = 1, message = "At least one role is required"))]
    #[schema(example = json!(["REVIEWER"]))]
    pub roles: Vec<String>,
}

/// Routes for the authenticated user's own profile
pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(me))
}

/// Admin routes for account provisioning
pub fn admin_user_routes() -> Router<AppState> {
    Router::new().route("/users", post(create_user))
}

/// Get the authenticated user's profile
#[utoipa::path(
    get,
    path = "/me",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user profile", body = UserResponse),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn me(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(current_user.id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Create a user account (ADMIN only)
#[utoipa::path(
    post,
    path = "/admin/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Caller does not hold ADMIN"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Created<UserResponse>> {
    let user = state
        .user_service
        .create_user(
            &current_user,
            payload.email,
            payload.full_name,
            payload.password,
            payload.roles,
        )
        .await?;

    Ok(Created(UserResponse::from(user)))
}
