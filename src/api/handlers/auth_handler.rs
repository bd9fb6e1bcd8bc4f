//! Login endpoint. Accounts are provisioned by an ADMIN, so there is
//! no self-service registration route.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::services::LoginResponse;

/// Credentials presented at login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Account email
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "chair@conf.example.org")]
    pub email: String,
    /// Account password
    #[schema(example = "correct-horse-battery")]
    pub password: String,
}

/// Public authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Exchange credentials for a bearer token plus the user's profile
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = LoginResponse),
        (status = 400, description = "Malformed credentials payload"),
        (status = 401, description = "Unknown email or wrong password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let session = state
        .auth_service
        .login(payload.email, payload.password)
        .await?;

    Ok(Json(session))
}
