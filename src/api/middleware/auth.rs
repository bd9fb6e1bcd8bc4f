//! Bearer-token middleware for the protected routes.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::domain::{parse_roles, CurrentUser};
use crate::errors::AppError;

/// Turns `Authorization: Bearer <jwt>` into a [`CurrentUser`] in the
/// request extensions. Anything short of a verifiable token is
/// `Unauthorized`; role checks happen later, in the services.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let bearer = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_TOKEN_PREFIX))
        .ok_or(AppError::Unauthorized)?;

    let claims = state.auth_service.verify_token(bearer)?;

    // A verified token with unparseable roles is still unusable
    let roles = parse_roles(&claims.roles).map_err(|_| AppError::Unauthorized)?;

    request.extensions_mut().insert(CurrentUser {
        id: claims.sub,
        email: claims.email,
        roles,
    });

    Ok(next.run(request).await)
}
