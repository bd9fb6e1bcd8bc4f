//! Router assembly: which paths exist and which sit behind the
//! bearer-token middleware.

use axum::{extract::DefaultBodyLimit, http::StatusCode, middleware, response::Json, routing::get, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    admin_submission_routes, admin_user_routes, auth_routes, conference_routes, me_routes,
    submission_routes,
};
use super::middleware::auth_middleware;
use super::openapi::ApiDoc;
use super::AppState;
use crate::config::MAX_PAPER_BYTES;

/// Assemble the full application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Liveness endpoints, open to anyone
        .route("/", get(root))
        .route("/health", get(health))
        // Interactive API documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public authentication routes
        .nest("/auth", auth_routes())
        // Protected routes (require JWT)
        .merge(me_routes().route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        )))
        .nest(
            "/conferences",
            conference_routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .nest(
            "/submissions",
            submission_routes()
                .route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth_middleware,
                ))
                // Paper uploads exceed the default 2 MB body cap
                .layer(DefaultBodyLimit::max(MAX_PAPER_BYTES)),
        )
        .nest(
            "/admin",
            admin_user_routes()
                .merge(admin_submission_routes())
                .route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    auth_middleware,
                )),
        )
        // Layers that apply to every route
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> &'static str {
    "Paperflow conference submission service"
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(HealthResponse { status: "healthy" }))
}
