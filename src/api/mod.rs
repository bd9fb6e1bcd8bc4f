//! API layer - HTTP surface of the review workflow.
//!
//! Everything HTTP-shaped lives here: the bearer-token middleware, the
//! validated-JSON extractor, the handlers for auth, accounts,
//! conferences and submissions, route assembly and the OpenAPI
//! document. Handlers stay thin; policy and lifecycle rules live in
//! the services and domain layers.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
