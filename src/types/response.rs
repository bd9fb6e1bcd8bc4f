use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// List envelope: every collection endpoint returns `{"items": [..]}`.
#[derive(Debug, Serialize)]
pub struct ItemsEnvelope<T: Serialize> {
    pub items: Vec<T>,
}

impl<T: Serialize> From<Vec<T>> for ItemsEnvelope<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

/// Wraps a body so POST handlers reply 201 instead of 200.
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}
