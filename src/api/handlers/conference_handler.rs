//! Conference handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{ConferenceResponse, ConferenceStatus, CurrentUser};
use crate::errors::AppResult;
use crate::services::NewConference;
use crate::types::{Created, ItemsEnvelope};

/// Request to create a conference
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateConferenceRequest {
    /// Short unique code, stored uppercased
    #[validate(length(min = 1, message = "Code is required"))]
    #[schema(example = "ICSE26")]
    pub code: String,
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "International Conference on Software Engineering")]
    pub name: String,
    #[validate(length(min = 1, message = "Location is required"))]
    #[schema(example = "Lisbon, Portugal")]
    pub location: String,
    #[schema(example = "2026-04-12")]
    pub start_date: NaiveDate,
    #[schema(example = "2026-04-18")]
    pub end_date: NaiveDate,
    #[schema(example = "2025-11-01")]
    pub submission_deadline: NaiveDate,
    #[schema(example = "2026-02-15")]
    pub camera_ready_deadline: NaiveDate,
    /// Initial status; a conference starts as DRAFT when omitted
    pub status: Option<ConferenceStatus>,
}

/// Create conference routes
pub fn conference_routes() -> Router<AppState> {
    Router::new().route("/", get(list_conferences).post(create_conference))
}

/// List all conferences
#[utoipa::path(
    get,
    path = "/conferences",
    tag = "Conferences",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Conferences ordered by start date then code"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn list_conferences(
    State(state): State<AppState>,
) -> AppResult<Json<ItemsEnvelope<ConferenceResponse>>> {
    let conferences = state.conference_service.list_conferences().await?;
    let items: Vec<ConferenceResponse> = conferences
        .into_iter()
        .map(ConferenceResponse::from)
        .collect();
    Ok(Json(items.into()))
}

/// Create a conference (ADMIN or CHAIR)
#[utoipa::path(
    post,
    path = "/conferences",
    tag = "Conferences",
    security(("bearer_auth" = [])),
    request_body = CreateConferenceRequest,
    responses(
        (status = 201, description = "Conference created", body = ConferenceResponse),
        (status = 400, description = "Validation error or impossible schedule"),
        (status = 403, description = "Caller holds neither ADMIN nor CHAIR"),
        (status = 409, description = "Code already in use")
    )
)]
pub async fn create_conference(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateConferenceRequest>,
) -> AppResult<Created<ConferenceResponse>> {
    let input = NewConference {
        code: payload.code,
        name: payload.name,
        location: payload.location,
        start_date: payload.start_date,
        end_date: payload.end_date,
        submission_deadline: payload.submission_deadline,
        camera_ready_deadline: payload.camera_ready_deadline,
        status: payload.status.unwrap_or(ConferenceStatus::Draft),
    };

    let conference = state
        .conference_service
        .create_conference(&current_user, input)
        .await?;

    Ok(Created(ConferenceResponse::from(conference)))
}
