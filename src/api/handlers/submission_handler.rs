//! Submission handlers: paper intake, reads and the review workflow.
//!
//! Papers arrive as multipart form data. The text fields mirror the
//! submission form: `conferenceId`, `title`, `abstract`, `keywords`
//! (one comma-separated field), `authors` (JSON array of
//! `{fullName, email}`) and the `paper` PDF itself.

use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::{IntoResponse, Json},
    routing::{get, post},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::PDF_CONTENT_TYPE;
use crate::domain::{Author, CurrentUser, Decision, SubmissionResponse};
use crate::errors::{AppError, AppResult};
use crate::services::NewSubmission;
use crate::types::{Created, ItemsEnvelope};

/// Request to assign reviewers to a submission
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignReviewersRequest {
    /// User IDs of the reviewer accounts
    #[validate(length(min = 1, message = "At least one reviewer is required"))]
    pub reviewer_ids: Vec<Uuid>,
}

/// Request to record the decision for a submission
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RecordDecisionRequest {
    /// One of ACCEPTED, REJECTED, REVISION_REQUESTED
    pub decision: Decision,
    /// Optional note shown to the authors
    pub note: Option<String>,
}

/// Create submission routes for authors
pub fn submission_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_submission))
        .route("/mine", get(list_my_submissions))
        .route("/:id", get(get_submission))
        .route("/:id/paper", get(download_paper))
}

/// Create admin submission routes (programme staff)
pub fn admin_submission_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/submissions/by-conference/:conference_id",
            get(list_by_conference),
        )
        .route("/submissions/:id/assign-reviewers", post(assign_reviewers))
        .route("/submissions/:id/decision", post(record_decision))
}

/// Split the single comma-separated keywords field into a trimmed list.
fn parse_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// Keep header-safe characters in a download file name.
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn bad_multipart(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::invalid_argument(format!("malformed multipart body: {e}"))
}

/// Submit a paper (AUTHOR only, multipart form)
#[utoipa::path(
    post,
    path = "/submissions",
    tag = "Submissions",
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Submission created", body = SubmissionResponse),
        (status = 400, description = "Missing or malformed form field"),
        (status = 403, description = "Caller does not hold AUTHOR"),
        (status = 404, description = "Unknown conference"),
        (status = 422, description = "Conference is not open for submissions")
    )
)]
pub async fn create_submission(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    mut multipart: Multipart,
) -> AppResult<Created<SubmissionResponse>> {
    let mut conference_id: Option<Uuid> = None;
    let mut title = String::new();
    let mut abstract_text = String::new();
    let mut keywords: Vec<String> = Vec::new();
    let mut authors: Vec<Author> = Vec::new();
    let mut file_name = String::new();
    let mut file_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "conferenceId" => {
                let text = field.text().await.map_err(bad_multipart)?;
                let id = Uuid::parse_str(text.trim())
                    .map_err(|_| AppError::invalid_argument("conferenceId must be a UUID"))?;
                conference_id = Some(id);
            }
            "title" => title = field.text().await.map_err(bad_multipart)?,
            "abstract" => abstract_text = field.text().await.map_err(bad_multipart)?,
            "keywords" => {
                keywords = parse_keywords(&field.text().await.map_err(bad_multipart)?);
            }
            "authors" => {
                let text = field.text().await.map_err(bad_multipart)?;
                authors = serde_json::from_str(&text).map_err(|_| {
                    AppError::invalid_argument(
                        "authors must be a JSON array of {fullName, email} objects",
                    )
                })?;
            }
            "paper" => {
                // File name and content type must be read before the
                // field is consumed for its bytes
                file_name = field.file_name().unwrap_or("paper.pdf").to_string();
                if field.content_type() != Some(PDF_CONTENT_TYPE) {
                    return Err(AppError::invalid_argument(
                        "paper must be uploaded as application/pdf",
                    ));
                }
                file_bytes = Some(field.bytes().await.map_err(bad_multipart)?.to_vec());
            }
            // Unknown form fields are ignored
            _ => {}
        }
    }

    let conference_id =
        conference_id.ok_or_else(|| AppError::invalid_argument("conferenceId is required"))?;
    let file_bytes =
        file_bytes.ok_or_else(|| AppError::invalid_argument("paper file is required"))?;

    let submission = state
        .workflow_service
        .create_submission(
            &current_user,
            NewSubmission {
                conference_id,
                title,
                abstract_text,
                keywords,
                authors,
                file_name,
                file_bytes,
            },
        )
        .await?;

    Ok(Created(submission))
}

/// List the authenticated user's own submissions
#[utoipa::path(
    get,
    path = "/submissions/mine",
    tag = "Submissions",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Own submissions, newest first"),
        (status = 401, description = "Missing or invalid token")
    )
)]
pub async fn list_my_submissions(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<ItemsEnvelope<SubmissionResponse>>> {
    let items = state
        .workflow_service
        .list_my_submissions(&current_user)
        .await?;
    Ok(Json(items.into()))
}

/// Get one submission (owner or programme staff)
#[utoipa::path(
    get,
    path = "/submissions/{id}",
    tag = "Submissions",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "The submission", body = SubmissionResponse),
        (status = 403, description = "Caller is neither owner nor staff"),
        (status = 404, description = "Unknown submission")
    )
)]
pub async fn get_submission(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<SubmissionResponse>> {
    let submission = state
        .workflow_service
        .get_submission(&current_user, id)
        .await?;
    Ok(Json(submission))
}

/// Download the paper PDF (owner or programme staff)
#[utoipa::path(
    get,
    path = "/submissions/{id}/paper",
    tag = "Submissions",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Submission ID")),
    responses(
        (status = 200, description = "The PDF file", content_type = "application/pdf"),
        (status = 403, description = "Caller is neither owner nor staff"),
        (status = 404, description = "Unknown submission or missing file")
    )
)]
pub async fn download_paper(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let download = state
        .workflow_service
        .download_paper(&current_user, id)
        .await?;

    let filename = sanitize_filename(&download.file_name);
    let headers = [
        (header::CONTENT_TYPE, PDF_CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, download.bytes))
}

/// List a conference's submissions (programme staff)
#[utoipa::path(
    get,
    path = "/admin/submissions/by-conference/{conference_id}",
    tag = "Submissions",
    security(("bearer_auth" = [])),
    params(("conference_id" = Uuid, Path, description = "Conference ID")),
    responses(
        (status = 200, description = "Submissions for the conference, newest first"),
        (status = 403, description = "Caller is not programme staff"),
        (status = 404, description = "Unknown conference")
    )
)]
pub async fn list_by_conference(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(conference_id): Path<Uuid>,
) -> AppResult<Json<ItemsEnvelope<SubmissionResponse>>> {
    let items = state
        .workflow_service
        .list_by_conference(&current_user, conference_id)
        .await?;
    Ok(Json(items.into()))
}

/// Assign reviewers to a submission (ADMIN, CHAIR or TPC)
#[utoipa::path(
    post,
    path = "/admin/submissions/{id}/assign-reviewers",
    tag = "Submissions",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Submission ID")),
    request_body = AssignReviewersRequest,
    responses(
        (status = 200, description = "Submission now under review", body = SubmissionResponse),
        (status = 400, description = "Empty list or target lacks REVIEWER"),
        (status = 403, description = "Caller may not assign reviewers"),
        (status = 404, description = "Unknown submission or reviewer"),
        (status = 409, description = "Submission already decided")
    )
)]
pub async fn assign_reviewers(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<AssignReviewersRequest>,
) -> AppResult<Json<SubmissionResponse>> {
    let submission = state
        .workflow_service
        .assign_reviewers(&current_user, id, payload.reviewer_ids)
        .await?;
    Ok(Json(submission))
}

/// Record the decision for a submission (ADMIN or CHAIR)
#[utoipa::path(
    post,
    path = "/admin/submissions/{id}/decision",
    tag = "Submissions",
    security(("bearer_auth" = [])),
    params(("id" = Uuid, Path, description = "Submission ID")),
    request_body = RecordDecisionRequest,
    responses(
        (status = 200, description = "Decision recorded", body = SubmissionResponse),
        (status = 400, description = "Unknown decision value"),
        (status = 403, description = "Caller may not decide"),
        (status = 404, description = "Unknown submission"),
        (status = 409, description = "Not under review or already decided")
    )
)]
pub async fn record_decision(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<RecordDecisionRequest>,
) -> AppResult<Json<SubmissionResponse>> {
    let submission = state
        .workflow_service
        .record_decision(&current_user, id, payload.decision, payload.note)
        .await?;
    Ok(Json(submission))
}
