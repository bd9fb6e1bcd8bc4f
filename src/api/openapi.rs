//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    auth_handler, conference_handler, submission_handler, user_handler,
};
use crate::domain::{
    Author, ConferenceResponse, ConferenceStatus, Decision, Role, SubmissionResponse,
    SubmissionStatus, UserResponse,
};
use crate::services::LoginResponse;

/// OpenAPI documentation for the conference submission service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Paperflow",
        version = "0.1.0",
        description = "Conference paper submission and review workflow service",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::login,
        // User endpoints
        user_handler::me,
        user_handler::create_user,
        // Conference endpoints
        conference_handler::list_conferences,
        conference_handler::create_conference,
        // Submission endpoints
        submission_handler::create_submission,
        submission_handler::list_my_submissions,
        submission_handler::get_submission,
        submission_handler::download_paper,
        submission_handler::list_by_conference,
        submission_handler::assign_reviewers,
        submission_handler::record_decision,
    ),
    components(
        schemas(
            // Domain types
            Role,
            UserResponse,
            ConferenceStatus,
            ConferenceResponse,
            SubmissionStatus,
            Decision,
            Author,
            SubmissionResponse,
            // Request and response types
            auth_handler::LoginRequest,
            LoginResponse,
            user_handler::CreateUserRequest,
            conference_handler::CreateConferenceRequest,
            submission_handler::AssignReviewersRequest,
            submission_handler::RecordDecisionRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Login and token issuance"),
        (name = "Users", description = "Profiles and account provisioning"),
        (name = "Conferences", description = "Conference management"),
        (name = "Submissions", description = "Paper submission and review workflow")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}
