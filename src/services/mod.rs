//! Application services layer - use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion, and every privileged operation runs its
//! authorization check before inspecting input or touching a store.

mod auth_service;
mod conference_service;
mod user_service;
mod workflow_service;

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, Claims, LoginResponse};
pub use conference_service::{ConferencePlanner, ConferenceService, NewConference};
pub use user_service::{UserManager, UserService};
pub use workflow_service::{NewSubmission, PaperDownload, ReviewWorkflow, WorkflowService};
