//! Domain entities, value objects and pure policy.

pub mod access;
pub mod conference;
pub mod password;
pub mod submission;
pub mod user;

pub use access::{permit, require, Action};
pub use conference::{Conference, ConferenceResponse, ConferenceStatus};
pub use password::Password;
pub use submission::{
    validate_authors, Author, Decision, Submission, SubmissionResponse, SubmissionStatus,
};
pub use user::{normalize_email, parse_roles, CurrentUser, Role, User, UserResponse};
