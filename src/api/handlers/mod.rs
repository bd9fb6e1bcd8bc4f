//! HTTP request handlers.

pub mod auth_handler;
pub mod conference_handler;
pub mod submission_handler;
pub mod user_handler;

pub use auth_handler::auth_routes;
pub use conference_handler::conference_routes;
pub use submission_handler::{admin_submission_routes, submission_routes};
pub use user_handler::{admin_user_routes, me_routes};
