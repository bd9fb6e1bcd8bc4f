//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.
//! The bundled stores keep everything in process memory behind
//! `tokio::sync::RwLock`, which is enough for a single-node deployment
//! and keeps the service traits free of storage details.

mod conferences;
mod submissions;
mod users;

pub use conferences::{ConferenceRepository, ConferenceStore};
pub use submissions::{SubmissionMutation, SubmissionRepository, SubmissionStore};
pub use users::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use conferences::MockConferenceRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use submissions::MockSubmissionRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use users::MockUserRepository;
