//! Infrastructure layer - storage concerns.

pub mod files;
pub mod repositories;

pub use files::{FsPaperStore, PaperStore};
pub use repositories::{
    ConferenceRepository, ConferenceStore, SubmissionMutation, SubmissionRepository,
    SubmissionStore, UserRepository, UserStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use files::MockPaperStore;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockConferenceRepository, MockSubmissionRepository, MockUserRepository};
