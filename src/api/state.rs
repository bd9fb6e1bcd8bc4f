//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{ConferenceStore, FsPaperStore, SubmissionStore, UserStore};
use crate::services::{
    AuthService, Authenticator, ConferencePlanner, ConferenceService, ReviewWorkflow, UserManager,
    UserService, WorkflowService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Conference service
    pub conference_service: Arc<dyn ConferenceService>,
    /// Review workflow service
    pub workflow_service: Arc<dyn WorkflowService>,
    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create application state with the bundled stores.
    ///
    /// Wires the in-memory stores and the disk paper store from the
    /// configuration; all services share the same store instances. The
    /// user store is returned alongside so callers can seed accounts.
    pub fn from_config(config: Config) -> (Self, Arc<UserStore>) {
        let users = Arc::new(UserStore::new());
        let conferences = Arc::new(ConferenceStore::new());
        let submissions = Arc::new(SubmissionStore::new());
        let papers = Arc::new(FsPaperStore::new(config.uploads_dir.clone()));

        let auth_service = Arc::new(Authenticator::new(users.clone(), config.clone()));
        let user_service = Arc::new(UserManager::new(users.clone()));
        let conference_service = Arc::new(ConferencePlanner::new(conferences.clone()));
        let workflow_service = Arc::new(ReviewWorkflow::new(
            submissions,
            conferences,
            users.clone(),
            papers,
            config.clone(),
        ));

        let state = Self {
            auth_service,
            user_service,
            conference_service,
            workflow_service,
            config,
        };
        (state, users)
    }

    /// Create application state with manually injected services.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        conference_service: Arc<dyn ConferenceService>,
        workflow_service: Arc<dyn WorkflowService>,
        config: Config,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            conference_service,
            workflow_service,
            config,
        }
    }
}
