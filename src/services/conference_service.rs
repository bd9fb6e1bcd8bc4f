//! Conference service - venue provisioning and listing.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

use crate::domain::{require, Action, Conference, ConferenceStatus, CurrentUser};
use crate::errors::AppResult;
use crate::infra::ConferenceRepository;

/// Fields accepted when creating a conference.
#[derive(Debug, Clone)]
pub struct NewConference {
    pub code: String,
    pub name: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub submission_deadline: NaiveDate,
    pub camera_ready_deadline: NaiveDate,
    pub status: ConferenceStatus,
}

/// Conference service trait for dependency injection.
#[async_trait]
pub trait ConferenceService: Send + Sync {
    /// Create a conference. The acting user must hold ADMIN or CHAIR.
    async fn create_conference(
        &self,
        actor: &CurrentUser,
        input: NewConference,
    ) -> AppResult<Conference>;

    /// List all conferences, ordered by start date then code.
    async fn list_conferences(&self) -> AppResult<Vec<Conference>>;
}

/// Concrete implementation of ConferenceService backed by the
/// conference store.
pub struct ConferencePlanner {
    conferences: Arc<dyn ConferenceRepository>,
}

impl ConferencePlanner {
    /// Create new conference service instance
    pub fn new(conferences: Arc<dyn ConferenceRepository>) -> Self {
        Self { conferences }
    }
}

#[async_trait]
impl ConferenceService for ConferencePlanner {
    async fn create_conference(
        &self,
        actor: &CurrentUser,
        input: NewConference,
    ) -> AppResult<Conference> {
        require(Action::CreateConference, &actor.roles)?;

        // Codes are case-insensitively unique; store them uppercased
        let code = input.code.trim().to_uppercase();
        let conference = Conference::new(
            code,
            input.name,
            input.location,
            input.start_date,
            input.end_date,
            input.submission_deadline,
            input.camera_ready_deadline,
            input.status,
            actor.id,
        )?;

        tracing::info!(conference_id = %conference.id, code = %conference.code, "creating conference");
        self.conferences.insert(conference).await
    }

    async fn list_conferences(&self) -> AppResult<Vec<Conference>> {
        self.conferences.list().await
    }
}
