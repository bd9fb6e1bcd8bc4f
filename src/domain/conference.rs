//! Conference domain entity.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// Conference lifecycle status. Submissions are accepted only while OPEN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConferenceStatus {
    Draft,
    Open,
    Closed,
}

impl ConferenceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConferenceStatus::Draft => "DRAFT",
            ConferenceStatus::Open => "OPEN",
            ConferenceStatus::Closed => "CLOSED",
        }
    }
}

impl std::fmt::Display for ConferenceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConferenceStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(ConferenceStatus::Draft),
            "OPEN" => Ok(ConferenceStatus::Open),
            "CLOSED" => Ok(ConferenceStatus::Closed),
            other => Err(AppError::invalid_argument(format!(
                "unknown conference status: {other}"
            ))),
        }
    }
}

/// Conference domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conference {
    pub id: Uuid,
    /// Short unique code, e.g. "ICAICI2026". Uppercased at the boundary.
    pub code: String,
    pub name: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub submission_deadline: NaiveDate,
    pub camera_ready_deadline: NaiveDate,
    pub status: ConferenceStatus,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Conference {
    /// Create a conference, enforcing the scheduling invariants:
    /// the end date may not precede the start date and the submission
    /// deadline may not fall after the end date.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        code: String,
        name: String,
        location: String,
        start_date: NaiveDate,
        end_date: NaiveDate,
        submission_deadline: NaiveDate,
        camera_ready_deadline: NaiveDate,
        status: ConferenceStatus,
        created_by: Uuid,
    ) -> AppResult<Self> {
        if code.trim().is_empty() {
            return Err(AppError::invalid_argument("conference code is required"));
        }
        if name.trim().is_empty() {
            return Err(AppError::invalid_argument("conference name is required"));
        }
        if end_date < start_date {
            return Err(AppError::invalid_argument(
                "end date must not precede start date",
            ));
        }
        if submission_deadline > end_date {
            return Err(AppError::invalid_argument(
                "submission deadline must not fall after the conference end date",
            ));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            code,
            name,
            location,
            start_date,
            end_date,
            submission_deadline,
            camera_ready_deadline,
            status,
            created_by,
            created_at: Utc::now(),
        })
    }

    pub fn is_open(&self) -> bool {
        self.status == ConferenceStatus::Open
    }
}

/// Conference payload returned to clients
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceResponse {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub submission_deadline: NaiveDate,
    pub camera_ready_deadline: NaiveDate,
    pub status: ConferenceStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Conference> for ConferenceResponse {
    fn from(c: Conference) -> Self {
        Self {
            id: c.id,
            code: c.code,
            name: c.name,
            location: c.location,
            start_date: c.start_date,
            end_date: c.end_date,
            submission_deadline: c.submission_deadline,
            camera_ready_deadline: c.camera_ready_deadline,
            status: c.status,
            created_at: c.created_at,
        }
    }
}
