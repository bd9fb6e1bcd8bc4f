//! Submission domain entity and its review lifecycle.
//!
//! The status machine is strictly forward-only:
//! SUBMITTED -> UNDER_REVIEW -> DECIDED. UNDER_REVIEW is entered only by
//! assigning reviewers, DECIDED only by recording a decision, and no
//! operation leaves DECIDED. Transition methods validate every
//! precondition before mutating, so a failed call leaves the entity
//! untouched.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::ValidateEmail;

use crate::errors::{AppError, AppResult};

/// Review lifecycle status of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    Submitted,
    UnderReview,
    Decided,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Submitted => "SUBMITTED",
            SubmissionStatus::UnderReview => "UNDER_REVIEW",
            SubmissionStatus::Decided => "DECIDED",
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal outcome recorded for a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Accepted,
    Rejected,
    RevisionRequested,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Accepted => "ACCEPTED",
            Decision::Rejected => "REJECTED",
            Decision::RevisionRequested => "REVISION_REQUESTED",
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Decision {
    type Err = AppError;

    /// Strict parse. Legacy client drafts sent `ACCEPT` and `REVISION`;
    /// those are rejected rather than aliased.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACCEPTED" => Ok(Decision::Accepted),
            "REJECTED" => Ok(Decision::Rejected),
            "REVISION_REQUESTED" => Ok(Decision::RevisionRequested),
            other => Err(AppError::invalid_argument(format!(
                "unknown decision: {other}"
            ))),
        }
    }
}

/// One listed author of a paper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub full_name: String,
    pub email: String,
}

impl Author {
    pub fn validate(&self) -> AppResult<()> {
        if self.full_name.trim().is_empty() {
            return Err(AppError::invalid_argument("author full name is required"));
        }
        if !self.email.validate_email() {
            return Err(AppError::invalid_argument(format!(
                "invalid author email: {}",
                self.email
            )));
        }
        Ok(())
    }
}

/// Validate the author list of a submission: non-empty, every entry
/// well-formed.
pub fn validate_authors(authors: &[Author]) -> AppResult<()> {
    if authors.is_empty() {
        return Err(AppError::invalid_argument(
            "at least one author is required",
        ));
    }
    for author in authors {
        author.validate()?;
    }
    Ok(())
}

/// Submission domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    /// Owning conference; immutable after creation.
    pub conference_id: Uuid,
    /// The author who submitted the paper.
    pub owner_id: Uuid,
    pub title: String,
    pub abstract_text: String,
    pub keywords: Vec<String>,
    pub authors: Vec<Author>,
    /// Original upload file name, kept for download headers.
    pub file_name: String,
    pub status: SubmissionStatus,
    /// Assigned reviewers in assignment order, duplicate-free.
    pub reviewers: Vec<Uuid>,
    pub decision: Option<Decision>,
    pub decision_note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Submission {
    /// Create a submission in the initial SUBMITTED state.
    ///
    /// Title and author-list invariants are enforced here; conference
    /// state and file checks belong to the workflow service.
    pub fn new(
        conference_id: Uuid,
        owner_id: Uuid,
        title: String,
        abstract_text: String,
        keywords: Vec<String>,
        authors: Vec<Author>,
        file_name: String,
    ) -> AppResult<Self> {
        if title.trim().is_empty() {
            return Err(AppError::invalid_argument("title is required"));
        }
        validate_authors(&authors)?;

        Ok(Self {
            id: Uuid::new_v4(),
            conference_id,
            owner_id,
            title,
            abstract_text,
            keywords,
            authors,
            file_name,
            status: SubmissionStatus::Submitted,
            reviewers: Vec::new(),
            decision: None,
            decision_note: None,
            created_at: Utc::now(),
        })
    }

    /// Add reviewers (set union; duplicates are a no-op) and move a
    /// SUBMITTED paper to UNDER_REVIEW. Idempotent and one-directional;
    /// fails only once the submission is DECIDED.
    pub fn assign_reviewers(&mut self, reviewer_ids: &[Uuid]) -> AppResult<()> {
        if self.status == SubmissionStatus::Decided {
            return Err(AppError::invalid_state(
                "submission is already decided; reviewers can no longer be assigned",
            ));
        }

        for id in reviewer_ids {
            if !self.reviewers.contains(id) {
                self.reviewers.push(*id);
            }
        }
        self.status = SubmissionStatus::UnderReview;
        Ok(())
    }

    /// Record the terminal decision. Only an UNDER_REVIEW submission can
    /// be decided: deciding without reviewers ever assigned is rejected,
    /// and a second decision is rejected without touching the first.
    pub fn record_decision(&mut self, decision: Decision, note: Option<String>) -> AppResult<()> {
        match self.status {
            SubmissionStatus::UnderReview => {
                self.decision = Some(decision);
                self.decision_note = note;
                self.status = SubmissionStatus::Decided;
                Ok(())
            }
            SubmissionStatus::Submitted => Err(AppError::invalid_state(
                "submission has no assigned reviewers and cannot be decided",
            )),
            SubmissionStatus::Decided => Err(AppError::invalid_state(
                "submission is already decided",
            )),
        }
    }
}

/// Submission payload returned to clients.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub id: Uuid,
    pub conference_id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub keywords: Vec<String>,
    pub authors: Vec<Author>,
    pub file_name: String,
    pub status: SubmissionStatus,
    pub reviewers: Vec<Uuid>,
    pub decision: Option<Decision>,
    pub decision_note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SubmissionResponse {
    /// Blank author emails; used when the reader's role is not entitled
    /// to author contact details.
    pub fn with_redacted_author_emails(mut self) -> Self {
        for author in &mut self.authors {
            author.email.clear();
        }
        self
    }
}

impl From<Submission> for SubmissionResponse {
    fn from(s: Submission) -> Self {
        Self {
            id: s.id,
            conference_id: s.conference_id,
            owner_id: s.owner_id,
            title: s.title,
            abstract_text: s.abstract_text,
            keywords: s.keywords,
            authors: s.authors,
            file_name: s.file_name,
            status: s.status,
            reviewers: s.reviewers,
            decision: s.decision,
            decision_note: s.decision_note,
            created_at: s.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper() -> Submission {
        Submission::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Quantum Widgets".into(),
            "We study widgets.".into(),
            vec!["widgets".into(), "quantum".into()],
            vec![Author {
                full_name: "Ada Lovelace".into(),
                email: "ada@example.org".into(),
            }],
            "paper.pdf".into(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_submission_starts_submitted_with_no_decision() {
        let s = paper();
        assert_eq!(s.status, SubmissionStatus::Submitted);
        assert!(s.reviewers.is_empty());
        assert!(s.decision.is_none());
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let err = Submission::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "   ".into(),
            String::new(),
            vec![],
            vec![Author {
                full_name: "A".into(),
                email: "a@example.org".into(),
            }],
            "paper.pdf".into(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[test]
    fn test_empty_author_list_is_rejected() {
        let err = Submission::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "Title".into(),
            String::new(),
            vec![],
            vec![],
            "paper.pdf".into(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[test]
    fn test_assigning_reviewers_moves_to_under_review_once() {
        let mut s = paper();
        let r1 = Uuid::new_v4();
        let r2 = Uuid::new_v4();

        s.assign_reviewers(&[r1]).unwrap();
        assert_eq!(s.status, SubmissionStatus::UnderReview);
        assert_eq!(s.reviewers, vec![r1]);

        // Re-assignment adds without duplicating and keeps the status
        s.assign_reviewers(&[r1, r2]).unwrap();
        assert_eq!(s.status, SubmissionStatus::UnderReview);
        assert_eq!(s.reviewers, vec![r1, r2]);
    }

    #[test]
    fn test_assign_is_idempotent_for_identical_input() {
        let mut s = paper();
        let r = Uuid::new_v4();
        s.assign_reviewers(&[r]).unwrap();
        let before = s.reviewers.clone();
        s.assign_reviewers(&[r]).unwrap();
        assert_eq!(s.reviewers, before);
        assert_eq!(s.status, SubmissionStatus::UnderReview);
    }

    #[test]
    fn test_deciding_without_reviewers_fails() {
        let mut s = paper();
        let err = s.record_decision(Decision::Accepted, None).unwrap_err();
        assert!(matches!(err, AppError::InvalidState(_)));
        assert_eq!(s.status, SubmissionStatus::Submitted);
        assert!(s.decision.is_none());
    }

    #[test]
    fn test_decision_is_terminal_and_first_wins() {
        let mut s = paper();
        s.assign_reviewers(&[Uuid::new_v4()]).unwrap();
        s.record_decision(Decision::Accepted, Some("good paper".into()))
            .unwrap();
        assert_eq!(s.status, SubmissionStatus::Decided);

        let err = s.record_decision(Decision::Rejected, None).unwrap_err();
        assert!(matches!(err, AppError::InvalidState(_)));
        assert_eq!(s.decision, Some(Decision::Accepted));
        assert_eq!(s.decision_note.as_deref(), Some("good paper"));

        let err = s.assign_reviewers(&[Uuid::new_v4()]).unwrap_err();
        assert!(matches!(err, AppError::InvalidState(_)));
    }

    #[test]
    fn test_decision_parse_rejects_legacy_vocabulary() {
        assert!("ACCEPTED".parse::<Decision>().is_ok());
        assert!("REVISION_REQUESTED".parse::<Decision>().is_ok());
        assert!("ACCEPT".parse::<Decision>().is_err());
        assert!("REVISION".parse::<Decision>().is_err());
        assert!("accepted".parse::<Decision>().is_err());
    }

    #[test]
    fn test_author_email_validation() {
        let bad = Author {
            full_name: "No Email".into(),
            email: "not-an-email".into(),
        };
        assert!(bad.validate().is_err());

        let good = Author {
            full_name: "Has Email".into(),
            email: "someone@conf.org".into(),
        };
        assert!(good.validate().is_ok());
    }

    #[test]
    fn test_response_redaction_blanks_author_emails() {
        let s = paper();
        let resp = SubmissionResponse::from(s).with_redacted_author_emails();
        assert!(resp.authors.iter().all(|a| a.email.is_empty()));
        assert!(!resp.authors[0].full_name.is_empty());
    }
}
