//! Review workflow service - submission intake, reviewer assignment and
//! decisions.
//!
//! Every operation checks authorization before touching any input or
//! store. Lifecycle transitions run inside the submission store's
//! atomic update, so the status machine's guarantees hold under
//! concurrent requests. Author contact details are filtered at this
//! boundary: owners, ADMIN and CHAIR always see them, TPC only when the
//! deployment allows it.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::Config;
use crate::domain::{
    permit, require, Action, Author, CurrentUser, Decision, Role, Submission, SubmissionResponse,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{ConferenceRepository, PaperStore, SubmissionRepository, UserRepository};

/// Fields accepted when creating a submission.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub conference_id: Uuid,
    pub title: String,
    pub abstract_text: String,
    pub keywords: Vec<String>,
    pub authors: Vec<Author>,
    pub file_name: String,
    pub file_bytes: Vec<u8>,
}

/// Downloadable paper: original file name plus the stored bytes.
#[derive(Debug)]
pub struct PaperDownload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Review workflow service trait for dependency injection.
#[async_trait]
pub trait WorkflowService: Send + Sync {
    /// Submit a paper to an open conference. The acting user must hold
    /// AUTHOR and becomes the submission's owner.
    async fn create_submission(
        &self,
        actor: &CurrentUser,
        input: NewSubmission,
    ) -> AppResult<SubmissionResponse>;

    /// Assign reviewers to a submission, moving it under review.
    async fn assign_reviewers(
        &self,
        actor: &CurrentUser,
        submission_id: Uuid,
        reviewer_ids: Vec<Uuid>,
    ) -> AppResult<SubmissionResponse>;

    /// Record the terminal decision for a submission under review.
    async fn record_decision(
        &self,
        actor: &CurrentUser,
        submission_id: Uuid,
        decision: Decision,
        note: Option<String>,
    ) -> AppResult<SubmissionResponse>;

    /// Fetch one submission; readable by its owner and by programme staff.
    async fn get_submission(
        &self,
        actor: &CurrentUser,
        submission_id: Uuid,
    ) -> AppResult<SubmissionResponse>;

    /// List the acting user's own submissions, newest first.
    async fn list_my_submissions(&self, actor: &CurrentUser)
        -> AppResult<Vec<SubmissionResponse>>;

    /// List a conference's submissions; programme staff only.
    async fn list_by_conference(
        &self,
        actor: &CurrentUser,
        conference_id: Uuid,
    ) -> AppResult<Vec<SubmissionResponse>>;

    /// Fetch the stored paper file; readable by the owner and by
    /// programme staff.
    async fn download_paper(
        &self,
        actor: &CurrentUser,
        submission_id: Uuid,
    ) -> AppResult<PaperDownload>;
}

/// Concrete implementation of WorkflowService.
pub struct ReviewWorkflow {
    submissions: Arc<dyn SubmissionRepository>,
    conferences: Arc<dyn ConferenceRepository>,
    users: Arc<dyn UserRepository>,
    papers: Arc<dyn PaperStore>,
    config: Config,
}

impl ReviewWorkflow {
    /// Create new workflow service instance
    pub fn new(
        submissions: Arc<dyn SubmissionRepository>,
        conferences: Arc<dyn ConferenceRepository>,
        users: Arc<dyn UserRepository>,
        papers: Arc<dyn PaperStore>,
        config: Config,
    ) -> Self {
        Self {
            submissions,
            conferences,
            users,
            papers,
            config,
        }
    }

    /// True when the actor may read submissions they do not own.
    fn is_staff(&self, actor: &CurrentUser) -> bool {
        permit(Action::ReadAllSubmissions, &actor.roles)
    }

    /// Apply the author-email visibility policy and convert to the wire
    /// shape. Owners, ADMIN and CHAIR see full contact details; TPC only
    /// when the deployment exposes them.
    fn present(&self, submission: Submission, actor: &CurrentUser) -> SubmissionResponse {
        let sees_emails = submission.owner_id == actor.id
            || actor.roles.contains(&Role::Admin)
            || actor.roles.contains(&Role::Chair)
            || (actor.roles.contains(&Role::Tpc) && self.config.expose_author_emails_to_tpc);

        let response = SubmissionResponse::from(submission);
        if sees_emails {
            response
        } else {
            response.with_redacted_author_emails()
        }
    }

    /// Resolve every reviewer ID to an account holding REVIEWER.
    async fn check_reviewers(&self, reviewer_ids: &[Uuid]) -> AppResult<()> {
        for id in reviewer_ids {
            let user = self.users.find_by_id(*id).await?.ok_or_not_found()?;
            if !user.has_role(Role::Reviewer) {
                return Err(AppError::invalid_argument(format!(
                    "user {} does not hold the REVIEWER role",
                    user.email
                )));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl WorkflowService for ReviewWorkflow {
    async fn create_submission(
        &self,
        actor: &CurrentUser,
        input: NewSubmission,
    ) -> AppResult<SubmissionResponse> {
        require(Action::SubmitPaper, &actor.roles)?;

        let conference = self
            .conferences
            .find_by_id(input.conference_id)
            .await?
            .ok_or_not_found()?;
        if !conference.is_open() {
            return Err(AppError::ConferenceClosed);
        }

        if input.file_bytes.is_empty() {
            return Err(AppError::invalid_argument("paper file is required"));
        }

        let submission = Submission::new(
            conference.id,
            actor.id,
            input.title,
            input.abstract_text,
            input.keywords,
            input.authors,
            input.file_name,
        )?;

        // Persist the file before the record so a stored submission
        // always has a downloadable paper.
        self.papers.put(submission.id, &input.file_bytes).await?;
        let stored = self.submissions.insert(submission).await?;

        tracing::info!(
            submission_id = %stored.id,
            conference_id = %stored.conference_id,
            "submission created"
        );
        Ok(self.present(stored, actor))
    }

    async fn assign_reviewers(
        &self,
        actor: &CurrentUser,
        submission_id: Uuid,
        reviewer_ids: Vec<Uuid>,
    ) -> AppResult<SubmissionResponse> {
        require(Action::AssignReviewers, &actor.roles)?;

        if reviewer_ids.is_empty() {
            return Err(AppError::invalid_argument(
                "at least one reviewer is required",
            ));
        }
        self.check_reviewers(&reviewer_ids).await?;

        let updated = self
            .submissions
            .update_with(
                submission_id,
                Box::new(move |s| s.assign_reviewers(&reviewer_ids)),
            )
            .await?;

        tracing::info!(
            submission_id = %updated.id,
            reviewers = updated.reviewers.len(),
            "reviewers assigned"
        );
        Ok(self.present(updated, actor))
    }

    async fn record_decision(
        &self,
        actor: &CurrentUser,
        submission_id: Uuid,
        decision: Decision,
        note: Option<String>,
    ) -> AppResult<SubmissionResponse> {
        require(Action::RecordDecision, &actor.roles)?;

        let updated = self
            .submissions
            .update_with(
                submission_id,
                Box::new(move |s| s.record_decision(decision, note)),
            )
            .await?;

        tracing::info!(
            submission_id = %updated.id,
            decision = %decision,
            "decision recorded"
        );
        Ok(self.present(updated, actor))
    }

    async fn get_submission(
        &self,
        actor: &CurrentUser,
        submission_id: Uuid,
    ) -> AppResult<SubmissionResponse> {
        let submission = self
            .submissions
            .find_by_id(submission_id)
            .await?
            .ok_or_not_found()?;

        if submission.owner_id != actor.id && !self.is_staff(actor) {
            return Err(AppError::Forbidden);
        }
        Ok(self.present(submission, actor))
    }

    async fn list_my_submissions(
        &self,
        actor: &CurrentUser,
    ) -> AppResult<Vec<SubmissionResponse>> {
        let mine = self.submissions.list_by_owner(actor.id).await?;
        Ok(mine.into_iter().map(|s| self.present(s, actor)).collect())
    }

    async fn list_by_conference(
        &self,
        actor: &CurrentUser,
        conference_id: Uuid,
    ) -> AppResult<Vec<SubmissionResponse>> {
        require(Action::ReadAllSubmissions, &actor.roles)?;

        self.conferences
            .find_by_id(conference_id)
            .await?
            .ok_or_not_found()?;

        let items = self.submissions.list_by_conference(conference_id).await?;
        Ok(items.into_iter().map(|s| self.present(s, actor)).collect())
    }

    async fn download_paper(
        &self,
        actor: &CurrentUser,
        submission_id: Uuid,
    ) -> AppResult<PaperDownload> {
        let submission = self
            .submissions
            .find_by_id(submission_id)
            .await?
            .ok_or_not_found()?;

        if submission.owner_id != actor.id && !self.is_staff(actor) {
            return Err(AppError::Forbidden);
        }

        let bytes = self.papers.get(submission.id).await?;
        Ok(PaperDownload {
            file_name: submission.file_name,
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Conference, ConferenceStatus, SubmissionStatus, User};
    use crate::infra::{
        ConferenceStore, MockPaperStore, SubmissionStore, UserStore,
    };
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    struct Fixture {
        workflow: ReviewWorkflow,
        users: Arc<UserStore>,
        conferences: Arc<ConferenceStore>,
    }

    fn config() -> Config {
        Config::for_tests("0123456789abcdef0123456789abcdef", "uploads-test")
    }

    fn fixture_with_papers(papers: Arc<dyn PaperStore>, config: Config) -> Fixture {
        let users = Arc::new(UserStore::new());
        let conferences = Arc::new(ConferenceStore::new());
        let submissions = Arc::new(SubmissionStore::new());
        let workflow = ReviewWorkflow::new(
            submissions,
            conferences.clone(),
            users.clone(),
            papers,
            config,
        );
        Fixture {
            workflow,
            users,
            conferences,
        }
    }

    fn fixture() -> Fixture {
        // Paper bytes are irrelevant to most workflow tests
        let mut papers = MockPaperStore::new();
        papers.expect_put().returning(|_, _| Ok(()));
        papers.expect_get().returning(|_| Ok(b"%PDF-1.7".to_vec()));
        fixture_with_papers(Arc::new(papers), config())
    }

    fn actor(id: Uuid, roles: &[Role]) -> CurrentUser {
        CurrentUser {
            id,
            email: format!("{id}@example.org"),
            roles: roles.iter().copied().collect(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn seed_conference(fx: &Fixture, status: ConferenceStatus) -> Uuid {
        let conference = Conference::new(
            format!("C{}", Uuid::new_v4().simple()),
            "Seeded Conference".into(),
            "Madrid".into(),
            date(2026, 10, 1),
            date(2026, 10, 4),
            date(2026, 7, 1),
            date(2026, 9, 1),
            status,
            Uuid::new_v4(),
        )
        .unwrap();
        fx.conferences.insert(conference).await.unwrap().id
    }

    async fn seed_reviewer(fx: &Fixture) -> Uuid {
        let user = User::new(
            format!("{}@reviewers.org", Uuid::new_v4().simple()),
            "A Reviewer".into(),
            "hash".into(),
            BTreeSet::from([Role::Reviewer]),
        );
        fx.users.insert(user).await.unwrap().id
    }

    fn new_submission(conference_id: Uuid) -> NewSubmission {
        NewSubmission {
            conference_id,
            title: "A Paper".into(),
            abstract_text: "About things.".into(),
            keywords: vec!["things".into()],
            authors: vec![Author {
                full_name: "First Author".into(),
                email: "first@papers.org".into(),
            }],
            file_name: "paper.pdf".into(),
            file_bytes: b"%PDF-1.7".to_vec(),
        }
    }

    #[tokio::test]
    async fn test_author_submits_to_open_conference() {
        let fx = fixture();
        let conference_id = seed_conference(&fx, ConferenceStatus::Open).await;
        let author = actor(Uuid::new_v4(), &[Role::Author]);

        let created = fx
            .workflow
            .create_submission(&author, new_submission(conference_id))
            .await
            .unwrap();

        assert_eq!(created.status, SubmissionStatus::Submitted);
        assert_eq!(created.owner_id, author.id);
        // Owner sees author emails unredacted
        assert_eq!(created.authors[0].email, "first@papers.org");
    }

    #[tokio::test]
    async fn test_closed_and_draft_conferences_refuse_submissions() {
        let fx = fixture();
        let author = actor(Uuid::new_v4(), &[Role::Author]);

        for status in [ConferenceStatus::Closed, ConferenceStatus::Draft] {
            let conference_id = seed_conference(&fx, status).await;
            let err = fx
                .workflow
                .create_submission(&author, new_submission(conference_id))
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::ConferenceClosed), "{status:?}");
        }

        // Nothing was persisted for the refused submissions
        let mine = fx.workflow.list_my_submissions(&author).await.unwrap();
        assert!(mine.is_empty());
    }

    #[tokio::test]
    async fn test_closed_conference_refusal_never_touches_the_paper_store() {
        let mut papers = MockPaperStore::new();
        papers.expect_put().never();
        let fx = fixture_with_papers(Arc::new(papers), config());

        let conference_id = seed_conference(&fx, ConferenceStatus::Closed).await;
        let author = actor(Uuid::new_v4(), &[Role::Author]);
        let err = fx
            .workflow
            .create_submission(&author, new_submission(conference_id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ConferenceClosed));
    }

    #[tokio::test]
    async fn test_non_author_cannot_submit() {
        let fx = fixture();
        let conference_id = seed_conference(&fx, ConferenceStatus::Open).await;
        let staff = actor(Uuid::new_v4(), &[Role::Chair, Role::Tpc]);

        let err = fx
            .workflow
            .create_submission(&staff, new_submission(conference_id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[tokio::test]
    async fn test_unknown_conference_is_not_found() {
        let fx = fixture();
        let author = actor(Uuid::new_v4(), &[Role::Author]);
        let err = fx
            .workflow
            .create_submission(&author, new_submission(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn test_empty_paper_file_is_invalid() {
        let fx = fixture();
        let conference_id = seed_conference(&fx, ConferenceStatus::Open).await;
        let author = actor(Uuid::new_v4(), &[Role::Author]);

        let mut input = new_submission(conference_id);
        input.file_bytes.clear();
        let err = fx
            .workflow
            .create_submission(&author, input)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_tpc_assigns_reviewers_and_submission_goes_under_review() {
        let fx = fixture();
        let conference_id = seed_conference(&fx, ConferenceStatus::Open).await;
        let author = actor(Uuid::new_v4(), &[Role::Author]);
        let tpc = actor(Uuid::new_v4(), &[Role::Tpc]);

        let created = fx
            .workflow
            .create_submission(&author, new_submission(conference_id))
            .await
            .unwrap();
        let reviewer = seed_reviewer(&fx).await;

        let updated = fx
            .workflow
            .assign_reviewers(&tpc, created.id, vec![reviewer])
            .await
            .unwrap();
        assert_eq!(updated.status, SubmissionStatus::UnderReview);
        assert_eq!(updated.reviewers, vec![reviewer]);
    }

    #[tokio::test]
    async fn test_assignment_requires_known_reviewer_accounts() {
        let fx = fixture();
        let conference_id = seed_conference(&fx, ConferenceStatus::Open).await;
        let author = actor(Uuid::new_v4(), &[Role::Author]);
        let chair = actor(Uuid::new_v4(), &[Role::Chair]);

        let created = fx
            .workflow
            .create_submission(&author, new_submission(conference_id))
            .await
            .unwrap();

        // Unknown account
        let err = fx
            .workflow
            .assign_reviewers(&chair, created.id, vec![Uuid::new_v4()])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound));

        // Known account without the REVIEWER role
        let plain = fx
            .users
            .insert(User::new(
                "plain@example.org".into(),
                "No Role".into(),
                "hash".into(),
                BTreeSet::from([Role::Author]),
            ))
            .await
            .unwrap();
        let err = fx
            .workflow
            .assign_reviewers(&chair, created.id, vec![plain.id])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));

        // Neither attempt moved the submission
        let current = fx.workflow.get_submission(&chair, created.id).await.unwrap();
        assert_eq!(current.status, SubmissionStatus::Submitted);
    }

    #[tokio::test]
    async fn test_empty_reviewer_list_is_invalid() {
        let fx = fixture();
        let chair = actor(Uuid::new_v4(), &[Role::Chair]);
        let err = fx
            .workflow
            .assign_reviewers(&chair, Uuid::new_v4(), vec![])
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_chair_decides_and_decision_is_terminal() {
        let fx = fixture();
        let conference_id = seed_conference(&fx, ConferenceStatus::Open).await;
        let author = actor(Uuid::new_v4(), &[Role::Author]);
        let chair = actor(Uuid::new_v4(), &[Role::Chair]);

        let created = fx
            .workflow
            .create_submission(&author, new_submission(conference_id))
            .await
            .unwrap();
        let reviewer = seed_reviewer(&fx).await;
        fx.workflow
            .assign_reviewers(&chair, created.id, vec![reviewer])
            .await
            .unwrap();

        let decided = fx
            .workflow
            .record_decision(
                &chair,
                created.id,
                Decision::Accepted,
                Some("camera ready due".into()),
            )
            .await
            .unwrap();
        assert_eq!(decided.status, SubmissionStatus::Decided);
        assert_eq!(decided.decision, Some(Decision::Accepted));

        // Second decision bounces, first one stands
        let err = fx
            .workflow
            .record_decision(&chair, created.id, Decision::Rejected, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidState(_)));

        let current = fx.workflow.get_submission(&chair, created.id).await.unwrap();
        assert_eq!(current.decision, Some(Decision::Accepted));
        assert_eq!(current.decision_note.as_deref(), Some("camera ready due"));
    }

    #[tokio::test]
    async fn test_deciding_a_submitted_paper_is_invalid_state() {
        let fx = fixture();
        let conference_id = seed_conference(&fx, ConferenceStatus::Open).await;
        let author = actor(Uuid::new_v4(), &[Role::Author]);
        let admin = actor(Uuid::new_v4(), &[Role::Admin]);

        let created = fx
            .workflow
            .create_submission(&author, new_submission(conference_id))
            .await
            .unwrap();
        let err = fx
            .workflow
            .record_decision(&admin, created.id, Decision::Accepted, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidState(_)));
    }

    #[tokio::test]
    async fn test_tpc_can_assign_but_not_decide() {
        let fx = fixture();
        let conference_id = seed_conference(&fx, ConferenceStatus::Open).await;
        let author = actor(Uuid::new_v4(), &[Role::Author]);
        let tpc = actor(Uuid::new_v4(), &[Role::Tpc]);

        let created = fx
            .workflow
            .create_submission(&author, new_submission(conference_id))
            .await
            .unwrap();
        let reviewer = seed_reviewer(&fx).await;
        fx.workflow
            .assign_reviewers(&tpc, created.id, vec![reviewer])
            .await
            .unwrap();

        let err = fx
            .workflow
            .record_decision(&tpc, created.id, Decision::Accepted, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[tokio::test]
    async fn test_decision_denied_regardless_of_state() {
        let fx = fixture();
        let conference_id = seed_conference(&fx, ConferenceStatus::Open).await;
        let author = actor(Uuid::new_v4(), &[Role::Author]);

        // SUBMITTED, never reviewed: authorization still checked first
        let created = fx
            .workflow
            .create_submission(&author, new_submission(conference_id))
            .await
            .unwrap();
        let err = fx
            .workflow
            .record_decision(&author, created.id, Decision::Accepted, None)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[tokio::test]
    async fn test_owner_and_staff_read_access() {
        let fx = fixture();
        let conference_id = seed_conference(&fx, ConferenceStatus::Open).await;
        let author = actor(Uuid::new_v4(), &[Role::Author]);
        let other_author = actor(Uuid::new_v4(), &[Role::Author]);
        let tpc = actor(Uuid::new_v4(), &[Role::Tpc]);

        let created = fx
            .workflow
            .create_submission(&author, new_submission(conference_id))
            .await
            .unwrap();

        assert!(fx.workflow.get_submission(&author, created.id).await.is_ok());
        assert!(fx.workflow.get_submission(&tpc, created.id).await.is_ok());
        let err = fx
            .workflow
            .get_submission(&other_author, created.id)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[tokio::test]
    async fn test_tpc_email_visibility_follows_deployment_flag() {
        let fx = fixture();
        let conference_id = seed_conference(&fx, ConferenceStatus::Open).await;
        let author = actor(Uuid::new_v4(), &[Role::Author]);
        let tpc = actor(Uuid::new_v4(), &[Role::Tpc]);

        let created = fx
            .workflow
            .create_submission(&author, new_submission(conference_id))
            .await
            .unwrap();

        // Default deployment exposes emails to TPC
        let seen = fx.workflow.get_submission(&tpc, created.id).await.unwrap();
        assert_eq!(seen.authors[0].email, "first@papers.org");

        // Restricted deployment blanks them for TPC but not for CHAIR
        let mut restricted_config = config();
        restricted_config.expose_author_emails_to_tpc = false;
        let restricted = ReviewWorkflow::new(
            fx.workflow.submissions.clone(),
            fx.workflow.conferences.clone(),
            fx.workflow.users.clone(),
            fx.workflow.papers.clone(),
            restricted_config,
        );

        let hidden = restricted.get_submission(&tpc, created.id).await.unwrap();
        assert_eq!(hidden.authors[0].email, "");

        let chair = actor(Uuid::new_v4(), &[Role::Chair]);
        let full = restricted.get_submission(&chair, created.id).await.unwrap();
        assert_eq!(full.authors[0].email, "first@papers.org");
    }

    #[tokio::test]
    async fn test_listing_by_conference_is_staff_only_and_resolves_the_conference() {
        let fx = fixture();
        let conference_id = seed_conference(&fx, ConferenceStatus::Open).await;
        let author = actor(Uuid::new_v4(), &[Role::Author]);
        let tpc = actor(Uuid::new_v4(), &[Role::Tpc]);

        fx.workflow
            .create_submission(&author, new_submission(conference_id))
            .await
            .unwrap();

        let listed = fx
            .workflow
            .list_by_conference(&tpc, conference_id)
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);

        let err = fx
            .workflow
            .list_by_conference(&author, conference_id)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden));

        let err = fx
            .workflow
            .list_by_conference(&tpc, Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn test_download_gating_matches_read_access() {
        let fx = fixture();
        let conference_id = seed_conference(&fx, ConferenceStatus::Open).await;
        let author = actor(Uuid::new_v4(), &[Role::Author]);
        let stranger = actor(Uuid::new_v4(), &[Role::Author]);

        let created = fx
            .workflow
            .create_submission(&author, new_submission(conference_id))
            .await
            .unwrap();

        let download = fx
            .workflow
            .download_paper(&author, created.id)
            .await
            .unwrap();
        assert_eq!(download.file_name, "paper.pdf");
        assert!(!download.bytes.is_empty());

        let err = fx
            .workflow
            .download_paper(&stranger, created.id)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }
}
