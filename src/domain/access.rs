//! Role-based authorization gate.
//!
//! A single table maps each privileged action to the roles allowed to
//! perform it. The check is a pure function over the caller's role set
//! (OR semantics: any one qualifying role grants the action), which
//! keeps every service route through the same gate and makes the policy
//! trivially testable.

use std::collections::BTreeSet;

use crate::domain::user::Role;
use crate::errors::{AppError, AppResult};

/// Privileged actions guarded by the role table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SubmitPaper,
    AssignReviewers,
    RecordDecision,
    CreateUser,
    CreateConference,
    ReadAllSubmissions,
}

impl Action {
    /// Roles allowed to perform this action.
    fn allowed_roles(&self) -> &'static [Role] {
        match self {
            Action::SubmitPaper => &[Role::Author],
            Action::AssignReviewers => &[Role::Admin, Role::Chair, Role::Tpc],
            // Deliberately narrower than AssignReviewers: TPC members
            // steer reviewing but do not decide.
            Action::RecordDecision => &[Role::Admin, Role::Chair],
            Action::CreateUser => &[Role::Admin],
            Action::CreateConference => &[Role::Admin, Role::Chair],
            Action::ReadAllSubmissions => &[Role::Admin, Role::Chair, Role::Tpc],
        }
    }
}

/// True when any of the caller's roles permits the action.
pub fn permit(action: Action, roles: &BTreeSet<Role>) -> bool {
    action
        .allowed_roles()
        .iter()
        .any(|role| roles.contains(role))
}

/// Gate an action, turning a missing permit into `Forbidden`.
pub fn require(action: Action, roles: &BTreeSet<Role>) -> AppResult<()> {
    if permit(action, roles) {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}
