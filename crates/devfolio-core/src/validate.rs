//! Submission-boundary validation
//!
//! Rules run in a fixed order and only the first failure is surfaced; the
//! form shows one banner at a time, not an aggregate.

use crate::draft::ProfileDraft;
use thiserror::Error;

/// First failing rule for a draft, with the message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill all required fields (Name, Email, Education)")]
    MissingRequiredFields,

    #[error("Please add at least one skill")]
    NoSkills,

    #[error("Please add at least one project with title and description")]
    NoCompleteProject,

    #[error("Please add at least one work experience with title and description")]
    NoCompleteWork,
}

/// Check a draft against the submission invariants
///
/// Order is significant: required scalars, then skills, then projects, then
/// work. Note the project/work rule here demands BOTH title and description
/// non-blank, which is stricter than the submission filter in
/// [`crate::submit`]: validation gates, the filter only trims.
pub fn validate(draft: &ProfileDraft) -> Result<(), ValidationError> {
    if draft.name.trim().is_empty()
        || draft.email.trim().is_empty()
        || draft.education.trim().is_empty()
    {
        return Err(ValidationError::MissingRequiredFields);
    }

    if !draft.skills.items().iter().any(|s| !s.trim().is_empty()) {
        return Err(ValidationError::NoSkills);
    }

    if !draft
        .projects
        .items()
        .iter()
        .any(|p| !p.title.trim().is_empty() && !p.description.trim().is_empty())
    {
        return Err(ValidationError::NoCompleteProject);
    }

    if !draft
        .work
        .items()
        .iter()
        .any(|w| !w.title.trim().is_empty() && !w.description.trim().is_empty())
    {
        return Err(ValidationError::NoCompleteWork);
    }

    Ok(())
}
