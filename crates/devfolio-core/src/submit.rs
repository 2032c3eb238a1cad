//! Submission payload shaping
//!
//! Runs after validation has passed and strips the draft down to what the
//! server should see. The list filters here are deliberately looser than
//! the validator: once one fully-filled project/work entry exists, extra
//! entries with only a title or only a description still ship.

use crate::draft::ProfileDraft;
use devfolio_types::Profile;

/// Shape a validated draft into the body for profile create/update calls
pub fn to_payload(draft: &ProfileDraft) -> Profile {
    let skills = draft
        .skills
        .items()
        .iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.trim().to_string())
        .collect();

    let projects = draft
        .projects
        .items()
        .iter()
        .filter(|p| !p.title.trim().is_empty() || !p.description.trim().is_empty())
        .cloned()
        .collect();

    let work = draft
        .work
        .items()
        .iter()
        .filter(|w| !w.title.trim().is_empty() || !w.description.trim().is_empty())
        .cloned()
        .collect();

    Profile {
        name: draft.name.clone(),
        email: draft.email.clone(),
        education: draft.education.clone(),
        skills,
        projects,
        work,
        links: draft.links.clone(),
    }
}
