//! Devfolio Core - profile form model, validation, and dashboard views
//!
//! Everything in this crate is pure in-memory state: the draft a profile
//! form edits, the rules that gate submission, the filter that shapes the
//! submission payload, and the aggregations the dashboard derives from the
//! fetched profile list. No I/O happens here.

pub mod auth;
pub mod dashboard;
pub mod draft;
pub mod submit;
pub mod validate;

pub use auth::{validate_auth_form, AuthForm, AuthFormError, AuthMode};
pub use dashboard::{search_by_skill, top_skills, SkillCount, SkillMatch};
pub use draft::{ListField, ProfileDraft};
pub use submit::to_payload;
pub use validate::{validate, ValidationError};
