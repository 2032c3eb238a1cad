//! Devfolio Types - Core types for the Devfolio client
//!
//! This crate defines the data types shared across the workspace: the
//! profile entities served by the hub API, the persisted session, and the
//! authentication wire payloads.

pub mod auth;
pub mod profile;
pub mod session;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use profile::{Profile, ProjectEntry, SocialLinks, WorkEntry};
pub use session::{AuthUser, Session};
