//! Devfolio Session - persisted auth state and its lifecycle
//!
//! The store half keeps the two-key client contract (raw token + user
//! record) behind a trait so screens never touch storage directly; the
//! state half is the login/expiry machine every protected screen consults.

pub mod state;
pub mod store;

pub use state::{AuthFlow, AuthState};
pub use store::{FileSessionStore, MemorySessionStore, SessionError, SessionStore};
