use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity returned by the auth endpoints and persisted alongside the token
///
/// The server guarantees the email; the display name is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl AuthUser {
    pub fn new(email: impl Into<String>, name: Option<String>) -> Self {
        Self {
            email: email.into(),
            name,
        }
    }

    /// Name to greet the user with, falling back to the email
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }

    /// Parse the persisted user object
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

/// An authenticated session
///
/// The token is opaque and assumed valid until the API rejects it. The user
/// half may be absent: a stored token without a readable user record is
/// still a session, screens that need the email handle the gap themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: Option<AuthUser>,
    pub issued_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: impl Into<String>, user: Option<AuthUser>) -> Self {
        Self {
            token: token.into(),
            user,
            issued_at: Utc::now(),
        }
    }

    /// Email of the session owner, if the user half is present
    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }
}
