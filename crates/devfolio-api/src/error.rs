//! Error types for hub API operations
//!
//! Every failure surfaces as exactly one of these, so screens can render
//! one banner per error without inspecting transport details. The
//! connectivity message is deliberately distinct from every server-derived
//! message.

use thiserror::Error;

/// Hub API errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401: the token was rejected, the session must be torn down
    #[error("Session expired. Please login again.")]
    Unauthorized,

    /// 404 on a profile fetch
    #[error("Profile not found. Please create your profile first.")]
    NotFound,

    /// 400 with whatever detail the server provided
    #[error("{message}")]
    BadRequest {
        /// Server-provided message or a generic fallback
        message: String,
    },

    /// Any other non-success status
    #[error("{message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Server-provided message or a generic fallback
        message: String,
    },

    /// The request never produced a response
    #[error("Network error. Please check your connection.")]
    Network {
        /// Transport-level detail, kept for logs only
        detail: String,
    },

    /// A response arrived but was not the JSON we expected
    #[error("Invalid response from server: {0}")]
    Decode(#[from] serde_json::Error),

    /// Base URL or endpoint path could not be built
    #[error("Invalid API URL: {0}")]
    Url(String),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// True when the session must be cleared and the user sent back to auth
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// True when the missing profile should offer a create affordance
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }
}
