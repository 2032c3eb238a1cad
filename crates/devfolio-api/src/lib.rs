//! Devfolio API - REST client for the profile hub
//!
//! Thin async wrapper over `reqwest`: JSON in and out, bearer token on the
//! protected endpoints, and a single status→error mapping shared by every
//! call. No retries; a failed attempt is terminal until the user retries.

pub mod error;

pub use error::{ApiError, Result};

use devfolio_types::{AuthResponse, LoginRequest, Profile, RegisterRequest};
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Fallback detail for 400 responses without a server message
const BAD_REQUEST_FALLBACK: &str = "Invalid data provided";

/// Client for the profile hub REST API
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client against a base URL such as `http://localhost:3000/api`
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| ApiError::Url(e.to_string()))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    /// Join path segments onto the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ApiError::Url("base URL cannot be a base".to_string()))?;
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    /// `POST /auth/login`
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        let url = self.endpoint(&["auth", "login"])?;
        debug!(%url, "POST login");
        let response = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(into_network)?;
        handle_response(response).await
    }

    /// `POST /auth/register`
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse> {
        let url = self.endpoint(&["auth", "register"])?;
        debug!(%url, "POST register");
        let response = self
            .http
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(into_network)?;
        handle_response(response).await
    }

    /// `GET /profiles`, every profile on the hub
    pub async fn list_profiles(&self, token: &str) -> Result<Vec<Profile>> {
        let url = self.endpoint(&["profiles"])?;
        debug!(%url, "GET profiles");
        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(into_network)?;
        handle_response(response).await
    }

    /// `GET /profiles/:email`
    pub async fn get_profile(&self, token: &str, email: &str) -> Result<Profile> {
        let url = self.endpoint(&["profiles", email])?;
        debug!(%url, "GET profile");
        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(into_network)?;
        handle_response(response).await
    }

    /// `POST /profiles/`
    pub async fn create_profile(&self, token: &str, profile: &Profile) -> Result<Profile> {
        let url = self.endpoint(&["profiles", ""])?;
        debug!(%url, "POST profile");
        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(profile)
            .send()
            .await
            .map_err(into_network)?;
        handle_response(response).await
    }

    /// `PUT /profiles/:email`; the email key itself never changes
    pub async fn update_profile(
        &self,
        token: &str,
        email: &str,
        profile: &Profile,
    ) -> Result<Profile> {
        let url = self.endpoint(&["profiles", email])?;
        debug!(%url, "PUT profile");
        let response = self
            .http
            .put(url)
            .bearer_auth(token)
            .json(profile)
            .send()
            .await
            .map_err(into_network)?;
        handle_response(response).await
    }
}

/// A send() failure means no response arrived at all
fn into_network(e: reqwest::Error) -> ApiError {
    warn!("Request failed without a response: {}", e);
    ApiError::Network {
        detail: e.to_string(),
    }
}

/// Decode a success body or map the status to the error taxonomy
///
/// The body is read as text first and decoded with `serde_json` so decode
/// failures stay distinguishable from transport failures.
async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await.map_err(into_network)?;

    if status.is_success() {
        Ok(serde_json::from_str(&body)?)
    } else {
        debug!(%status, body_len = body.len(), "API call failed");
        Err(error_for_status(status, &body))
    }
}

/// Pure status→error mapping, shared by every endpoint
fn error_for_status(status: StatusCode, body: &str) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::NOT_FOUND => ApiError::NotFound,
        StatusCode::BAD_REQUEST => ApiError::BadRequest {
            message: server_message(body)
                .unwrap_or_else(|| BAD_REQUEST_FALLBACK.to_string()),
        },
        status => ApiError::Server {
            status: status.as_u16(),
            message: server_message(body)
                .unwrap_or_else(|| format!("Server error: {}", status.as_u16())),
        },
    }
}

/// Pull the `message` (or `error`) field out of an error body
fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(|m| m.as_str())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_and_encodes() {
        let client = ApiClient::new("http://localhost:3000/api").unwrap();

        let url = client.endpoint(&["auth", "login"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/auth/login");

        let url = client.endpoint(&["profiles", "ada@example.com"]).unwrap();
        assert_eq!(url.path(), "/api/profiles/ada@example.com");

        // Separators inside a segment must not split the path
        let url = client.endpoint(&["profiles", "a/b"]).unwrap();
        assert_eq!(url.path(), "/api/profiles/a%2Fb");
    }

    #[test]
    fn test_endpoint_trailing_slash_for_create() {
        let client = ApiClient::new("http://localhost:3000/api").unwrap();
        let url = client.endpoint(&["profiles", ""]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/profiles/");
    }

    #[test]
    fn test_bad_base_url_rejected() {
        assert!(matches!(ApiClient::new("not a url"), Err(ApiError::Url(_))));
    }

    #[test]
    fn test_401_maps_to_unauthorized() {
        let err = error_for_status(StatusCode::UNAUTHORIZED, "");
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Session expired. Please login again.");
    }

    #[test]
    fn test_404_maps_to_not_found() {
        let err = error_for_status(StatusCode::NOT_FOUND, "{}");
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Profile not found. Please create your profile first."
        );
    }

    #[test]
    fn test_400_uses_server_message() {
        let err = error_for_status(
            StatusCode::BAD_REQUEST,
            r#"{"message": "email already registered"}"#,
        );
        assert_eq!(err.to_string(), "email already registered");

        let err = error_for_status(StatusCode::BAD_REQUEST, r#"{"error": "bad email"}"#);
        assert_eq!(err.to_string(), "bad email");
    }

    #[test]
    fn test_400_without_message_uses_fallback() {
        let err = error_for_status(StatusCode::BAD_REQUEST, "not json at all");
        assert_eq!(err.to_string(), BAD_REQUEST_FALLBACK);
    }

    #[test]
    fn test_5xx_falls_back_to_status_message() {
        let err = error_for_status(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(err.to_string(), "Server error: 500");

        let err = error_for_status(
            StatusCode::SERVICE_UNAVAILABLE,
            r#"{"message": "maintenance window"}"#,
        );
        assert_eq!(err.to_string(), "maintenance window");
    }

    #[test]
    fn test_network_message_is_distinct_from_server_errors() {
        let network = ApiError::Network {
            detail: "connection refused".to_string(),
        };
        let server = error_for_status(StatusCode::INTERNAL_SERVER_ERROR, "");
        let bad_request = error_for_status(StatusCode::BAD_REQUEST, "");

        assert_eq!(
            network.to_string(),
            "Network error. Please check your connection."
        );
        assert_ne!(network.to_string(), server.to_string());
        assert_ne!(network.to_string(), bad_request.to_string());
    }

    #[test]
    fn test_server_message_extraction() {
        assert_eq!(
            server_message(r#"{"message": "nope"}"#),
            Some("nope".to_string())
        );
        assert_eq!(
            server_message(r#"{"error": "still nope"}"#),
            Some("still nope".to_string())
        );
        assert_eq!(server_message(r#"{"message": 42}"#), None);
        assert_eq!(server_message("plain text"), None);
    }
}
