//! API utilities for frontend-backend communication
//!
//! Provides the base URL helper, the typed API error, and the shared
//! response check applied to every call.

use gloo_net::http::Response;
use thiserror::Error;

use crate::system::auth::storage;

/// Failure modes of the I/O layer. The pure transforms never produce these;
/// absence of data is handled by defaulting, not by errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// HTTP 401. The stored token has already been cleared when this is
    /// returned; the caller resets the auth state so the login surface
    /// reappears.
    #[error("Session expired. Please log in again.")]
    Unauthorized,
    #[error("Request failed: HTTP {status}")]
    Http { status: u16, message: String },
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Authorization header value for a bearer token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Map a non-success response to the error taxonomy. A 401 clears the
/// stored session token before surfacing, so a retried operation goes
/// through a fresh login.
pub async fn check(response: Response) -> Result<Response, ApiError> {
    if response.status() == 401 {
        storage::clear_token();
        return Err(ApiError::Unauthorized);
    }
    if !response.ok() {
        let message = response.text().await.unwrap_or_default();
        return Err(ApiError::Http {
            status: response.status(),
            message,
        });
    }
    Ok(response)
}
