//! HTTP clients for the two remote services.
//!
//! - [`PocketClient`] reads the unread queue.
//! - [`TodoistClient`] files reading tasks.
//!
//! Both map non-success statuses onto [`ClientError`] the same way. Nothing
//! is retried.

mod pocket;
mod todoist;

pub use pocket::*;
pub use todoist::*;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: credentials missing or invalid")]
    Unauthorized,

    #[error("Server error: {0}")]
    Server(String),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Handle response, converting HTTP errors to ClientError.
async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Malformed(e.to_string()))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(body),
            StatusCode::BAD_REQUEST => ClientError::BadRequest(body),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ClientError::Unauthorized,
            _ => ClientError::Server(format!("{}: {}", status, body)),
        })
    }
}
