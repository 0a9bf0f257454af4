//! Error types for GitHub API requests.

use thiserror::Error;

/// Errors produced by a single API request.
///
/// None of these are retried; a failed request is terminal for its key
/// and only a new key transition issues another request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The profile endpoint returned 404.
    #[error("User not found")]
    NotFound,

    /// Any other non-success status code.
    #[error("Request failed with status {status}")]
    RequestFailed { status: u16 },

    /// Connection, TLS, or body decode failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Short message shown in the view's failure state.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::NotFound => "User not found".to_string(),
            ApiError::RequestFailed { .. } => "An error occurred".to_string(),
            ApiError::Transport(err) => err.to_string(),
        }
    }
}
