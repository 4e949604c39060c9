// Error types for ghprofile.
// Every failure talking to GitHub or reading config funnels through GhError.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GhError {
    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, GhError>;
