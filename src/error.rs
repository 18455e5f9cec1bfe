use std::fmt;

/// A failed backend call.
///
/// Transport failures and non-2xx responses both end up here. Callers only
/// get the human-readable message; `status` is kept for diagnostics and is
/// `None` when the request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestError {
    pub status: Option<u16>,
    pub message: String,
}

impl RequestError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RequestError {}

#[derive(Debug, thiserror::Error)]
pub enum TrendRadarError {
    #[error("{0}")]
    Request(#[from] RequestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<reqwest::Error> for TrendRadarError {
    fn from(err: reqwest::Error) -> Self {
        TrendRadarError::Request(RequestError {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        })
    }
}

impl TrendRadarError {
    /// The short message shown to the user in a notification.
    pub fn user_message(&self) -> String {
        match self {
            TrendRadarError::Request(e) => e.message.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TrendRadarError>;
