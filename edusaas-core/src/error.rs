//! Error types for the edusaas-core library

use thiserror::Error;

/// Why the course preview request produced no data.
///
/// Every variant is handled the same way: the preview settles with an empty
/// list. The variants only exist so the log line says what went wrong.
#[derive(Error, Debug)]
pub enum PreviewFetchFailure {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for preview fetches
pub type Result<T> = std::result::Result<T, PreviewFetchFailure>;

impl PartialEq for PreviewFetchFailure {
    fn eq(&self, other: &Self) -> bool {
        match self {
            PreviewFetchFailure::Transport(err) => {
                matches!(other, PreviewFetchFailure::Transport(e) if err.to_string() == e.to_string())
            }
            PreviewFetchFailure::Status(code) => {
                matches!(other, PreviewFetchFailure::Status(o) if code == o)
            }
            PreviewFetchFailure::Decode(err) => {
                matches!(other, PreviewFetchFailure::Decode(e) if err.to_string() == e.to_string())
            }
        }
    }
}

/// A rejected `BACKEND_URL` value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Backend URL is empty")]
    Empty,

    #[error("Backend URL {0:?} is not a valid absolute URL")]
    Invalid(String),

    #[error("Backend URL {url:?} uses unsupported scheme {scheme:?}")]
    UnsupportedScheme { url: String, scheme: String },
}
