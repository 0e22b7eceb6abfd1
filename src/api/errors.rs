use thiserror::Error;

/// Failures surfaced by a [`Transport`](super::Transport).
///
/// The client layer never constructs these itself; it hands back whatever the
/// transport produced.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    /// The backend answered 2xx but its envelope carried a non-success code.
    #[error("Request rejected ({code}): {message}")]
    Rejected { code: i64, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}
