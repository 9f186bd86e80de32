//! Fetch error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Failure reported by a [`Fetcher`](super::Fetcher).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Fetch error: {} at {}:{}", message, file, line)]
pub struct FetchError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl FetchError {
    /// Creates a new fetch error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        Self::new(format!("HTTP error: {}", err))
    }
}
