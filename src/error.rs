use std::sync::Arc;

use thiserror::Error;

/// Result type used throughout the SDK.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by SDK operations.
///
/// All failures of a single request (connection errors, timeouts, non-2xx statuses,
/// undecodable bodies) are passed through as the underlying [`reqwest::Error`] without
/// further classification.
#[derive(Error, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// Transport-level error, including timeouts and non-2xx responses.
    #[error(transparent)]
    // reqwest::Error is not clonable, so we're wrapping it in an Arc. Clonability lets
    // the same error value be published in a notification and returned to the caller.
    Network(Arc<reqwest::Error>),
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Error::Network(Arc::new(value))
    }
}

impl Error {
    /// Whether the failure was a request timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Network(err) => err.is_timeout(),
        }
    }

    /// The HTTP status code of the response, if the failure came from a non-2xx status.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Error::Network(err) => err.status(),
        }
    }
}
