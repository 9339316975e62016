use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The round-trip did not complete within the configured budget.
    #[error("Strategy service timeout after {0:?}")]
    Timeout(Duration),

    /// The request could not be delivered or the service answered with a non-success
    /// status. Carries the raw diagnostic text.
    #[error("{0}")]
    Transport(String),

    #[error("JSON decode error: {0}")]
    MalformedResponse(String),

    #[error("Failed to build the HTTP client: {0}")]
    ClientBuild(String),
}
