use reqwest::StatusCode;
use thiserror::Error;

/// Failures surfaced by a single upstream enrichment call.
#[derive(Debug, Error)]
pub enum EnrichError {
    /// The upstream answered with a non-success HTTP status.
    #[error("upstream returned {status}")]
    UpstreamStatus { status: StatusCode },

    /// The upstream could not be reached (DNS, TCP, TLS) or the call exceeded
    /// its total timeout.
    #[error("failed to reach upstream: {0}")]
    Connection(#[source] reqwest::Error),

    /// The upstream answered 2xx but the body is missing a required field or
    /// is not valid JSON of the expected shape.
    #[error("invalid upstream response: {0}")]
    InvalidResponse(#[source] serde_json::Error),

    /// Any other client-layer failure.
    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),
}

impl EnrichError {
    /// Connect-level failures and timeouts are reachability problems;
    /// everything else reqwest reports is classified as transport noise.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::Connection(err)
        } else {
            Self::Transport(err)
        }
    }
}
