use thiserror::Error;

/// Everything a single poll iteration can fail with.
///
/// These never terminate the process: the loop turns each of them into a
/// diagnostic chat message and keeps going. Only configuration problems
/// (see [`crate::config::ConfigError`]) abort startup.
#[derive(Debug, Error)]
pub enum PollError {
    /// The review API could not be reached at the transport level.
    #[error("endpoint {endpoint} is unreachable: {source}")]
    Fetch {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The review API answered, but not with the success status code.
    #[error("endpoint {endpoint} answered with status {status}{detail}")]
    BadStatus {
        endpoint: String,
        status: reqwest::StatusCode,
        /// `error`/`code` fields from the response body, pre-formatted.
        detail: String,
    },

    /// The response body does not have the expected shape.
    #[error("API response is missing expected keys: {0}")]
    Schema(String),

    /// A homework carries a status outside the documented set.
    #[error("unrecognized homework status {0:?}")]
    UnknownStatus(String),
}
