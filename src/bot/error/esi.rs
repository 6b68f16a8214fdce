//! ESI client errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the ESI client.
///
/// Every ESI call that does not end in a `200 OK` with a decodable body surfaces as one of
/// these. The client never retries, so the caller sees the first failure.
#[derive(Error, Debug)]
pub enum EsiError {
    /// ESI answered with a status other than `200 OK`.
    #[error("ESI returned {status} for {endpoint}")]
    Status {
        /// Status code returned by ESI.
        status: StatusCode,
        /// Method and path of the failed request.
        endpoint: String,
    },
    /// The request could not be sent or the response could not be read.
    #[error("ESI request to {endpoint} failed: {source}")]
    Request {
        /// Method and path of the failed request.
        endpoint: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },
    /// ESI answered `200 OK` with a body that does not match the expected model.
    #[error("Failed to decode ESI response from {endpoint}: {source}")]
    Decode {
        /// Method and path of the request.
        endpoint: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// `/universe/names/` did not return a name for the requested ID.
    #[error("ESI returned no name for ID {0}")]
    NameNotFound(i64),
    /// `/universe/ids/` did not return a solar system for the requested name.
    #[error("ESI returned no solar system named {0:?}")]
    IdNotFound(String),
    /// The ESI client was built without a user agent.
    #[error("ESI client requires a user agent identifying the application to CCP")]
    MissingUserAgent,
    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build ESI HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

impl EsiError {
    /// HTTP status associated with the error, if ESI produced one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Request { source, .. } => source.status(),
            _ => None,
        }
    }
}
