//! Errors surfaced by the client.

use payments_response::ResponseError;
use payments_types::{RequestError, TransportError};

/// Everything that can go wrong between building a request and reading its response.
#[derive(Debug, thiserror::Error)]
pub enum PaymentsError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Response(#[from] ResponseError),

    #[error("Invalid request: {0}")]
    Request(#[from] RequestError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl PaymentsError {
    /// The service-side error, when the service rejected the request.
    pub fn service_error(&self) -> Option<&payments_response::ServiceError> {
        match self {
            PaymentsError::Response(ResponseError::Service(e)) => Some(e),
            _ => None,
        }
    }
}

/// Configuration could not be read from the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),

    #[error("Unknown region: {0}")]
    UnknownRegion(String),
}
