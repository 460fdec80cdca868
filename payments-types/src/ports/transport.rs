//! Transport port.
//!
//! This trait is the seam between request building and the network.
//! Implementations can be HTTP clients, signing wrappers, recorded fixtures, etc.

use crate::domain::ResponseData;
use crate::request::Params;

/// Error type for transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Port trait for sending a flattened request to the payments service.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Sends `params` for the named action.
    ///
    /// Any HTTP status is a successful send; only failures to obtain a
    /// response at all are errors.
    async fn send(&self, action: &str, params: Params) -> Result<ResponseData, TransportError>;
}
