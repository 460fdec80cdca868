//! Errors raised while interpreting a response.
//!
//! Both kinds carry the HTTP status and the raw body verbatim so a caller
//! can log or replay the exchange without fetching it again.

/// The response could not be interpreted at all.
///
/// Raised for malformed XML, for a body that does not match the schema of
/// the operation that was called, and for a non-2xx body that is not a
/// valid `ErrorResponse`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unable to interpret response (status {status_code}): {message}")]
pub struct ClientError {
    status_code: u16,
    response_xml: String,
    message: String,
}

impl ClientError {
    pub(crate) fn new(status_code: u16, response_xml: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status_code,
            response_xml: response_xml.into(),
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The raw body exactly as received.
    pub fn response_xml(&self) -> &str {
        &self.response_xml
    }

    /// Why interpretation failed.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The service rejected the request with a structured `ErrorResponse`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Service error (status {status_code}): {} {}",
    .error_code.as_deref().unwrap_or("<no code>"),
    .error_message.as_deref().unwrap_or("")
)]
pub struct ServiceError {
    status_code: u16,
    response_xml: String,
    error_code: Option<String>,
    error_type: Option<String>,
    request_id: Option<String>,
    error_message: Option<String>,
}

impl ServiceError {
    pub(crate) fn new(
        status_code: u16,
        response_xml: impl Into<String>,
        error_code: Option<String>,
        error_type: Option<String>,
        request_id: Option<String>,
        error_message: Option<String>,
    ) -> Self {
        Self {
            status_code,
            response_xml: response_xml.into(),
            error_code,
            error_type,
            request_id,
            error_message,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn response_xml(&self) -> &str {
        &self.response_xml
    }

    /// Machine-readable code, e.g. `OrderReferenceNotModifiable`.
    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    /// `Sender` or `Receiver`.
    pub fn error_type(&self) -> Option<&str> {
        self.error_type.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

/// Any failure produced by the response parser.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl ResponseError {
    pub fn status_code(&self) -> u16 {
        match self {
            ResponseError::Client(e) => e.status_code(),
            ResponseError::Service(e) => e.status_code(),
        }
    }

    pub fn response_xml(&self) -> &str {
        match self {
            ResponseError::Client(e) => e.response_xml(),
            ResponseError::Service(e) => e.response_xml(),
        }
    }

    /// True when the service itself reported the failure.
    pub fn is_service_error(&self) -> bool {
        matches!(self, ResponseError::Service(_))
    }
}
