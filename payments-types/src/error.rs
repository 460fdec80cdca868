//! Error types raised while building requests.

/// Construction errors for request builders.
///
/// Raised when the object is built, never deferred to send time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("Required field is missing or empty: {0}")]
    MissingField(&'static str),

    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    #[error("Reference id is neither an order reference nor a billing agreement: {0}")]
    UnknownReferenceId(String),
}

/// Ensures a required string argument is present and non-empty.
pub(crate) fn required(field: &'static str, value: impl Into<String>) -> Result<String, RequestError> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(RequestError::MissingField(field));
    }
    Ok(value)
}
