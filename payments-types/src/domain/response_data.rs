//! Raw outcome of one HTTP round trip.

/// Status code and complete body handed over by the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseData {
    status_code: u16,
    body: String,
}

impl ResponseData {
    /// Wraps a status code and a fully read body.
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Returns the body exactly as received.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// True for the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
