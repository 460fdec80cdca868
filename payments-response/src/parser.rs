//! Turns a status code and raw body into a typed response or a typed error.

use std::ops::Deref;

use payments_types::ResponseData;

use crate::error::{ClientError, ResponseError, ServiceError};
use crate::model::ErrorResponse;
use crate::response::ResponseSchema;
use crate::xml::{XmlDocument, strip_bom};

/// A successfully parsed response together with the document it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResponse<T> {
    body: T,
    document: XmlDocument,
    xml: String,
    status_code: u16,
}

impl<T: ResponseSchema> ParsedResponse<T> {
    pub fn request_id(&self) -> &str {
        self.body.request_id()
    }
}

impl<T> ParsedResponse<T> {
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The body this response was parsed from, byte for byte.
    pub fn to_xml(&self) -> &str {
        &self.xml
    }

    pub fn document(&self) -> &XmlDocument {
        &self.document
    }

    pub fn into_inner(self) -> T {
        self.body
    }
}

impl<T> Deref for ParsedResponse<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.body
    }
}

/// Parses `response` as the success body of the operation whose envelope is `T`.
///
/// Non-2xx statuses never reach `T`: the body is read as an `ErrorResponse`
/// and returned as [`ResponseError::Service`]. Anything that cannot be read
/// is returned as [`ResponseError::Client`] carrying the original status and
/// body, including a well-formed 2xx body that belongs to a different
/// operation. A body that reads cleanly is accepted even when the document
/// renders back with cosmetic differences; `to_xml` always returns the source.
pub fn parse<T: ResponseSchema>(response: &ResponseData) -> Result<ParsedResponse<T>, ResponseError> {
    if !response.is_success() {
        return Err(parse_error(response));
    }

    let status_code = response.status_code();
    let raw = response.body();

    let document = XmlDocument::parse(raw).map_err(|e| client_error(response, e.to_string()))?;
    match document.root_name() {
        Some(root) if root == T::ROOT => {}
        other => {
            let message = format!(
                "expected <{}> but found <{}>",
                T::ROOT,
                other.unwrap_or_default()
            );
            return Err(client_error(response, message));
        }
    }

    let body: T = quick_xml::de::from_str(strip_bom(raw))
        .map_err(|e| client_error(response, format!("{} does not match schema: {e}", T::ROOT)))?;

    match document.render() {
        Ok(rendered) if rendered == raw => {}
        Ok(_) => tracing::debug!(root = T::ROOT, "Rendered document differs from its source"),
        Err(e) => tracing::debug!(root = T::ROOT, error = %e, "Could not render document"),
    }
    let xml = raw.to_string();

    tracing::debug!(
        root = T::ROOT,
        status_code,
        request_id = body.request_id(),
        "Parsed response"
    );

    Ok(ParsedResponse {
        body,
        document,
        xml,
        status_code,
    })
}

/// Builds the error for a non-2xx response.
fn parse_error(response: &ResponseData) -> ResponseError {
    let raw = response.body();
    let parsed = XmlDocument::parse(raw)
        .map_err(|e| e.to_string())
        .and_then(|document| match document.root_name() {
            Some(root) if root == ErrorResponse::ROOT => Ok(()),
            other => Err(format!(
                "expected <{}> but found <{}>",
                ErrorResponse::ROOT,
                other.unwrap_or_default()
            )),
        })
        .and_then(|()| {
            quick_xml::de::from_str::<ErrorResponse>(strip_bom(raw)).map_err(|e| e.to_string())
        });

    let error_response = match parsed {
        Ok(error_response) => error_response,
        Err(reason) => {
            return client_error(response, format!("unreadable error body: {reason}"));
        }
    };

    let (error_code, error_type, error_message) = match error_response.error {
        Some(detail) => (detail.code, detail.error_type, detail.message),
        None => (None, None, None),
    };

    tracing::warn!(
        status_code = response.status_code(),
        error_code = error_code.as_deref().unwrap_or_default(),
        error_type = error_type.as_deref().unwrap_or_default(),
        "Service returned an error response"
    );

    ServiceError::new(
        response.status_code(),
        raw,
        error_code,
        error_type,
        error_response.request_id,
        error_message,
    )
    .into()
}

fn client_error(response: &ResponseData, message: String) -> ResponseError {
    tracing::warn!(
        status_code = response.status_code(),
        reason = %message,
        "Could not interpret response"
    );
    ClientError::new(response.status_code(), response.body(), message).into()
}
