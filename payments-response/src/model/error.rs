//! The generic error body returned with non-2xx statuses.

use serde::Deserialize;

/// `<ErrorResponse>` as sent by the service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "Error")]
    pub error: Option<ErrorDetail>,
    #[serde(rename = "RequestID", alias = "RequestId")]
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorDetail {
    #[serde(rename = "Type")]
    pub error_type: Option<String>,
    pub code: Option<String>,
    pub message: Option<String>,
}
