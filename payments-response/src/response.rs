//! Per-operation response envelopes.
//!
//! Each success body has the shape
//!
//! ```xml
//! <OperationResponse xmlns="...">
//!   <OperationResult>...</OperationResult>
//!   <ResponseMetadata><RequestId>...</RequestId></ResponseMetadata>
//! </OperationResponse>
//! ```
//!
//! and is modelled by one envelope type named after its root element.

use chrono::{DateTime, Utc};
use payments_types::{AccountStatus, RequestStatus, ServiceStatus};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::model::{
    AuthorizationDetails, BillingAgreementDetails, BillingAgreementStatus, CaptureDetails,
    ErrorResponse, OrderReferenceDetails, OrderReferenceList, ProviderCreditDetails,
    ProviderCreditReversalDetails, RefundDetails,
};

/// A response body the parser knows how to read.
pub trait ResponseSchema: DeserializeOwned {
    /// Local name of the expected document element.
    const ROOT: &'static str;

    /// Correlation id the service attached to the response.
    fn request_id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseMetadata {
    pub request_id: String,
}

macro_rules! response {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Deserialize)]
        pub struct $name {
            #[serde(rename = "ResponseMetadata")]
            pub metadata: ResponseMetadata,
        }

        impl ResponseSchema for $name {
            const ROOT: &'static str = stringify!($name);

            fn request_id(&self) -> &str {
                &self.metadata.request_id
            }
        }
    };
    ($(#[$meta:meta])* $name:ident { $tag:literal => $result:ty }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Deserialize)]
        pub struct $name {
            #[serde(rename = $tag)]
            pub result: $result,
            #[serde(rename = "ResponseMetadata")]
            pub metadata: ResponseMetadata,
        }

        impl ResponseSchema for $name {
            const ROOT: &'static str = stringify!($name);

            fn request_id(&self) -> &str {
                &self.metadata.request_id
            }
        }
    };
}

/// Adds `details`/`into_details` for envelopes whose result wraps one detail object.
macro_rules! details {
    ($($name:ident . $field:ident : $details:ty),+ $(,)?) => {
        $(
            impl $name {
                pub fn details(&self) -> &$details {
                    &self.result.$field
                }

                pub fn into_details(self) -> $details {
                    self.result.$field
                }
            }
        )+
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// Result payloads
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderReferenceResult {
    pub order_reference_details: OrderReferenceDetails,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListOrderReferenceResult {
    #[serde(default)]
    pub order_reference_list: OrderReferenceList,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthorizationResult {
    pub authorization_details: AuthorizationDetails,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CaptureResult {
    pub capture_details: CaptureDetails,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RefundResult {
    pub refund_details: RefundDetails,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BillingAgreementResult {
    pub billing_agreement_details: BillingAgreementDetails,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidateBillingAgreementResult {
    pub validation_result: RequestStatus,
    pub failure_reason_code: Option<String>,
    pub billing_agreement_status: BillingAgreementStatus,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthorizeOnBillingAgreementResult {
    pub authorization_details: AuthorizationDetails,
    pub amazon_order_reference_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProviderCreditResult {
    pub provider_credit_details: ProviderCreditDetails,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProviderCreditReversalResult {
    pub provider_credit_reversal_details: ProviderCreditReversalDetails,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceStatusMessage {
    pub locale: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceStatusMessages {
    #[serde(rename = "Message", default)]
    pub message: Vec<ServiceStatusMessage>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceStatusResult {
    pub status: ServiceStatus,
    pub timestamp: Option<DateTime<Utc>>,
    pub message_id: Option<String>,
    pub messages: Option<ServiceStatusMessages>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MerchantAccountStatusResult {
    pub account_status: AccountStatus,
}

// ─────────────────────────────────────────────────────────────────────────────
// Order reference
// ─────────────────────────────────────────────────────────────────────────────

response!(GetOrderReferenceDetailsResponse { "GetOrderReferenceDetailsResult" => OrderReferenceResult });
response!(SetOrderReferenceDetailsResponse { "SetOrderReferenceDetailsResult" => OrderReferenceResult });
response!(SetOrderAttributesResponse { "SetOrderAttributesResult" => OrderReferenceResult });
response!(CreateOrderReferenceForIdResponse { "CreateOrderReferenceForIdResult" => OrderReferenceResult });
response!(ConfirmOrderReferenceResponse);
response!(CancelOrderReferenceResponse);
response!(CloseOrderReferenceResponse);
response!(ListOrderReferenceResponse { "ListOrderReferenceResult" => ListOrderReferenceResult });
response!(
    ListOrderReferenceByNextTokenResponse {
        "ListOrderReferenceByNextTokenResult" => ListOrderReferenceResult
    }
);

details!(
    GetOrderReferenceDetailsResponse.order_reference_details: OrderReferenceDetails,
    SetOrderReferenceDetailsResponse.order_reference_details: OrderReferenceDetails,
    SetOrderAttributesResponse.order_reference_details: OrderReferenceDetails,
    CreateOrderReferenceForIdResponse.order_reference_details: OrderReferenceDetails,
);

// ─────────────────────────────────────────────────────────────────────────────
// Authorization, capture, refund
// ─────────────────────────────────────────────────────────────────────────────

response!(AuthorizeResponse { "AuthorizeResult" => AuthorizationResult });
response!(GetAuthorizationDetailsResponse { "GetAuthorizationDetailsResult" => AuthorizationResult });
response!(CloseAuthorizationResponse);
response!(CaptureResponse { "CaptureResult" => CaptureResult });
response!(GetCaptureDetailsResponse { "GetCaptureDetailsResult" => CaptureResult });
response!(RefundResponse { "RefundResult" => RefundResult });
response!(GetRefundDetailsResponse { "GetRefundDetailsResult" => RefundResult });

details!(
    AuthorizeResponse.authorization_details: AuthorizationDetails,
    GetAuthorizationDetailsResponse.authorization_details: AuthorizationDetails,
    CaptureResponse.capture_details: CaptureDetails,
    GetCaptureDetailsResponse.capture_details: CaptureDetails,
    RefundResponse.refund_details: RefundDetails,
    GetRefundDetailsResponse.refund_details: RefundDetails,
);

// ─────────────────────────────────────────────────────────────────────────────
// Billing agreement
// ─────────────────────────────────────────────────────────────────────────────

response!(
    GetBillingAgreementDetailsResponse {
        "GetBillingAgreementDetailsResult" => BillingAgreementResult
    }
);
response!(
    SetBillingAgreementDetailsResponse {
        "SetBillingAgreementDetailsResult" => BillingAgreementResult
    }
);
response!(ConfirmBillingAgreementResponse);
response!(
    ValidateBillingAgreementResponse {
        "ValidateBillingAgreementResult" => ValidateBillingAgreementResult
    }
);
response!(
    AuthorizeOnBillingAgreementResponse {
        "AuthorizeOnBillingAgreementResult" => AuthorizeOnBillingAgreementResult
    }
);
response!(CloseBillingAgreementResponse);

details!(
    GetBillingAgreementDetailsResponse.billing_agreement_details: BillingAgreementDetails,
    SetBillingAgreementDetailsResponse.billing_agreement_details: BillingAgreementDetails,
    AuthorizeOnBillingAgreementResponse.authorization_details: AuthorizationDetails,
);

// ─────────────────────────────────────────────────────────────────────────────
// Provider credit
// ─────────────────────────────────────────────────────────────────────────────

response!(
    GetProviderCreditDetailsResponse {
        "GetProviderCreditDetailsResult" => ProviderCreditResult
    }
);
response!(
    GetProviderCreditReversalDetailsResponse {
        "GetProviderCreditReversalDetailsResult" => ProviderCreditReversalResult
    }
);
response!(
    ReverseProviderCreditResponse {
        "ReverseProviderCreditResult" => ProviderCreditReversalResult
    }
);

details!(
    GetProviderCreditDetailsResponse.provider_credit_details: ProviderCreditDetails,
    GetProviderCreditReversalDetailsResponse.provider_credit_reversal_details: ProviderCreditReversalDetails,
    ReverseProviderCreditResponse.provider_credit_reversal_details: ProviderCreditReversalDetails,
);

// ─────────────────────────────────────────────────────────────────────────────
// Status
// ─────────────────────────────────────────────────────────────────────────────

response!(GetServiceStatusResponse { "GetServiceStatusResult" => ServiceStatusResult });
response!(
    GetMerchantAccountStatusResponse {
        "GetMerchantAccountStatusResult" => MerchantAccountStatusResult
    }
);

impl GetServiceStatusResponse {
    pub fn status(&self) -> ServiceStatus {
        self.result.status
    }
}

impl GetMerchantAccountStatusResponse {
    pub fn account_status(&self) -> AccountStatus {
        self.result.account_status
    }
}

impl ListOrderReferenceResult {
    pub fn order_references(&self) -> &[crate::model::OrderReference] {
        &self.order_reference_list.order_reference
    }
}

impl ResponseSchema for ErrorResponse {
    const ROOT: &'static str = "ErrorResponse";

    fn request_id(&self) -> &str {
        self.request_id.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roots_follow_type_names() {
        assert_eq!(AuthorizeResponse::ROOT, "AuthorizeResponse");
        assert_eq!(
            ListOrderReferenceByNextTokenResponse::ROOT,
            "ListOrderReferenceByNextTokenResponse"
        );
        assert_eq!(ErrorResponse::ROOT, "ErrorResponse");
    }

    #[test]
    fn test_metadata_only_envelope() {
        let xml = "<CloseAuthorizationResponse><ResponseMetadata>\
                   <RequestId>b4ab4bc3-c9ea-44f0-9a3d-67cccef565c6</RequestId>\
                   </ResponseMetadata></CloseAuthorizationResponse>";
        let response: CloseAuthorizationResponse = quick_xml::de::from_str(xml).unwrap();
        assert_eq!(response.request_id(), "b4ab4bc3-c9ea-44f0-9a3d-67cccef565c6");
    }
}
