//! Integration tests for status-driven dispatch, the error taxonomy and
//! lossless rendering.

use payments_response::response::{
    AuthorizeOnBillingAgreementResponse, AuthorizeResponse, CaptureResponse,
    CloseAuthorizationResponse, ConfirmOrderReferenceResponse,
    CreateOrderReferenceForIdResponse, GetAuthorizationDetailsResponse,
    GetBillingAgreementDetailsResponse, GetCaptureDetailsResponse,
    GetMerchantAccountStatusResponse, GetOrderReferenceDetailsResponse,
    GetProviderCreditDetailsResponse, GetProviderCreditReversalDetailsResponse,
    GetRefundDetailsResponse, GetServiceStatusResponse, ListOrderReferenceByNextTokenResponse,
    ListOrderReferenceResponse, RefundResponse, ReverseProviderCreditResponse,
    SetOrderAttributesResponse, SetOrderReferenceDetailsResponse,
    ValidateBillingAgreementResponse,
};
use payments_response::{ResponseError, ResponseSchema, parse};
use payments_types::ResponseData;

/// Routes parser logs to the test output. Safe to call from every test.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("payments_response=debug")
        .with_test_writer()
        .try_init();
}

/// Helper to parse a fixture body with the given status.
fn parse_fixture<T: ResponseSchema>(status: u16, body: &str) -> Result<payments_response::ParsedResponse<T>, ResponseError> {
    parse::<T>(&ResponseData::new(status, body))
}

/// Helper asserting that a fixture parses and renders back to itself.
fn assert_round_trip<T: ResponseSchema>(body: &str) {
    let parsed = parse_fixture::<T>(200, body).unwrap();
    assert_eq!(parsed.to_xml(), body);
    assert_eq!(parsed.document().render().unwrap(), body);
    assert_eq!(parsed.status_code(), 200);
}

#[test]
fn test_every_operation_round_trips() {
    assert_round_trip::<GetOrderReferenceDetailsResponse>(include_str!("fixtures/get_order_reference_details.xml"));
    assert_round_trip::<SetOrderReferenceDetailsResponse>(include_str!("fixtures/set_order_reference_details.xml"));
    assert_round_trip::<SetOrderAttributesResponse>(include_str!("fixtures/set_order_attributes.xml"));
    assert_round_trip::<CreateOrderReferenceForIdResponse>(include_str!("fixtures/create_order_reference_for_id.xml"));
    assert_round_trip::<ConfirmOrderReferenceResponse>(include_str!("fixtures/confirm_order_reference.xml"));
    assert_round_trip::<ListOrderReferenceResponse>(include_str!("fixtures/list_order_reference.xml"));
    assert_round_trip::<ListOrderReferenceByNextTokenResponse>(include_str!("fixtures/list_order_reference_by_next_token.xml"));
    assert_round_trip::<AuthorizeResponse>(include_str!("fixtures/authorize.xml"));
    assert_round_trip::<GetAuthorizationDetailsResponse>(include_str!("fixtures/get_authorization_details.xml"));
    assert_round_trip::<CloseAuthorizationResponse>(include_str!("fixtures/close_authorization.xml"));
    assert_round_trip::<CaptureResponse>(include_str!("fixtures/capture.xml"));
    assert_round_trip::<GetCaptureDetailsResponse>(include_str!("fixtures/get_capture_details_multicurrency.xml"));
    assert_round_trip::<RefundResponse>(include_str!("fixtures/refund.xml"));
    assert_round_trip::<GetRefundDetailsResponse>(include_str!("fixtures/get_refund_details_multicurrency.xml"));
    assert_round_trip::<GetBillingAgreementDetailsResponse>(include_str!("fixtures/get_billing_agreement_details.xml"));
    assert_round_trip::<ValidateBillingAgreementResponse>(include_str!("fixtures/validate_billing_agreement.xml"));
    assert_round_trip::<AuthorizeOnBillingAgreementResponse>(include_str!("fixtures/authorize_on_billing_agreement.xml"));
    assert_round_trip::<GetProviderCreditDetailsResponse>(include_str!("fixtures/get_provider_credit_details.xml"));
    assert_round_trip::<GetProviderCreditDetailsResponse>(include_str!("fixtures/get_provider_credit_details_reordered.xml"));
    assert_round_trip::<GetProviderCreditReversalDetailsResponse>(include_str!("fixtures/get_provider_credit_reversal_details.xml"));
    assert_round_trip::<ReverseProviderCreditResponse>(include_str!("fixtures/reverse_provider_credit.xml"));
    assert_round_trip::<GetServiceStatusResponse>(include_str!("fixtures/get_service_status_green.xml"));
    assert_round_trip::<GetServiceStatusResponse>(include_str!("fixtures/get_service_status_green_i.xml"));
    assert_round_trip::<GetMerchantAccountStatusResponse>(include_str!("fixtures/get_merchant_account_status_active.xml"));
    assert_round_trip::<GetMerchantAccountStatusResponse>(include_str!("fixtures/get_merchant_account_status_inactive.xml"));
}

#[test]
fn test_round_trip_keeps_byte_order_mark() {
    let body = format!("\u{feff}{}", include_str!("fixtures/confirm_order_reference.xml"));
    let parsed = parse_fixture::<ConfirmOrderReferenceResponse>(200, &body).unwrap();
    assert_eq!(parsed.to_xml(), body);
    assert!(parsed.document().has_bom());
}

#[test]
fn test_other_success_statuses_parse() {
    let body = include_str!("fixtures/confirm_order_reference.xml");
    let parsed = parse_fixture::<ConfirmOrderReferenceResponse>(201, body).unwrap();
    assert_eq!(parsed.status_code(), 201);
    assert_eq!(parsed.request_id(), "f1b6c9a3-4e2d-4b8a-9c7f-3a2b1c0d9e8f");
}

#[test]
fn test_service_error_fields() {
    init_tracing();
    let body = include_str!("fixtures/error_response.xml");
    let err = parse_fixture::<SetOrderReferenceDetailsResponse>(404, body).unwrap_err();

    let ResponseError::Service(err) = err else {
        panic!("expected a service error");
    };
    assert_eq!(err.status_code(), 404);
    assert_eq!(err.response_xml(), body);
    assert_eq!(err.error_code(), Some("OrderReferenceNotModifiable"));
    assert_eq!(err.error_type(), Some("Sender"));
    assert_eq!(err.request_id(), Some("6d4699b8-1238-4c09-b539-176e2c2f5462"));
    assert_eq!(
        err.error_message(),
        Some(
            "OrderReference S01-5695290-1354077 is not in draft state and cannot be modified with the request submitted by you."
        )
    );
}

#[test]
fn test_throttled_is_service_error() {
    let body = include_str!("fixtures/error_throttled.xml");
    let err = parse_fixture::<AuthorizeResponse>(503, body).unwrap_err();

    assert!(err.is_service_error());
    assert_eq!(err.status_code(), 503);
    let ResponseError::Service(err) = err else {
        panic!("expected a service error");
    };
    assert_eq!(err.error_code(), Some("RequestThrottled"));
    assert_eq!(err.error_type(), Some("Receiver"));
}

#[test]
fn test_error_request_id_accepts_either_casing() {
    let body = include_str!("fixtures/error_merchant_account_status.xml");
    let err = parse_fixture::<GetMerchantAccountStatusResponse>(400, body).unwrap_err();

    let ResponseError::Service(err) = err else {
        panic!("expected a service error");
    };
    assert_eq!(err.error_code(), Some("InvalidParameterValue"));
    assert_eq!(err.request_id(), Some("1f2a3b4c-5d6e-4f7a-8b9c-0d1e2f3a4b5c"));
}

#[test]
fn test_error_body_with_success_status_is_client_error() {
    let body = include_str!("fixtures/error_response.xml");
    let err = parse_fixture::<SetOrderReferenceDetailsResponse>(200, body).unwrap_err();

    let ResponseError::Client(err) = err else {
        panic!("expected a client error");
    };
    assert_eq!(err.status_code(), 200);
    assert_eq!(err.response_xml(), body);
}

#[test]
fn test_wrong_schema_is_client_error_with_evidence() {
    init_tracing();
    // An authorization body handed to the refund parser must fail loudly.
    let body = include_str!("fixtures/get_authorization_details.xml");
    let err = parse_fixture::<GetRefundDetailsResponse>(200, body).unwrap_err();

    let ResponseError::Client(err) = err else {
        panic!("expected a client error");
    };
    assert_eq!(err.status_code(), 200);
    assert_eq!(err.response_xml(), body);
    assert!(err.message().contains("GetRefundDetailsResponse"));
}

#[test]
fn test_same_root_missing_required_field_is_client_error() {
    let body = concat!(
        "<GetRefundDetailsResponse>",
        "<GetRefundDetailsResult><RefundDetails>",
        "<AmazonRefundId>S01-1-R1</AmazonRefundId>",
        "</RefundDetails></GetRefundDetailsResult>",
        "<ResponseMetadata><RequestId>r-1</RequestId></ResponseMetadata>",
        "</GetRefundDetailsResponse>",
    );
    let err = parse_fixture::<GetRefundDetailsResponse>(200, body).unwrap_err();
    assert!(matches!(err, ResponseError::Client(_)));
    assert_eq!(err.response_xml(), body);
}

#[test]
fn test_malformed_error_body_is_client_error() {
    let err = parse_fixture::<AuthorizeResponse>(502, "<html><body>Bad Gateway</body></html>").unwrap_err();

    let ResponseError::Client(err) = err else {
        panic!("expected a client error");
    };
    assert_eq!(err.status_code(), 502);
    assert_eq!(err.response_xml(), "<html><body>Bad Gateway</body></html>");
}

#[test]
fn test_parsing_is_independent_across_threads() {
    let bodies = [
        include_str!("fixtures/authorize.xml"),
        include_str!("fixtures/get_authorization_details.xml"),
    ];
    let handles: Vec<_> = bodies
        .into_iter()
        .map(|body| {
            std::thread::spawn(move || {
                let response = ResponseData::new(200, body);
                parse::<AuthorizeResponse>(&response).map(|p| p.request_id().to_string())
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0].as_deref(), Ok("3f6b3a2e-0a9d-4c5b-8e7f-2d1c0b9a8e7f"));
    assert!(matches!(results[1], Err(ResponseError::Client(_))));
}
