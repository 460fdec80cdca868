//! Integration tests for the typed content of each operation's success body.

use payments_response::response::{
    AuthorizeOnBillingAgreementResponse, AuthorizeResponse, CancelOrderReferenceResponse,
    CaptureResponse, CloseBillingAgreementResponse, CloseOrderReferenceResponse,
    ConfirmBillingAgreementResponse, CreateOrderReferenceForIdResponse,
    GetAuthorizationDetailsResponse, GetBillingAgreementDetailsResponse,
    GetCaptureDetailsResponse, GetMerchantAccountStatusResponse,
    GetOrderReferenceDetailsResponse, GetProviderCreditDetailsResponse,
    GetProviderCreditReversalDetailsResponse, GetRefundDetailsResponse,
    GetServiceStatusResponse, ListOrderReferenceByNextTokenResponse, ListOrderReferenceResponse,
    RefundResponse, ReverseProviderCreditResponse, SetOrderAttributesResponse,
    SetOrderReferenceDetailsResponse, ValidateBillingAgreementResponse,
};
use payments_response::{ParsedResponse, ResponseSchema, parse};
use payments_types::{
    AccountStatus, CurrencyCode, Environment, ParentType, Price, RefundType, RequestStatus,
    ResponseData, ServiceStatus,
};

/// Helper to parse a 200 response that is expected to succeed.
fn ok<T: ResponseSchema>(body: &str) -> ParsedResponse<T> {
    parse::<T>(&ResponseData::new(200, body)).unwrap()
}

/// Helper to build an envelope carrying only response metadata.
fn metadata_only(root: &str, request_id: &str) -> String {
    format!(
        "<{root} xmlns=\"http://mws.amazonservices.com/schema/OffAmazonPayments/2013-01-01\">\n  \
         <ResponseMetadata>\n    <RequestId>{request_id}</RequestId>\n  </ResponseMetadata>\n</{root}>\n"
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Order reference
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_get_order_reference_details() {
    let parsed = ok::<GetOrderReferenceDetailsResponse>(include_str!(
        "fixtures/get_order_reference_details.xml"
    ));
    assert_eq!(parsed.request_id(), "5749768d-307b-493b-8b6c-e4a5ac3c3e22");

    let details = parsed.details();
    assert_eq!(details.amazon_order_reference_id, "S01-2517744-2470335");
    assert_eq!(details.state(), Some("Open"));
    assert_eq!(details.release_environment, Some(Environment::Live));
    assert_eq!(details.order_total, Some(Price::new("0.01", "USD")));
    assert_eq!(details.seller_note.as_deref(), Some("testNote"));
    assert_eq!(details.order_language.as_deref(), Some("en-US"));
    assert_eq!(details.request_payment_authorization, Some(false));
    assert_eq!(details.authorization_ids(), ["S01-2517744-2470335-A002487"]);

    let destination = details.destination.as_ref().unwrap();
    assert_eq!(destination.destination_type.as_deref(), Some("Physical"));
    let address = destination.physical_destination.as_ref().unwrap();
    assert_eq!(address.city.as_deref(), Some("äöüßâêîôûàèùé"));
    assert_eq!(address.country_code.as_deref(), Some("US"));
    assert_eq!(address.address_line2.as_deref(), Some("Suite 2500"));

    let seller = details.seller_order_attributes.as_ref().unwrap();
    assert_eq!(seller.store_name.as_deref(), Some("TestStore"));
    assert_eq!(seller.seller_order_id.as_deref(), Some("1234-5678"));

    let buyer = details.buyer.as_ref().unwrap();
    assert_eq!(buyer.name.as_deref(), Some("Susie Smith"));
    assert_eq!(buyer.email.as_deref(), Some("susie@example.com"));

    let descriptor = details.payment_descriptor.as_ref().unwrap();
    assert_eq!(descriptor.name.as_deref(), Some("Visa"));
    assert_eq!(descriptor.use_amazon_balance_first, Some(false));

    assert!(details.creation_timestamp.is_some());
    assert!(details.expiration_timestamp.is_some());
}

#[test]
fn test_set_order_reference_details_constraints() {
    let parsed = ok::<SetOrderReferenceDetailsResponse>(include_str!(
        "fixtures/set_order_reference_details.xml"
    ));
    let details = parsed.details();

    assert_eq!(details.amazon_order_reference_id, "S02-0000000-0000001");
    assert_eq!(details.state(), Some("Draft"));
    assert_eq!(details.platform_id.as_deref(), Some("A11WKBU7ADWTAU"));

    let total = details.order_total.as_ref().unwrap();
    assert_eq!(total.amount(), "500");
    assert_eq!(total.currency(), Some(CurrencyCode::EUR));

    let ids: Vec<_> = details
        .constraints
        .as_ref()
        .unwrap()
        .constraint
        .iter()
        .map(|c| c.constraint_id.as_str())
        .collect();
    assert_eq!(ids, ["ShippingAddressNotSet", "PaymentPlanNotSet"]);
}

#[test]
fn test_set_order_attributes() {
    let parsed = ok::<SetOrderAttributesResponse>(include_str!("fixtures/set_order_attributes.xml"));
    let details = parsed.details();

    assert_eq!(details.amazon_order_reference_id, "S02-0000000-0000002");
    assert_eq!(details.order_total, Some(Price::new("2.00", "EUR")));

    let seller = details.seller_order_attributes.as_ref().unwrap();
    assert_eq!(
        seller.supplementary_data.as_deref(),
        Some("{\"AirlineMetaData\":{\"version\":1.0}}")
    );
    assert_eq!(
        seller.order_item_categories.as_ref().unwrap().order_item_category,
        ["Antiques", "Electronics"]
    );

    let psp = details.payment_service_provider_attributes.as_ref().unwrap();
    assert_eq!(psp.payment_service_provider_id.as_deref(), Some("PSP_ID"));
    assert_eq!(psp.payment_service_provider_order_id.as_deref(), Some("PSP_ORDER_ID"));
}

#[test]
fn test_create_order_reference_for_id() {
    let parsed = ok::<CreateOrderReferenceForIdResponse>(include_str!(
        "fixtures/create_order_reference_for_id.xml"
    ));
    let details = parsed.details();

    assert_eq!(details.amazon_order_reference_id, "S01-1234567-7654321");
    let parent = details.parent_details.as_ref().unwrap();
    assert_eq!(parent.id, "C01-1234567-1234567");
    assert_eq!(parent.parent_type, ParentType::BillingAgreement);
    assert_eq!(
        details.payment_reference.as_ref().unwrap().static_token.as_deref(),
        Some("bWF0Y2hpbmdfdG9rZW4=")
    );
    assert_eq!(details.payment_authentication_status.as_ref().unwrap().state, "NOT_REQUIRED");
    assert!(details.authorization_ids().is_empty());
}

#[test]
fn test_list_order_reference_pages() {
    let first = ok::<ListOrderReferenceResponse>(include_str!("fixtures/list_order_reference.xml"));
    let orders = first.result.order_references();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].amazon_order_reference_id, "S01-1111111-1111111");
    assert_eq!(orders[0].order_total, Some(Price::new("100.00", "USD")));
    assert_eq!(
        orders[0].order_reference_status.as_ref().map(|s| s.state.as_str()),
        Some("Closed")
    );
    assert_eq!(first.result.next_page_token.as_deref(), Some("eyJuZXh0UGFnZVRva2VuIjoiMiJ9"));

    let next = ok::<ListOrderReferenceByNextTokenResponse>(include_str!(
        "fixtures/list_order_reference_by_next_token.xml"
    ));
    let states: Vec<_> = next
        .result
        .order_references()
        .iter()
        .map(|o| {
            (
                o.amazon_order_reference_id.as_str(),
                o.order_reference_status.as_ref().map(|s| s.state.as_str()),
            )
        })
        .collect();
    assert_eq!(
        states,
        [
            ("S01-2222222-2222222", Some("Open")),
            ("S01-3333333-3333333", Some("Canceled")),
        ]
    );
    assert_eq!(next.result.next_page_token, None);
}

#[test]
fn test_metadata_only_envelopes() {
    let body = metadata_only("CancelOrderReferenceResponse", "11111111-aaaa-4bbb-8ccc-000000000001");
    assert_eq!(
        ok::<CancelOrderReferenceResponse>(&body).request_id(),
        "11111111-aaaa-4bbb-8ccc-000000000001"
    );

    let body = metadata_only("CloseOrderReferenceResponse", "11111111-aaaa-4bbb-8ccc-000000000002");
    let parsed = ok::<CloseOrderReferenceResponse>(&body);
    assert_eq!(parsed.request_id(), "11111111-aaaa-4bbb-8ccc-000000000002");
    assert_eq!(parsed.to_xml(), body);

    let body = metadata_only("ConfirmBillingAgreementResponse", "11111111-aaaa-4bbb-8ccc-000000000003");
    assert_eq!(
        ok::<ConfirmBillingAgreementResponse>(&body).request_id(),
        "11111111-aaaa-4bbb-8ccc-000000000003"
    );

    let body = metadata_only("CloseBillingAgreementResponse", "11111111-aaaa-4bbb-8ccc-000000000004");
    assert_eq!(
        ok::<CloseBillingAgreementResponse>(&body).request_id(),
        "11111111-aaaa-4bbb-8ccc-000000000004"
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Authorization, capture, refund
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_authorize() {
    let parsed = ok::<AuthorizeResponse>(include_str!("fixtures/authorize.xml"));
    assert_eq!(parsed.request_id(), "3f6b3a2e-0a9d-4c5b-8e7f-2d1c0b9a8e7f");

    let details = parsed.details();
    assert_eq!(details.amazon_authorization_id, "S01-2517744-2470335-A002487");
    assert_eq!(details.state(), "Pending");
    assert_eq!(details.authorization_amount, Price::new("2.00", "USD"));
}

#[test]
fn test_get_authorization_details() {
    let parsed = ok::<GetAuthorizationDetailsResponse>(include_str!(
        "fixtures/get_authorization_details.xml"
    ));
    let details = parsed.details();

    assert_eq!(details.state(), "Closed");
    assert_eq!(
        details.authorization_status.reason_code.as_deref(),
        Some("MaxCapturesProcessed")
    );
    assert_eq!(details.authorization_reference_id, "TEST_AUTHORIZATION_REFERENCE_ID");
    assert_eq!(details.capture_now, Some(true));
    assert_eq!(details.soft_decline, Some(false));
    assert_eq!(details.address_verification_code.as_deref(), Some("Y"));
    assert_eq!(
        details.authorization_billing_address.as_ref().unwrap().city.as_deref(),
        Some("Chicago")
    );

    let captures: Vec<_> = details.id_list.as_ref().unwrap().iter().collect();
    assert_eq!(captures, ["S01-2517744-2470335-C002487"]);
}

#[test]
fn test_capture() {
    let parsed = ok::<CaptureResponse>(include_str!("fixtures/capture.xml"));
    let details = parsed.details();

    assert_eq!(details.amazon_capture_id, "S01-2517744-2470335-C002487");
    assert_eq!(details.state(), "Completed");
    assert_eq!(details.capture_amount, Price::new("2.00", "USD"));
    assert_eq!(details.refunded_amount.as_ref().map(Price::amount), Some("0"));
    assert_eq!(details.converted_amount, None);

    let credits = details.provider_credit_summary_list.as_ref().unwrap();
    assert_eq!(credits.len(), 1);
    assert_eq!(credits.get(0).unwrap().provider_credit_id, "S01-2517744-2470335-P002487");
    assert_eq!(credits.get(0).unwrap().provider_id.as_deref(), Some("providerId"));
}

#[test]
fn test_capture_in_foreign_currency() {
    let parsed = ok::<GetCaptureDetailsResponse>(include_str!(
        "fixtures/get_capture_details_multicurrency.xml"
    ));
    let details = parsed.details();

    assert_eq!(details.amazon_capture_id, "S02-9171633-2314716-C075624");
    assert_eq!(details.capture_amount.amount(), "0.99");
    assert_eq!(details.capture_amount.currency(), Some(CurrencyCode::CHF));
    assert_eq!(details.converted_amount, Some(Price::new("0.88", "EUR")));
    assert_eq!(details.conversion_rate.as_deref(), Some("1.1297854087"));
}

#[test]
fn test_refund() {
    let parsed = ok::<RefundResponse>(include_str!("fixtures/refund.xml"));
    let details = parsed.details();

    assert_eq!(details.amazon_refund_id, "S01-2517744-2470335-R002487");
    assert_eq!(details.state(), "Pending");
    assert_eq!(details.refund_type, Some(RefundType::SellerInitiated));
    assert_eq!(details.refund_amount.amount(), "2");
    assert_eq!(details.seller_refund_note.as_deref(), Some("testNote"));

    let reversals = details.provider_credit_reversal_summary_list.as_ref().unwrap();
    assert_eq!(
        reversals.get(0).unwrap().provider_credit_reversal_id,
        "S01-2517744-2470335-V002487"
    );
}

#[test]
fn test_refund_in_foreign_currency() {
    let parsed = ok::<GetRefundDetailsResponse>(include_str!(
        "fixtures/get_refund_details_multicurrency.xml"
    ));
    let details = parsed.details();

    assert_eq!(details.amazon_refund_id, "S02-3346017-5764566-R041936");
    assert_eq!(details.refund_amount, Price::new("0.33", "NOK"));
    assert_eq!(details.converted_amount, Some(Price::new("0.03", "EUR")));
    assert_eq!(details.conversion_rate.as_deref(), Some("9.9248293483"));
    assert_eq!(details.state(), "Completed");
}

// ─────────────────────────────────────────────────────────────────────────────
// Billing agreement
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_get_billing_agreement_details() {
    let parsed = ok::<GetBillingAgreementDetailsResponse>(include_str!(
        "fixtures/get_billing_agreement_details.xml"
    ));
    let details = parsed.details();

    assert_eq!(details.amazon_billing_agreement_id, "C01-7612545-8011435");
    assert_eq!(details.release_environment, Some(Environment::Sandbox));
    assert_eq!(details.billing_agreement_consent, Some(true));
    assert_eq!(
        details.billing_agreement_status.as_ref().map(|s| s.state.as_str()),
        Some("Open")
    );

    let limits = details.billing_agreement_limits.as_ref().unwrap();
    assert_eq!(limits.amount_limit_per_time_period, Some(Price::new("500", "USD")));
    assert_eq!(limits.current_remaining_balance, Some(Price::new("499.00", "USD")));
}

#[test]
fn test_validate_billing_agreement_failure() {
    let parsed = ok::<ValidateBillingAgreementResponse>(include_str!(
        "fixtures/validate_billing_agreement.xml"
    ));

    assert_eq!(parsed.result.validation_result, RequestStatus::Failure);
    assert_eq!(parsed.result.failure_reason_code.as_deref(), Some("InvalidPaymentMethod"));
    assert_eq!(parsed.result.billing_agreement_status.state, "Suspended");
    assert!(parsed.result.billing_agreement_status.last_updated_timestamp.is_some());
}

#[test]
fn test_authorize_on_billing_agreement() {
    let parsed = ok::<AuthorizeOnBillingAgreementResponse>(include_str!(
        "fixtures/authorize_on_billing_agreement.xml"
    ));

    assert_eq!(parsed.details().amazon_authorization_id, "S01-5695290-1354077-A028377");
    assert_eq!(parsed.details().authorization_reference_id, "chargeRef");
    assert_eq!(parsed.details().state(), "Open");
    assert_eq!(
        parsed.result.amazon_order_reference_id.as_deref(),
        Some("S01-5695290-1354077")
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Provider credit
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_provider_credit_reversal_ids_keep_order() {
    for body in [
        include_str!("fixtures/get_provider_credit_details.xml"),
        include_str!("fixtures/get_provider_credit_details_reordered.xml"),
    ] {
        let parsed = ok::<GetProviderCreditDetailsResponse>(body);
        let details = parsed.details();

        assert_eq!(details.amazon_provider_credit_id, "S01-1234567-1234567-P000001");
        assert_eq!(
            details.credit_reversal_ids(),
            ["S01-1234567-1234567-V000001", "S01-1234567-1234567-V000002"]
        );
        assert_eq!(details.credit_amount, Price::new("1.00", "USD"));
    }
}

#[test]
fn test_provider_credit_reversal_details() {
    let parsed = ok::<GetProviderCreditReversalDetailsResponse>(include_str!(
        "fixtures/get_provider_credit_reversal_details.xml"
    ));
    let details = parsed.details();

    assert_eq!(details.amazon_provider_credit_reversal_id, "S01-1234567-1234567-V000001");
    assert_eq!(details.credit_reversal_amount, Price::new("5", "USD"));
    assert_eq!(details.credit_reversal_status.state, "Completed");
    assert_eq!(details.seller_id.as_deref(), Some("TEST_PROVIDER_SELLER_ID"));
}

#[test]
fn test_reverse_provider_credit() {
    let parsed = ok::<ReverseProviderCreditResponse>(include_str!(
        "fixtures/reverse_provider_credit.xml"
    ));
    let details = parsed.details();

    assert_eq!(details.amazon_provider_credit_reversal_id, "S01-1234567-1234567-V000003");
    assert_eq!(details.credit_reversal_status.state, "Pending");
    assert_eq!(details.credit_reversal_note.as_deref(), Some("testNote"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Status
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_service_status_green() {
    let parsed = ok::<GetServiceStatusResponse>(include_str!("fixtures/get_service_status_green.xml"));
    assert_eq!(parsed.status(), ServiceStatus::Green);
    assert!(parsed.result.messages.is_none());
    assert!(parsed.result.timestamp.is_some());
}

#[test]
fn test_service_status_green_with_messages() {
    let parsed = ok::<GetServiceStatusResponse>(include_str!(
        "fixtures/get_service_status_green_i.xml"
    ));
    assert_eq!(parsed.status(), ServiceStatus::GreenI);
    assert_eq!(parsed.result.message_id.as_deref(), Some("173964729I"));

    let locales: Vec<_> = parsed
        .result
        .messages
        .as_ref()
        .unwrap()
        .message
        .iter()
        .map(|m| m.locale.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(locales, ["en_US", "de_DE"]);
}

#[test]
fn test_merchant_account_status() {
    let active = ok::<GetMerchantAccountStatusResponse>(include_str!(
        "fixtures/get_merchant_account_status_active.xml"
    ));
    assert_eq!(active.account_status(), AccountStatus::Active);

    let inactive = ok::<GetMerchantAccountStatusResponse>(include_str!(
        "fixtures/get_merchant_account_status_inactive.xml"
    ));
    assert_eq!(inactive.account_status(), AccountStatus::Inactive);
    assert_eq!(inactive.request_id(), "9d0e1f2a-3b4c-4d5e-6f7a-8b9c0d1e2f3a");
}
