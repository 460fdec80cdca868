//! Pairs each request with the envelope its success body parses into.

use payments_response::ResponseSchema;
use payments_response::response::{
    AuthorizeOnBillingAgreementResponse, AuthorizeResponse, CancelOrderReferenceResponse,
    CaptureResponse, CloseAuthorizationResponse, CloseBillingAgreementResponse,
    CloseOrderReferenceResponse, ConfirmBillingAgreementResponse, ConfirmOrderReferenceResponse,
    CreateOrderReferenceForIdResponse, GetAuthorizationDetailsResponse,
    GetBillingAgreementDetailsResponse, GetCaptureDetailsResponse,
    GetMerchantAccountStatusResponse, GetOrderReferenceDetailsResponse,
    GetProviderCreditDetailsResponse, GetProviderCreditReversalDetailsResponse,
    GetRefundDetailsResponse, GetServiceStatusResponse, ListOrderReferenceByNextTokenResponse,
    ListOrderReferenceResponse, RefundResponse, ReverseProviderCreditResponse,
    SetBillingAgreementDetailsResponse, SetOrderAttributesResponse,
    SetOrderReferenceDetailsResponse, ValidateBillingAgreementResponse,
};
use payments_types::ApiRequest;
use payments_types::request::{
    AuthorizeOnBillingAgreementRequest, AuthorizeRequest, CancelOrderReferenceRequest,
    CaptureRequest, CloseAuthorizationRequest, CloseBillingAgreementRequest,
    CloseOrderReferenceRequest, ConfirmBillingAgreementRequest, ConfirmOrderReferenceRequest,
    CreateOrderReferenceForIdRequest, GetAuthorizationDetailsRequest,
    GetBillingAgreementDetailsRequest, GetCaptureDetailsRequest, GetMerchantAccountStatusRequest,
    GetOrderReferenceDetailsRequest, GetProviderCreditDetailsRequest,
    GetProviderCreditReversalDetailsRequest, GetRefundDetailsRequest, GetServiceStatusRequest,
    ListOrderReferenceByNextTokenRequest, ListOrderReferenceRequest, RefundRequest,
    ReverseProviderCreditRequest, SetBillingAgreementDetailsRequest, SetOrderAttributesRequest,
    SetOrderReferenceDetailsRequest, ValidateBillingAgreementRequest,
};

/// A request whose reply has a known envelope.
pub trait Operation: ApiRequest + Sync {
    type Response: ResponseSchema;
}

macro_rules! operation {
    ($($request:ty => $response:ty),+ $(,)?) => {
        $(
            impl Operation for $request {
                type Response = $response;
            }
        )+
    };
}

operation! {
    GetOrderReferenceDetailsRequest => GetOrderReferenceDetailsResponse,
    SetOrderReferenceDetailsRequest => SetOrderReferenceDetailsResponse,
    SetOrderAttributesRequest => SetOrderAttributesResponse,
    ConfirmOrderReferenceRequest => ConfirmOrderReferenceResponse,
    CancelOrderReferenceRequest => CancelOrderReferenceResponse,
    CloseOrderReferenceRequest => CloseOrderReferenceResponse,
    ListOrderReferenceRequest => ListOrderReferenceResponse,
    ListOrderReferenceByNextTokenRequest => ListOrderReferenceByNextTokenResponse,
    CreateOrderReferenceForIdRequest => CreateOrderReferenceForIdResponse,
    AuthorizeRequest => AuthorizeResponse,
    GetAuthorizationDetailsRequest => GetAuthorizationDetailsResponse,
    CloseAuthorizationRequest => CloseAuthorizationResponse,
    CaptureRequest => CaptureResponse,
    GetCaptureDetailsRequest => GetCaptureDetailsResponse,
    RefundRequest => RefundResponse,
    GetRefundDetailsRequest => GetRefundDetailsResponse,
    GetBillingAgreementDetailsRequest => GetBillingAgreementDetailsResponse,
    SetBillingAgreementDetailsRequest => SetBillingAgreementDetailsResponse,
    ConfirmBillingAgreementRequest => ConfirmBillingAgreementResponse,
    ValidateBillingAgreementRequest => ValidateBillingAgreementResponse,
    AuthorizeOnBillingAgreementRequest => AuthorizeOnBillingAgreementResponse,
    CloseBillingAgreementRequest => CloseBillingAgreementResponse,
    GetProviderCreditDetailsRequest => GetProviderCreditDetailsResponse,
    GetProviderCreditReversalDetailsRequest => GetProviderCreditReversalDetailsResponse,
    ReverseProviderCreditRequest => ReverseProviderCreditResponse,
    GetServiceStatusRequest => GetServiceStatusResponse,
    GetMerchantAccountStatusRequest => GetMerchantAccountStatusResponse,
}
