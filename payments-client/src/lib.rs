//! # Payments Client
//!
//! Runs request builders through a [`Transport`] and reads the answer with
//! the response parser.
//!
//! ```ignore
//! let config = ClientConfig::load()?;
//! let client = PaymentsClient::from_config(&config);
//! let request = GetOrderReferenceDetailsRequest::new("S01-2517744-2470335")?;
//! let response = client.get_order_reference_details(&request).await?;
//! println!("{:?}", response.details().state());
//! ```

pub mod config;
pub mod error;
pub mod http;
mod operation;

pub use config::{ClientConfig, Region};
pub use error::{ConfigError, PaymentsError};
pub use http::HttpTransport;
pub use operation::Operation;

use payments_response::ParsedResponse;
use payments_response::model::AuthorizationDetails;
use payments_types::request::{
    AuthorizeOnBillingAgreementRequest, AuthorizeRequest, CancelOrderReferenceRequest,
    CaptureRequest, ChargeRequest, CloseAuthorizationRequest, CloseBillingAgreementRequest,
    CloseOrderReferenceRequest, ConfirmBillingAgreementRequest, ConfirmOrderReferenceRequest,
    CreateOrderReferenceForIdRequest, GetAuthorizationDetailsRequest,
    GetBillingAgreementDetailsRequest, GetCaptureDetailsRequest, GetMerchantAccountStatusRequest,
    GetOrderReferenceDetailsRequest, GetProviderCreditDetailsRequest,
    GetProviderCreditReversalDetailsRequest, GetRefundDetailsRequest, GetServiceStatusRequest,
    ListOrderReferenceByNextTokenRequest, ListOrderReferenceRequest, RefundRequest,
    ReverseProviderCreditRequest, SetBillingAgreementDetailsRequest, SetOrderAttributesRequest,
    SetOrderReferenceDetailsRequest, ValidateBillingAgreementRequest,
};
use payments_types::{AmazonReferenceIdType, RequestError, Transport};

/// Typed client over any [`Transport`].
pub struct PaymentsClient<T: Transport = HttpTransport> {
    transport: T,
}

impl PaymentsClient<HttpTransport> {
    /// Creates a client that talks HTTP to the configured endpoint.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(HttpTransport::new(config))
    }
}

impl<T: Transport> PaymentsClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends `request` and parses the reply as its operation's response.
    #[tracing::instrument(skip(self, request), fields(action = R::ACTION))]
    pub async fn execute<R: Operation>(
        &self,
        request: &R,
    ) -> Result<ParsedResponse<R::Response>, PaymentsError> {
        let response = self.transport.send(R::ACTION, request.to_params()).await?;
        Ok(payments_response::parse::<R::Response>(&response)?)
    }

    /// Authorizes a payment in one call.
    ///
    /// Order reference ids go through `SetOrderReferenceDetails`,
    /// `ConfirmOrderReference` and `Authorize`; billing agreement ids through
    /// `AuthorizeOnBillingAgreement`. Every wire request is built before the
    /// first one is sent, so an incomplete charge never reaches the service.
    #[tracing::instrument(skip_all, fields(reference_id = request.amazon_reference_id()))]
    pub async fn charge(&self, request: ChargeRequest) -> Result<AuthorizationDetails, PaymentsError> {
        let kind = match request.reference_kind() {
            Some(kind) => kind,
            None => {
                let err = match request.amazon_reference_id() {
                    Some(id) if !id.trim().is_empty() => {
                        RequestError::UnknownReferenceId(id.to_string())
                    }
                    _ => RequestError::MissingField("AmazonReferenceId"),
                };
                return Err(err.into());
            }
        };

        match kind {
            AmazonReferenceIdType::OrderReference => {
                let set_details = request.to_set_order_reference_details()?;
                let confirm = request.to_confirm_order_reference()?;
                let authorize = request.into_authorize()?;

                self.set_order_reference_details(&set_details).await?;
                self.confirm_order_reference(&confirm).await?;
                let response = self.authorize(&authorize).await?;
                Ok(response.into_inner().into_details())
            }
            AmazonReferenceIdType::BillingAgreement => {
                let authorize = request.into_authorize_on_billing_agreement()?;
                let response = self.authorize_on_billing_agreement(&authorize).await?;
                Ok(response.into_inner().into_details())
            }
        }
    }
}

/// Generates one typed method per operation, each a thin call to `execute`.
macro_rules! operations {
    ($($method:ident($request:ty);)+) => {
        impl<T: Transport> PaymentsClient<T> {
            $(
                pub async fn $method(
                    &self,
                    request: &$request,
                ) -> Result<ParsedResponse<<$request as Operation>::Response>, PaymentsError> {
                    self.execute(request).await
                }
            )+
        }
    };
}

operations! {
    get_order_reference_details(GetOrderReferenceDetailsRequest);
    set_order_reference_details(SetOrderReferenceDetailsRequest);
    set_order_attributes(SetOrderAttributesRequest);
    confirm_order_reference(ConfirmOrderReferenceRequest);
    cancel_order_reference(CancelOrderReferenceRequest);
    close_order_reference(CloseOrderReferenceRequest);
    list_order_reference(ListOrderReferenceRequest);
    list_order_reference_by_next_token(ListOrderReferenceByNextTokenRequest);
    create_order_reference_for_id(CreateOrderReferenceForIdRequest);
    authorize(AuthorizeRequest);
    get_authorization_details(GetAuthorizationDetailsRequest);
    close_authorization(CloseAuthorizationRequest);
    capture(CaptureRequest);
    get_capture_details(GetCaptureDetailsRequest);
    refund(RefundRequest);
    get_refund_details(GetRefundDetailsRequest);
    get_billing_agreement_details(GetBillingAgreementDetailsRequest);
    set_billing_agreement_details(SetBillingAgreementDetailsRequest);
    confirm_billing_agreement(ConfirmBillingAgreementRequest);
    validate_billing_agreement(ValidateBillingAgreementRequest);
    authorize_on_billing_agreement(AuthorizeOnBillingAgreementRequest);
    close_billing_agreement(CloseBillingAgreementRequest);
    get_provider_credit_details(GetProviderCreditDetailsRequest);
    get_provider_credit_reversal_details(GetProviderCreditReversalDetailsRequest);
    reverse_provider_credit(ReverseProviderCreditRequest);
    get_service_status(GetServiceStatusRequest);
    get_merchant_account_status(GetMerchantAccountStatusRequest);
}
