//! Authorization requests.

use crate::domain::{CurrencyCode, ProviderCredit};
use crate::error::{RequestError, required};

use super::{ApiRequest, Params, ParamsBuilder};

/// Reserves an amount against an order reference.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorizeRequest {
    amazon_order_reference_id: String,
    authorization_reference_id: String,
    authorization_amount: String,
    authorization_currency_code: Option<CurrencyCode>,
    seller_authorization_note: Option<String>,
    transaction_timeout: Option<String>,
    capture_now: Option<bool>,
    soft_descriptor: Option<String>,
    provider_credit: Vec<ProviderCredit>,
    mws_auth_token: Option<String>,
}

impl AuthorizeRequest {
    pub fn new(
        amazon_order_reference_id: impl Into<String>,
        authorization_reference_id: impl Into<String>,
        authorization_amount: impl Into<String>,
    ) -> Result<Self, RequestError> {
        Ok(Self {
            amazon_order_reference_id: required(
                "AmazonOrderReferenceId",
                amazon_order_reference_id,
            )?,
            authorization_reference_id: required(
                "AuthorizationReferenceId",
                authorization_reference_id,
            )?,
            authorization_amount: required("AuthorizationAmount", authorization_amount)?,
            authorization_currency_code: None,
            seller_authorization_note: None,
            transaction_timeout: None,
            capture_now: None,
            soft_descriptor: None,
            provider_credit: Vec::new(),
            mws_auth_token: None,
        })
    }

    pub fn with_authorization_currency_code(mut self, currency: CurrencyCode) -> Self {
        self.authorization_currency_code = Some(currency);
        self
    }

    pub fn with_seller_authorization_note(mut self, note: impl Into<String>) -> Self {
        self.seller_authorization_note = Some(note.into());
        self
    }

    /// Sets the timeout in minutes. Passed through verbatim.
    pub fn with_transaction_timeout(mut self, timeout: impl Into<String>) -> Self {
        self.transaction_timeout = Some(timeout.into());
        self
    }

    pub fn with_capture_now(mut self, capture_now: bool) -> Self {
        self.capture_now = Some(capture_now);
        self
    }

    pub fn with_soft_descriptor(mut self, descriptor: impl Into<String>) -> Self {
        self.soft_descriptor = Some(descriptor.into());
        self
    }

    /// Replaces the provider credit list.
    pub fn with_provider_credit(mut self, credits: Vec<ProviderCredit>) -> Self {
        self.provider_credit = credits;
        self
    }

    pub fn amazon_order_reference_id(&self) -> &str {
        &self.amazon_order_reference_id
    }

    pub fn authorization_reference_id(&self) -> &str {
        &self.authorization_reference_id
    }

    pub fn authorization_amount(&self) -> &str {
        &self.authorization_amount
    }

    pub fn authorization_currency_code(&self) -> Option<CurrencyCode> {
        self.authorization_currency_code
    }

    pub fn seller_authorization_note(&self) -> Option<&str> {
        self.seller_authorization_note.as_deref()
    }

    pub fn transaction_timeout(&self) -> Option<&str> {
        self.transaction_timeout.as_deref()
    }

    pub fn capture_now(&self) -> Option<bool> {
        self.capture_now
    }

    pub fn soft_descriptor(&self) -> Option<&str> {
        self.soft_descriptor.as_deref()
    }

    pub fn provider_credit(&self) -> &[ProviderCredit] {
        &self.provider_credit
    }
}

impl ApiRequest for AuthorizeRequest {
    const ACTION: &'static str = "Authorize";

    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .put("AmazonOrderReferenceId", &self.amazon_order_reference_id)
            .put("AuthorizationReferenceId", &self.authorization_reference_id)
            .put_amount(
                "AuthorizationAmount",
                Some(self.authorization_amount.as_str()),
                self.authorization_currency_code,
            )
            .put_opt("SellerAuthorizationNote", self.seller_authorization_note.as_deref())
            .put_opt("TransactionTimeout", self.transaction_timeout.as_deref())
            .put_flag("CaptureNow", self.capture_now)
            .put_opt("SoftDescriptor", self.soft_descriptor.as_deref())
            .put_provider_credits("ProviderCreditList", "CreditAmount", &self.provider_credit)
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

/// Fetches the current state of an authorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetAuthorizationDetailsRequest {
    amazon_authorization_id: String,
    mws_auth_token: Option<String>,
}

impl GetAuthorizationDetailsRequest {
    pub fn new(amazon_authorization_id: impl Into<String>) -> Result<Self, RequestError> {
        Ok(Self {
            amazon_authorization_id: required("AmazonAuthorizationId", amazon_authorization_id)?,
            mws_auth_token: None,
        })
    }

    pub fn amazon_authorization_id(&self) -> &str {
        &self.amazon_authorization_id
    }
}

impl ApiRequest for GetAuthorizationDetailsRequest {
    const ACTION: &'static str = "GetAuthorizationDetails";

    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .put("AmazonAuthorizationId", &self.amazon_authorization_id)
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

/// Closes an authorization so no further captures can be made against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseAuthorizationRequest {
    amazon_authorization_id: String,
    closure_reason: Option<String>,
    mws_auth_token: Option<String>,
}

impl CloseAuthorizationRequest {
    pub fn new(amazon_authorization_id: impl Into<String>) -> Result<Self, RequestError> {
        Ok(Self {
            amazon_authorization_id: required("AmazonAuthorizationId", amazon_authorization_id)?,
            closure_reason: None,
            mws_auth_token: None,
        })
    }

    pub fn with_closure_reason(mut self, reason: impl Into<String>) -> Self {
        self.closure_reason = Some(reason.into());
        self
    }

    pub fn amazon_authorization_id(&self) -> &str {
        &self.amazon_authorization_id
    }

    pub fn closure_reason(&self) -> Option<&str> {
        self.closure_reason.as_deref()
    }
}

impl ApiRequest for CloseAuthorizationRequest {
    const ACTION: &'static str = "CloseAuthorization";

    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .put("AmazonAuthorizationId", &self.amazon_authorization_id)
            .put_opt("ClosureReason", self.closure_reason.as_deref())
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

mws_auth_token!(
    AuthorizeRequest,
    GetAuthorizationDetailsRequest,
    CloseAuthorizationRequest,
);
