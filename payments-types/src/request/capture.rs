//! Capture requests.

use crate::domain::{CurrencyCode, ProviderCredit};
use crate::error::{RequestError, required};

use super::{ApiRequest, Params, ParamsBuilder};

/// Captures funds from an open authorization.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureRequest {
    amazon_authorization_id: String,
    capture_reference_id: String,
    capture_amount: String,
    capture_currency_code: Option<CurrencyCode>,
    seller_capture_note: Option<String>,
    soft_descriptor: Option<String>,
    provider_credit: Vec<ProviderCredit>,
    mws_auth_token: Option<String>,
}

impl CaptureRequest {
    pub fn new(
        amazon_authorization_id: impl Into<String>,
        capture_reference_id: impl Into<String>,
        capture_amount: impl Into<String>,
    ) -> Result<Self, RequestError> {
        Ok(Self {
            amazon_authorization_id: required("AmazonAuthorizationId", amazon_authorization_id)?,
            capture_reference_id: required("CaptureReferenceId", capture_reference_id)?,
            capture_amount: required("CaptureAmount", capture_amount)?,
            capture_currency_code: None,
            seller_capture_note: None,
            soft_descriptor: None,
            provider_credit: Vec::new(),
            mws_auth_token: None,
        })
    }

    pub fn with_capture_currency_code(mut self, currency: CurrencyCode) -> Self {
        self.capture_currency_code = Some(currency);
        self
    }

    pub fn with_seller_capture_note(mut self, note: impl Into<String>) -> Self {
        self.seller_capture_note = Some(note.into());
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

    pub fn amazon_authorization_id(&self) -> &str {
        &self.amazon_authorization_id
    }

    pub fn capture_reference_id(&self) -> &str {
        &self.capture_reference_id
    }

    pub fn capture_amount(&self) -> &str {
        &self.capture_amount
    }

    pub fn capture_currency_code(&self) -> Option<CurrencyCode> {
        self.capture_currency_code
    }

    pub fn seller_capture_note(&self) -> Option<&str> {
        self.seller_capture_note.as_deref()
    }

    pub fn soft_descriptor(&self) -> Option<&str> {
        self.soft_descriptor.as_deref()
    }

    pub fn provider_credit(&self) -> &[ProviderCredit] {
        &self.provider_credit
    }
}

impl ApiRequest for CaptureRequest {
    const ACTION: &'static str = "Capture";

    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .put("AmazonAuthorizationId", &self.amazon_authorization_id)
            .put("CaptureReferenceId", &self.capture_reference_id)
            .put_amount(
                "CaptureAmount",
                Some(self.capture_amount.as_str()),
                self.capture_currency_code,
            )
            .put_opt("SellerCaptureNote", self.seller_capture_note.as_deref())
            .put_opt("SoftDescriptor", self.soft_descriptor.as_deref())
            .put_provider_credits("ProviderCreditList", "CreditAmount", &self.provider_credit)
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

/// Fetches the current state of a capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetCaptureDetailsRequest {
    amazon_capture_id: String,
    mws_auth_token: Option<String>,
}

impl GetCaptureDetailsRequest {
    pub fn new(amazon_capture_id: impl Into<String>) -> Result<Self, RequestError> {
        Ok(Self {
            amazon_capture_id: required("AmazonCaptureId", amazon_capture_id)?,
            mws_auth_token: None,
        })
    }

    pub fn amazon_capture_id(&self) -> &str {
        &self.amazon_capture_id
    }
}

impl ApiRequest for GetCaptureDetailsRequest {
    const ACTION: &'static str = "GetCaptureDetails";

    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .put("AmazonCaptureId", &self.amazon_capture_id)
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

mws_auth_token!(CaptureRequest, GetCaptureDetailsRequest);
