//! Refund requests.

use crate::domain::{CurrencyCode, ProviderCredit};
use crate::error::{RequestError, required};

use super::{ApiRequest, Params, ParamsBuilder};

/// Refunds a previously captured amount.
#[derive(Debug, Clone, PartialEq)]
pub struct RefundRequest {
    amazon_capture_id: String,
    refund_reference_id: String,
    refund_amount: String,
    refund_currency_code: Option<CurrencyCode>,
    seller_refund_note: Option<String>,
    soft_descriptor: Option<String>,
    provider_credit: Vec<ProviderCredit>,
    mws_auth_token: Option<String>,
}

impl RefundRequest {
    pub fn new(
        amazon_capture_id: impl Into<String>,
        refund_reference_id: impl Into<String>,
        refund_amount: impl Into<String>,
    ) -> Result<Self, RequestError> {
        Ok(Self {
            amazon_capture_id: required("AmazonCaptureId", amazon_capture_id)?,
            refund_reference_id: required("RefundReferenceId", refund_reference_id)?,
            refund_amount: required("RefundAmount", refund_amount)?,
            refund_currency_code: None,
            seller_refund_note: None,
            soft_descriptor: None,
            provider_credit: Vec::new(),
            mws_auth_token: None,
        })
    }

    pub fn with_refund_currency_code(mut self, currency: CurrencyCode) -> Self {
        self.refund_currency_code = Some(currency);
        self
    }

    pub fn with_seller_refund_note(mut self, note: impl Into<String>) -> Self {
        self.seller_refund_note = Some(note.into());
        self
    }

    pub fn with_soft_descriptor(mut self, descriptor: impl Into<String>) -> Self {
        self.soft_descriptor = Some(descriptor.into());
        self
    }

    /// Replaces the provider credits to reverse alongside the refund.
    pub fn with_provider_credit(mut self, credits: Vec<ProviderCredit>) -> Self {
        self.provider_credit = credits;
        self
    }

    pub fn amazon_capture_id(&self) -> &str {
        &self.amazon_capture_id
    }

    pub fn refund_reference_id(&self) -> &str {
        &self.refund_reference_id
    }

    pub fn refund_amount(&self) -> &str {
        &self.refund_amount
    }

    pub fn refund_currency_code(&self) -> Option<CurrencyCode> {
        self.refund_currency_code
    }

    pub fn seller_refund_note(&self) -> Option<&str> {
        self.seller_refund_note.as_deref()
    }

    pub fn soft_descriptor(&self) -> Option<&str> {
        self.soft_descriptor.as_deref()
    }

    pub fn provider_credit(&self) -> &[ProviderCredit] {
        &self.provider_credit
    }
}

impl ApiRequest for RefundRequest {
    const ACTION: &'static str = "Refund";

    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .put("AmazonCaptureId", &self.amazon_capture_id)
            .put("RefundReferenceId", &self.refund_reference_id)
            .put_amount(
                "RefundAmount",
                Some(self.refund_amount.as_str()),
                self.refund_currency_code,
            )
            .put_opt("SellerRefundNote", self.seller_refund_note.as_deref())
            .put_opt("SoftDescriptor", self.soft_descriptor.as_deref())
            .put_provider_credits(
                "ProviderCreditReversalList",
                "CreditReversalAmount",
                &self.provider_credit,
            )
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

/// Fetches the current state of a refund.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetRefundDetailsRequest {
    amazon_refund_id: String,
    mws_auth_token: Option<String>,
}

impl GetRefundDetailsRequest {
    pub fn new(amazon_refund_id: impl Into<String>) -> Result<Self, RequestError> {
        Ok(Self {
            amazon_refund_id: required("AmazonRefundId", amazon_refund_id)?,
            mws_auth_token: None,
        })
    }

    pub fn amazon_refund_id(&self) -> &str {
        &self.amazon_refund_id
    }
}

impl ApiRequest for GetRefundDetailsRequest {
    const ACTION: &'static str = "GetRefundDetails";

    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .put("AmazonRefundId", &self.amazon_refund_id)
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

mws_auth_token!(RefundRequest, GetRefundDetailsRequest);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Price;

    #[test]
    fn test_refund_request_provider_credit() {
        let credits = vec![ProviderCredit::new("providerId", Price::new("1", "USD"))];
        let request = RefundRequest::new("C1233421424", "Ref123", "2")
            .unwrap()
            .with_mws_auth_token("TEST_MWS_AUTH_TOKEN")
            .with_seller_refund_note("testNote")
            .with_soft_descriptor("AMZNTestTest")
            .with_refund_currency_code(CurrencyCode::USD)
            .with_provider_credit(credits.clone());

        assert_eq!(request.amazon_capture_id(), "C1233421424");
        assert_eq!(request.mws_auth_token(), Some("TEST_MWS_AUTH_TOKEN"));
        assert_eq!(request.refund_reference_id(), "Ref123");
        assert_eq!(request.seller_refund_note(), Some("testNote"));
        assert_eq!(request.refund_amount(), "2");
        assert_eq!(request.refund_currency_code(), Some(CurrencyCode::USD));
        assert_eq!(request.soft_descriptor(), Some("AMZNTestTest"));
        assert_eq!(request.provider_credit(), credits.as_slice());

        let first = &request.provider_credit()[0];
        assert_eq!(first.provider_id(), "providerId");
        assert_eq!(first.credit_amount().amount(), "1");
        assert_eq!(first.credit_amount().currency_code(), "USD");
    }

    #[test]
    fn test_refund_params_use_reversal_list() {
        let params = RefundRequest::new("C1", "R1", "2")
            .unwrap()
            .with_provider_credit(vec![ProviderCredit::new("p", Price::new("1", "USD"))])
            .to_params();
        assert_eq!(params["ProviderCreditReversalList.member.1.ProviderId"], "p");
        assert_eq!(
            params["ProviderCreditReversalList.member.1.CreditReversalAmount.Amount"],
            "1"
        );
        assert!(!params.contains_key("RefundAmount.CurrencyCode"));
    }

    #[test]
    fn test_get_refund_details_request() {
        let request = GetRefundDetailsRequest::new("Ref123")
            .unwrap()
            .with_mws_auth_token("TEST_MWS_AUTH_TOKEN");
        assert_eq!(request.amazon_refund_id(), "Ref123");
        assert_eq!(request.mws_auth_token(), Some("TEST_MWS_AUTH_TOKEN"));
    }

    #[test]
    fn test_refund_request_unset_fields_are_empty() {
        let request = RefundRequest::new("P01-1-C1", "ref-1", "1.00").unwrap();
        assert_eq!(request.refund_currency_code(), None);
        assert_eq!(request.seller_refund_note(), None);
        assert_eq!(request.soft_descriptor(), None);
        assert!(request.provider_credit().is_empty());
        assert_eq!(request.mws_auth_token(), None);

        let params = request.to_params();
        let keys: Vec<&str> = params.keys().map(String::as_str).collect();
        assert_eq!(keys, ["AmazonCaptureId", "RefundAmount.Amount", "RefundReferenceId"]);
    }
}
