//! Billing agreement requests.

use crate::domain::CurrencyCode;
use crate::error::{RequestError, required};

use super::{ApiRequest, Params, ParamsBuilder, parse_flag};

/// Fetches the current state of a billing agreement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetBillingAgreementDetailsRequest {
    amazon_billing_agreement_id: String,
    address_consent_token: Option<String>,
    mws_auth_token: Option<String>,
}

impl GetBillingAgreementDetailsRequest {
    pub fn new(amazon_billing_agreement_id: impl Into<String>) -> Result<Self, RequestError> {
        Ok(Self {
            amazon_billing_agreement_id: required(
                "AmazonBillingAgreementId",
                amazon_billing_agreement_id,
            )?,
            address_consent_token: None,
            mws_auth_token: None,
        })
    }

    pub fn with_address_consent_token(mut self, token: impl Into<String>) -> Self {
        self.address_consent_token = Some(token.into());
        self
    }

    pub fn amazon_billing_agreement_id(&self) -> &str {
        &self.amazon_billing_agreement_id
    }

    pub fn address_consent_token(&self) -> Option<&str> {
        self.address_consent_token.as_deref()
    }
}

impl ApiRequest for GetBillingAgreementDetailsRequest {
    const ACTION: &'static str = "GetBillingAgreementDetails";

    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .put("AmazonBillingAgreementId", &self.amazon_billing_agreement_id)
            .put_opt("AddressConsentToken", self.address_consent_token.as_deref())
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

/// Sets seller attributes on a draft billing agreement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetBillingAgreementDetailsRequest {
    amazon_billing_agreement_id: String,
    platform_id: Option<String>,
    seller_note: Option<String>,
    seller_billing_agreement_id: Option<String>,
    store_name: Option<String>,
    custom_information: Option<String>,
    mws_auth_token: Option<String>,
}

impl SetBillingAgreementDetailsRequest {
    pub fn new(amazon_billing_agreement_id: impl Into<String>) -> Result<Self, RequestError> {
        Ok(Self {
            amazon_billing_agreement_id: required(
                "AmazonBillingAgreementId",
                amazon_billing_agreement_id,
            )?,
            platform_id: None,
            seller_note: None,
            seller_billing_agreement_id: None,
            store_name: None,
            custom_information: None,
            mws_auth_token: None,
        })
    }

    pub fn with_platform_id(mut self, platform_id: impl Into<String>) -> Self {
        self.platform_id = Some(platform_id.into());
        self
    }

    pub fn with_seller_note(mut self, note: impl Into<String>) -> Self {
        self.seller_note = Some(note.into());
        self
    }

    pub fn with_seller_billing_agreement_id(mut self, id: impl Into<String>) -> Self {
        self.seller_billing_agreement_id = Some(id.into());
        self
    }

    pub fn with_store_name(mut self, store_name: impl Into<String>) -> Self {
        self.store_name = Some(store_name.into());
        self
    }

    pub fn with_custom_information(mut self, info: impl Into<String>) -> Self {
        self.custom_information = Some(info.into());
        self
    }

    pub fn amazon_billing_agreement_id(&self) -> &str {
        &self.amazon_billing_agreement_id
    }

    pub fn platform_id(&self) -> Option<&str> {
        self.platform_id.as_deref()
    }

    pub fn seller_note(&self) -> Option<&str> {
        self.seller_note.as_deref()
    }

    pub fn seller_billing_agreement_id(&self) -> Option<&str> {
        self.seller_billing_agreement_id.as_deref()
    }

    pub fn store_name(&self) -> Option<&str> {
        self.store_name.as_deref()
    }

    pub fn custom_information(&self) -> Option<&str> {
        self.custom_information.as_deref()
    }
}

impl ApiRequest for SetBillingAgreementDetailsRequest {
    const ACTION: &'static str = "SetBillingAgreementDetails";

    fn to_params(&self) -> Params {
        const ATTRS: &str = "BillingAgreementAttributes";
        const SELLER: &str = "BillingAgreementAttributes.SellerBillingAgreementAttributes";
        ParamsBuilder::new()
            .put("AmazonBillingAgreementId", &self.amazon_billing_agreement_id)
            .put_opt(&format!("{ATTRS}.PlatformId"), self.platform_id.as_deref())
            .put_opt(&format!("{ATTRS}.SellerNote"), self.seller_note.as_deref())
            .put_opt(
                &format!("{SELLER}.SellerBillingAgreementId"),
                self.seller_billing_agreement_id.as_deref(),
            )
            .put_opt(&format!("{SELLER}.StoreName"), self.store_name.as_deref())
            .put_opt(&format!("{SELLER}.CustomInformation"), self.custom_information.as_deref())
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

/// Confirms a billing agreement after buyer consent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmBillingAgreementRequest {
    amazon_billing_agreement_id: String,
    success_url: Option<String>,
    failure_url: Option<String>,
    mws_auth_token: Option<String>,
}

impl ConfirmBillingAgreementRequest {
    pub fn new(amazon_billing_agreement_id: impl Into<String>) -> Result<Self, RequestError> {
        Ok(Self {
            amazon_billing_agreement_id: required(
                "AmazonBillingAgreementId",
                amazon_billing_agreement_id,
            )?,
            success_url: None,
            failure_url: None,
            mws_auth_token: None,
        })
    }

    pub fn with_success_url(mut self, url: impl Into<String>) -> Self {
        self.success_url = Some(url.into());
        self
    }

    pub fn with_failure_url(mut self, url: impl Into<String>) -> Self {
        self.failure_url = Some(url.into());
        self
    }

    pub fn amazon_billing_agreement_id(&self) -> &str {
        &self.amazon_billing_agreement_id
    }

    pub fn success_url(&self) -> Option<&str> {
        self.success_url.as_deref()
    }

    pub fn failure_url(&self) -> Option<&str> {
        self.failure_url.as_deref()
    }
}

impl ApiRequest for ConfirmBillingAgreementRequest {
    const ACTION: &'static str = "ConfirmBillingAgreement";

    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .put("AmazonBillingAgreementId", &self.amazon_billing_agreement_id)
            .put_opt("SuccessUrl", self.success_url.as_deref())
            .put_opt("FailureUrl", self.failure_url.as_deref())
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

/// Checks that a billing agreement can still be charged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateBillingAgreementRequest {
    amazon_billing_agreement_id: String,
    mws_auth_token: Option<String>,
}

impl ValidateBillingAgreementRequest {
    pub fn new(amazon_billing_agreement_id: impl Into<String>) -> Result<Self, RequestError> {
        Ok(Self {
            amazon_billing_agreement_id: required(
                "AmazonBillingAgreementId",
                amazon_billing_agreement_id,
            )?,
            mws_auth_token: None,
        })
    }

    pub fn amazon_billing_agreement_id(&self) -> &str {
        &self.amazon_billing_agreement_id
    }
}

impl ApiRequest for ValidateBillingAgreementRequest {
    const ACTION: &'static str = "ValidateBillingAgreement";

    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .put("AmazonBillingAgreementId", &self.amazon_billing_agreement_id)
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

/// Creates an order reference from a billing agreement and authorizes it in one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizeOnBillingAgreementRequest {
    amazon_billing_agreement_id: String,
    authorization_reference_id: String,
    authorization_amount: String,
    authorization_currency_code: Option<CurrencyCode>,
    seller_authorization_note: Option<String>,
    transaction_timeout: Option<String>,
    capture_now: Option<bool>,
    soft_descriptor: Option<String>,
    seller_note: Option<String>,
    platform_id: Option<String>,
    seller_order_id: Option<String>,
    store_name: Option<String>,
    custom_information: Option<String>,
    inherit_shipping_address: Option<bool>,
    mws_auth_token: Option<String>,
}

impl AuthorizeOnBillingAgreementRequest {
    pub fn new(
        amazon_billing_agreement_id: impl Into<String>,
        authorization_reference_id: impl Into<String>,
        authorization_amount: impl Into<String>,
    ) -> Result<Self, RequestError> {
        Ok(Self {
            amazon_billing_agreement_id: required(
                "AmazonBillingAgreementId",
                amazon_billing_agreement_id,
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
            seller_note: None,
            platform_id: None,
            seller_order_id: None,
            store_name: None,
            custom_information: None,
            inherit_shipping_address: None,
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

    pub fn with_seller_note(mut self, note: impl Into<String>) -> Self {
        self.seller_note = Some(note.into());
        self
    }

    pub fn with_platform_id(mut self, platform_id: impl Into<String>) -> Self {
        self.platform_id = Some(platform_id.into());
        self
    }

    pub fn with_seller_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.seller_order_id = Some(order_id.into());
        self
    }

    pub fn with_store_name(mut self, store_name: impl Into<String>) -> Self {
        self.store_name = Some(store_name.into());
        self
    }

    pub fn with_custom_information(mut self, info: impl Into<String>) -> Self {
        self.custom_information = Some(info.into());
        self
    }

    pub fn with_inherit_shipping_address(mut self, inherit: bool) -> Self {
        self.inherit_shipping_address = Some(inherit);
        self
    }

    #[deprecated(note = "use `with_inherit_shipping_address` with a bool")]
    pub fn with_inherit_shipping_address_str(self, inherit: &str) -> Self {
        self.with_inherit_shipping_address(parse_flag(inherit))
    }

    pub fn amazon_billing_agreement_id(&self) -> &str {
        &self.amazon_billing_agreement_id
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

    pub fn seller_note(&self) -> Option<&str> {
        self.seller_note.as_deref()
    }

    pub fn platform_id(&self) -> Option<&str> {
        self.platform_id.as_deref()
    }

    pub fn seller_order_id(&self) -> Option<&str> {
        self.seller_order_id.as_deref()
    }

    pub fn store_name(&self) -> Option<&str> {
        self.store_name.as_deref()
    }

    pub fn custom_information(&self) -> Option<&str> {
        self.custom_information.as_deref()
    }

    pub fn inherit_shipping_address(&self) -> Option<bool> {
        self.inherit_shipping_address
    }
}

impl ApiRequest for AuthorizeOnBillingAgreementRequest {
    const ACTION: &'static str = "AuthorizeOnBillingAgreement";

    fn to_params(&self) -> Params {
        const SELLER: &str = "SellerOrderAttributes";
        ParamsBuilder::new()
            .put("AmazonBillingAgreementId", &self.amazon_billing_agreement_id)
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
            .put_opt("SellerNote", self.seller_note.as_deref())
            .put_opt("PlatformId", self.platform_id.as_deref())
            .put_opt(&format!("{SELLER}.SellerOrderId"), self.seller_order_id.as_deref())
            .put_opt(&format!("{SELLER}.StoreName"), self.store_name.as_deref())
            .put_opt(&format!("{SELLER}.CustomInformation"), self.custom_information.as_deref())
            .put_flag("InheritShippingAddress", self.inherit_shipping_address)
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

/// Closes a billing agreement so it can no longer be charged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseBillingAgreementRequest {
    amazon_billing_agreement_id: String,
    closure_reason: Option<String>,
    mws_auth_token: Option<String>,
}

impl CloseBillingAgreementRequest {
    pub fn new(amazon_billing_agreement_id: impl Into<String>) -> Result<Self, RequestError> {
        Ok(Self {
            amazon_billing_agreement_id: required(
                "AmazonBillingAgreementId",
                amazon_billing_agreement_id,
            )?,
            closure_reason: None,
            mws_auth_token: None,
        })
    }

    pub fn with_closure_reason(mut self, reason: impl Into<String>) -> Self {
        self.closure_reason = Some(reason.into());
        self
    }

    pub fn amazon_billing_agreement_id(&self) -> &str {
        &self.amazon_billing_agreement_id
    }

    pub fn closure_reason(&self) -> Option<&str> {
        self.closure_reason.as_deref()
    }
}

impl ApiRequest for CloseBillingAgreementRequest {
    const ACTION: &'static str = "CloseBillingAgreement";

    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .put("AmazonBillingAgreementId", &self.amazon_billing_agreement_id)
            .put_opt("ClosureReason", self.closure_reason.as_deref())
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

mws_auth_token!(
    GetBillingAgreementDetailsRequest,
    SetBillingAgreementDetailsRequest,
    ConfirmBillingAgreementRequest,
    ValidateBillingAgreementRequest,
    AuthorizeOnBillingAgreementRequest,
    CloseBillingAgreementRequest,
);

#[cfg(test)]
mod tests {
    use super::*;

    const BILLING_AGREEMENT_ID: &str = "CTEST_AMAZON_BILLING_AGREEMENT_ID";

    #[test]
    fn test_get_billing_agreement_details_request() {
        let request = GetBillingAgreementDetailsRequest::new(BILLING_AGREEMENT_ID)
            .unwrap()
            .with_address_consent_token("AddressConsentToken")
            .with_mws_auth_token("TEST_MWS_AUTH_TOKEN");

        assert_eq!(request.amazon_billing_agreement_id(), BILLING_AGREEMENT_ID);
        assert_eq!(request.address_consent_token(), Some("AddressConsentToken"));
        assert_eq!(request.mws_auth_token(), Some("TEST_MWS_AUTH_TOKEN"));
    }

    #[test]
    fn test_set_billing_agreement_details_request() {
        let request = SetBillingAgreementDetailsRequest::new(BILLING_AGREEMENT_ID)
            .unwrap()
            .with_custom_information("Sample Information")
            .with_platform_id("A11WKBU7ADWTAU")
            .with_seller_billing_agreement_id("SELLER_BA_ID")
            .with_seller_note("testNote")
            .with_store_name("TestStore");

        assert_eq!(request.seller_billing_agreement_id(), Some("SELLER_BA_ID"));
        let params = request.to_params();
        assert_eq!(params["BillingAgreementAttributes.PlatformId"], "A11WKBU7ADWTAU");
        assert_eq!(
            params["BillingAgreementAttributes.SellerBillingAgreementAttributes.StoreName"],
            "TestStore"
        );
    }

    #[test]
    fn test_confirm_and_validate_billing_agreement() {
        let confirm = ConfirmBillingAgreementRequest::new(BILLING_AGREEMENT_ID)
            .unwrap()
            .with_success_url("https://shop.example/ok")
            .with_failure_url("https://shop.example/fail");
        assert_eq!(confirm.success_url(), Some("https://shop.example/ok"));
        assert_eq!(confirm.failure_url(), Some("https://shop.example/fail"));

        let validate = ValidateBillingAgreementRequest::new(BILLING_AGREEMENT_ID).unwrap();
        assert_eq!(validate.to_params().len(), 1);
    }

    #[test]
    fn test_authorize_on_billing_agreement_request() {
        let request = AuthorizeOnBillingAgreementRequest::new(
            BILLING_AGREEMENT_ID,
            "TEST_AUTHORIZATION_REFERENCE_ID",
            "1.00",
        )
        .unwrap()
        .with_authorization_currency_code(CurrencyCode::USD)
        .with_capture_now(true)
        .with_custom_information("Sample Information")
        .with_inherit_shipping_address(false)
        .with_platform_id("A11WKBU7ADWTAU")
        .with_seller_authorization_note("testNote")
        .with_seller_note("testNote")
        .with_seller_order_id("1234-5678")
        .with_soft_descriptor("AMZNTestTest")
        .with_store_name("TestStore")
        .with_transaction_timeout("5");

        assert_eq!(request.inherit_shipping_address(), Some(false));
        assert_eq!(request.transaction_timeout(), Some("5"));

        let params = request.to_params();
        assert_eq!(params["AmazonBillingAgreementId"], BILLING_AGREEMENT_ID);
        assert_eq!(params["AuthorizationAmount.CurrencyCode"], "USD");
        assert_eq!(params["InheritShippingAddress"], "false");
        assert_eq!(params["SellerOrderAttributes.SellerOrderId"], "1234-5678");
        assert_eq!(params["CaptureNow"], "true");
    }

    #[test]
    #[allow(deprecated)]
    fn test_inherit_shipping_address_string_form() {
        let base = AuthorizeOnBillingAgreementRequest::new(BILLING_AGREEMENT_ID, "ref", "1").unwrap();
        assert_eq!(
            base.clone()
                .with_inherit_shipping_address_str("True")
                .inherit_shipping_address(),
            Some(true)
        );
        assert_eq!(
            base.with_inherit_shipping_address_str("1")
                .inherit_shipping_address(),
            Some(false)
        );
    }

    #[test]
    fn test_close_billing_agreement_request() {
        let request = CloseBillingAgreementRequest::new(BILLING_AGREEMENT_ID)
            .unwrap()
            .with_closure_reason("testNote");
        assert_eq!(request.closure_reason(), Some("testNote"));
        assert!(CloseBillingAgreementRequest::new("").is_err());
    }

    #[test]
    fn test_set_billing_agreement_details_unset_fields_are_empty() {
        let request = SetBillingAgreementDetailsRequest::new(BILLING_AGREEMENT_ID).unwrap();
        assert_eq!(request.platform_id(), None);
        assert_eq!(request.seller_note(), None);
        assert_eq!(request.seller_billing_agreement_id(), None);
        assert_eq!(request.store_name(), None);
        assert_eq!(request.custom_information(), None);
        assert_eq!(request.mws_auth_token(), None);

        let params = request.to_params();
        let keys: Vec<&str> = params.keys().map(String::as_str).collect();
        assert_eq!(keys, ["AmazonBillingAgreementId"]);
    }

    #[test]
    fn test_authorize_on_billing_agreement_unset_fields_are_empty() {
        let request =
            AuthorizeOnBillingAgreementRequest::new(BILLING_AGREEMENT_ID, "ref-1", "1.00").unwrap();
        assert_eq!(request.authorization_currency_code(), None);
        assert_eq!(request.seller_authorization_note(), None);
        assert_eq!(request.transaction_timeout(), None);
        assert_eq!(request.capture_now(), None);
        assert_eq!(request.soft_descriptor(), None);
        assert_eq!(request.seller_note(), None);
        assert_eq!(request.platform_id(), None);
        assert_eq!(request.seller_order_id(), None);
        assert_eq!(request.store_name(), None);
        assert_eq!(request.custom_information(), None);
        assert_eq!(request.inherit_shipping_address(), None);
        assert_eq!(request.mws_auth_token(), None);

        let params = request.to_params();
        let keys: Vec<&str> = params.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "AmazonBillingAgreementId",
                "AuthorizationAmount.Amount",
                "AuthorizationReferenceId",
            ]
        );
    }
}
