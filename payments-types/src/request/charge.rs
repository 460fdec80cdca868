//! The composite charge request.
//!
//! A charge has no wire action of its own. Depending on the kind of the
//! reference id it expands into either the order reference flow
//! (`SetOrderReferenceDetails`, `ConfirmOrderReference`, `Authorize`) or a
//! single `AuthorizeOnBillingAgreement`.

use crate::domain::{AmazonReferenceIdType, CurrencyCode, ProviderCredit};
use crate::error::{RequestError, required};

use super::{
    AuthorizeOnBillingAgreementRequest, AuthorizeRequest, ConfirmOrderReferenceRequest,
    SetOrderReferenceDetailsRequest, parse_flag,
};

/// Everything needed to charge a buyer in one call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChargeRequest {
    amazon_reference_id: Option<String>,
    charge_reference_id: Option<String>,
    amount: Option<String>,
    currency_code: Option<CurrencyCode>,
    charge_note: Option<String>,
    charge_order_id: Option<String>,
    store_name: Option<String>,
    custom_information: Option<String>,
    platform_id: Option<String>,
    transaction_timeout: Option<String>,
    capture_now: Option<bool>,
    soft_descriptor: Option<String>,
    provider_credit: Vec<ProviderCredit>,
    inherit_shipping_address: Option<bool>,
    mws_auth_token: Option<String>,
}

impl ChargeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the order reference or billing agreement id to charge.
    pub fn with_amazon_reference_id(mut self, id: impl Into<String>) -> Self {
        self.amazon_reference_id = Some(id.into());
        self
    }

    pub fn with_charge_reference_id(mut self, id: impl Into<String>) -> Self {
        self.charge_reference_id = Some(id.into());
        self
    }

    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    pub fn with_currency_code(mut self, currency: CurrencyCode) -> Self {
        self.currency_code = Some(currency);
        self
    }

    pub fn with_charge_note(mut self, note: impl Into<String>) -> Self {
        self.charge_note = Some(note.into());
        self
    }

    pub fn with_charge_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.charge_order_id = Some(order_id.into());
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

    pub fn with_platform_id(mut self, platform_id: impl Into<String>) -> Self {
        self.platform_id = Some(platform_id.into());
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

    pub fn with_provider_credit(mut self, credits: Vec<ProviderCredit>) -> Self {
        self.provider_credit = credits;
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

    pub fn with_mws_auth_token(mut self, token: impl Into<String>) -> Self {
        self.mws_auth_token = Some(token.into());
        self
    }

    pub fn amazon_reference_id(&self) -> Option<&str> {
        self.amazon_reference_id.as_deref()
    }

    pub fn charge_reference_id(&self) -> Option<&str> {
        self.charge_reference_id.as_deref()
    }

    pub fn amount(&self) -> Option<&str> {
        self.amount.as_deref()
    }

    pub fn currency_code(&self) -> Option<CurrencyCode> {
        self.currency_code
    }

    pub fn charge_note(&self) -> Option<&str> {
        self.charge_note.as_deref()
    }

    pub fn charge_order_id(&self) -> Option<&str> {
        self.charge_order_id.as_deref()
    }

    pub fn store_name(&self) -> Option<&str> {
        self.store_name.as_deref()
    }

    pub fn custom_information(&self) -> Option<&str> {
        self.custom_information.as_deref()
    }

    pub fn platform_id(&self) -> Option<&str> {
        self.platform_id.as_deref()
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

    pub fn inherit_shipping_address(&self) -> Option<bool> {
        self.inherit_shipping_address
    }

    pub fn mws_auth_token(&self) -> Option<&str> {
        self.mws_auth_token.as_deref()
    }

    /// Classifies the reference id by its first letter.
    ///
    /// `S`/`P` ids are order references, `C`/`B` ids are billing agreements.
    /// Anything else, or no id at all, yields `None`.
    pub fn reference_kind(&self) -> Option<AmazonReferenceIdType> {
        let first = self.amazon_reference_id.as_deref()?.trim().chars().next()?;
        match first.to_ascii_uppercase() {
            'S' | 'P' => Some(AmazonReferenceIdType::OrderReference),
            'C' | 'B' => Some(AmazonReferenceIdType::BillingAgreement),
            _ => None,
        }
    }

    fn reference_id(&self) -> Result<String, RequestError> {
        required(
            "AmazonReferenceId",
            self.amazon_reference_id.clone().unwrap_or_default(),
        )
    }

    fn amount_value(&self) -> Result<String, RequestError> {
        required("Amount", self.amount.clone().unwrap_or_default())
    }

    /// First step of the order reference flow.
    pub fn to_set_order_reference_details(
        &self,
    ) -> Result<SetOrderReferenceDetailsRequest, RequestError> {
        let mut request = SetOrderReferenceDetailsRequest::new(self.reference_id()?, self.amount_value()?)?;
        if let Some(currency) = self.currency_code {
            request = request.with_order_currency_code(currency);
        }
        if let Some(note) = &self.charge_note {
            request = request.with_seller_note(note);
        }
        if let Some(order_id) = &self.charge_order_id {
            request = request.with_seller_order_id(order_id);
        }
        if let Some(store_name) = &self.store_name {
            request = request.with_store_name(store_name);
        }
        if let Some(info) = &self.custom_information {
            request = request.with_custom_information(info);
        }
        if let Some(platform_id) = &self.platform_id {
            request = request.with_platform_id(platform_id);
        }
        if let Some(token) = &self.mws_auth_token {
            request = request.with_mws_auth_token(token);
        }
        Ok(request)
    }

    /// Second step of the order reference flow.
    pub fn to_confirm_order_reference(&self) -> Result<ConfirmOrderReferenceRequest, RequestError> {
        let mut request = ConfirmOrderReferenceRequest::new(self.reference_id()?)?;
        if let Some(token) = &self.mws_auth_token {
            request = request.with_mws_auth_token(token);
        }
        Ok(request)
    }

    /// Final step of the order reference flow.
    pub fn into_authorize(self) -> Result<AuthorizeRequest, RequestError> {
        let mut request = AuthorizeRequest::new(
            self.reference_id()?,
            required(
                "ChargeReferenceId",
                self.charge_reference_id.clone().unwrap_or_default(),
            )?,
            self.amount_value()?,
        )?
        .with_provider_credit(self.provider_credit);
        if let Some(currency) = self.currency_code {
            request = request.with_authorization_currency_code(currency);
        }
        if let Some(note) = self.charge_note {
            request = request.with_seller_authorization_note(note);
        }
        if let Some(timeout) = self.transaction_timeout {
            request = request.with_transaction_timeout(timeout);
        }
        if let Some(capture_now) = self.capture_now {
            request = request.with_capture_now(capture_now);
        }
        if let Some(descriptor) = self.soft_descriptor {
            request = request.with_soft_descriptor(descriptor);
        }
        if let Some(token) = self.mws_auth_token {
            request = request.with_mws_auth_token(token);
        }
        Ok(request)
    }

    /// The single step of the billing agreement flow.
    pub fn into_authorize_on_billing_agreement(
        self,
    ) -> Result<AuthorizeOnBillingAgreementRequest, RequestError> {
        let mut request = AuthorizeOnBillingAgreementRequest::new(
            self.reference_id()?,
            required(
                "ChargeReferenceId",
                self.charge_reference_id.clone().unwrap_or_default(),
            )?,
            self.amount_value()?,
        )?;
        if let Some(currency) = self.currency_code {
            request = request.with_authorization_currency_code(currency);
        }
        if let Some(note) = self.charge_note {
            request = request
                .with_seller_authorization_note(note.clone())
                .with_seller_note(note);
        }
        if let Some(order_id) = self.charge_order_id {
            request = request.with_seller_order_id(order_id);
        }
        if let Some(store_name) = self.store_name {
            request = request.with_store_name(store_name);
        }
        if let Some(info) = self.custom_information {
            request = request.with_custom_information(info);
        }
        if let Some(platform_id) = self.platform_id {
            request = request.with_platform_id(platform_id);
        }
        if let Some(timeout) = self.transaction_timeout {
            request = request.with_transaction_timeout(timeout);
        }
        if let Some(capture_now) = self.capture_now {
            request = request.with_capture_now(capture_now);
        }
        if let Some(descriptor) = self.soft_descriptor {
            request = request.with_soft_descriptor(descriptor);
        }
        if let Some(inherit) = self.inherit_shipping_address {
            request = request.with_inherit_shipping_address(inherit);
        }
        if let Some(token) = self.mws_auth_token {
            request = request.with_mws_auth_token(token);
        }
        Ok(request)
    }
}
