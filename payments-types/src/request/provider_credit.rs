//! Provider credit requests, used by solution providers.

use crate::domain::CurrencyCode;
use crate::error::{RequestError, required};

use super::{ApiRequest, Params, ParamsBuilder};

/// Fetches a provider credit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetProviderCreditDetailsRequest {
    amazon_provider_credit_id: String,
    seller_id: String,
    mws_auth_token: Option<String>,
}

impl GetProviderCreditDetailsRequest {
    pub fn new(
        amazon_provider_credit_id: impl Into<String>,
        seller_id: impl Into<String>,
    ) -> Result<Self, RequestError> {
        Ok(Self {
            amazon_provider_credit_id: required(
                "AmazonProviderCreditId",
                amazon_provider_credit_id,
            )?,
            seller_id: required("SellerId", seller_id)?,
            mws_auth_token: None,
        })
    }

    pub fn amazon_provider_credit_id(&self) -> &str {
        &self.amazon_provider_credit_id
    }

    pub fn seller_id(&self) -> &str {
        &self.seller_id
    }
}

impl ApiRequest for GetProviderCreditDetailsRequest {
    const ACTION: &'static str = "GetProviderCreditDetails";

    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .put("AmazonProviderCreditId", &self.amazon_provider_credit_id)
            .put("SellerId", &self.seller_id)
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

/// Fetches a provider credit reversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetProviderCreditReversalDetailsRequest {
    amazon_provider_credit_reversal_id: String,
    seller_id: String,
    mws_auth_token: Option<String>,
}

impl GetProviderCreditReversalDetailsRequest {
    pub fn new(
        amazon_provider_credit_reversal_id: impl Into<String>,
        seller_id: impl Into<String>,
    ) -> Result<Self, RequestError> {
        Ok(Self {
            amazon_provider_credit_reversal_id: required(
                "AmazonProviderCreditReversalId",
                amazon_provider_credit_reversal_id,
            )?,
            seller_id: required("SellerId", seller_id)?,
            mws_auth_token: None,
        })
    }

    pub fn amazon_provider_credit_reversal_id(&self) -> &str {
        &self.amazon_provider_credit_reversal_id
    }

    pub fn seller_id(&self) -> &str {
        &self.seller_id
    }
}

impl ApiRequest for GetProviderCreditReversalDetailsRequest {
    const ACTION: &'static str = "GetProviderCreditReversalDetails";

    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .put(
                "AmazonProviderCreditReversalId",
                &self.amazon_provider_credit_reversal_id,
            )
            .put("SellerId", &self.seller_id)
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

/// Reverses part or all of a provider credit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseProviderCreditRequest {
    amazon_provider_credit_id: String,
    credit_reversal_reference_id: String,
    seller_id: String,
    credit_reversal_amount: String,
    credit_reversal_currency_code: Option<CurrencyCode>,
    credit_reversal_note: Option<String>,
    mws_auth_token: Option<String>,
}

impl ReverseProviderCreditRequest {
    pub fn new(
        amazon_provider_credit_id: impl Into<String>,
        credit_reversal_reference_id: impl Into<String>,
        seller_id: impl Into<String>,
        credit_reversal_amount: impl Into<String>,
    ) -> Result<Self, RequestError> {
        Ok(Self {
            amazon_provider_credit_id: required(
                "AmazonProviderCreditId",
                amazon_provider_credit_id,
            )?,
            credit_reversal_reference_id: required(
                "CreditReversalReferenceId",
                credit_reversal_reference_id,
            )?,
            seller_id: required("SellerId", seller_id)?,
            credit_reversal_amount: required("CreditReversalAmount", credit_reversal_amount)?,
            credit_reversal_currency_code: None,
            credit_reversal_note: None,
            mws_auth_token: None,
        })
    }

    pub fn with_credit_reversal_currency_code(mut self, currency: CurrencyCode) -> Self {
        self.credit_reversal_currency_code = Some(currency);
        self
    }

    pub fn with_credit_reversal_note(mut self, note: impl Into<String>) -> Self {
        self.credit_reversal_note = Some(note.into());
        self
    }

    pub fn amazon_provider_credit_id(&self) -> &str {
        &self.amazon_provider_credit_id
    }

    pub fn credit_reversal_reference_id(&self) -> &str {
        &self.credit_reversal_reference_id
    }

    pub fn seller_id(&self) -> &str {
        &self.seller_id
    }

    pub fn credit_reversal_amount(&self) -> &str {
        &self.credit_reversal_amount
    }

    pub fn credit_reversal_currency_code(&self) -> Option<CurrencyCode> {
        self.credit_reversal_currency_code
    }

    pub fn credit_reversal_note(&self) -> Option<&str> {
        self.credit_reversal_note.as_deref()
    }
}

impl ApiRequest for ReverseProviderCreditRequest {
    const ACTION: &'static str = "ReverseProviderCredit";

    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .put("AmazonProviderCreditId", &self.amazon_provider_credit_id)
            .put("CreditReversalReferenceId", &self.credit_reversal_reference_id)
            .put("SellerId", &self.seller_id)
            .put_amount(
                "CreditReversalAmount",
                Some(self.credit_reversal_amount.as_str()),
                self.credit_reversal_currency_code,
            )
            .put_opt("CreditReversalNote", self.credit_reversal_note.as_deref())
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

mws_auth_token!(
    GetProviderCreditDetailsRequest,
    GetProviderCreditReversalDetailsRequest,
    ReverseProviderCreditRequest,
);
