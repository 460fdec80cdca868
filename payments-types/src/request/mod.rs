//! Request builders, one per remote operation.
//!
//! Every builder takes the fields the operation cannot do without in its
//! constructor (which fails with [`RequestError`](crate::RequestError) when
//! one is empty) and exposes the rest as consuming `with_*` setters. A setter
//! overwrites whatever was set before; list-valued setters store the given
//! sequence verbatim. Getters return `None` (or an empty slice) for anything
//! that was never set.
//!
//! [`ApiRequest::to_params`] flattens a builder into the parameter map the
//! transport layer signs and sends.

use std::collections::BTreeMap;

use crate::domain::{CurrencyCode, ProviderCredit};

/// Parameter name to value, in deterministic order.
pub type Params = BTreeMap<String, String>;

/// A request that can be handed to the transport layer.
pub trait ApiRequest {
    /// Name of the remote operation, sent as the `Action` parameter.
    const ACTION: &'static str;

    /// Returns every set field under its canonical parameter name.
    fn to_params(&self) -> Params;
}

/// Normalises the legacy string form of a boolean flag.
///
/// `"true"` in any casing is `true`; everything else is `false`. Values
/// other than `true`/`false` are logged since they are almost always a
/// caller bug.
pub fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        return true;
    }
    if !value.eq_ignore_ascii_case("false") {
        tracing::warn!(value, "unrecognised boolean flag, treating as false");
    }
    false
}

/// Adds `with_mws_auth_token` / `mws_auth_token` to request types that
/// carry an `mws_auth_token: Option<String>` field.
macro_rules! mws_auth_token {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $ty {
                /// Sets the token a solution provider uses to act for a seller.
                pub fn with_mws_auth_token(mut self, token: impl Into<String>) -> Self {
                    self.mws_auth_token = Some(token.into());
                    self
                }

                pub fn mws_auth_token(&self) -> Option<&str> {
                    self.mws_auth_token.as_deref()
                }
            }
        )+
    };
}

mod authorization;
mod billing_agreement;
mod capture;
mod charge;
mod order_reference;
mod provider_credit;
mod refund;
mod status;

pub use authorization::{AuthorizeRequest, CloseAuthorizationRequest, GetAuthorizationDetailsRequest};
pub use billing_agreement::{
    AuthorizeOnBillingAgreementRequest, CloseBillingAgreementRequest,
    ConfirmBillingAgreementRequest, GetBillingAgreementDetailsRequest,
    SetBillingAgreementDetailsRequest, ValidateBillingAgreementRequest,
};
pub use capture::{CaptureRequest, GetCaptureDetailsRequest};
pub use charge::ChargeRequest;
pub use order_reference::{
    CancelOrderReferenceRequest, CloseOrderReferenceRequest, ConfirmOrderReferenceRequest,
    CreateOrderReferenceForIdRequest, GetOrderReferenceDetailsRequest,
    ListOrderReferenceByNextTokenRequest, ListOrderReferenceRequest, SetOrderAttributesRequest,
    SetOrderReferenceDetailsRequest,
};
pub use provider_credit::{
    GetProviderCreditDetailsRequest, GetProviderCreditReversalDetailsRequest,
    ReverseProviderCreditRequest,
};
pub use refund::{GetRefundDetailsRequest, RefundRequest};
pub use status::{GetMerchantAccountStatusRequest, GetServiceStatusRequest};

/// Accumulates parameters, skipping anything unset.
#[derive(Debug, Default)]
pub(crate) struct ParamsBuilder {
    params: Params,
}

impl ParamsBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn put(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub(crate) fn put_opt(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.put(key, v),
            None => self,
        }
    }

    pub(crate) fn put_flag(self, key: &str, value: Option<bool>) -> Self {
        match value {
            Some(v) => self.put(key, v.to_string()),
            None => self,
        }
    }

    /// Writes `<prefix>.Amount` and `<prefix>.CurrencyCode`.
    pub(crate) fn put_amount(
        self,
        prefix: &str,
        amount: Option<&str>,
        currency: Option<CurrencyCode>,
    ) -> Self {
        self.put_opt(&format!("{prefix}.Amount"), amount)
            .put_opt(&format!("{prefix}.CurrencyCode"), currency.map(|c| c.as_str()))
    }

    /// Writes `<list>.member.<n>.ProviderId` and `<list>.member.<n>.<amount_field>.*`.
    pub(crate) fn put_provider_credits(
        mut self,
        list: &str,
        amount_field: &str,
        credits: &[ProviderCredit],
    ) -> Self {
        for (index, credit) in credits.iter().enumerate() {
            let member = format!("{list}.member.{}", index + 1);
            let amount = credit.credit_amount();
            self = self
                .put(&format!("{member}.ProviderId"), credit.provider_id())
                .put(&format!("{member}.{amount_field}.Amount"), amount.amount())
                .put(
                    &format!("{member}.{amount_field}.CurrencyCode"),
                    amount.currency_code(),
                );
        }
        self
    }

    /// Writes `<prefix>.<n>` for each value, 1-based.
    pub(crate) fn put_list<S: AsRef<str>>(mut self, prefix: &str, values: &[S]) -> Self {
        for (index, value) in values.iter().enumerate() {
            self = self.put(&format!("{prefix}.{}", index + 1), value.as_ref());
        }
        self
    }

    pub(crate) fn build(self) -> Params {
        self.params
    }
}
