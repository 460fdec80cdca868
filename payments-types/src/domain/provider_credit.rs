//! Provider credits attached to authorizations, captures and refunds.

use serde::Deserialize;

use super::money::Price;

/// A credit paid out to a solution provider as part of a payment operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProviderCredit {
    provider_id: String,
    credit_amount: Price,
}

impl ProviderCredit {
    /// Creates a provider credit.
    pub fn new(provider_id: impl Into<String>, credit_amount: Price) -> Self {
        Self {
            provider_id: provider_id.into(),
            credit_amount,
        }
    }

    /// Returns the provider identifier.
    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    /// Returns the credited amount.
    pub fn credit_amount(&self) -> &Price {
        &self.credit_amount
    }
}
