//! Provider credit and provider credit reversal details.

use chrono::{DateTime, Utc};
use payments_types::Price;
use serde::Deserialize;

use super::common::{MemberList, Status};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProviderCreditDetails {
    pub amazon_provider_credit_id: String,
    pub seller_id: Option<String>,
    pub provider_id: Option<String>,
    pub credit_reference_id: Option<String>,
    pub credit_amount: Price,
    pub credit_reversal_amount: Option<Price>,
    pub credit_reversal_id_list: Option<MemberList<String>>,
    pub creation_timestamp: Option<DateTime<Utc>>,
    pub credit_status: Status,
}

impl ProviderCreditDetails {
    /// Reversal ids, in the order the service listed them.
    pub fn credit_reversal_ids(&self) -> &[String] {
        self.credit_reversal_id_list
            .as_ref()
            .map(|l| l.member.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProviderCreditReversalDetails {
    pub amazon_provider_credit_reversal_id: String,
    pub seller_id: Option<String>,
    pub provider_id: Option<String>,
    pub credit_reversal_reference_id: Option<String>,
    pub credit_reversal_amount: Price,
    pub creation_timestamp: Option<DateTime<Utc>>,
    pub credit_reversal_status: Status,
    pub credit_reversal_note: Option<String>,
}
