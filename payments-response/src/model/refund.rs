//! Refund details.

use chrono::{DateTime, Utc};
use payments_types::{Price, RefundType};
use serde::Deserialize;

use super::common::{MemberList, ProviderCreditReversalSummary, Status};

/// Full state of a refund.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RefundDetails {
    pub amazon_refund_id: String,
    pub refund_reference_id: String,
    pub seller_refund_note: Option<String>,
    pub refund_type: Option<RefundType>,
    pub refund_amount: Price,
    pub fee_refunded: Option<Price>,
    pub creation_timestamp: Option<DateTime<Utc>>,
    pub refund_status: Status,
    pub soft_descriptor: Option<String>,
    pub converted_amount: Option<Price>,
    pub conversion_rate: Option<String>,
    pub provider_credit_reversal_summary_list: Option<MemberList<ProviderCreditReversalSummary>>,
}

impl RefundDetails {
    pub fn state(&self) -> &str {
        &self.refund_status.state
    }
}
