//! Capture details.

use chrono::{DateTime, Utc};
use payments_types::Price;
use serde::Deserialize;

use super::common::{MemberList, ProviderCreditSummary, Status};

/// Full state of a capture.
///
/// `converted_amount` and `conversion_rate` are only present when the
/// capture was made in a currency other than the seller's ledger currency.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CaptureDetails {
    pub amazon_capture_id: String,
    pub capture_reference_id: String,
    pub seller_capture_note: Option<String>,
    pub capture_amount: Price,
    pub refunded_amount: Option<Price>,
    pub capture_fee: Option<Price>,
    /// Refund ids created against this capture.
    pub id_list: Option<MemberList<String>>,
    pub creation_timestamp: Option<DateTime<Utc>>,
    pub capture_status: Status,
    pub soft_descriptor: Option<String>,
    pub converted_amount: Option<Price>,
    pub conversion_rate: Option<String>,
    pub provider_credit_summary_list: Option<MemberList<ProviderCreditSummary>>,
}

impl CaptureDetails {
    pub fn state(&self) -> &str {
        &self.capture_status.state
    }
}
