//! Billing agreement details.

use chrono::{DateTime, Utc};
use payments_types::{Environment, Price};
use serde::Deserialize;

use super::common::{BillingAddress, Buyer, Constraints, Destination};

/// Full state of a billing agreement.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BillingAgreementDetails {
    pub amazon_billing_agreement_id: String,
    pub billing_agreement_limits: Option<BillingAgreementLimits>,
    pub buyer: Option<Buyer>,
    pub seller_note: Option<String>,
    pub platform_id: Option<String>,
    pub destination: Option<Destination>,
    pub billing_address: Option<BillingAddress>,
    pub release_environment: Option<Environment>,
    pub seller_billing_agreement_attributes: Option<SellerBillingAgreementAttributes>,
    pub billing_agreement_status: Option<BillingAgreementStatus>,
    pub constraints: Option<Constraints>,
    pub creation_timestamp: Option<DateTime<Utc>>,
    pub billing_agreement_consent: Option<bool>,
}

/// Billing agreements report their status with a slightly different
/// timestamp element than other objects.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BillingAgreementStatus {
    pub state: String,
    pub last_updated_timestamp: Option<DateTime<Utc>>,
    pub reason_code: Option<String>,
    pub reason_description: Option<String>,
}

/// Spending limits for the current period.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BillingAgreementLimits {
    pub amount_limit_per_time_period: Option<Price>,
    pub time_period_start_date: Option<DateTime<Utc>>,
    pub time_period_end_date: Option<DateTime<Utc>>,
    pub current_remaining_balance: Option<Price>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SellerBillingAgreementAttributes {
    pub seller_billing_agreement_id: Option<String>,
    pub store_name: Option<String>,
    pub custom_information: Option<String>,
}
