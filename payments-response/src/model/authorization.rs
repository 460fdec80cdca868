//! Authorization details.

use chrono::{DateTime, Utc};
use payments_types::Price;
use serde::Deserialize;

use super::common::{Address, MemberList, Status};

/// Full state of an authorization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthorizationDetails {
    pub amazon_authorization_id: String,
    pub authorization_reference_id: String,
    pub authorization_billing_address: Option<Address>,
    pub seller_authorization_note: Option<String>,
    pub authorization_amount: Price,
    pub captured_amount: Option<Price>,
    pub authorization_fee: Option<Price>,
    /// Capture ids created against this authorization.
    pub id_list: Option<MemberList<String>>,
    pub creation_timestamp: Option<DateTime<Utc>>,
    pub expiration_timestamp: Option<DateTime<Utc>>,
    pub authorization_status: Status,
    pub soft_decline: Option<bool>,
    pub capture_now: Option<bool>,
    pub soft_descriptor: Option<String>,
    pub address_verification_code: Option<String>,
}

impl AuthorizationDetails {
    pub fn state(&self) -> &str {
        &self.authorization_status.state
    }
}
