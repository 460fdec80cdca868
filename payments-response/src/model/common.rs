//! Building blocks shared by several detail types.

use chrono::{DateTime, Utc};
use payments_types::ParentType;
use serde::Deserialize;

/// A `<member>` list, the service's encoding for repeated values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MemberList<T> {
    #[serde(default = "Vec::new")]
    pub member: Vec<T>,
}

impl<T> MemberList<T> {
    pub fn len(&self) -> usize {
        self.member.len()
    }

    pub fn is_empty(&self) -> bool {
        self.member.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.member.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.member.iter()
    }
}

impl<T> Default for MemberList<T> {
    fn default() -> Self {
        Self { member: Vec::new() }
    }
}

/// State of an object plus why it got there.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Status {
    pub state: String,
    pub last_update_timestamp: Option<DateTime<Utc>>,
    pub reason_code: Option<String>,
    pub reason_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    pub name: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_line3: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub district: Option<String>,
    pub state_or_region: Option<String>,
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
    pub phone: Option<String>,
}

/// Where the order ships. Only physical destinations are populated today.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Destination {
    pub destination_type: Option<String>,
    pub physical_destination: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BillingAddress {
    pub address_type: Option<String>,
    pub physical_address: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Buyer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Constraint {
    #[serde(rename = "ConstraintID")]
    pub constraint_id: String,
    pub description: Option<String>,
}

/// Conditions that keep an object from being confirmed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Constraints {
    #[serde(rename = "Constraint", default)]
    pub constraint: Vec<Constraint>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderItemCategories {
    #[serde(rename = "OrderItemCategory", default)]
    pub order_item_category: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SellerOrderAttributes {
    pub seller_order_id: Option<String>,
    pub store_name: Option<String>,
    pub custom_information: Option<String>,
    pub supplementary_data: Option<String>,
    pub order_item_categories: Option<OrderItemCategories>,
}

/// The object this one was created from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ParentDetails {
    pub id: String,
    #[serde(rename = "Type")]
    pub parent_type: ParentType,
}

/// How the buyer's payment instrument is shown back to them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentDescriptor {
    pub name: Option<String>,
    pub account_number_tail: Option<String>,
    pub full_descriptor: Option<String>,
    pub use_amazon_balance_first: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentReference {
    pub static_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentAuthenticationStatus {
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentServiceProviderAttributes {
    pub payment_service_provider_id: Option<String>,
    pub payment_service_provider_order_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProviderCreditSummary {
    pub provider_credit_id: String,
    pub provider_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProviderCreditReversalSummary {
    pub provider_credit_reversal_id: String,
    pub provider_id: Option<String>,
}
