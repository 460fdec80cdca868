//! Order reference details.

use chrono::{DateTime, Utc};
use payments_types::{Environment, Price};
use serde::Deserialize;

use super::common::{
    BillingAddress, Buyer, Constraints, Destination, MemberList, ParentDetails,
    PaymentAuthenticationStatus, PaymentDescriptor, PaymentReference,
    PaymentServiceProviderAttributes, SellerOrderAttributes, Status,
};

/// Full state of an order reference.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderReferenceDetails {
    pub amazon_order_reference_id: String,
    pub buyer: Option<Buyer>,
    pub order_total: Option<Price>,
    pub seller_note: Option<String>,
    pub platform_id: Option<String>,
    pub destination: Option<Destination>,
    pub billing_address: Option<BillingAddress>,
    pub release_environment: Option<Environment>,
    pub seller_order_attributes: Option<SellerOrderAttributes>,
    pub order_reference_status: Option<Status>,
    pub constraints: Option<Constraints>,
    pub creation_timestamp: Option<DateTime<Utc>>,
    pub expiration_timestamp: Option<DateTime<Utc>>,
    pub id_list: Option<MemberList<String>>,
    pub parent_details: Option<ParentDetails>,
    pub payment_descriptor: Option<PaymentDescriptor>,
    pub payment_reference: Option<PaymentReference>,
    pub payment_authentication_status: Option<PaymentAuthenticationStatus>,
    pub payment_service_provider_attributes: Option<PaymentServiceProviderAttributes>,
    pub order_language: Option<String>,
    pub request_payment_authorization: Option<bool>,
}

impl OrderReferenceDetails {
    /// Current state, e.g. `Draft`, `Open` or `Closed`.
    pub fn state(&self) -> Option<&str> {
        self.order_reference_status.as_ref().map(|s| s.state.as_str())
    }

    /// Authorization ids created against this order reference.
    pub fn authorization_ids(&self) -> &[String] {
        self.id_list.as_ref().map(|l| l.member.as_slice()).unwrap_or_default()
    }
}

/// One entry of a `ListOrderReference` page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderReference {
    pub amazon_order_reference_id: String,
    pub release_environment: Option<Environment>,
    pub order_total: Option<Price>,
    pub seller_order_attributes: Option<SellerOrderAttributes>,
    pub order_reference_status: Option<Status>,
    pub creation_timestamp: Option<DateTime<Utc>>,
    pub seller_note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OrderReferenceList {
    #[serde(rename = "OrderReference", default)]
    pub order_reference: Vec<OrderReference>,
}
