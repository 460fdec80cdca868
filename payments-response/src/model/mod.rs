//! Typed models for response payloads.
//!
//! Every field the service may omit is an `Option` (or an empty list), so a
//! missing element reads back as `None`, never as an empty string or zero.

pub mod authorization;
pub mod billing_agreement;
pub mod capture;
pub mod common;
pub mod error;
pub mod order_reference;
pub mod provider_credit;
pub mod refund;

pub use authorization::AuthorizationDetails;
pub use billing_agreement::{
    BillingAgreementDetails, BillingAgreementLimits, BillingAgreementStatus,
    SellerBillingAgreementAttributes,
};
pub use capture::CaptureDetails;
pub use common::{
    Address, BillingAddress, Buyer, Constraint, Constraints, Destination, MemberList,
    OrderItemCategories, ParentDetails, PaymentAuthenticationStatus, PaymentDescriptor,
    PaymentReference, PaymentServiceProviderAttributes, ProviderCreditReversalSummary,
    ProviderCreditSummary, SellerOrderAttributes, Status,
};
pub use error::{ErrorDetail, ErrorResponse};
pub use order_reference::{OrderReference, OrderReferenceDetails, OrderReferenceList};
pub use provider_credit::{ProviderCreditDetails, ProviderCreditReversalDetails};
pub use refund::RefundDetails;
