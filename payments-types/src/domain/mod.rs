//! Primitive value types shared by requests and responses.

pub mod enums;
pub mod money;
pub mod provider_credit;
pub mod response_data;

pub use enums::{
    AccountStatus, AmazonReferenceIdType, Environment, OrderReferenceState, ParentType,
    PaymentDomain, RefundType, RequestStatus, ServiceStatus, SortOrder,
};
pub use money::{CurrencyCode, Price};
pub use provider_credit::ProviderCredit;
pub use response_data::ResponseData;
