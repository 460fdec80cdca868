//! # Payments Types
//!
//! Value types, request builders and port traits for the payments API.
//! This crate has no IO dependencies: only data structures, construction
//! rules, and trait definitions.
//!
//! - `domain/` - Primitive value types (Price, CurrencyCode, ProviderCredit, enums)
//! - `request/` - One builder per remote operation
//! - `ports/` - Trait definitions that adapters must implement
//! - `error/` - Construction errors

pub mod domain;
pub mod error;
pub mod ports;
pub mod request;

// Re-export commonly used types
pub use domain::{
    AccountStatus, AmazonReferenceIdType, CurrencyCode, Environment, OrderReferenceState,
    ParentType, PaymentDomain, Price, ProviderCredit, RefundType, RequestStatus, ResponseData,
    ServiceStatus, SortOrder,
};
pub use error::RequestError;
pub use ports::{Transport, TransportError};
pub use request::{ApiRequest, Params, parse_flag};
