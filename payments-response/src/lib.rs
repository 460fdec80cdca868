//! # Payments Response
//!
//! Reads the XML bodies returned by the payments API.
//!
//! - `parser` - status-driven dispatch into a typed envelope or a typed error
//! - `response` - one envelope per operation
//! - `model` - detail objects and their building blocks
//! - `xml` - lossless event documents that render back to their source
//! - `aggregate` - caller-owned index of detail objects
//! - `error` - client-side vs service-side failures
//!
//! Parsing performs no I/O and holds no shared state.

pub mod aggregate;
pub mod error;
pub mod model;
pub mod parser;
pub mod response;
pub mod xml;

pub use aggregate::{Detail, PaymentDetails};
pub use error::{ClientError, ResponseError, ServiceError};
pub use parser::{ParsedResponse, parse};
pub use response::{ResponseMetadata, ResponseSchema};
pub use xml::{XmlDocument, XmlError};
