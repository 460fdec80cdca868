//! A caller-owned index of detail objects.
//!
//! Useful when one flow looks up several related objects (an order
//! reference, its authorizations, their captures and refunds) and wants to
//! query them by id afterwards.

use std::collections::HashMap;

use crate::model::{AuthorizationDetails, CaptureDetails, OrderReferenceDetails, RefundDetails};

/// Detail types that can be stored in [`PaymentDetails`].
pub trait Detail: Sized {
    /// The id the service assigned to this object.
    fn key(&self) -> &str;

    #[doc(hidden)]
    fn slot(details: &PaymentDetails) -> &HashMap<String, Self>;

    #[doc(hidden)]
    fn slot_mut(details: &mut PaymentDetails) -> &mut HashMap<String, Self>;
}

/// One map per detail kind, keyed by whatever the caller inserted under.
///
/// Inserting under an existing key replaces the previous entry. There is no
/// eviction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentDetails {
    order_references: HashMap<String, OrderReferenceDetails>,
    authorizations: HashMap<String, AuthorizationDetails>,
    captures: HashMap<String, CaptureDetails>,
    refunds: HashMap<String, RefundDetails>,
}

impl PaymentDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `detail` under `key`, returning what was there before.
    pub fn put<D: Detail>(&mut self, key: impl Into<String>, detail: D) -> Option<D> {
        D::slot_mut(self).insert(key.into(), detail)
    }

    /// Stores `detail` under its own id.
    pub fn register<D: Detail>(&mut self, detail: D) -> Option<D> {
        let key = detail.key().to_string();
        self.put(key, detail)
    }

    /// The whole map for one detail kind.
    pub fn get<D: Detail>(&self) -> &HashMap<String, D> {
        D::slot(self)
    }

    pub fn lookup<D: Detail>(&self, key: &str) -> Option<&D> {
        D::slot(self).get(key)
    }

    /// Total number of stored objects across all kinds.
    pub fn len(&self) -> usize {
        self.order_references.len() + self.authorizations.len() + self.captures.len() + self.refunds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! detail {
    ($ty:ty, $field:ident, $key:ident) => {
        impl Detail for $ty {
            fn key(&self) -> &str {
                &self.$key
            }

            fn slot(details: &PaymentDetails) -> &HashMap<String, Self> {
                &details.$field
            }

            fn slot_mut(details: &mut PaymentDetails) -> &mut HashMap<String, Self> {
                &mut details.$field
            }
        }
    };
}

detail!(OrderReferenceDetails, order_references, amazon_order_reference_id);
detail!(AuthorizationDetails, authorizations, amazon_authorization_id);
detail!(CaptureDetails, captures, amazon_capture_id);
detail!(RefundDetails, refunds, amazon_refund_id);
