//! Small closed enumerations shared by requests and responses.

use serde::Deserialize;

/// Declares an enum whose variants map one-to-one onto wire strings.
///
/// Generates serde renames, `as_str` and `Display` from a single table.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Returns the value used on the wire.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Kind of identifier passed to `CreateOrderReferenceForId` and `Charge`.
    AmazonReferenceIdType {
        OrderReference => "OrderReference",
        BillingAgreement => "BillingAgreement",
    }
}

wire_enum! {
    /// Who initiated a refund.
    RefundType {
        SellerInitiated => "SellerInitiated",
    }
}

wire_enum! {
    /// Environment an object was created in.
    Environment {
        Live => "Live",
        Sandbox => "Sandbox",
    }
}

wire_enum! {
    /// Overall health reported by `GetServiceStatus`.
    ServiceStatus {
        Green => "GREEN",
        /// Green with informational messages attached.
        GreenI => "GREEN_I",
        Yellow => "YELLOW",
        Red => "RED",
    }
}

wire_enum! {
    /// Merchant account state reported by `GetMerchantAccountStatus`.
    AccountStatus {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
    }
}

wire_enum! {
    /// Outcome of `ValidateBillingAgreement`.
    RequestStatus {
        Success => "Success",
        Failure => "Failure",
    }
}

wire_enum! {
    /// Type of the object an order reference was created from.
    ParentType {
        BillingAgreement => "BillingAgreement",
    }
}

wire_enum! {
    SortOrder {
        Ascending => "Ascending",
        Descending => "Descending",
    }
}

wire_enum! {
    /// Marketplace domain used to scope `ListOrderReference` queries.
    PaymentDomain {
        NaUsd => "NA_USD",
        EuEur => "EU_EUR",
        UkGbp => "UK_GBP",
    }
}

wire_enum! {
    /// Order reference states accepted by the list filter.
    OrderReferenceState {
        Open => "Open",
        Closed => "Closed",
        Suspended => "Suspended",
        Canceled => "Canceled",
    }
}
