//! Order reference requests.

use crate::domain::{AmazonReferenceIdType, CurrencyCode, OrderReferenceState, PaymentDomain, SortOrder};
use crate::error::{RequestError, required};

use super::{ApiRequest, Params, ParamsBuilder, parse_flag};

/// Fetches the current state of an order reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetOrderReferenceDetailsRequest {
    amazon_order_reference_id: String,
    address_consent_token: Option<String>,
    access_token: Option<String>,
    mws_auth_token: Option<String>,
}

impl GetOrderReferenceDetailsRequest {
    pub fn new(amazon_order_reference_id: impl Into<String>) -> Result<Self, RequestError> {
        Ok(Self {
            amazon_order_reference_id: required(
                "AmazonOrderReferenceId",
                amazon_order_reference_id,
            )?,
            address_consent_token: None,
            access_token: None,
            mws_auth_token: None,
        })
    }

    pub fn with_address_consent_token(mut self, token: impl Into<String>) -> Self {
        self.address_consent_token = Some(token.into());
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn amazon_order_reference_id(&self) -> &str {
        &self.amazon_order_reference_id
    }

    pub fn address_consent_token(&self) -> Option<&str> {
        self.address_consent_token.as_deref()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

impl ApiRequest for GetOrderReferenceDetailsRequest {
    const ACTION: &'static str = "GetOrderReferenceDetails";

    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .put("AmazonOrderReferenceId", &self.amazon_order_reference_id)
            .put_opt("AddressConsentToken", self.address_consent_token.as_deref())
            .put_opt("AccessToken", self.access_token.as_deref())
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

/// Sets amount and seller attributes on a draft order reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetOrderReferenceDetailsRequest {
    amazon_order_reference_id: String,
    order_amount: String,
    order_currency_code: Option<CurrencyCode>,
    platform_id: Option<String>,
    seller_note: Option<String>,
    seller_order_id: Option<String>,
    store_name: Option<String>,
    custom_information: Option<String>,
    supplementary_data: Option<String>,
    request_payment_authorization: Option<bool>,
    mws_auth_token: Option<String>,
}

impl SetOrderReferenceDetailsRequest {
    pub fn new(
        amazon_order_reference_id: impl Into<String>,
        order_amount: impl Into<String>,
    ) -> Result<Self, RequestError> {
        Ok(Self {
            amazon_order_reference_id: required(
                "AmazonOrderReferenceId",
                amazon_order_reference_id,
            )?,
            order_amount: required("OrderTotal", order_amount)?,
            order_currency_code: None,
            platform_id: None,
            seller_note: None,
            seller_order_id: None,
            store_name: None,
            custom_information: None,
            supplementary_data: None,
            request_payment_authorization: None,
            mws_auth_token: None,
        })
    }

    pub fn with_order_currency_code(mut self, currency: CurrencyCode) -> Self {
        self.order_currency_code = Some(currency);
        self
    }

    pub fn with_platform_id(mut self, platform_id: impl Into<String>) -> Self {
        self.platform_id = Some(platform_id.into());
        self
    }

    pub fn with_seller_note(mut self, note: impl Into<String>) -> Self {
        self.seller_note = Some(note.into());
        self
    }

    pub fn with_seller_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.seller_order_id = Some(order_id.into());
        self
    }

    pub fn with_store_name(mut self, store_name: impl Into<String>) -> Self {
        self.store_name = Some(store_name.into());
        self
    }

    pub fn with_custom_information(mut self, info: impl Into<String>) -> Self {
        self.custom_information = Some(info.into());
        self
    }

    pub fn with_supplementary_data(mut self, data: impl Into<String>) -> Self {
        self.supplementary_data = Some(data.into());
        self
    }

    pub fn with_request_payment_authorization(mut self, request: bool) -> Self {
        self.request_payment_authorization = Some(request);
        self
    }

    pub fn amazon_order_reference_id(&self) -> &str {
        &self.amazon_order_reference_id
    }

    pub fn order_amount(&self) -> &str {
        &self.order_amount
    }

    pub fn order_currency_code(&self) -> Option<CurrencyCode> {
        self.order_currency_code
    }

    pub fn platform_id(&self) -> Option<&str> {
        self.platform_id.as_deref()
    }

    pub fn seller_note(&self) -> Option<&str> {
        self.seller_note.as_deref()
    }

    pub fn seller_order_id(&self) -> Option<&str> {
        self.seller_order_id.as_deref()
    }

    pub fn store_name(&self) -> Option<&str> {
        self.store_name.as_deref()
    }

    pub fn custom_information(&self) -> Option<&str> {
        self.custom_information.as_deref()
    }

    pub fn supplementary_data(&self) -> Option<&str> {
        self.supplementary_data.as_deref()
    }

    pub fn request_payment_authorization(&self) -> Option<bool> {
        self.request_payment_authorization
    }
}

impl ApiRequest for SetOrderReferenceDetailsRequest {
    const ACTION: &'static str = "SetOrderReferenceDetails";

    fn to_params(&self) -> Params {
        const ATTRS: &str = "OrderReferenceAttributes";
        const SELLER: &str = "OrderReferenceAttributes.SellerOrderAttributes";
        ParamsBuilder::new()
            .put("AmazonOrderReferenceId", &self.amazon_order_reference_id)
            .put_amount(
                &format!("{ATTRS}.OrderTotal"),
                Some(self.order_amount.as_str()),
                self.order_currency_code,
            )
            .put_opt(&format!("{ATTRS}.PlatformId"), self.platform_id.as_deref())
            .put_opt(&format!("{ATTRS}.SellerNote"), self.seller_note.as_deref())
            .put_flag(
                &format!("{ATTRS}.RequestPaymentAuthorization"),
                self.request_payment_authorization,
            )
            .put_opt(&format!("{SELLER}.SellerOrderId"), self.seller_order_id.as_deref())
            .put_opt(&format!("{SELLER}.StoreName"), self.store_name.as_deref())
            .put_opt(&format!("{SELLER}.CustomInformation"), self.custom_information.as_deref())
            .put_opt(&format!("{SELLER}.SupplementaryData"), self.supplementary_data.as_deref())
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

/// Updates order attributes, including after the order reference is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetOrderAttributesRequest {
    amazon_order_reference_id: String,
    amount: Option<String>,
    currency_code: Option<CurrencyCode>,
    platform_id: Option<String>,
    seller_note: Option<String>,
    seller_order_id: Option<String>,
    store_name: Option<String>,
    custom_information: Option<String>,
    supplementary_data: Option<String>,
    order_item_categories: Vec<String>,
    payment_service_provider_id: Option<String>,
    payment_service_provider_order_id: Option<String>,
    request_payment_authorization: Option<bool>,
    mws_auth_token: Option<String>,
}

impl SetOrderAttributesRequest {
    pub fn new(amazon_order_reference_id: impl Into<String>) -> Result<Self, RequestError> {
        Ok(Self {
            amazon_order_reference_id: required(
                "AmazonOrderReferenceId",
                amazon_order_reference_id,
            )?,
            amount: None,
            currency_code: None,
            platform_id: None,
            seller_note: None,
            seller_order_id: None,
            store_name: None,
            custom_information: None,
            supplementary_data: None,
            order_item_categories: Vec::new(),
            payment_service_provider_id: None,
            payment_service_provider_order_id: None,
            request_payment_authorization: None,
            mws_auth_token: None,
        })
    }

    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    pub fn with_currency_code(mut self, currency: CurrencyCode) -> Self {
        self.currency_code = Some(currency);
        self
    }

    pub fn with_platform_id(mut self, platform_id: impl Into<String>) -> Self {
        self.platform_id = Some(platform_id.into());
        self
    }

    pub fn with_seller_note(mut self, note: impl Into<String>) -> Self {
        self.seller_note = Some(note.into());
        self
    }

    pub fn with_seller_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.seller_order_id = Some(order_id.into());
        self
    }

    pub fn with_store_name(mut self, store_name: impl Into<String>) -> Self {
        self.store_name = Some(store_name.into());
        self
    }

    pub fn with_custom_information(mut self, info: impl Into<String>) -> Self {
        self.custom_information = Some(info.into());
        self
    }

    pub fn with_supplementary_data(mut self, data: impl Into<String>) -> Self {
        self.supplementary_data = Some(data.into());
        self
    }

    /// Replaces the item category list.
    pub fn with_order_item_categories(mut self, categories: Vec<String>) -> Self {
        self.order_item_categories = categories;
        self
    }

    pub fn with_payment_service_provider(
        mut self,
        provider_id: impl Into<String>,
        provider_order_id: impl Into<String>,
    ) -> Self {
        self.payment_service_provider_id = Some(provider_id.into());
        self.payment_service_provider_order_id = Some(provider_order_id.into());
        self
    }

    pub fn with_request_payment_authorization(mut self, request: bool) -> Self {
        self.request_payment_authorization = Some(request);
        self
    }

    pub fn amazon_order_reference_id(&self) -> &str {
        &self.amazon_order_reference_id
    }

    pub fn amount(&self) -> Option<&str> {
        self.amount.as_deref()
    }

    pub fn currency_code(&self) -> Option<CurrencyCode> {
        self.currency_code
    }

    pub fn platform_id(&self) -> Option<&str> {
        self.platform_id.as_deref()
    }

    pub fn seller_note(&self) -> Option<&str> {
        self.seller_note.as_deref()
    }

    pub fn seller_order_id(&self) -> Option<&str> {
        self.seller_order_id.as_deref()
    }

    pub fn store_name(&self) -> Option<&str> {
        self.store_name.as_deref()
    }

    pub fn custom_information(&self) -> Option<&str> {
        self.custom_information.as_deref()
    }

    pub fn supplementary_data(&self) -> Option<&str> {
        self.supplementary_data.as_deref()
    }

    pub fn order_item_categories(&self) -> &[String] {
        &self.order_item_categories
    }

    pub fn payment_service_provider_id(&self) -> Option<&str> {
        self.payment_service_provider_id.as_deref()
    }

    pub fn payment_service_provider_order_id(&self) -> Option<&str> {
        self.payment_service_provider_order_id.as_deref()
    }

    pub fn request_payment_authorization(&self) -> Option<bool> {
        self.request_payment_authorization
    }
}

impl ApiRequest for SetOrderAttributesRequest {
    const ACTION: &'static str = "SetOrderAttributes";

    fn to_params(&self) -> Params {
        const ATTRS: &str = "OrderAttributes";
        const SELLER: &str = "OrderAttributes.SellerOrderAttributes";
        const PSP: &str = "OrderAttributes.PaymentServiceProviderAttributes";
        ParamsBuilder::new()
            .put("AmazonOrderReferenceId", &self.amazon_order_reference_id)
            .put_amount(
                &format!("{ATTRS}.OrderTotal"),
                self.amount.as_deref(),
                self.currency_code,
            )
            .put_opt(&format!("{ATTRS}.PlatformId"), self.platform_id.as_deref())
            .put_opt(&format!("{ATTRS}.SellerNote"), self.seller_note.as_deref())
            .put_flag(
                &format!("{ATTRS}.RequestPaymentAuthorization"),
                self.request_payment_authorization,
            )
            .put_opt(&format!("{SELLER}.SellerOrderId"), self.seller_order_id.as_deref())
            .put_opt(&format!("{SELLER}.StoreName"), self.store_name.as_deref())
            .put_opt(&format!("{SELLER}.CustomInformation"), self.custom_information.as_deref())
            .put_opt(&format!("{SELLER}.SupplementaryData"), self.supplementary_data.as_deref())
            .put_list(
                &format!("{SELLER}.OrderItemCategories.OrderItemCategory"),
                &self.order_item_categories,
            )
            .put_opt(
                &format!("{PSP}.PaymentServiceProviderId"),
                self.payment_service_provider_id.as_deref(),
            )
            .put_opt(
                &format!("{PSP}.PaymentServiceProviderOrderId"),
                self.payment_service_provider_order_id.as_deref(),
            )
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

/// Confirms a fully specified order reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmOrderReferenceRequest {
    amazon_order_reference_id: String,
    success_url: Option<String>,
    failure_url: Option<String>,
    authorization_amount: Option<String>,
    authorization_currency_code: Option<CurrencyCode>,
    expect_immediate_authorization: Option<bool>,
    mws_auth_token: Option<String>,
}

impl ConfirmOrderReferenceRequest {
    pub fn new(amazon_order_reference_id: impl Into<String>) -> Result<Self, RequestError> {
        Ok(Self {
            amazon_order_reference_id: required(
                "AmazonOrderReferenceId",
                amazon_order_reference_id,
            )?,
            success_url: None,
            failure_url: None,
            authorization_amount: None,
            authorization_currency_code: None,
            expect_immediate_authorization: None,
            mws_auth_token: None,
        })
    }

    pub fn with_success_url(mut self, url: impl Into<String>) -> Self {
        self.success_url = Some(url.into());
        self
    }

    pub fn with_failure_url(mut self, url: impl Into<String>) -> Self {
        self.failure_url = Some(url.into());
        self
    }

    pub fn with_authorization_amount(mut self, amount: impl Into<String>) -> Self {
        self.authorization_amount = Some(amount.into());
        self
    }

    pub fn with_authorization_currency_code(mut self, currency: CurrencyCode) -> Self {
        self.authorization_currency_code = Some(currency);
        self
    }

    pub fn with_expect_immediate_authorization(mut self, expect: bool) -> Self {
        self.expect_immediate_authorization = Some(expect);
        self
    }

    pub fn amazon_order_reference_id(&self) -> &str {
        &self.amazon_order_reference_id
    }

    pub fn success_url(&self) -> Option<&str> {
        self.success_url.as_deref()
    }

    pub fn failure_url(&self) -> Option<&str> {
        self.failure_url.as_deref()
    }

    pub fn authorization_amount(&self) -> Option<&str> {
        self.authorization_amount.as_deref()
    }

    pub fn authorization_currency_code(&self) -> Option<CurrencyCode> {
        self.authorization_currency_code
    }

    pub fn expect_immediate_authorization(&self) -> Option<bool> {
        self.expect_immediate_authorization
    }
}

impl ApiRequest for ConfirmOrderReferenceRequest {
    const ACTION: &'static str = "ConfirmOrderReference";

    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .put("AmazonOrderReferenceId", &self.amazon_order_reference_id)
            .put_opt("SuccessUrl", self.success_url.as_deref())
            .put_opt("FailureUrl", self.failure_url.as_deref())
            .put_amount(
                "AuthorizationAmount",
                self.authorization_amount.as_deref(),
                self.authorization_currency_code,
            )
            .put_flag(
                "ExpectImmediateAuthorization",
                self.expect_immediate_authorization,
            )
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

/// Cancels an order reference that has no completed captures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelOrderReferenceRequest {
    amazon_order_reference_id: String,
    cancelation_reason: Option<String>,
    mws_auth_token: Option<String>,
}

impl CancelOrderReferenceRequest {
    pub fn new(amazon_order_reference_id: impl Into<String>) -> Result<Self, RequestError> {
        Ok(Self {
            amazon_order_reference_id: required(
                "AmazonOrderReferenceId",
                amazon_order_reference_id,
            )?,
            cancelation_reason: None,
            mws_auth_token: None,
        })
    }

    pub fn with_cancelation_reason(mut self, reason: impl Into<String>) -> Self {
        self.cancelation_reason = Some(reason.into());
        self
    }

    pub fn amazon_order_reference_id(&self) -> &str {
        &self.amazon_order_reference_id
    }

    pub fn cancelation_reason(&self) -> Option<&str> {
        self.cancelation_reason.as_deref()
    }
}

impl ApiRequest for CancelOrderReferenceRequest {
    const ACTION: &'static str = "CancelOrderReference";

    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .put("AmazonOrderReferenceId", &self.amazon_order_reference_id)
            .put_opt("CancelationReason", self.cancelation_reason.as_deref())
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

/// Closes an order reference so no new authorizations can be made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseOrderReferenceRequest {
    amazon_order_reference_id: String,
    closure_reason: Option<String>,
    mws_auth_token: Option<String>,
}

impl CloseOrderReferenceRequest {
    pub fn new(amazon_order_reference_id: impl Into<String>) -> Result<Self, RequestError> {
        Ok(Self {
            amazon_order_reference_id: required(
                "AmazonOrderReferenceId",
                amazon_order_reference_id,
            )?,
            closure_reason: None,
            mws_auth_token: None,
        })
    }

    pub fn with_closure_reason(mut self, reason: impl Into<String>) -> Self {
        self.closure_reason = Some(reason.into());
        self
    }

    pub fn amazon_order_reference_id(&self) -> &str {
        &self.amazon_order_reference_id
    }

    pub fn closure_reason(&self) -> Option<&str> {
        self.closure_reason.as_deref()
    }
}

impl ApiRequest for CloseOrderReferenceRequest {
    const ACTION: &'static str = "CloseOrderReference";

    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .put("AmazonOrderReferenceId", &self.amazon_order_reference_id)
            .put_opt("ClosureReason", self.closure_reason.as_deref())
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

/// Searches order references by seller-side query id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOrderReferenceRequest {
    query_id: String,
    query_id_type: String,
    payment_domain: Option<PaymentDomain>,
    page_size: Option<u32>,
    sort_order: Option<SortOrder>,
    created_start_time: Option<String>,
    created_end_time: Option<String>,
    order_reference_status_list_filter: Vec<OrderReferenceState>,
    mws_auth_token: Option<String>,
}

impl ListOrderReferenceRequest {
    pub fn new(
        query_id: impl Into<String>,
        query_id_type: impl Into<String>,
    ) -> Result<Self, RequestError> {
        Ok(Self {
            query_id: required("QueryId", query_id)?,
            query_id_type: required("QueryIdType", query_id_type)?,
            payment_domain: None,
            page_size: None,
            sort_order: None,
            created_start_time: None,
            created_end_time: None,
            order_reference_status_list_filter: Vec::new(),
            mws_auth_token: None,
        })
    }

    pub fn with_payment_domain(mut self, domain: PaymentDomain) -> Self {
        self.payment_domain = Some(domain);
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    /// Restricts results to a creation window. Timestamps are ISO-8601 and passed through.
    pub fn with_created_time_range(
        mut self,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        self.created_start_time = Some(start.into());
        self.created_end_time = Some(end.into());
        self
    }

    pub fn with_order_reference_status_list_filter(mut self, states: Vec<OrderReferenceState>) -> Self {
        self.order_reference_status_list_filter = states;
        self
    }

    pub fn query_id(&self) -> &str {
        &self.query_id
    }

    pub fn query_id_type(&self) -> &str {
        &self.query_id_type
    }

    pub fn payment_domain(&self) -> Option<PaymentDomain> {
        self.payment_domain
    }

    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort_order
    }

    pub fn created_start_time(&self) -> Option<&str> {
        self.created_start_time.as_deref()
    }

    pub fn created_end_time(&self) -> Option<&str> {
        self.created_end_time.as_deref()
    }

    pub fn order_reference_status_list_filter(&self) -> &[OrderReferenceState] {
        &self.order_reference_status_list_filter
    }
}

impl ApiRequest for ListOrderReferenceRequest {
    const ACTION: &'static str = "ListOrderReference";

    fn to_params(&self) -> Params {
        let states: Vec<&str> = self
            .order_reference_status_list_filter
            .iter()
            .map(|s| s.as_str())
            .collect();
        ParamsBuilder::new()
            .put("QueryId", &self.query_id)
            .put("QueryIdType", &self.query_id_type)
            .put_opt("PaymentDomain", self.payment_domain.map(|d| d.as_str()))
            .put_opt("PageSize", self.page_size.map(|n| n.to_string()).as_deref())
            .put_opt("SortOrder", self.sort_order.map(|s| s.as_str()))
            .put_opt("CreatedTimeRange.StartTime", self.created_start_time.as_deref())
            .put_opt("CreatedTimeRange.EndTime", self.created_end_time.as_deref())
            .put_list("OrderReferenceStatusListFilter.OrderReferenceStatus", &states)
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

/// Fetches the next page of a [`ListOrderReferenceRequest`] result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOrderReferenceByNextTokenRequest {
    next_page_token: String,
    mws_auth_token: Option<String>,
}

impl ListOrderReferenceByNextTokenRequest {
    pub fn new(next_page_token: impl Into<String>) -> Result<Self, RequestError> {
        Ok(Self {
            next_page_token: required("NextPageToken", next_page_token)?,
            mws_auth_token: None,
        })
    }

    pub fn next_page_token(&self) -> &str {
        &self.next_page_token
    }
}

impl ApiRequest for ListOrderReferenceByNextTokenRequest {
    const ACTION: &'static str = "ListOrderReferenceByNextToken";

    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .put("NextPageToken", &self.next_page_token)
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

/// Creates an order reference from an existing billing agreement or order reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrderReferenceForIdRequest {
    id: String,
    id_type: AmazonReferenceIdType,
    inherit_shipping_address: Option<bool>,
    confirm_now: Option<bool>,
    order_total_amount: Option<String>,
    order_total_currency_code: Option<CurrencyCode>,
    platform_id: Option<String>,
    seller_note: Option<String>,
    seller_order_id: Option<String>,
    store_name: Option<String>,
    custom_information: Option<String>,
    supplementary_data: Option<String>,
    mws_auth_token: Option<String>,
}

impl CreateOrderReferenceForIdRequest {
    pub fn new(id: impl Into<String>, id_type: AmazonReferenceIdType) -> Result<Self, RequestError> {
        Ok(Self {
            id: required("Id", id)?,
            id_type,
            inherit_shipping_address: None,
            confirm_now: None,
            order_total_amount: None,
            order_total_currency_code: None,
            platform_id: None,
            seller_note: None,
            seller_order_id: None,
            store_name: None,
            custom_information: None,
            supplementary_data: None,
            mws_auth_token: None,
        })
    }

    pub fn with_inherit_shipping_address(mut self, inherit: bool) -> Self {
        self.inherit_shipping_address = Some(inherit);
        self
    }

    #[deprecated(note = "use `with_inherit_shipping_address` with a bool")]
    pub fn with_inherit_shipping_address_str(self, inherit: &str) -> Self {
        self.with_inherit_shipping_address(parse_flag(inherit))
    }

    pub fn with_confirm_now(mut self, confirm_now: bool) -> Self {
        self.confirm_now = Some(confirm_now);
        self
    }

    #[deprecated(note = "use `with_confirm_now` with a bool")]
    pub fn with_confirm_now_str(self, confirm_now: &str) -> Self {
        self.with_confirm_now(parse_flag(confirm_now))
    }

    pub fn with_order_total_amount(mut self, amount: impl Into<String>) -> Self {
        self.order_total_amount = Some(amount.into());
        self
    }

    pub fn with_order_total_currency_code(mut self, currency: CurrencyCode) -> Self {
        self.order_total_currency_code = Some(currency);
        self
    }

    pub fn with_platform_id(mut self, platform_id: impl Into<String>) -> Self {
        self.platform_id = Some(platform_id.into());
        self
    }

    pub fn with_seller_note(mut self, note: impl Into<String>) -> Self {
        self.seller_note = Some(note.into());
        self
    }

    pub fn with_seller_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.seller_order_id = Some(order_id.into());
        self
    }

    pub fn with_store_name(mut self, store_name: impl Into<String>) -> Self {
        self.store_name = Some(store_name.into());
        self
    }

    pub fn with_custom_information(mut self, info: impl Into<String>) -> Self {
        self.custom_information = Some(info.into());
        self
    }

    pub fn with_supplementary_data(mut self, data: impl Into<String>) -> Self {
        self.supplementary_data = Some(data.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn id_type(&self) -> AmazonReferenceIdType {
        self.id_type
    }

    pub fn inherit_shipping_address(&self) -> Option<bool> {
        self.inherit_shipping_address
    }

    pub fn confirm_now(&self) -> Option<bool> {
        self.confirm_now
    }

    pub fn order_total_amount(&self) -> Option<&str> {
        self.order_total_amount.as_deref()
    }

    pub fn order_total_currency_code(&self) -> Option<CurrencyCode> {
        self.order_total_currency_code
    }

    pub fn platform_id(&self) -> Option<&str> {
        self.platform_id.as_deref()
    }

    pub fn seller_note(&self) -> Option<&str> {
        self.seller_note.as_deref()
    }

    pub fn seller_order_id(&self) -> Option<&str> {
        self.seller_order_id.as_deref()
    }

    pub fn store_name(&self) -> Option<&str> {
        self.store_name.as_deref()
    }

    pub fn custom_information(&self) -> Option<&str> {
        self.custom_information.as_deref()
    }

    pub fn supplementary_data(&self) -> Option<&str> {
        self.supplementary_data.as_deref()
    }
}

impl ApiRequest for CreateOrderReferenceForIdRequest {
    const ACTION: &'static str = "CreateOrderReferenceForId";

    fn to_params(&self) -> Params {
        const ATTRS: &str = "OrderReferenceAttributes";
        const SELLER: &str = "OrderReferenceAttributes.SellerOrderAttributes";
        ParamsBuilder::new()
            .put("Id", &self.id)
            .put("IdType", self.id_type.as_str())
            .put_flag("InheritShippingAddress", self.inherit_shipping_address)
            .put_flag("ConfirmNow", self.confirm_now)
            .put_amount(
                &format!("{ATTRS}.OrderTotal"),
                self.order_total_amount.as_deref(),
                self.order_total_currency_code,
            )
            .put_opt(&format!("{ATTRS}.PlatformId"), self.platform_id.as_deref())
            .put_opt(&format!("{ATTRS}.SellerNote"), self.seller_note.as_deref())
            .put_opt(&format!("{SELLER}.SellerOrderId"), self.seller_order_id.as_deref())
            .put_opt(&format!("{SELLER}.StoreName"), self.store_name.as_deref())
            .put_opt(&format!("{SELLER}.CustomInformation"), self.custom_information.as_deref())
            .put_opt(&format!("{SELLER}.SupplementaryData"), self.supplementary_data.as_deref())
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

mws_auth_token!(
    GetOrderReferenceDetailsRequest,
    SetOrderReferenceDetailsRequest,
    SetOrderAttributesRequest,
    ConfirmOrderReferenceRequest,
    CancelOrderReferenceRequest,
    CloseOrderReferenceRequest,
    ListOrderReferenceRequest,
    ListOrderReferenceByNextTokenRequest,
    CreateOrderReferenceForIdRequest,
);
