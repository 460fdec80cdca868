//! Status requests. Neither takes any operation-specific parameter.

use super::{ApiRequest, Params, ParamsBuilder};

/// Asks for the health of the payments service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetServiceStatusRequest {
    mws_auth_token: Option<String>,
}

impl GetServiceStatusRequest {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ApiRequest for GetServiceStatusRequest {
    const ACTION: &'static str = "GetServiceStatus";

    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

/// Asks whether the calling merchant account is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetMerchantAccountStatusRequest {
    mws_auth_token: Option<String>,
}

impl GetMerchantAccountStatusRequest {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ApiRequest for GetMerchantAccountStatusRequest {
    const ACTION: &'static str = "GetMerchantAccountStatus";

    fn to_params(&self) -> Params {
        ParamsBuilder::new()
            .put_opt("MWSAuthToken", self.mws_auth_token.as_deref())
            .build()
    }
}

mws_auth_token!(GetServiceStatusRequest, GetMerchantAccountStatusRequest);
