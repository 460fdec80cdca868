//! reqwest-backed [`Transport`].

use std::time::Duration;

use async_trait::async_trait;
use payments_types::{Params, ResponseData, Transport, TransportError};
use reqwest::Client;

use crate::config::{API_VERSION, ClientConfig};
use crate::error::PaymentsError;

/// Posts form-encoded parameters to the configured endpoint.
///
/// Requests are sent unsigned. Wrap this transport, or replace it, to add
/// signing.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    endpoint: String,
    merchant_id: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Uses `timeout` for the whole request, including reading the body.
    ///
    /// Fails with [`PaymentsError::Http`] when the HTTP client cannot be built.
    pub fn with_timeout(config: &ClientConfig, timeout: Duration) -> Result<Self, PaymentsError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(config, http))
    }

    pub fn with_client(config: &ClientConfig, http: Client) -> Self {
        Self {
            http,
            endpoint: config.endpoint(),
            merchant_id: config.merchant_id.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Adds the parameters every call carries.
    ///
    /// A `SellerId` already present in `params` is kept; provider credit
    /// lookups use it to address the provider's account.
    fn form(&self, action: &str, mut params: Params) -> Params {
        params.insert("Action".to_string(), action.to_string());
        params.insert("Version".to_string(), API_VERSION.to_string());
        params
            .entry("SellerId".to_string())
            .or_insert_with(|| self.merchant_id.clone());
        params
    }
}

fn transport_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection(err.to_string())
    } else {
        TransportError::InvalidResponse(err.to_string())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, action: &str, params: Params) -> Result<ResponseData, TransportError> {
        let form = self.form(action, params);
        let response = self
            .http
            .post(&self.endpoint)
            .form(&form)
            .send()
            .await
            .map_err(transport_error)?;

        let status_code = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        tracing::debug!(action, status_code, bytes = body.len(), "Received response");
        Ok(ResponseData::new(status_code, body))
    }
}
