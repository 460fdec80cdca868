//! Configuration loading from environment.

use std::env;
use std::fmt;
use std::str::FromStr;

use payments_types::parse_flag;

use crate::error::ConfigError;

pub const MERCHANT_ID_VAR: &str = "PAY_MERCHANT_ID";
pub const REGION_VAR: &str = "PAY_REGION";
pub const SANDBOX_VAR: &str = "PAY_SANDBOX";
pub const ENDPOINT_VAR: &str = "PAY_ENDPOINT";

/// Version segment of every endpoint path and the `Version` parameter.
pub const API_VERSION: &str = "2013-01-01";

/// Marketplace region the merchant account lives in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Region {
    #[default]
    Us,
    Uk,
    De,
    Jp,
}

impl Region {
    pub fn host(&self) -> &'static str {
        match self {
            Region::Us => "mws.amazonservices.com",
            Region::Uk | Region::De => "mws-eu.amazonservices.com",
            Region::Jp => "mws.amazonservices.jp",
        }
    }
}

impl FromStr for Region {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "us" | "na" => Ok(Region::Us),
            "uk" | "gb" => Ok(Region::Uk),
            "de" | "eu" => Ok(Region::De),
            "jp" => Ok(Region::Jp),
            _ => Err(ConfigError::UnknownRegion(s.to_string())),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Region::Us => "us",
            Region::Uk => "uk",
            Region::De => "de",
            Region::Jp => "jp",
        };
        f.write_str(code)
    }
}

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub merchant_id: String,
    pub region: Region,
    pub sandbox: bool,
    pub endpoint_override: Option<String>,
}

impl ClientConfig {
    pub fn new(merchant_id: impl Into<String>, region: Region) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            region,
            sandbox: false,
            endpoint_override: None,
        }
    }

    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    /// Sends every request to `endpoint` instead of the regional default.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint_override = Some(endpoint.into());
        self
    }

    /// Loads a `.env` file when present, then reads the environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads configuration through `lookup` instead of the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let merchant_id = lookup(MERCHANT_ID_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(MERCHANT_ID_VAR))?;

        let region = match lookup(REGION_VAR).filter(|v| !v.trim().is_empty()) {
            Some(value) => value.parse()?,
            None => Region::default(),
        };

        let sandbox = lookup(SANDBOX_VAR).is_some_and(|v| parse_flag(&v));
        let endpoint_override = lookup(ENDPOINT_VAR).filter(|v| !v.trim().is_empty());

        Ok(Self {
            merchant_id,
            region,
            sandbox,
            endpoint_override,
        })
    }

    /// URL every request is posted to.
    pub fn endpoint(&self) -> String {
        if let Some(endpoint) = &self.endpoint_override {
            return endpoint.clone();
        }
        let service = if self.sandbox {
            "OffAmazonPayments_Sandbox"
        } else {
            "OffAmazonPayments"
        };
        format!("https://{}/{}/{}", self.region.host(), service, API_VERSION)
    }
}
