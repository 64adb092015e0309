//! Configuration injected into the API client at construction

use derive_builder::{Builder, UninitializedFieldError};
use url::Url;

use crate::error::DeviceApiError;

/// Base URL used when none is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
/// Display name used when none is configured
pub const DEFAULT_APP_NAME: &str = "Device Inventory";
/// Environment variable consulted for the API base URL
pub const API_BASE_URL_ENV: &str = "DEVINV_API_BASE_URL";
/// Environment variable consulted for the display name
pub const APP_NAME_ENV: &str = "DEVINV_APP_NAME";

/// Data structure holding where the device API lives and what to call it
#[derive(Debug, Clone, Eq, PartialEq, Builder)]
#[builder(
    setter(into),
    build_fn(validate = "Self::validate", error = "DeviceApiError")
)]
pub struct ApiConfig {
    /// Scheme, host and optional path prefix of the API i.e.
    /// http://localhost:8000
    #[builder(default = "DEFAULT_API_BASE_URL.to_string()")]
    base_url: String,
    /// Human readable name shown by user interfaces
    #[builder(default = "DEFAULT_APP_NAME.to_string()")]
    app_name: String,
}

impl ApiConfigBuilder {
    fn validate(&self) -> Result<(), DeviceApiError> {
        if let Some(base_url) = self.base_url.as_ref() {
            parse_base_url(base_url)?;
        }

        if let Some(app_name) = self.app_name.as_ref()
            && app_name.trim().is_empty()
        {
            return Err(DeviceApiError::InvalidConfig(
                "app name must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }
}

impl ApiConfig {
    /// Returns builder for ApiConfig
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Returns the configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configured display name
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Returns the parsed base URL
    pub fn parsed_base_url(&self) -> Result<Url, DeviceApiError> {
        parse_base_url(&self.base_url)
    }
}

impl From<UninitializedFieldError> for DeviceApiError {
    fn from(value: UninitializedFieldError) -> Self {
        Self::InvalidConfig(value.to_string())
    }
}

fn parse_base_url(value: &str) -> Result<Url, DeviceApiError> {
    let url = Url::parse(value.trim()).map_err(|e| {
        DeviceApiError::InvalidConfig(format!("invalid base url {value}: {e}"))
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(DeviceApiError::InvalidConfig(format!(
            "unsupported scheme in base url {value}"
        )));
    }

    if url.cannot_be_a_base() {
        return Err(DeviceApiError::InvalidConfig(format!(
            "base url cannot carry a path: {value}"
        )));
    }

    Ok(url)
}

#[cfg(test)]
#[path = "./config_tests.rs"]
mod tests;
