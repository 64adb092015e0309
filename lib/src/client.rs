//! Provides the REST client for the device inventory API
//!
//! Every operation is a single blocking round-trip: no retries, no caching
//! and no local state. Failures are returned as [`DeviceApiError`] so callers
//! can tell a missing device from rejected input from an unreachable server.

use serde::de::DeserializeOwned;
use ureq::{Agent, Body, http::Response};
use url::Url;

use crate::{
    config::ApiConfig,
    device::{Device, DeviceCreateInput, DeviceUpdateInput},
    error::{DeviceApiError, Result},
};

/// Path segments of the devices collection, relative to the base URL
pub const DEVICES_PATH: [&str; 3] = ["api", "v1", "devices"];

/// Trait describing the five operations offered by the device API
pub trait DeviceApi: Send + Sync {
    /// Lists all devices in server defined order
    fn list(&self) -> Result<Vec<Device>>;
    /// Fetches a single device, failing with [`DeviceApiError::NotFound`] if
    /// it does not exist
    fn get(&self, id: &str) -> Result<Device>;
    /// Creates a device and returns it with its server assigned id and
    /// timestamps
    fn create(&self, input: &DeviceCreateInput) -> Result<Device>;
    /// Replaces name and manufacturer of an existing device
    fn update(&self, id: &str, input: &DeviceUpdateInput) -> Result<Device>;
    /// Removes a device
    fn delete(&self, id: &str) -> Result<()>;
}

/// HTTP implementation of [`DeviceApi`]
pub struct DeviceClient {
    agent: Agent,
    config: ApiConfig,
    collection: Url,
}

impl DeviceClient {
    /// Returns a new client for the API described by `config`
    pub fn new(config: ApiConfig) -> Result<Self> {
        let mut collection = config.parsed_base_url()?;

        collection
            .path_segments_mut()
            .map_err(|_| {
                DeviceApiError::InvalidConfig(format!(
                    "base url cannot carry a path: {}",
                    config.base_url()
                ))
            })?
            .pop_if_empty()
            .extend(DEVICES_PATH)
            // trailing slash - the collection lives at /api/v1/devices/
            .push("");

        // status codes are inspected by hand so error bodies stay readable
        let agent: Agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        Ok(Self {
            agent,
            config,
            collection,
        })
    }

    /// Returns the configuration this client was built with
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Returns the URL of the devices collection
    pub fn collection_url(&self) -> &str {
        self.collection.as_str()
    }

    /// Returns the URL of a single device, percent encoding the id as one
    /// path segment
    pub fn item_url(&self, id: &str) -> Result<Url> {
        let mut url = self.collection.clone();

        url.path_segments_mut()
            .map_err(|_| {
                DeviceApiError::InvalidConfig(format!(
                    "cannot build device url for {id}"
                ))
            })?
            .pop_if_empty()
            .push(id);

        Ok(url)
    }
}

impl DeviceApi for DeviceClient {
    fn list(&self) -> Result<Vec<Device>> {
        log::debug!("GET {}", self.collection);
        let response = self.agent.get(self.collection.as_str()).call()?;
        read_json(response)
    }

    fn get(&self, id: &str) -> Result<Device> {
        let url = self.item_url(id)?;
        log::debug!("GET {url}");
        let response = self.agent.get(url.as_str()).call()?;
        read_json(response)
    }

    fn create(&self, input: &DeviceCreateInput) -> Result<Device> {
        log::debug!("POST {} {:?}", self.collection, input);
        let response = self
            .agent
            .post(self.collection.as_str())
            .send_json(input)?;
        read_json(response)
    }

    fn update(&self, id: &str, input: &DeviceUpdateInput) -> Result<Device> {
        let url = self.item_url(id)?;
        log::debug!("PUT {url} {:?}", input);
        let response = self.agent.put(url.as_str()).send_json(input)?;
        read_json(response)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let url = self.item_url(id)?;
        log::debug!("DELETE {url}");
        let response = self.agent.delete(url.as_str()).call()?;
        // success bodies (if any) are an acknowledgement we have no use for
        read_text(response).map(|_| ())
    }
}

fn read_text(mut response: Response<Body>) -> Result<String> {
    let status = response.status();
    let body = response.body_mut().read_to_string()?;

    if !status.is_success() {
        let err = DeviceApiError::from_response(status.as_u16(), &body);
        log::debug!("request failed: {err}");
        return Err(err);
    }

    Ok(body)
}

fn read_json<T: DeserializeOwned>(response: Response<Body>) -> Result<T> {
    let body = read_text(response)?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
#[path = "./client_tests.rs"]
mod tests;
