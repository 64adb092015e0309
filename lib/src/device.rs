//! Device records and the inputs used to create and update them

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Name of the device name field as it appears on the wire
pub const NAME_FIELD: &str = "name";
/// Name of the manufacturer field as it appears on the wire
pub const MANUFACTURER_FIELD: &str = "manufacturer";

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
/// Data structure representing a device as stored by the server
pub struct Device {
    /// Opaque server assigned identifier, stable once assigned
    pub id: String,
    /// Name of the device
    pub name: String,
    /// Manufacturer of the device
    pub manufacturer: String,
    /// Server assigned creation timestamp, not interpreted by this library
    pub created_at: String,
    /// Server assigned last update timestamp, not interpreted by this library
    pub updated_at: String,
}

impl Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) [{}]", self.name, self.manufacturer, self.id)
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
/// Request body used to create a device. The server assigns the id and
/// timestamps
pub struct DeviceCreateInput {
    /// Name of the device
    pub name: String,
    /// Manufacturer of the device
    pub manufacturer: String,
}

impl DeviceCreateInput {
    /// Returns a new create input
    pub fn new(name: impl Into<String>, manufacturer: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            manufacturer: manufacturer.into(),
        }
    }

    /// Returns the wire names of required fields that are blank. Whitespace
    /// only values count as blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();

        if self.name.trim().is_empty() {
            missing.push(NAME_FIELD);
        }

        if self.manufacturer.trim().is_empty() {
            missing.push(MANUFACTURER_FIELD);
        }

        missing
    }
}

impl From<&Device> for DeviceCreateInput {
    fn from(value: &Device) -> Self {
        Self {
            name: value.name.clone(),
            manufacturer: value.manufacturer.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
/// Request body used to replace the name and manufacturer of an existing
/// device. The id travels in the request path, never in the body
pub struct DeviceUpdateInput {
    /// New name of the device
    pub name: String,
    /// New manufacturer of the device
    pub manufacturer: String,
}

impl DeviceUpdateInput {
    /// Returns a new update input
    pub fn new(name: impl Into<String>, manufacturer: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            manufacturer: manufacturer.into(),
        }
    }
}

impl From<DeviceCreateInput> for DeviceUpdateInput {
    fn from(value: DeviceCreateInput) -> Self {
        Self {
            name: value.name,
            manufacturer: value.manufacturer,
        }
    }
}

impl From<&Device> for DeviceUpdateInput {
    fn from(value: &Device) -> Self {
        Self {
            name: value.name.clone(),
            manufacturer: value.manufacturer.clone(),
        }
    }
}

#[cfg(test)]
#[path = "./device_tests.rs"]
mod tests;
