//! Side effects returned by the reducer for execution by the store.

use devinv_lib::device::{DeviceCreateInput, DeviceUpdateInput};

use crate::{store::lifetime::ViewLifetime, ui::colors::Theme};

/// Side effects that the reducer requests to be performed after state updates.
///
/// This keeps the reducer pure by separating state computation from network
/// calls and file writes. API effects carry the lifetime of the view that
/// requested them.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No side effect needed.
    None,
    /// List all devices.
    FetchDevices(ViewLifetime),
    /// Load a single device into the form.
    FetchDevice(ViewLifetime, String),
    /// Create a device from the form.
    CreateDevice(ViewLifetime, DeviceCreateInput),
    /// Replace name and manufacturer of a device.
    UpdateDevice(ViewLifetime, String, DeviceUpdateInput),
    /// Remove a device.
    DeleteDevice(ViewLifetime, String),
    /// Persist the selected theme to disk.
    SaveTheme(Theme),
}
