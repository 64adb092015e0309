//! Device list reducers.

use devinv_lib::{device::Device, error::DeviceApiError};

use crate::{
    store::{
        effect::Effect,
        state::{ListStatus, State},
    },
    ui::route::Route,
};

/// Re-fetches the list while it is the active view.
pub fn reload(state: &mut State) -> Effect {
    if state.route != Route::Devices {
        return Effect::None;
    }

    state.list.status = ListStatus::Loading;
    Effect::FetchDevices(state.lifetime.clone())
}

pub fn loaded(state: &mut State, devices: Vec<Device>) {
    state.list.status = ListStatus::Loaded;
    state.list.devices = devices;
}

/// Keeps the list empty and records the failure for the view to show.
pub fn failed(state: &mut State, error: DeviceApiError) {
    log::error!("failed to list devices: {error}");
    state.list.devices.clear();
    state.list.status = ListStatus::Failed(error);
}

/// Asks for confirmation before deleting `device`.
pub fn request_delete(state: &mut State, device: Device) {
    if state.route == Route::Devices {
        state.confirm_delete = Some(device);
    }
}

pub fn cancel_delete(state: &mut State) {
    state.confirm_delete = None;
}

/// Deletes the device awaiting confirmation, if any.
pub fn confirm_delete(state: &mut State) -> Effect {
    match state.confirm_delete.take() {
        Some(device) => {
            state.message = Some(format!("deleting {device}"));
            Effect::DeleteDevice(state.lifetime.clone(), device.id)
        }
        None => Effect::None,
    }
}

/// Announces the deletion and refreshes the list.
pub fn deleted(state: &mut State, id: String) -> Effect {
    state.message = Some(format!("deleted device {id}"));
    state.list.status = ListStatus::Loading;
    Effect::FetchDevices(state.lifetime.clone())
}

pub fn delete_failed(state: &mut State, error: DeviceApiError) {
    log::error!("failed to delete device: {error}");
    state.message = None;
    state.error = Some(format!("failed to delete device: {error}"));
}
