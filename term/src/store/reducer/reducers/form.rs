//! Device form reducers.

use devinv_lib::{device::Device, error::DeviceApiError};

use crate::{
    store::{
        effect::Effect,
        state::{FormField, FormMode, FormStatus, State},
    },
    ui::route::Route,
};

use super::route::navigate;

/// Populates the form with the device being edited.
pub fn device_loaded(state: &mut State, device: Device) {
    state.form.data = (&device).into();
    state.form.status = FormStatus::Idle;
}

/// A device that cannot be loaded cannot be edited: go back to the list.
pub fn device_load_failed(state: &mut State, error: DeviceApiError) -> Effect {
    log::error!("failed to load device: {error}");
    state.message = Some(format!("could not load device: {}", error.kind()));
    navigate(state, Route::Devices)
}

pub fn update_field(state: &mut State, field: FormField, value: String) {
    if !state.route.is_form() {
        return;
    }

    state.form.set_value(field, value);
}

/// Refuses to submit while required fields are blank, otherwise issues a
/// create or an update depending on the form mode.
pub fn submit(state: &mut State) -> Effect {
    if !state.route.is_form() || state.form.is_busy() {
        return Effect::None;
    }

    let missing = state.form.data.missing_fields();
    if !missing.is_empty() {
        log::debug!("refusing to submit form, missing {missing:?}");
        state.form.missing = missing;
        return Effect::None;
    }

    state.form.missing.clear();
    state.form.status = FormStatus::Submitting;

    let lifetime = state.lifetime.clone();
    let data = state.form.data.clone();

    match &state.form.mode {
        FormMode::Create => Effect::CreateDevice(lifetime, data),
        FormMode::Edit(id) => {
            Effect::UpdateDevice(lifetime, id.clone(), data.into())
        }
    }
}

pub fn saved(state: &mut State, device: Device) -> Effect {
    state.message = Some(format!("saved {device}"));
    navigate(state, Route::Devices)
}

/// Stays on the form with the entered values intact.
pub fn save_failed(state: &mut State, error: DeviceApiError) {
    log::error!("failed to save device: {error}");
    state.form.status = FormStatus::Failed(error);
}
