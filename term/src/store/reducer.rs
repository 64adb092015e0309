//! Pure reducer functions that compute new state from actions.

use std::fmt::Debug;

use crate::store::Reducer;

use super::{action::Action, effect::Effect, state::State};

mod reducers;

/// Applies actions to state, producing new state and optional side effects.
#[derive(Default)]
pub struct StoreReducer;

impl StoreReducer {
    pub fn boxed() -> Box<Self> {
        Box::default()
    }

    fn log_action<D: Debug>(&self, name: &str, data: &D) {
        log::debug!("processing action: {name}({data:?})");
    }

    /// Results from a view that has since been left must not touch state.
    fn is_stale(&self, state: &State, action: &Action) -> bool {
        match action.lifetime() {
            Some(id) => {
                id != state.lifetime.id() || state.lifetime.is_cancelled()
            }
            None => false,
        }
    }
}

impl Reducer for StoreReducer {
    /// Applies an action to the state, mutating it in place and returning any
    /// side effects to be executed.
    fn reduce(&self, state: &mut State, action: Action) -> Effect {
        if self.is_stale(state, &action) {
            log::debug!(
                "ignoring result for lifetime {:?}, current is {}",
                action.lifetime(),
                state.lifetime.id()
            );
            return Effect::None;
        }

        match action {
            // UI actions
            Action::SetError(err) => {
                self.log_action("SetError", &err);
                reducers::ui::set_error(state, err);
                Effect::None
            }
            Action::UpdateMessage(message) => {
                self.log_action("UpdateMessage", &message);
                reducers::ui::update_message(state, message);
                Effect::None
            }
            Action::SetTheme(theme) => {
                self.log_action("SetTheme", &theme);
                reducers::ui::set_theme(state, theme);
                Effect::SaveTheme(theme)
            }

            // Navigation
            Action::Navigate(route) => {
                self.log_action("Navigate", &route);
                reducers::route::navigate(state, route)
            }

            // List actions
            Action::ReloadDevices => {
                self.log_action("ReloadDevices", &());
                reducers::devices::reload(state)
            }
            Action::DevicesLoaded { devices, .. } => {
                self.log_action("DevicesLoaded", &devices.len());
                reducers::devices::loaded(state, devices);
                Effect::None
            }
            Action::DevicesFailed { error, .. } => {
                reducers::devices::failed(state, error);
                Effect::None
            }
            Action::RequestDelete(device) => {
                self.log_action("RequestDelete", &device.id);
                reducers::devices::request_delete(state, device);
                Effect::None
            }
            Action::CancelDelete => {
                self.log_action("CancelDelete", &());
                reducers::devices::cancel_delete(state);
                Effect::None
            }
            Action::ConfirmDelete => {
                self.log_action("ConfirmDelete", &());
                reducers::devices::confirm_delete(state)
            }
            Action::DeviceDeleted { id, .. } => {
                self.log_action("DeviceDeleted", &id);
                reducers::devices::deleted(state, id)
            }
            Action::DeleteFailed { error, .. } => {
                reducers::devices::delete_failed(state, error);
                Effect::None
            }

            // Form actions
            Action::DeviceLoaded { device, .. } => {
                self.log_action("DeviceLoaded", &device.id);
                reducers::form::device_loaded(state, device);
                Effect::None
            }
            Action::DeviceLoadFailed { error, .. } => {
                reducers::form::device_load_failed(state, error)
            }
            Action::UpdateFormField(field, value) => {
                reducers::form::update_field(state, field, value);
                Effect::None
            }
            Action::SubmitForm => {
                self.log_action("SubmitForm", &state.form.mode);
                reducers::form::submit(state)
            }
            Action::DeviceSaved { device, .. } => {
                self.log_action("DeviceSaved", &device.id);
                reducers::form::saved(state, device)
            }
            Action::SaveFailed { error, .. } => {
                reducers::form::save_failed(state, error);
                Effect::None
            }
        }
    }
}

#[cfg(test)]
#[path = "./reducer_tests.rs"]
mod tests;
