//! Application state definitions.

use devinv_lib::{
    device::{Device, DeviceCreateInput, MANUFACTURER_FIELD, NAME_FIELD},
    error::DeviceApiError,
};
use strum::{EnumIter, IntoEnumIterator};

use crate::{
    store::lifetime::ViewLifetime,
    ui::{
        colors::{Colors, Theme},
        route::Route,
    },
};

/// Message shown next to a required field left blank on submit.
pub const REQUIRED_MESSAGE: &str = "required";

/// Load status of the device list.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListStatus {
    #[default]
    Loading,
    Loaded,
    Failed(DeviceApiError),
}

/// Devices rendered by the list view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListState {
    pub status: ListStatus,
    pub devices: Vec<Device>,
}

/// Whether the form creates a new device or edits an existing one.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(String),
}

/// Progress of the form's request, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormStatus {
    #[default]
    Idle,
    Loading,
    Submitting,
    Failed(DeviceApiError),
}

/// Editable fields of the device form, in focus order.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, EnumIter)]
pub enum FormField {
    #[default]
    Name,
    Manufacturer,
}

impl FormField {
    /// Wire name of the field, as used in server validation errors.
    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => NAME_FIELD,
            FormField::Manufacturer => MANUFACTURER_FIELD,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Manufacturer => "Manufacturer",
        }
    }

    /// Next field in focus order, wrapping around.
    pub fn next(self) -> Self {
        Self::iter()
            .cycle()
            .skip_while(|f| *f != self)
            .nth(1)
            .unwrap_or_default()
    }

    /// Previous field in focus order, wrapping around.
    pub fn previous(self) -> Self {
        Self::iter()
            .rev()
            .cycle()
            .skip_while(|f| *f != self)
            .nth(1)
            .unwrap_or_default()
    }
}

/// State backing the create / edit form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub mode: FormMode,
    pub data: DeviceCreateInput,
    pub status: FormStatus,
    /// Required fields found blank on the last submit attempt
    pub missing: Vec<&'static str>,
}

impl FormState {
    /// Blank form in create mode.
    pub fn create() -> Self {
        Self::default()
    }

    /// Blank form in edit mode, waiting for the device to load.
    pub fn edit(id: String) -> Self {
        Self {
            mode: FormMode::Edit(id),
            status: FormStatus::Loading,
            ..Self::default()
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.data.name,
            FormField::Manufacturer => &self.data.manufacturer,
        }
    }

    pub fn set_value(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.data.name = value,
            FormField::Manufacturer => self.data.manufacturer = value,
        }
        self.missing.retain(|f| *f != field.key());
        if matches!(self.status, FormStatus::Failed(_)) {
            self.status = FormStatus::Idle;
        }
    }

    /// Message to show under a field: blank required field first, then any
    /// message the server attached to it on the last failed submit.
    pub fn field_error(&self, field: FormField) -> Option<String> {
        if self.missing.contains(&field.key()) {
            return Some(REQUIRED_MESSAGE.to_string());
        }

        match &self.status {
            FormStatus::Failed(err) => err
                .field_errors()
                .iter()
                .find(|e| e.field == field.key())
                .map(|e| e.message.clone()),
            _ => None,
        }
    }

    /// True while a load or submit is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self.status, FormStatus::Loading | FormStatus::Submitting)
    }
}

/// Complete application state for the terminal UI.
#[derive(Debug, Clone)]
pub struct State {
    pub app_name: String,
    pub route: Route,
    pub lifetime: ViewLifetime,
    pub list: ListState,
    pub form: FormState,
    pub confirm_delete: Option<Device>,
    pub message: Option<String>,
    pub error: Option<String>,
    pub theme: Theme,
    pub true_color_enabled: bool,
    pub colors: Colors,
}

impl State {
    /// Initial state before the first navigation.
    pub fn new(
        app_name: impl Into<String>,
        theme: Theme,
        true_color_enabled: bool,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            route: Route::default(),
            lifetime: ViewLifetime::new(),
            list: ListState::default(),
            form: FormState::default(),
            confirm_delete: None,
            message: None,
            error: None,
            theme,
            true_color_enabled,
            colors: Colors::for_theme(theme, true_color_enabled),
        }
    }

    /// Device currently highlighted in the list, by index.
    pub fn device_at(&self, idx: usize) -> Option<&Device> {
        self.list.devices.get(idx)
    }
}

#[cfg(test)]
#[path = "./state_tests.rs"]
mod tests;
