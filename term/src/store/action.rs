//! Action types for state transitions.

use devinv_lib::{device::Device, error::DeviceApiError};

use crate::{
    store::{lifetime::LifetimeId, state::FormField},
    ui::{colors::Theme, route::Route},
};

/// Commands that trigger state changes via the reducer.
///
/// Results of API calls carry the id of the view lifetime that requested
/// them so stale results can be told apart from current ones.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetError(Option<String>),
    UpdateMessage(Option<String>),
    SetTheme(Theme),

    // navigation
    Navigate(Route),

    // device list
    ReloadDevices,
    DevicesLoaded {
        lifetime: LifetimeId,
        devices: Vec<Device>,
    },
    DevicesFailed {
        lifetime: LifetimeId,
        error: DeviceApiError,
    },
    RequestDelete(Device),
    CancelDelete,
    ConfirmDelete,
    DeviceDeleted {
        lifetime: LifetimeId,
        id: String,
    },
    DeleteFailed {
        lifetime: LifetimeId,
        error: DeviceApiError,
    },

    // device form
    DeviceLoaded {
        lifetime: LifetimeId,
        device: Device,
    },
    DeviceLoadFailed {
        lifetime: LifetimeId,
        error: DeviceApiError,
    },
    UpdateFormField(FormField, String),
    SubmitForm,
    DeviceSaved {
        lifetime: LifetimeId,
        device: Device,
    },
    SaveFailed {
        lifetime: LifetimeId,
        error: DeviceApiError,
    },
}

impl Action {
    /// Lifetime an API result belongs to, `None` for user actions.
    pub fn lifetime(&self) -> Option<LifetimeId> {
        match self {
            Action::DevicesLoaded { lifetime, .. }
            | Action::DevicesFailed { lifetime, .. }
            | Action::DeviceDeleted { lifetime, .. }
            | Action::DeleteFailed { lifetime, .. }
            | Action::DeviceLoaded { lifetime, .. }
            | Action::DeviceLoadFailed { lifetime, .. }
            | Action::DeviceSaved { lifetime, .. }
            | Action::SaveFailed { lifetime, .. } => Some(*lifetime),
            _ => None,
        }
    }
}
