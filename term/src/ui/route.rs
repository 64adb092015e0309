//! Route table mapping paths to views.

use std::fmt;

/// Path every other unknown or root path resolves to.
pub const DEVICES_PATH: &str = "/devices";
const CREATE_SEGMENT: &str = "create";
const EDIT_SEGMENT: &str = "edit";

/// A navigable location in the UI.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub enum Route {
    /// `/devices` - list of all devices
    #[default]
    Devices,
    /// `/devices/create` - blank device form
    CreateDevice,
    /// `/devices/edit/:id` - form for an existing device
    EditDevice(String),
}

impl Route {
    /// Parses a path into a route. `/` redirects to `/devices`, trailing
    /// slashes are ignored, anything else unknown yields `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let segments = path
            .trim()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        match segments.as_slice() {
            [] | ["devices"] => Some(Route::Devices),
            ["devices", CREATE_SEGMENT] => Some(Route::CreateDevice),
            ["devices", EDIT_SEGMENT, id] => {
                Some(Route::EditDevice((*id).to_string()))
            }
            _ => None,
        }
    }

    /// Returns true for routes rendered by the device form.
    pub fn is_form(&self) -> bool {
        matches!(self, Route::CreateDevice | Route::EditDevice(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Devices => write!(f, "{DEVICES_PATH}"),
            Route::CreateDevice => write!(f, "{DEVICES_PATH}/{CREATE_SEGMENT}"),
            Route::EditDevice(id) => {
                write!(f, "{DEVICES_PATH}/{EDIT_SEGMENT}/{id}")
            }
        }
    }
}

#[cfg(test)]
#[path = "./route_tests.rs"]
mod tests;
