//! View implementations for the screens reachable through routes.

pub mod device_form;
pub mod devices;
pub mod traits;
