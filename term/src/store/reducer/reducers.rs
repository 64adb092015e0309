pub mod devices;
pub mod form;
pub mod route;
pub mod ui;
