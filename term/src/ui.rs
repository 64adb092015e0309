//! Terminal UI components, views, and routing.

pub mod app;
pub mod colors;
pub mod components;
pub mod route;
pub mod views;
