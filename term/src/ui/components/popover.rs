//! Popover dialogs drawn over the active view.

pub mod base;
pub mod simple;
