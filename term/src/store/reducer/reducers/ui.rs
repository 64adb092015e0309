//! UI state reducers for errors, messages and themes.

use crate::{
    store::state::State,
    ui::colors::{Colors, Theme},
};

/// Sets or clears the current error popover.
pub fn set_error(state: &mut State, err: Option<String>) {
    state.error = err;
}

/// Sets or clears the status message shown in the footer.
pub fn update_message(state: &mut State, message: Option<String>) {
    state.message = message;
}

/// Switches the active theme and recomputes the palette.
pub fn set_theme(state: &mut State, theme: Theme) {
    state.theme = theme;
    state.colors = Colors::for_theme(theme, state.true_color_enabled);
    state.message = Some(format!("theme: {theme}"));
}
