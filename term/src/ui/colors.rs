//! Theme and color palette definitions for the terminal UI.

use ratatui::style::{Color, palette::tailwind};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Color palette derived from the current theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Colors {
    pub buffer_bg: Color,
    pub header_bg: Color,
    pub label: Color,
    pub text: Color,
    pub muted: Color,
    pub border_color: Color,
    pub selected_row_fg: Color,
    pub scroll_bar_fg: Color,
    pub input_editing: Color,
    pub error: Color,
}

impl Colors {
    /// Creates a color palette from the given tailwind palette, falling back
    /// to basic colors if true color is not supported.
    pub fn new(color: &tailwind::Palette, true_color_enabled: bool) -> Self {
        if true_color_enabled {
            Self {
                buffer_bg: tailwind::SLATE.c950,
                header_bg: color.c900,
                label: color.c400,
                text: tailwind::SLATE.c200,
                muted: tailwind::SLATE.c500,
                border_color: color.c400,
                selected_row_fg: color.c400,
                scroll_bar_fg: color.c800,
                input_editing: tailwind::AMBER.c500,
                error: tailwind::RED.c600,
            }
        } else {
            Self {
                buffer_bg: Color::Black,
                header_bg: color.c900,
                label: color.c400,
                text: Color::White,
                muted: Color::DarkGray,
                border_color: color.c400,
                selected_row_fg: color.c400,
                scroll_bar_fg: color.c400,
                input_editing: Color::LightYellow,
                error: Color::Red,
            }
        }
    }

    /// Convenience for building the palette of a theme.
    pub fn for_theme(theme: Theme, true_color_enabled: bool) -> Self {
        Self::new(theme.to_palette(true_color_enabled), true_color_enabled)
    }
}

/// Available color themes for the application.
#[derive(
    Debug,
    Default,
    Eq,
    PartialEq,
    Copy,
    Clone,
    Display,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum Theme {
    #[default]
    Blue,
    Emerald,
    Indigo,
    Red,
}

const fn basic_palette(light: Color, dark: Color) -> tailwind::Palette {
    tailwind::Palette {
        c50: light,
        c100: light,
        c200: light,
        c300: light,
        c400: light,
        c500: dark,
        c600: dark,
        c700: dark,
        c800: dark,
        c900: dark,
        c950: dark,
    }
}

// Fallback palettes for terminals without true color support.
const BASIC_BLUE: tailwind::Palette =
    basic_palette(Color::LightCyan, Color::Cyan);
const BASIC_GREEN: tailwind::Palette =
    basic_palette(Color::LightGreen, Color::Green);
const BASIC_MAGENTA: tailwind::Palette =
    basic_palette(Color::LightMagenta, Color::Magenta);
const BASIC_RED: tailwind::Palette = basic_palette(Color::LightRed, Color::Red);

impl Theme {
    /// Returns the theme after this one, wrapping around.
    pub fn next(self) -> Theme {
        Theme::iter()
            .cycle()
            .skip_while(|t| *t != self)
            .nth(1)
            .unwrap_or_default()
    }

    /// Returns the tailwind palette for this theme, using basic colors if
    /// true color is not supported.
    pub fn to_palette(
        self,
        true_color_enabled: bool,
    ) -> &'static tailwind::Palette {
        match (self, true_color_enabled) {
            (Theme::Blue, true) => &tailwind::BLUE,
            (Theme::Emerald, true) => &tailwind::EMERALD,
            (Theme::Indigo, true) => &tailwind::INDIGO,
            (Theme::Red, true) => &tailwind::RED,
            (Theme::Blue, false) => &BASIC_BLUE,
            (Theme::Emerald, false) => &BASIC_GREEN,
            (Theme::Indigo, false) => &BASIC_MAGENTA,
            (Theme::Red, false) => &BASIC_RED,
        }
    }
}

#[cfg(test)]
#[path = "./colors_tests.rs"]
mod tests;
