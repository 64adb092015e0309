//! Editable text input component.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::ui::views::traits::{CustomStatefulWidget, CustomWidgetContext};

/// Drawn after the value of the focused input.
pub const CURSOR: &str = "▏";

/// State for an input field (focus and current value).
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub editing: bool,
    pub value: String,
}

/// Bordered text input titled with its label. The border highlights while
/// editing and an error, if any, is shown along the bottom border.
pub struct Input {
    label: String,
    error: Option<String>,
}

impl Input {
    /// Creates a new input with the given label.
    pub fn new(label: &str) -> Self {
        Self {
            label: String::from(label),
            error: None,
        }
    }

    pub fn error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }
}

impl CustomStatefulWidget for Input {
    type State = InputState;

    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        state: &mut Self::State,
        ctx: &CustomWidgetContext,
    ) where
        Self: Sized,
    {
        let colors = &ctx.state.colors;

        let border_color = if self.error.is_some() {
            colors.error
        } else if state.editing {
            colors.input_editing
        } else {
            colors.border_color
        };

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(border_color))
            .title(Line::from(format!(" {} ", self.label)).style(
                Style::new().fg(colors.label).add_modifier(Modifier::BOLD),
            ));

        if let Some(error) = self.error {
            block = block.title_bottom(
                Line::from(format!(" {error} ")).style(Style::new().fg(colors.error)),
            );
        }

        let mut spans = vec![Span::styled(
            state.value.as_str(),
            Style::new().fg(colors.text),
        )];

        if state.editing {
            spans.push(Span::styled(
                CURSOR,
                Style::new().fg(colors.input_editing),
            ));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::new().bg(colors.buffer_bg))
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
#[path = "./input_tests.rs"]
mod tests;
