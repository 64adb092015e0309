//! Title bar showing the application name and current route.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

/// Bold application title followed by a dimmed location.
pub struct Header {
    title: String,
    location: Option<String>,
}

impl Header {
    /// Creates a new header with the given title.
    pub fn new(title: String) -> Self {
        Self {
            title,
            location: None,
        }
    }

    pub fn location(mut self, location: String) -> Self {
        self.location = Some(location);
        self
    }
}

impl CustomWidget for Header {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) where
        Self: Sized,
    {
        let colors = &ctx.state.colors;

        let mut spans = vec![Span::styled(
            format!(" {} ", self.title),
            Style::default()
                .fg(colors.label)
                .add_modifier(Modifier::BOLD),
        )];

        if let Some(location) = self.location {
            spans.push(Span::styled(location, Style::default().fg(colors.muted)));
        }

        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(colors.header_bg))
            .render(area, buf)
    }
}

#[cfg(test)]
#[path = "./header_tests.rs"]
mod tests;
