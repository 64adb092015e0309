//! Footer with the key legend and latest status message.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::ui::views::traits::{CustomWidget, CustomWidgetContext};

pub struct InfoFooter {
    content: String,
    message: Option<String>,
}

impl InfoFooter {
    pub fn new(content: String) -> Self {
        Self {
            content,
            message: None,
        }
    }

    pub fn message(mut self, message: Option<String>) -> Self {
        self.message = message;
        self
    }
}

impl CustomWidget for InfoFooter {
    fn render(
        self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) where
        Self: Sized,
    {
        let colors = &ctx.state.colors;

        let mut block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::new().fg(colors.border_color));

        if let Some(message) = self.message {
            block = block.title_bottom(
                Line::from(format!(" {message} ")).style(Style::new().fg(colors.text)),
            );
        }

        Paragraph::new(Line::from(self.content.as_str()))
            .style(Style::new().fg(colors.muted).bg(colors.buffer_bg))
            .centered()
            .block(block)
            .render(area, buf)
    }
}

#[cfg(test)]
#[path = "./footer_tests.rs"]
mod tests;
