//! Bordered frame that centers any widget over the current view.

use color_eyre::eyre::Result;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Clear, Padding, Widget},
};

use crate::ui::views::traits::{CustomWidgetContext, CustomWidgetRef};

pub struct Popover<'a> {
    content: &'a dyn CustomWidgetRef,
    title: Option<String>,
    border_color: Option<Color>,
    width: u16,
    height: u16,
}

impl<'a> Popover<'a> {
    pub fn new(content: &'a dyn CustomWidgetRef) -> Self {
        Self {
            content,
            title: None,
            border_color: None,
            width: 50,
            height: 30,
        }
    }

    /// Calculates a centered popover area within the given parent area.
    pub fn get_popover_area(
        area: Rect,
        percent_x: u16,
        percent_y: u16,
    ) -> Rect {
        let vertical = Layout::vertical([Constraint::Percentage(percent_y)])
            .flex(Flex::Center);
        let horizontal =
            Layout::horizontal([Constraint::Percentage(percent_x)])
                .flex(Flex::Center);
        let [area] = vertical.areas(area);
        let [area] = horizontal.areas(area);
        area
    }

    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Width as a percentage of the application area.
    pub fn width(mut self, w: u16) -> Self {
        self.width = w;
        self
    }

    /// Height as a percentage of the application area.
    pub fn height(mut self, h: u16) -> Self {
        self.height = h;
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }
}

impl CustomWidgetRef for Popover<'_> {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let colors = &ctx.state.colors;
        let pop_area = Self::get_popover_area(area, self.width, self.height);
        let border_color = self.border_color.unwrap_or(colors.border_color);

        let mut block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(Style::new().fg(border_color).bg(colors.buffer_bg))
            .padding(Padding::horizontal(2))
            .style(Style::default().fg(colors.text).bg(colors.buffer_bg));

        if let Some(title) = self.title.as_ref() {
            block = block.title(Line::from(format!(" {title} ")).centered());
        }

        let inner_area = block.inner(pop_area);

        Clear.render(pop_area, buf);
        block.render(pop_area, buf);
        self.content.render_ref(inner_area, buf, ctx)
    }
}

#[cfg(test)]
#[path = "./base_tests.rs"]
mod tests;
