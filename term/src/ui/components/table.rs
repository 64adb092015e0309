//! Scrollable table component with selection support.

use color_eyre::eyre::Result;
use ratatui::{
    layout::{Constraint, Layout, Margin, Rect},
    style::{Modifier, Style, Stylize},
    widgets::{
        Cell, HighlightSpacing, Row, Scrollbar, ScrollbarOrientation,
        ScrollbarState, StatefulWidget, Table as RatatuiTable, TableState,
    },
};
use std::cell::RefCell;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::views::traits::{CustomWidgetContext, CustomWidgetRef};

/// Used for overflow when item exceeds max width
const ELLIPSIS: &str = "…";

/// Scrollable table with headers, row selection, and scrollbar.
pub struct Table {
    headers: Vec<String>,
    items: Vec<Vec<String>>,
    column_sizes: Vec<u16>,
    table_state: RefCell<TableState>,
    scroll_state: RefCell<ScrollbarState>,
}

impl Table {
    /// Creates an empty table with the given headers and column sizes. The
    /// last column grows to fill the remaining width.
    pub fn new(headers: Vec<String>, column_sizes: Vec<u16>) -> Self {
        Self {
            headers,
            column_sizes,
            items: Vec::new(),
            table_state: RefCell::new(TableState::new()),
            scroll_state: RefCell::new(ScrollbarState::new(0)),
        }
    }

    /// Replaces the rows, keeping the selection in bounds. Selects the first
    /// row when rows appear and clears the selection when they all go away.
    pub fn update_items(&mut self, items: Vec<Vec<String>>) -> Option<usize> {
        let selected = match (self.selected(), items.len()) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };

        self.items = items;
        self.select(selected);
        selected
    }

    /// Returns the currently selected row index, if any.
    pub fn selected(&self) -> Option<usize> {
        self.table_state.borrow().selected()
    }

    fn select(&self, selected: Option<usize>) {
        self.table_state.borrow_mut().select(selected);
        let mut scroll_state = self.scroll_state.borrow_mut();
        *scroll_state = scroll_state
            .content_length(self.items.len())
            .position(selected.unwrap_or_default());
    }

    /// Moves selection to the next row without wrapping.
    pub fn next(&self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }

        let i = match self.selected() {
            Some(i) => (i + 1).min(self.items.len() - 1),
            None => 0,
        };

        self.select(Some(i));
        Some(i)
    }

    /// Moves selection to the previous row without wrapping.
    pub fn previous(&self) -> Option<usize> {
        if self.items.is_empty() {
            return None;
        }

        let i = self.selected().map(|i| i.saturating_sub(1)).unwrap_or(0);
        self.select(Some(i));
        Some(i)
    }
}

impl CustomWidgetRef for Table {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let colors = &ctx.state.colors;

        // main table view + right aligned scrollbar
        let [table_area, scroll_area] = Layout::horizontal([
            Constraint::Percentage(100),
            Constraint::Length(3),
        ])
        .areas(area);

        let header = self
            .headers
            .iter()
            .map(|h| Cell::from(format!(" {h}")))
            .collect::<Row>()
            .style(
                Style::default()
                    .fg(colors.label)
                    .bg(colors.header_bg)
                    .add_modifier(Modifier::BOLD),
            )
            .height(1);

        let last_col = self.column_sizes.len().saturating_sub(1);

        // width left over for the last column once the fixed ones are placed
        let free_for_last_col = self
            .column_sizes
            .iter()
            .take(last_col)
            .fold(table_area.width, |free, s| free.saturating_sub(*s));

        let rows = self
            .items
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(i, content)| {
                        let max_width = if i == last_col {
                            free_for_last_col.saturating_sub(2)
                        } else {
                            self.column_sizes.get(i).copied().unwrap_or_default()
                        };
                        Cell::from(format!(" {}", fit_to_width(content, max_width)))
                    })
                    .collect::<Row>()
                    .style(Style::new().fg(colors.text).bg(colors.buffer_bg))
            })
            .collect::<Vec<_>>();

        let constraints = self
            .column_sizes
            .iter()
            .enumerate()
            .map(|(i, w)| {
                if i == last_col {
                    Constraint::Min(*w)
                } else {
                    Constraint::Length(*w)
                }
            })
            .collect::<Vec<_>>();

        RatatuiTable::new(rows, constraints)
            .header(header)
            .row_highlight_style(
                Style::default()
                    .add_modifier(Modifier::REVERSED)
                    .fg(colors.selected_row_fg),
            )
            .bg(colors.buffer_bg)
            .highlight_spacing(HighlightSpacing::Always)
            .render(table_area, buf, &mut self.table_state.borrow_mut());

        let scroll_area = scroll_area.inner(Margin {
            vertical: 1,
            horizontal: 1,
        });

        if scroll_area.width > 0 && scroll_area.height > 0 {
            Scrollbar::default()
                .orientation(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .style(Style::new().fg(colors.scroll_bar_fg))
                .render(
                    scroll_area,
                    buf,
                    &mut self.scroll_state.borrow_mut(),
                );
        }

        Ok(())
    }
}

/// Truncates `content` with an ellipsis so it fits in `max_width` columns.
fn fit_to_width(content: &str, max_width: u16) -> String {
    let max_width = max_width as usize;

    if content.width() <= max_width {
        return content.to_string();
    }

    let budget = max_width.saturating_sub(ELLIPSIS.width());
    let mut value = String::new();
    let mut used = 0;

    for c in content.chars() {
        let w = c.width().unwrap_or_default();
        if used + w > budget {
            break;
        }
        used += w;
        value.push(c);
    }

    value.push_str(ELLIPSIS);
    value
}

#[cfg(test)]
#[path = "./table_tests.rs"]
mod tests;
