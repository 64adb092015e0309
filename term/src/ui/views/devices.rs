//! List of all devices with navigation to the form and deletion.

use color_eyre::eyre::Result;
use devinv_lib::device::Device;
use itertools::Itertools;
use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};
use std::cell::RefCell;

use crate::{
    store::{
        action::Action,
        state::{ListStatus, State},
    },
    ui::{
        components::{
            popover::{base::Popover, simple::SimplePopover},
            table::Table,
        },
        route::Route,
    },
};

use super::traits::{
    CustomEventContext, CustomWidgetContext, CustomWidgetRef, EventHandler,
    View,
};

pub struct DevicesView {
    table: RefCell<Table>,
}

impl Default for DevicesView {
    fn default() -> Self {
        Self::new()
    }
}

impl DevicesView {
    pub fn new() -> Self {
        Self {
            table: RefCell::new(Table::new(
                vec![
                    "ID".to_string(),
                    "NAME".to_string(),
                    "MANUFACTURER".to_string(),
                ],
                vec![26, 30, 30],
            )),
        }
    }

    fn selected_device<'a>(&self, state: &'a State) -> Option<&'a Device> {
        self.table
            .borrow()
            .selected()
            .and_then(|i| state.device_at(i))
    }

    fn status_line(&self, state: &State) -> (String, Style) {
        let colors = &state.colors;
        match &state.list.status {
            ListStatus::Loading => {
                ("Loading devices…".to_string(), Style::new().fg(colors.muted))
            }
            ListStatus::Loaded if state.list.devices.is_empty() => (
                "No devices yet, press (n) to create one".to_string(),
                Style::new().fg(colors.muted),
            ),
            ListStatus::Loaded => (
                format!("{} device(s)", state.list.devices.len()),
                Style::new().fg(colors.text),
            ),
            ListStatus::Failed(err) => (
                format!("Could not load devices ({}): {err}", err.kind()),
                Style::new().fg(colors.error),
            ),
        }
    }

    fn render_table(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let items = ctx
            .state
            .list
            .devices
            .iter()
            .map(|d| vec![d.id.clone(), d.name.clone(), d.manufacturer.clone()])
            .collect_vec();
        self.table.borrow_mut().update_items(items);
        self.table.borrow().render_ref(area, buf, ctx)
    }

    fn render_confirm_delete(
        &self,
        device: &Device,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let message = SimplePopover::new(format!("Delete {device}?"))
            .footer("(y) delete   (n) cancel");

        Popover::new(&message)
            .title("Delete device")
            .border_color(ctx.state.colors.error)
            .width(50)
            .height(25)
            .render_ref(ctx.app_area, buf, ctx)
    }

    fn process_confirm_key(
        &self,
        code: KeyCode,
        ctx: &CustomEventContext,
    ) -> bool {
        match code {
            KeyCode::Char('y') | KeyCode::Enter => {
                ctx.dispatcher.dispatch(Action::ConfirmDelete);
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                ctx.dispatcher.dispatch(Action::CancelDelete);
            }
            _ => {}
        }
        // the confirmation is modal
        true
    }
}

impl View for DevicesView {
    fn legend(&self, _state: &State) -> &str {
        "(n) new   (enter) edit   (d) delete   (r) reload"
    }
}

impl CustomWidgetRef for DevicesView {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let [status_area, _, table_area] = Layout::vertical([
            Constraint::Length(1), // status
            Constraint::Length(1), // spacer
            Constraint::Min(3),    // table
        ])
        .areas(area);

        let (status, style) = self.status_line(ctx.state);
        Paragraph::new(status).style(style).render(status_area, buf);

        self.render_table(table_area, buf, ctx)?;

        if let Some(device) = ctx.state.confirm_delete.as_ref() {
            self.render_confirm_delete(device, buf, ctx)?;
        }

        Ok(())
    }
}

impl EventHandler for DevicesView {
    fn process_event(
        &self,
        evt: &Event,
        ctx: &CustomEventContext,
    ) -> Result<bool> {
        let Event::Key(key) = evt else {
            return Ok(false);
        };

        if key.kind != KeyEventKind::Press {
            return Ok(false);
        }

        if ctx.state.confirm_delete.is_some() {
            return Ok(self.process_confirm_key(key.code, ctx));
        }

        let mut handled = true;

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.table.borrow().next();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.table.borrow().previous();
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                if let Some(device) = self.selected_device(ctx.state) {
                    ctx.dispatcher.dispatch(Action::Navigate(
                        Route::EditDevice(device.id.clone()),
                    ));
                }
            }
            KeyCode::Char('n') => {
                ctx.dispatcher.dispatch(Action::Navigate(Route::CreateDevice));
            }
            KeyCode::Char('r') => {
                ctx.dispatcher.dispatch(Action::ReloadDevices);
            }
            KeyCode::Char('d') => {
                if let Some(device) = self.selected_device(ctx.state) {
                    ctx.dispatcher
                        .dispatch(Action::RequestDelete(device.clone()));
                }
            }
            _ => handled = false,
        }

        Ok(handled)
    }
}

#[cfg(test)]
#[path = "./devices_tests.rs"]
mod tests;
