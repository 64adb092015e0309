//! Application shell: header, active view, footer and error popover.

use color_eyre::eyre::Result;
use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind},
    layout::{Constraint, Layout, Margin, Rect},
    style::Style,
    widgets::{Block, Widget},
};

use crate::{
    store::{action::Action, state::State},
    ui::{
        components::{
            footer::InfoFooter,
            header::Header,
            popover::{base::Popover, simple::SimplePopover},
        },
        views::{
            device_form::DeviceFormView,
            devices::DevicesView,
            traits::{
                CustomEventContext, CustomWidget, CustomWidgetContext,
                CustomWidgetRef, EventHandler, View,
            },
        },
    },
};

/// Top level widget driven by the renderer.
pub trait Application: EventHandler + CustomWidgetRef {}

/// Routes rendering and input to the view matching the current route.
#[derive(Default)]
pub struct App {
    devices: DevicesView,
    form: DeviceFormView,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    fn active_view(&self, state: &State) -> &dyn View {
        if state.route.is_form() {
            &self.form
        } else {
            &self.devices
        }
    }

    fn legend(&self, state: &State) -> String {
        let view_legend = self.active_view(state).legend(state);
        if state.route.is_form() {
            view_legend.to_string()
        } else {
            format!("{view_legend}   (t) theme   (q) quit")
        }
    }

    fn render_error(
        &self,
        error: &str,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let message = SimplePopover::new(error).footer("(enter) dismiss");

        Popover::new(&message)
            .title("Error")
            .border_color(ctx.state.colors.error)
            .width(60)
            .height(30)
            .render_ref(ctx.app_area, buf, ctx)
    }
}

impl Application for App {}

impl CustomWidgetRef for App {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let state = ctx.state;

        Block::new()
            .style(Style::new().bg(state.colors.buffer_bg))
            .render(area, buf);

        let [header_area, view_area, footer_area] = Layout::vertical([
            Constraint::Length(1), // header
            Constraint::Min(5),    // view
            Constraint::Length(3), // footer
        ])
        .areas(area);

        Header::new(state.app_name.clone())
            .location(state.route.to_string())
            .render(header_area, buf, ctx);

        self.active_view(state).render_ref(
            view_area.inner(Margin {
                vertical: 1,
                horizontal: 2,
            }),
            buf,
            ctx,
        )?;

        InfoFooter::new(self.legend(state))
            .message(state.message.clone())
            .render(footer_area, buf, ctx);

        if let Some(error) = state.error.as_ref() {
            self.render_error(error, buf, ctx)?;
        }

        Ok(())
    }
}

impl EventHandler for App {
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

        // the error popover is modal
        if ctx.state.error.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                ctx.dispatcher.dispatch(Action::SetError(None));
            }
            return Ok(true);
        }

        if self.active_view(ctx.state).process_event(evt, ctx)? {
            return Ok(true);
        }

        if key.code == KeyCode::Char('t') {
            ctx.dispatcher
                .dispatch(Action::SetTheme(ctx.state.theme.next()));
            return Ok(true);
        }

        Ok(false)
    }
}

#[cfg(test)]
#[path = "./app_tests.rs"]
mod tests;
