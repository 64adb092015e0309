//! Create / edit form for a single device.

use color_eyre::eyre::Result;
use ratatui::{
    crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers},
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Widget},
};
use std::cell::Cell;
use strum::IntoEnumIterator;

use crate::{
    store::{
        action::Action,
        lifetime::LifetimeId,
        state::{FormField, FormMode, FormStatus, State},
    },
    ui::{
        components::input::{Input, InputState},
        route::Route,
    },
};

use super::traits::{
    CustomEventContext, CustomStatefulWidget, CustomWidgetContext,
    CustomWidgetRef, EventHandler, View,
};

const INPUT_HEIGHT: u16 = 3;

/// Form bound to [`crate::store::state::FormState`]. Only the focused
/// field is local to the view; it resets whenever a new form is mounted.
#[derive(Default)]
pub struct DeviceFormView {
    focus: Cell<FormField>,
    mounted: Cell<Option<LifetimeId>>,
}

impl DeviceFormView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focused field for the form mounted under the current lifetime.
    fn focus(&self, state: &State) -> FormField {
        let current = state.lifetime.id();
        if self.mounted.get() != Some(current) {
            self.mounted.set(Some(current));
            self.focus.set(FormField::default());
        }
        self.focus.get()
    }

    fn title(&self, state: &State) -> String {
        match &state.form.mode {
            FormMode::Create => "New device".to_string(),
            FormMode::Edit(id) => format!("Edit device {id}"),
        }
    }

    fn status_line(&self, state: &State) -> (String, Style) {
        let colors = &state.colors;
        match &state.form.status {
            FormStatus::Loading => {
                ("Loading device…".to_string(), Style::new().fg(colors.muted))
            }
            FormStatus::Submitting => {
                ("Saving…".to_string(), Style::new().fg(colors.muted))
            }
            FormStatus::Failed(err) => (
                format!("Save failed ({}): {err}", err.kind()),
                Style::new().fg(colors.error),
            ),
            FormStatus::Idle if !state.form.missing.is_empty() => (
                "Fill in the required fields".to_string(),
                Style::new().fg(colors.error),
            ),
            FormStatus::Idle => (String::new(), Style::new()),
        }
    }

    fn edit_focused(
        &self,
        ctx: &CustomEventContext,
        edit: impl FnOnce(&mut String),
    ) {
        if ctx.state.form.is_busy() {
            return;
        }

        let field = self.focus(ctx.state);
        let mut value = ctx.state.form.value(field).to_string();
        edit(&mut value);
        ctx.dispatcher.dispatch(Action::UpdateFormField(field, value));
    }
}

impl View for DeviceFormView {
    fn legend(&self, _state: &State) -> &str {
        "(tab) next field   (enter) save   (esc) cancel"
    }
}

impl CustomWidgetRef for DeviceFormView {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        ctx: &CustomWidgetContext,
    ) -> Result<()> {
        let state = ctx.state;
        let focus = self.focus(state);

        let [title_area, _, name_area, manufacturer_area, _, status_area] =
            Layout::vertical([
                Constraint::Length(1),            // title
                Constraint::Length(1),            // spacer
                Constraint::Length(INPUT_HEIGHT), // name
                Constraint::Length(INPUT_HEIGHT), // manufacturer
                Constraint::Length(1),            // spacer
                Constraint::Length(1),            // status
            ])
            .areas(area);

        Paragraph::new(self.title(state))
            .style(
                Style::new()
                    .fg(state.colors.label)
                    .add_modifier(Modifier::BOLD),
            )
            .render(title_area, buf);

        let input_width = area.width.min(60);

        for (field, field_area) in
            FormField::iter().zip([name_area, manufacturer_area])
        {
            let mut input_state = InputState {
                editing: field == focus && !state.form.is_busy(),
                value: state.form.value(field).to_string(),
            };

            Input::new(field.label())
                .error(state.form.field_error(field))
                .render(
                    Rect {
                        width: input_width,
                        ..field_area
                    },
                    buf,
                    &mut input_state,
                    ctx,
                );
        }

        let (status, style) = self.status_line(state);
        Paragraph::new(status).style(style).render(status_area, buf);

        Ok(())
    }
}

impl EventHandler for DeviceFormView {
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

        let focus = self.focus(ctx.state);

        match key.code {
            KeyCode::Esc => {
                ctx.dispatcher.dispatch(Action::Navigate(Route::Devices));
            }
            KeyCode::Tab | KeyCode::Down => self.focus.set(focus.next()),
            KeyCode::BackTab | KeyCode::Up => {
                self.focus.set(focus.previous())
            }
            KeyCode::Enter => ctx.dispatcher.dispatch(Action::SubmitForm),
            KeyCode::Backspace => self.edit_focused(ctx, |v| {
                v.pop();
            }),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.edit_focused(ctx, |v| v.push(c))
            }
            _ => return Ok(false),
        }

        Ok(true)
    }
}

#[cfg(test)]
#[path = "./device_form_tests.rs"]
mod tests;
