use devinv_lib::{
    device::{DeviceCreateInput, NAME_FIELD},
    error::{DeviceApiError, FieldError},
};
use mockall::predicate::eq;
use ratatui::{
    Terminal,
    backend::TestBackend,
    crossterm::event::{KeyEvent, KeyModifiers},
};
use std::rc::Rc;

use crate::{
    store::{MockDispatcher, state::FormState},
    ui::colors::Theme,
};

use super::*;

fn form_state(form: FormState) -> State {
    let mut state = State::new("Device Inventory", Theme::Blue, true);
    state.route = match &form.mode {
        FormMode::Create => Route::CreateDevice,
        FormMode::Edit(id) => Route::EditDevice(id.clone()),
    };
    state.form = form;
    state
}

fn filled(mode: FormMode) -> FormState {
    FormState {
        mode,
        data: DeviceCreateInput::new("Router", "Acme"),
        ..FormState::default()
    }
}

fn render(view: &DeviceFormView, state: &State) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(100, 12)).unwrap();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state,
                app_area: frame.area(),
            };
            view.render_ref(frame.area(), frame.buffer_mut(), &ctx)
                .unwrap();
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

fn send_key(
    view: &DeviceFormView,
    state: &State,
    dispatcher: MockDispatcher,
    evt: KeyEvent,
) -> bool {
    let ctx = CustomEventContext {
        state,
        dispatcher: Rc::new(dispatcher),
    };
    view.process_event(&Event::Key(evt), &ctx).unwrap()
}

fn send(
    view: &DeviceFormView,
    state: &State,
    dispatcher: MockDispatcher,
    code: KeyCode,
) -> bool {
    send_key(view, state, dispatcher, KeyEvent::new(code, KeyModifiers::NONE))
}

fn expect(action: Action) -> MockDispatcher {
    let mut dispatcher = MockDispatcher::new();
    dispatcher
        .expect_dispatch()
        .with(eq(action))
        .times(1)
        .return_const(());
    dispatcher
}

#[test]
fn renders_blank_create_form() {
    let view = DeviceFormView::new();
    let state = form_state(FormState::create());

    let lines = render(&view, &state);

    assert!(lines[0].starts_with("New device"));
    assert!(lines[2].contains(" Name "));
    assert!(lines[5].contains(" Manufacturer "));
}

#[test]
fn renders_edit_form_values() {
    let view = DeviceFormView::new();
    let state = form_state(filled(FormMode::Edit("abc123".into())));

    let lines = render(&view, &state);

    assert!(lines[0].starts_with("Edit device abc123"));
    assert!(lines[3].contains("Router"));
    assert!(lines[6].contains("Acme"));
}

#[test]
fn renders_loading_status() {
    let view = DeviceFormView::new();
    let state = form_state(FormState::edit("abc123".into()));

    let lines = render(&view, &state);

    assert!(lines[9].starts_with("Loading device…"));
}

#[test]
fn renders_required_and_server_field_errors() {
    let view = DeviceFormView::new();
    let mut form = FormState::create();
    form.data.manufacturer = "Acme".into();
    form.status = FormStatus::Failed(DeviceApiError::Validation {
        status: 422,
        message: "manufacturer: too long".to_string(),
        fields: vec![FieldError {
            field: "manufacturer".to_string(),
            message: "too long".to_string(),
        }],
    });
    form.missing = vec![NAME_FIELD];
    let state = form_state(form);

    let lines = render(&view, &state);

    assert!(lines[4].contains(" required "));
    assert!(lines[7].contains(" too long "));
    assert!(lines[9].starts_with(
        "Save failed (validation failed): validation failed (422): manufacturer: too long"
    ));
}

#[test]
fn typing_updates_focused_field() {
    let view = DeviceFormView::new();
    let state = form_state(filled(FormMode::Create));

    assert!(send(
        &view,
        &state,
        expect(Action::UpdateFormField(FormField::Name, "Routerq".into())),
        KeyCode::Char('q'),
    ));

    assert!(send(&view, &state, MockDispatcher::new(), KeyCode::Tab));

    assert!(send(
        &view,
        &state,
        expect(Action::UpdateFormField(FormField::Manufacturer, "Acm".into())),
        KeyCode::Backspace,
    ));
}

#[test]
fn shift_tab_moves_focus_back() {
    let view = DeviceFormView::new();
    let state = form_state(filled(FormMode::Create));

    assert!(send(&view, &state, MockDispatcher::new(), KeyCode::BackTab));
    assert!(send(
        &view,
        &state,
        expect(Action::UpdateFormField(
            FormField::Manufacturer,
            "Acme!".into()
        )),
        KeyCode::Char('!'),
    ));
}

#[test]
fn focus_resets_for_a_new_form() {
    let view = DeviceFormView::new();
    let mut state = form_state(filled(FormMode::Create));
    send(&view, &state, MockDispatcher::new(), KeyCode::Tab);

    state.lifetime = state.lifetime.next();

    assert!(send(
        &view,
        &state,
        expect(Action::UpdateFormField(FormField::Name, "Routers".into())),
        KeyCode::Char('s'),
    ));
}

#[test]
fn ignores_edits_while_busy() {
    let view = DeviceFormView::new();
    let state = form_state(FormState::edit("abc123".into()));

    let mut dispatcher = MockDispatcher::new();
    dispatcher.expect_dispatch().never();

    assert!(send(&view, &state, dispatcher, KeyCode::Char('x')));
}

#[test]
fn enter_submits() {
    let view = DeviceFormView::new();
    let state = form_state(filled(FormMode::Create));

    assert!(send(&view, &state, expect(Action::SubmitForm), KeyCode::Enter));
}

#[test]
fn escape_returns_to_list() {
    let view = DeviceFormView::new();
    let state = form_state(filled(FormMode::Edit("abc123".into())));

    assert!(send(
        &view,
        &state,
        expect(Action::Navigate(Route::Devices)),
        KeyCode::Esc,
    ));
}

#[test]
fn control_chars_are_not_typed() {
    let view = DeviceFormView::new();
    let state = form_state(filled(FormMode::Create));

    let mut dispatcher = MockDispatcher::new();
    dispatcher.expect_dispatch().never();

    assert!(!send_key(
        &view,
        &state,
        dispatcher,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ));
}
