use ratatui::{Terminal, backend::TestBackend};

use crate::{store::state::State, ui::colors::Theme};

use super::*;

fn render(
    input: Input,
    input_state: &mut InputState,
) -> (State, Terminal<TestBackend>) {
    let state = State::new("Device Inventory", Theme::Blue, true);
    let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state: &state,
                app_area: frame.area(),
            };
            input.render(frame.area(), frame.buffer_mut(), input_state, &ctx);
        })
        .unwrap();

    (state, terminal)
}

fn line(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

#[test]
fn renders_label_and_value() {
    let mut input_state = InputState {
        editing: false,
        value: "Router".to_string(),
    };

    let (state, terminal) = render(Input::new("Name"), &mut input_state);

    assert!(line(&terminal, 0).contains(" Name "));
    assert!(line(&terminal, 1).contains("Router"));
    assert!(!line(&terminal, 1).contains(CURSOR));
    assert_eq!(
        terminal.backend().buffer()[(0, 0)].fg,
        state.colors.border_color
    );
}

#[test]
fn highlights_while_editing() {
    let mut input_state = InputState {
        editing: true,
        value: "Rou".to_string(),
    };

    let (state, terminal) = render(Input::new("Name"), &mut input_state);

    assert!(line(&terminal, 1).contains(&format!("Rou{CURSOR}")));
    assert_eq!(
        terminal.backend().buffer()[(0, 0)].fg,
        state.colors.input_editing
    );
}

#[test]
fn shows_error_on_bottom_border() {
    let mut input_state = InputState::default();

    let (state, terminal) = render(
        Input::new("Manufacturer").error(Some("required".to_string())),
        &mut input_state,
    );

    assert!(line(&terminal, 2).contains(" required "));
    assert_eq!(terminal.backend().buffer()[(0, 0)].fg, state.colors.error);
}
