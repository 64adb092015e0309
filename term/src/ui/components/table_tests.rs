use ratatui::{Terminal, backend::TestBackend};

use crate::{store::state::State, ui::colors::Theme};

use super::*;

fn table() -> Table {
    Table::new(
        vec!["ID".to_string(), "NAME".to_string()],
        vec![8, 20],
    )
}

fn rows(n: usize) -> Vec<Vec<String>> {
    (0..n)
        .map(|i| vec![format!("id-{i}"), format!("device {i}")])
        .collect()
}

#[test]
fn selects_first_row_when_rows_appear() {
    let mut table = table();
    assert_eq!(table.selected(), None);

    assert_eq!(table.update_items(rows(3)), Some(0));
    assert_eq!(table.selected(), Some(0));
}

#[test]
fn keeps_selection_in_bounds() {
    let mut table = table();
    table.update_items(rows(3));
    table.next();
    table.next();
    assert_eq!(table.selected(), Some(2));

    assert_eq!(table.update_items(rows(2)), Some(1));
    assert_eq!(table.update_items(rows(0)), None);
    assert_eq!(table.selected(), None);
}

#[test]
fn does_not_wrap() {
    let mut table = table();
    assert_eq!(table.next(), None);

    table.update_items(rows(2));
    assert_eq!(table.previous(), Some(0));
    assert_eq!(table.next(), Some(1));
    assert_eq!(table.next(), Some(1));
}

#[test]
fn truncates_long_content() {
    assert_eq!(fit_to_width("Router", 10), "Router");
    assert_eq!(fit_to_width("Industrial Router", 8), "Industr…");
}

#[test]
fn renders_headers_and_rows() {
    let mut table = table();
    table.update_items(rows(2));
    let state = State::new("Device Inventory", Theme::Blue, true);
    let mut terminal = Terminal::new(TestBackend::new(50, 6)).unwrap();

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state: &state,
                app_area: frame.area(),
            };
            table
                .render_ref(frame.area(), frame.buffer_mut(), &ctx)
                .unwrap();
        })
        .unwrap();

    let content: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect();

    assert!(content.contains("ID"));
    assert!(content.contains("NAME"));
    assert!(content.contains("id-0"));
    assert!(content.contains("device 1"));
}
