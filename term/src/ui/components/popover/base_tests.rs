use ratatui::{Terminal, backend::TestBackend};

use crate::{store::state::State, ui::colors::Theme};

use super::*;

struct Fill;

impl CustomWidgetRef for Fill {
    fn render_ref(
        &self,
        area: Rect,
        buf: &mut ratatui::prelude::Buffer,
        _ctx: &CustomWidgetContext,
    ) -> Result<()> {
        for x in area.left()..area.right() {
            for y in area.top()..area.bottom() {
                buf[(x, y)].set_symbol("x");
            }
        }
        Ok(())
    }
}

#[test]
fn centers_popover_area() {
    let area = Popover::get_popover_area(Rect::new(0, 0, 100, 50), 50, 50);
    assert_eq!((area.x, area.width, area.height), (25, 50, 25));
    assert!((12..=13).contains(&area.y));
}

#[test]
fn renders_content_inside_frame() {
    let state = State::new("Device Inventory", Theme::Blue, true);
    let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
    let content = Fill;

    terminal
        .draw(|frame| {
            let ctx = CustomWidgetContext {
                state: &state,
                app_area: frame.area(),
            };
            Popover::new(&content)
                .title("Delete")
                .width(50)
                .height(50)
                .render_ref(frame.area(), frame.buffer_mut(), &ctx)
                .unwrap();
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let pop_area = Popover::get_popover_area(buffer.area, 50, 50);

    assert_eq!(buffer[(pop_area.x, pop_area.y)].symbol(), "╔");
    // outside the popover is untouched
    assert_eq!(buffer[(0, 0)].symbol(), " ");
    // padding keeps content off the border
    assert_eq!(buffer[(pop_area.x + 1, pop_area.y + 1)].symbol(), " ");
    assert_eq!(buffer[(pop_area.x + 3, pop_area.y + 1)].symbol(), "x");

    let title_row: String = (pop_area.left()..pop_area.right())
        .map(|x| buffer[(x, pop_area.y)].symbol())
        .collect();
    assert!(title_row.contains(" Delete "));
}
