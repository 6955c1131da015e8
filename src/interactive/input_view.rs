use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::interactive::editor::Editor;
use crate::interactive::ui::{BORDERS_TOP_RIGHT, focus_color};

#[derive(Default)]
pub struct InputView {
    pub editor: Editor,
    /// Scroll offset as (line, display column). Follows the cursor on draw.
    offset: (usize, usize),
    last_area: Rect,
}

impl InputView {
    pub fn clear(&mut self) {
        self.editor.clear();
        self.offset = (0, 0);
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, has_focus: bool) {
        self.last_area = area;
        let focus_color = focus_color(has_focus);
        let block = Block::new()
            .border_type(BorderType::Rounded)
            .borders(BORDERS_TOP_RIGHT)
            .title_alignment(Alignment::Center)
            .border_style(Style::new().fg(focus_color))
            .title(format!("Input (Bytes: {})", self.editor.byte_count()));
        let inner = block.inner(area);

        let (cursor_row, _) = self.editor.cursor();
        let cursor_x = self.editor.cursor_display_x();
        if inner.height > 0 && inner.width > 0 {
            let height = usize::from(inner.height);
            let width = usize::from(inner.width);
            if cursor_row < self.offset.0 {
                self.offset.0 = cursor_row;
            }
            if cursor_row >= self.offset.0 + height {
                self.offset.0 = cursor_row + 1 - height;
            }
            if cursor_x < self.offset.1 {
                self.offset.1 = cursor_x;
            }
            if cursor_x >= self.offset.1 + width {
                self.offset.1 = cursor_x + 1 - width;
            }
        }

        let lines = self
            .editor
            .lines()
            .iter()
            .map(|line| Line::raw(line.as_str()))
            .collect::<Vec<_>>();
        #[expect(clippy::cast_possible_truncation)]
        let scroll = (self.offset.0 as u16, self.offset.1 as u16);
        let widget = Paragraph::new(lines).block(block).scroll(scroll);
        frame.render_widget(widget, area);

        #[expect(clippy::cast_possible_truncation)]
        if has_focus && inner.height > 0 && inner.width > 0 {
            frame.set_cursor(
                inner.x + (cursor_x - self.offset.1) as u16,
                inner.y + (cursor_row - self.offset.0) as u16,
            );
        }
    }

    /// Handle a mouse click. Returns true when the click landed on this widget.
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        let area = self.last_area;
        if !area.contains(Position { x: column, y: row }) {
            return false;
        }
        let inner_top = area.y.saturating_add(1);
        if row < inner_top {
            return true;
        }
        let line = usize::from(row - inner_top) + self.offset.0;
        let x = usize::from(column.saturating_sub(area.x)) + self.offset.1;
        self.editor.move_to_display(line, x);
        true
    }
}

#[test]
fn click_outside_is_ignored() {
    let mut view = InputView::default();
    view.last_area = Rect::new(0, 0, 20, 10);
    assert!(!view.click(25, 5));
}

#[test]
fn click_moves_the_cursor() {
    let mut view = InputView::default();
    view.editor.insert_str("first\nsecond");
    view.last_area = Rect::new(0, 0, 20, 10);
    assert!(view.click(3, 2));
    assert_eq!(view.editor.cursor(), (1, 3));
}

#[test]
fn click_on_the_title_row_keeps_the_cursor() {
    let mut view = InputView::default();
    view.editor.insert_str("first\nsecond");
    view.last_area = Rect::new(0, 0, 20, 10);
    assert!(view.click(3, 0));
    assert_eq!(view.editor.cursor(), (1, 6));
}
