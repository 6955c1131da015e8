use std::cmp::min;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Text;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::highlight;
use crate::interactive::ui::{BORDERS_TOP_RIGHT, focus_color};

/// Scrollable pane with the pretty printed text in its highlighted form.
#[derive(Default)]
pub struct TextView {
    text: Text<'static>,
    offset: usize,
    last_height: u16,
    pub last_area: Rect,
}

impl TextView {
    pub fn update(&mut self, pretty: &str) {
        self.text = highlight::highlight(pretty);
        self.offset = 0;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn content_height(&self) -> usize {
        self.text.height()
    }

    fn max_offset(&self) -> usize {
        let visible = usize::from(self.last_height).max(1);
        self.text.height().saturating_sub(visible)
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.offset = self.offset.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.offset = min(self.offset + amount, self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Half a view height. Used for page wise scrolling.
    pub fn page_jump(&self) -> usize {
        usize::from(self.last_height / 2).max(1)
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, has_focus: bool) {
        self.last_area = area;
        let focus_color = focus_color(has_focus);
        let block = Block::new()
            .border_type(BorderType::Rounded)
            .borders(BORDERS_TOP_RIGHT)
            .title_alignment(Alignment::Center)
            .border_style(Style::new().fg(focus_color))
            .title(format!("Formatted (Lines: {})", self.text.height()));
        self.last_height = block.inner(area).height;
        self.offset = min(self.offset, self.max_offset());
        #[expect(clippy::cast_possible_truncation)]
        let widget = Paragraph::new(self.text.clone())
            .block(block)
            .scroll((self.offset as u16, 0));
        frame.render_widget(widget, area);
    }
}

#[test]
fn update_resets_the_scroll_position() {
    let mut view = TextView::default();
    view.update("[\n  1,\n  2\n]");
    assert_eq!(view.content_height(), 4);
    view.scroll_down(2);
    assert_eq!(view.offset, 2);
    view.update("true");
    assert_eq!(view.offset, 0);
    assert_eq!(view.content_height(), 1);
}

#[test]
fn scrolling_stays_inside_the_content() {
    let mut view = TextView::default();
    view.update("[\n  1,\n  2\n]");
    view.scroll_up(1);
    assert_eq!(view.offset, 0);
    view.scroll_down(99);
    assert_eq!(view.offset, 3);
    view.scroll_to_top();
    assert_eq!(view.offset, 0);
    view.scroll_to_bottom();
    assert_eq!(view.offset, 3);
}

#[test]
fn page_jump_is_never_zero() {
    let view = TextView::default();
    assert_eq!(view.page_jump(), 1);
}
