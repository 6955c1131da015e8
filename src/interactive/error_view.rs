use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::interactive::ui::BORDERS_TOP_RIGHT;

/// Show a decoder diagnostic verbatim in place of the result panes.
pub fn draw(frame: &mut Frame, area: Rect, title: &str, error: &str) {
    const STYLE: Style = Style::new().fg(Color::Black).bg(Color::Red);
    let block = Block::new()
        .border_type(BorderType::Rounded)
        .borders(BORDERS_TOP_RIGHT)
        .title_alignment(Alignment::Center)
        .border_style(STYLE)
        .title(title);
    let paragraph = Paragraph::new(error)
        .style(STYLE)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}
