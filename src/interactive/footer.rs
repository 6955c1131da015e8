use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::interactive::ui::ElementInFocus;

const VERSION_TEXT: &str = concat!("jsonui ", env!("CARGO_PKG_VERSION"));

pub fn draw(frame: &mut Frame, area: Rect, focus: ElementInFocus) {
    const STYLE: Style = Style::new()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD);
    let line = Line::from(match focus {
        ElementInFocus::Input => vec![
            Span::styled("Ctrl+C", STYLE),
            Span::raw(" Quit  "),
            Span::styled("Tab", STYLE),
            Span::raw(" Switch to Formatted  "),
            Span::styled("Ctrl+Y", STYLE),
            Span::raw(" Copy formatted  "),
            Span::styled("Ctrl+L", STYLE),
            Span::raw(" Clear  "),
        ],
        ElementInFocus::FormattedView => vec![
            Span::styled("q", STYLE),
            Span::raw(" Quit  "),
            Span::styled("Tab", STYLE),
            Span::raw(" Switch to Tree  "),
            Span::styled("PageUp/PageDown", STYLE),
            Span::raw(" Scroll  "),
        ],
        ElementInFocus::TreeView => vec![
            Span::styled("q", STYLE),
            Span::raw(" Quit  "),
            Span::styled("Tab", STYLE),
            Span::raw(" Switch to Input  "),
            Span::styled("Enter", STYLE),
            Span::raw(" Toggle  "),
        ],
    });
    let remaining = usize::from(area.width).saturating_sub(line.width());
    if remaining >= VERSION_TEXT.len() {
        let paragraph = Paragraph::new(VERSION_TEXT);
        frame.render_widget(paragraph.alignment(Alignment::Right), area);
    }
    frame.render_widget(Paragraph::new(line), area);
}
