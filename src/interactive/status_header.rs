use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::pipeline::Submission;

const TITLE: &str = concat!("JSON TUI ", env!("CARGO_PKG_VERSION"));

const STYLE_READY: Style = Style::new().fg(Color::DarkGray);
const STYLE_VALID: Style = Style::new()
    .fg(Color::LightGreen)
    .add_modifier(Modifier::BOLD);
const STYLE_INVALID: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::BOLD);

pub fn draw(frame: &mut Frame, area: Rect, submission: &Submission, notice: Option<&str>) {
    let state_style = match submission {
        Submission::Empty => STYLE_READY,
        Submission::Valid { .. } => STYLE_VALID,
        Submission::Invalid(_) => STYLE_INVALID,
    };
    let mut text = vec![Line::from(vec![
        Span::raw("Status: "),
        Span::styled(submission.state_label(), state_style),
    ])];
    if let Some(notice) = notice {
        text.push(Line::raw(notice));
    }
    let block = Block::bordered().title(TITLE);
    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
