use std::io::{Stdout, stdout};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture, Event,
    KeyEventKind, MouseButton, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::interactive::app::App;

mod app;
mod editor;
mod error_view;
mod footer;
mod input_view;
mod status_header;
mod text_view;
mod tree_view;
mod ui;

pub fn show(initial: Option<String>) -> anyhow::Result<()> {
    let mut app = App::new(initial);

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;

    let result = main_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;
        match crossterm::event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Release {
                    app.on_key(key);
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => app.on_scroll_up(),
                MouseEventKind::ScrollDown => app.on_scroll_down(),
                MouseEventKind::Down(MouseButton::Left) => app.on_click(mouse.column, mouse.row),
                _ => {}
            },
            Event::Paste(text) => app.on_paste(&text),
            Event::FocusGained | Event::FocusLost | Event::Resize(_, _) => {}
        }
        if app.should_quit {
            break;
        }
    }
    Ok(())
}
