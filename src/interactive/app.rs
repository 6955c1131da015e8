use std::cmp::min;

use arboard::Clipboard;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Position, Rect};

use crate::interactive::input_view::InputView;
use crate::interactive::text_view::TextView;
use crate::interactive::tree_view::TreeView;
use crate::interactive::ui::{
    CursorMove, ElementInFocus, split_area_horizontally, split_area_vertically,
};
use crate::interactive::{error_view, footer, status_header};
use crate::pipeline::Submission;

pub struct App {
    focus: ElementInFocus,
    pub should_quit: bool,
    clipboard: Option<Clipboard>,
    notice: Option<String>,
    input: InputView,
    submission: Submission,
    text_view: TextView,
    tree_view: TreeView,
}

impl App {
    pub fn new(initial: Option<String>) -> Self {
        let mut app = Self {
            focus: ElementInFocus::Input,
            should_quit: false,
            clipboard: Clipboard::new().ok(),
            notice: None,
            input: InputView::default(),
            submission: Submission::Empty,
            text_view: TextView::default(),
            tree_view: TreeView::default(),
        };
        if let Some(text) = initial {
            app.input.editor.insert_str(&text);
            app.refresh();
        }
        app
    }

    /// Validate the whole input again. Runs after every buffer change.
    fn refresh(&mut self) {
        self.submission = Submission::new(&self.input.editor.text());
        match &self.submission {
            Submission::Valid { pretty, tree } => {
                self.text_view.update(pretty);
                self.tree_view.update(tree);
            }
            Submission::Empty | Submission::Invalid(_) => {
                self.text_view.clear();
                self.tree_view.clear();
                self.focus = ElementInFocus::Input;
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        self.notice = None;
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('l') => self.clear_input(),
                KeyCode::Char('y') => self.copy_formatted(),
                _ => {}
            }
            return;
        }
        match self.focus {
            ElementInFocus::Input => self.on_key_input(key),
            ElementInFocus::FormattedView => self.on_key_formatted(key),
            ElementInFocus::TreeView => self.on_key_tree(key),
        }
    }

    fn on_key_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.on_tab(),
            KeyCode::BackTab => self.on_back_tab(),
            KeyCode::Enter => {
                self.input.editor.insert_newline();
                self.refresh();
            }
            KeyCode::Backspace => {
                self.input.editor.backspace();
                self.refresh();
            }
            KeyCode::Delete => {
                self.input.editor.delete();
                self.refresh();
            }
            KeyCode::Left => self.input.editor.move_left(),
            KeyCode::Right => self.input.editor.move_right(),
            KeyCode::Up => self.input.editor.move_up(),
            KeyCode::Down => self.input.editor.move_down(),
            KeyCode::Home => self.input.editor.move_line_start(),
            KeyCode::End => self.input.editor.move_line_end(),
            KeyCode::Char(char) if !key.modifiers.contains(KeyModifiers::ALT) => {
                self.input.editor.insert_char(char);
                self.refresh();
            }
            _ => {}
        }
    }

    fn on_key_formatted(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.on_tab(),
            KeyCode::BackTab => self.on_back_tab(),
            KeyCode::Esc => self.focus = ElementInFocus::Input,
            KeyCode::Up | KeyCode::Char('k') => self.text_view.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.text_view.scroll_down(1),
            KeyCode::PageUp => {
                let jump = self.text_view.page_jump();
                self.text_view.scroll_up(jump);
            }
            KeyCode::PageDown => {
                let jump = self.text_view.page_jump();
                self.text_view.scroll_down(jump);
            }
            KeyCode::Home => self.text_view.scroll_to_top(),
            KeyCode::End => self.text_view.scroll_to_bottom(),
            _ => {}
        }
    }

    fn on_key_tree(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.on_tab(),
            KeyCode::BackTab => self.on_back_tab(),
            KeyCode::Esc => self.focus = ElementInFocus::Input,
            KeyCode::Enter | KeyCode::Char(' ') => self.tree_view.toggle_selected(),
            KeyCode::Left | KeyCode::Char('h') => self.tree_view.close_selected(),
            KeyCode::Right | KeyCode::Char('l') => self.tree_view.open_selected(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.tree_view.change_selected(CursorMove::RelativeUp);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.tree_view.change_selected(CursorMove::RelativeDown);
            }
            KeyCode::Home => {
                self.tree_view.select_first();
            }
            KeyCode::End => {
                self.tree_view.select_last();
            }
            _ => {}
        }
    }

    fn on_tab(&mut self) {
        self.focus = if matches!(self.submission, Submission::Valid { .. }) {
            match self.focus {
                ElementInFocus::Input => ElementInFocus::FormattedView,
                ElementInFocus::FormattedView => ElementInFocus::TreeView,
                ElementInFocus::TreeView => ElementInFocus::Input,
            }
        } else {
            ElementInFocus::Input
        };
    }

    fn on_back_tab(&mut self) {
        self.focus = if matches!(self.submission, Submission::Valid { .. }) {
            match self.focus {
                ElementInFocus::Input => ElementInFocus::TreeView,
                ElementInFocus::FormattedView => ElementInFocus::Input,
                ElementInFocus::TreeView => ElementInFocus::FormattedView,
            }
        } else {
            ElementInFocus::Input
        };
    }

    pub fn on_scroll_up(&mut self) {
        match self.focus {
            ElementInFocus::Input => self.input.editor.move_up(),
            ElementInFocus::FormattedView => self.text_view.scroll_up(1),
            ElementInFocus::TreeView => {
                self.tree_view.change_selected(CursorMove::RelativeUp);
            }
        }
    }

    pub fn on_scroll_down(&mut self) {
        match self.focus {
            ElementInFocus::Input => self.input.editor.move_down(),
            ElementInFocus::FormattedView => self.text_view.scroll_down(1),
            ElementInFocus::TreeView => {
                self.tree_view.change_selected(CursorMove::RelativeDown);
            }
        }
    }

    pub fn on_click(&mut self, column: u16, row: u16) {
        if self.input.click(column, row) {
            self.focus = ElementInFocus::Input;
            return;
        }
        if !matches!(self.submission, Submission::Valid { .. }) {
            return;
        }
        if self
            .text_view
            .last_area
            .contains(Position { x: column, y: row })
        {
            self.focus = ElementInFocus::FormattedView;
            return;
        }
        if self.tree_view.click(column, row) {
            self.focus = ElementInFocus::TreeView;
        }
    }

    /// Bracketed paste arrives as one event and gets validated once.
    pub fn on_paste(&mut self, text: &str) {
        self.notice = None;
        self.focus = ElementInFocus::Input;
        self.input.editor.insert_str(text);
        self.refresh();
    }

    fn copy_formatted(&mut self) {
        let Submission::Valid { pretty, .. } = &self.submission else {
            self.notice = Some("Nothing to copy, the input is not valid JSON".to_owned());
            return;
        };
        let Some(clipboard) = &mut self.clipboard else {
            self.notice = Some("Clipboard is not available".to_owned());
            return;
        };
        self.notice = Some(match clipboard.set_text(pretty.clone()) {
            Ok(()) => "Copied formatted JSON to clipboard".to_owned(),
            Err(err) => format!("Clipboard error: {err}"),
        });
    }

    fn clear_input(&mut self) {
        self.input.clear();
        self.refresh();
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.size();
        let (body_area, footer_area) = split_area_vertically(area, area.height.saturating_sub(1));
        let (header_area, main_area) = split_area_vertically(body_area, 4);
        status_header::draw(frame, header_area, &self.submission, self.notice.as_deref());
        self.draw_main(frame, main_area);
        footer::draw(frame, footer_area, self.focus);
    }

    fn draw_main(&mut self, frame: &mut Frame, area: Rect) {
        match &self.submission {
            Submission::Empty => {
                self.input
                    .draw(frame, area, matches!(self.focus, ElementInFocus::Input));
            }
            Submission::Valid { .. } => {
                let (input_area, result_area) = split_area_horizontally(area, area.width / 2);
                self.input
                    .draw(frame, input_area, matches!(self.focus, ElementInFocus::Input));
                self.draw_result(frame, result_area);
            }
            Submission::Invalid(diagnostic) => {
                let (input_area, error_area) = split_area_horizontally(area, area.width / 2);
                self.input
                    .draw(frame, input_area, matches!(self.focus, ElementInFocus::Input));
                error_view::draw(frame, error_area, self.submission.state_label(), diagnostic);
            }
        }
    }

    fn draw_result(&mut self, frame: &mut Frame, area: Rect) {
        let has_focus = matches!(self.focus, ElementInFocus::FormattedView);
        let max_text_height = if has_focus {
            area.height.saturating_mul(2) / 3
        } else {
            area.height / 2
        };
        #[expect(clippy::cast_possible_truncation)]
        let text_height = min(
            usize::from(max_text_height),
            self.text_view.content_height().saturating_add(2),
        ) as u16;
        let (text_area, tree_area) = split_area_vertically(area, text_height);
        self.text_view.draw(frame, text_area, has_focus);
        self.tree_view.draw(
            frame,
            tree_area,
            matches!(self.focus, ElementInFocus::TreeView),
        );
    }
}

#[test]
fn typing_updates_the_state() {
    let mut app = App::new(None);
    assert!(matches!(app.submission, Submission::Empty));
    app.on_key(KeyEvent::new(KeyCode::Char('4'), KeyModifiers::NONE));
    app.on_key(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE));
    assert!(matches!(app.submission, Submission::Valid { .. }));
    app.on_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
    assert!(matches!(app.submission, Submission::Invalid(_)));
    app.on_key(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
    assert!(matches!(app.submission, Submission::Valid { .. }));
}

#[test]
fn quits_on_ctrl_c() {
    let mut app = App::new(None);
    app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}

#[test]
fn q_in_the_input_is_just_a_character() {
    let mut app = App::new(None);
    app.on_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
    assert!(!app.should_quit);
    assert_eq!(app.input.editor.text(), "q");
}

#[test]
fn tab_stays_on_the_input_while_not_valid() {
    let mut app = App::new(Some("{".to_owned()));
    assert!(matches!(app.submission, Submission::Invalid(_)));
    app.on_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
    assert!(matches!(app.focus, ElementInFocus::Input));
}

#[test]
fn tab_cycles_through_the_panes_while_valid() {
    let mut app = App::new(Some("[1]".to_owned()));
    app.on_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
    assert!(matches!(app.focus, ElementInFocus::FormattedView));
    app.on_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
    assert!(matches!(app.focus, ElementInFocus::TreeView));
    app.on_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
    assert!(matches!(app.focus, ElementInFocus::Input));
}

#[test]
fn clearing_resets_state_and_focus() {
    let mut app = App::new(Some("[1]".to_owned()));
    app.on_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
    app.on_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL));
    assert!(matches!(app.submission, Submission::Empty));
    assert!(matches!(app.focus, ElementInFocus::Input));
    assert_eq!(app.input.editor.text(), "");
}

#[test]
fn paste_ends_up_in_the_input() {
    let mut app = App::new(None);
    app.on_paste("{\"key\": [1, 2]}");
    assert!(matches!(app.submission, Submission::Valid { .. }));
    assert!(matches!(app.focus, ElementInFocus::Input));
}

#[test]
fn copy_without_valid_json_sets_a_notice() {
    let mut app = App::new(None);
    app.on_key(KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL));
    assert!(app.notice.is_some());
    app.on_key(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE));
    assert!(app.notice.is_none());
}
