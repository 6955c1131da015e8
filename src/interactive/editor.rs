use std::cmp::min;

use unicode_width::UnicodeWidthChar as _;

/// Multi line text buffer with a character indexed cursor.
///
/// There is always at least one line and lines never contain line breaks.
/// Carriage returns are dropped and tabs arrive as two spaces so every
/// character maps to terminal cells.
pub struct Editor {
    lines: Vec<String>,
    row: usize,
    /// Character index inside the line, not a byte index.
    col: usize,
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }
}

impl Editor {
    #[cfg(test)]
    fn new(text: &str) -> Self {
        let mut editor = Self::default();
        editor.insert_str(text);
        editor
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub const fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn byte_count(&self) -> usize {
        let separators = self.lines.len().saturating_sub(1);
        self.lines.iter().map(String::len).sum::<usize>() + separators
    }

    pub fn insert_char(&mut self, char: char) {
        match char {
            '\n' => self.insert_newline(),
            '\r' => {}
            '\t' => self.insert_str("  "),
            char => {
                let line = &mut self.lines[self.row];
                let byte = byte_index(line, self.col);
                line.insert(byte, char);
                self.col += 1;
            }
        }
    }

    pub fn insert_str(&mut self, text: &str) {
        for char in text.chars() {
            self.insert_char(char);
        }
    }

    pub fn insert_newline(&mut self) {
        let line = &mut self.lines[self.row];
        let byte = byte_index(line, self.col);
        let remainder = line.split_off(byte);
        self.lines.insert(self.row + 1, remainder);
        self.row += 1;
        self.col = 0;
    }

    pub fn backspace(&mut self) {
        if self.col > 0 {
            self.col -= 1;
            let line = &mut self.lines[self.row];
            let byte = byte_index(line, self.col);
            line.remove(byte);
        } else if self.row > 0 {
            let removed = self.lines.remove(self.row);
            self.row -= 1;
            self.col = char_count(&self.lines[self.row]);
            self.lines[self.row].push_str(&removed);
        }
    }

    pub fn delete(&mut self) {
        if self.col < char_count(&self.lines[self.row]) {
            let line = &mut self.lines[self.row];
            let byte = byte_index(line, self.col);
            line.remove(byte);
        } else if self.row + 1 < self.lines.len() {
            let removed = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&removed);
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = char_count(&self.lines[self.row]);
        }
    }

    pub fn move_right(&mut self) {
        if self.col < char_count(&self.lines[self.row]) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.clamp_col();
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.clamp_col();
        }
    }

    pub fn move_line_start(&mut self) {
        self.col = 0;
    }

    pub fn move_line_end(&mut self) {
        self.col = char_count(&self.lines[self.row]);
    }

    /// Display width of the current line before the cursor.
    pub fn cursor_display_x(&self) -> usize {
        self.lines[self.row]
            .chars()
            .take(self.col)
            .map(|char| char.width().unwrap_or(0))
            .sum()
    }

    /// Move the cursor to the character closest to the given display cell.
    pub fn move_to_display(&mut self, row: usize, wanted_x: usize) {
        self.row = min(row, self.lines.len().saturating_sub(1));
        let mut col = 0;
        let mut width = 0;
        for char in self.lines[self.row].chars() {
            let char_width = char.width().unwrap_or(0);
            if width + char_width > wanted_x {
                break;
            }
            width += char_width;
            col += 1;
        }
        self.col = col;
    }

    fn clamp_col(&mut self) {
        self.col = min(self.col, char_count(&self.lines[self.row]));
    }
}

fn char_count(line: &str) -> usize {
    line.chars().count()
}

fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map_or(line.len(), |(index, _)| index)
}

#[test]
fn starts_with_a_single_empty_line() {
    let editor = Editor::default();
    assert_eq!(editor.lines(), [String::new()]);
    assert_eq!(editor.cursor(), (0, 0));
    assert_eq!(editor.byte_count(), 0);
}

#[test]
fn new_places_cursor_at_the_end() {
    let editor = Editor::new("{\n  \"key\": true\n}");
    assert_eq!(editor.lines().len(), 3);
    assert_eq!(editor.cursor(), (2, 1));
    assert_eq!(editor.text(), "{\n  \"key\": true\n}");
}

#[test]
fn insert_char_advances_cursor() {
    let mut editor = Editor::default();
    editor.insert_char('4');
    editor.insert_char('2');
    assert_eq!(editor.text(), "42");
    assert_eq!(editor.cursor(), (0, 2));
}

#[test]
fn newline_splits_the_current_line() {
    let mut editor = Editor::new("abcd");
    editor.move_left();
    editor.move_left();
    editor.insert_newline();
    assert_eq!(editor.text(), "ab\ncd");
    assert_eq!(editor.cursor(), (1, 0));
}

#[test]
fn backspace_removes_before_cursor() {
    let mut editor = Editor::new("abc");
    editor.move_left();
    editor.backspace();
    assert_eq!(editor.text(), "ac");
    assert_eq!(editor.cursor(), (0, 1));
}

#[test]
fn backspace_at_line_start_joins_lines() {
    let mut editor = Editor::new("ab\ncd");
    editor.move_line_start();
    editor.backspace();
    assert_eq!(editor.text(), "abcd");
    assert_eq!(editor.cursor(), (0, 2));
}

#[test]
fn delete_at_line_end_joins_lines() {
    let mut editor = Editor::new("ab\ncd");
    editor.move_up();
    editor.move_line_end();
    editor.delete();
    assert_eq!(editor.text(), "abcd");
    assert_eq!(editor.cursor(), (0, 2));
}

#[test]
fn tab_becomes_two_spaces() {
    let editor = Editor::new("a\tb");
    assert_eq!(editor.text(), "a  b");
}

#[test]
fn carriage_returns_are_dropped() {
    let editor = Editor::new("a\r\nb");
    assert_eq!(editor.text(), "a\nb");
}

#[test]
fn left_wraps_to_previous_line_end() {
    let mut editor = Editor::new("ab\ncd");
    editor.move_line_start();
    editor.move_left();
    assert_eq!(editor.cursor(), (0, 2));
    editor.move_right();
    assert_eq!(editor.cursor(), (1, 0));
}

#[test]
fn vertical_movement_clamps_the_column() {
    let mut editor = Editor::new("long line\nx");
    assert_eq!(editor.cursor(), (1, 1));
    editor.move_up();
    assert_eq!(editor.cursor(), (0, 1));
    editor.move_line_end();
    editor.move_down();
    assert_eq!(editor.cursor(), (1, 1));
}

#[test]
fn move_to_display_respects_wide_characters() {
    let mut editor = Editor::new("a漢x");
    editor.move_to_display(0, 2);
    assert_eq!(editor.cursor(), (0, 1));
    editor.move_to_display(0, 3);
    assert_eq!(editor.cursor(), (0, 2));
    editor.move_to_display(0, 99);
    assert_eq!(editor.cursor(), (0, 3));
}

#[test]
fn clear_resets_everything() {
    let mut editor = Editor::new("{\"a\":1}");
    editor.clear();
    assert_eq!(editor.text(), "");
    assert_eq!(editor.cursor(), (0, 0));
}

#[test]
fn byte_count_includes_separators() {
    assert_eq!(Editor::new("ab\ncd").byte_count(), 5);
}
