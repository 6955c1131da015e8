use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

pub const STYLE_KEY: Style = Style::new()
    .fg(Color::LightBlue)
    .add_modifier(Modifier::BOLD);
pub const STYLE_STRING: Style = Style::new().fg(Color::LightGreen);
pub const STYLE_NUMBER: Style = Style::new().fg(Color::LightMagenta);
pub const STYLE_LITERAL: Style = Style::new().fg(Color::LightYellow);
pub const STYLE_PUNCTUATION: Style = Style::new().fg(Color::DarkGray);

/// Tokenize JSON text into styled lines.
///
/// Lossless: the spans of each line concatenate back to exactly that line.
/// Works line by line as JSON strings never contain raw line breaks.
pub fn highlight(text: &str) -> Text<'static> {
    Text::from(text.lines().map(highlight_line).collect::<Vec<_>>())
}

fn highlight_line(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut rest = line;
    while let Some(char) = rest.chars().next() {
        let (length, style) = match char {
            '"' => string_token(rest),
            '{' | '}' | '[' | ']' | ':' | ',' => (char.len_utf8(), Some(STYLE_PUNCTUATION)),
            '-' | '0'..='9' => (number_length(rest), Some(STYLE_NUMBER)),
            char if char.is_ascii_alphabetic() => word_token(rest),
            _ => (plain_length(rest), None),
        };
        let (token, remaining) = rest.split_at(length);
        spans.push(style.map_or_else(
            || Span::raw(token.to_owned()),
            |style| Span::styled(token.to_owned(), style),
        ));
        rest = remaining;
    }
    Line::from(spans)
}

/// Byte length of the string starting the input. A key when a colon follows.
fn string_token(rest: &str) -> (usize, Option<Style>) {
    let mut escaped = false;
    let mut end = rest.len();
    for (index, char) in rest.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if char == '\\' {
            escaped = true;
        } else if char == '"' {
            end = index + 1;
            break;
        }
    }
    let style = if rest[end..].trim_start().starts_with(':') {
        STYLE_KEY
    } else {
        STYLE_STRING
    };
    (end, Some(style))
}

fn number_length(rest: &str) -> usize {
    rest.find(|char: char| !matches!(char, '0'..='9' | '-' | '+' | '.' | 'e' | 'E'))
        .unwrap_or(rest.len())
}

fn word_token(rest: &str) -> (usize, Option<Style>) {
    let length = rest
        .find(|char: char| !char.is_ascii_alphabetic())
        .unwrap_or(rest.len());
    let style = matches!(&rest[..length], "true" | "false" | "null").then_some(STYLE_LITERAL);
    (length, style)
}

fn plain_length(rest: &str) -> usize {
    rest.char_indices()
        .skip(1)
        .find(|&(_, char)| is_token_start(char))
        .map_or(rest.len(), |(index, _)| index)
}

fn is_token_start(char: char) -> bool {
    matches!(char, '"' | '{' | '}' | '[' | ']' | ':' | ',' | '-') || char.is_ascii_alphanumeric()
}

#[cfg(test)]
fn line_text(line: &Line) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

#[test]
fn reassembles_lossless() {
    let text = "{\n  \"key\": [\"value\", -1.5e3, true, null]\n}";
    let lines = highlight(text)
        .lines
        .iter()
        .map(line_text)
        .collect::<Vec<_>>();
    assert_eq!(lines, text.lines().collect::<Vec<_>>());
}

#[test]
fn distinguishes_keys_from_string_values() {
    let line = highlight_line(r#"  "key": "value","#);
    let styled = line
        .spans
        .iter()
        .map(|span| (span.content.as_ref(), span.style))
        .collect::<Vec<_>>();
    assert!(styled.contains(&(r#""key""#, STYLE_KEY)));
    assert!(styled.contains(&(r#""value""#, STYLE_STRING)));
}

#[test]
fn styles_numbers_literals_and_punctuation() {
    let line = highlight_line("[1, -2.5e10, true, null, false]");
    let style_of = |text: &str| {
        line.spans
            .iter()
            .find(|span| span.content == text)
            .map(|span| span.style)
    };
    assert_eq!(style_of("1"), Some(STYLE_NUMBER));
    assert_eq!(style_of("-2.5e10"), Some(STYLE_NUMBER));
    assert_eq!(style_of("true"), Some(STYLE_LITERAL));
    assert_eq!(style_of("null"), Some(STYLE_LITERAL));
    assert_eq!(style_of("false"), Some(STYLE_LITERAL));
    assert_eq!(style_of("["), Some(STYLE_PUNCTUATION));
    assert_eq!(style_of(","), Some(STYLE_PUNCTUATION));
}

#[test]
fn escaped_quote_stays_inside_string_token() {
    let line = highlight_line(r#"{"a\"b": "c\\"}"#);
    assert_eq!(line_text(&line), r#"{"a\"b": "c\\"}"#);
    assert!(line
        .spans
        .iter()
        .any(|span| span.content == r#""a\"b""# && span.style == STYLE_KEY));
}
