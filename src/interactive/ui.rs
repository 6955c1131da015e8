use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Borders;

pub const BORDERS_TOP_RIGHT: Borders = Borders::TOP.union(Borders::RIGHT);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementInFocus {
    Input,
    FormattedView,
    TreeView,
}

#[derive(Clone, Copy)]
pub enum CursorMove {
    Absolute(usize),
    RelativeUp,
    RelativeDown,
}

pub const fn focus_color(has_focus: bool) -> Color {
    if has_focus {
        Color::LightGreen
    } else {
        Color::Gray
    }
}

/// Split the area vertically. The first one gets the wanted height when available.
pub fn split_area_vertically(area: Rect, first_height: u16) -> (Rect, Rect) {
    let first_height = first_height.min(area.height);
    let first = Rect::new(area.x, area.y, area.width, first_height);
    let second = Rect::new(
        area.x,
        area.y.saturating_add(first_height),
        area.width,
        area.height.saturating_sub(first_height),
    );
    (first, second)
}

/// Split the area horizontally. The first one gets the wanted width when available.
pub fn split_area_horizontally(area: Rect, first_width: u16) -> (Rect, Rect) {
    let first_width = first_width.min(area.width);
    let first = Rect::new(area.x, area.y, first_width, area.height);
    let second = Rect::new(
        area.x.saturating_add(first_width),
        area.y,
        area.width.saturating_sub(first_width),
        area.height,
    );
    (first, second)
}

/// When the column/row is inside the area, return the row relative to the area.
/// Otherwise `None` is returned.
pub fn get_row_inside(area: Rect, column: u16, row: u16) -> Option<u16> {
    if row > area.top() && row < area.bottom() && column > area.left() && column < area.right() {
        Some(row - area.top() - 1)
    } else {
        None
    }
}

#[test]
fn row_outside() {
    let area = Rect::new(5, 5, 5, 10);
    let result = get_row_inside(area, 7, 1);
    assert_eq!(result, None);
}

#[test]
fn column_outside() {
    let area = Rect::new(5, 5, 5, 10);
    let result = get_row_inside(area, 1, 7);
    assert_eq!(result, None);
}

#[test]
fn is_inside() {
    let area = Rect::new(5, 5, 5, 10);
    let result = get_row_inside(area, 7, 10);
    assert_eq!(result, Some(4));
}

#[test]
fn split_vertically_works() {
    let (top, bottom) = split_area_vertically(Rect::new(0, 0, 20, 10), 4);
    assert_eq!(top, Rect::new(0, 0, 20, 4));
    assert_eq!(bottom, Rect::new(0, 4, 20, 6));
}

#[test]
fn split_vertically_caps_at_area_height() {
    let (top, bottom) = split_area_vertically(Rect::new(0, 0, 20, 10), 30);
    assert_eq!(top, Rect::new(0, 0, 20, 10));
    assert_eq!(bottom.height, 0);
}

#[test]
fn split_horizontally_works() {
    let (left, right) = split_area_horizontally(Rect::new(0, 0, 20, 10), 8);
    assert_eq!(left, Rect::new(0, 0, 8, 10));
    assert_eq!(right, Rect::new(8, 0, 12, 10));
}
