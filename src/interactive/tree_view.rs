use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Scrollbar, ScrollbarOrientation};
use tui_tree_widget::{Tree, TreeItem, TreeState};

use crate::highlight;
use crate::interactive::ui::{BORDERS_TOP_RIGHT, CursorMove, focus_color, get_row_inside};
use crate::selector::JsonSelector;
use crate::tree::{Node, Variant};

const STYLE_HINT: Style = Style::new().fg(Color::DarkGray);

const fn scalar_style(variant: Variant) -> Style {
    match variant {
        Variant::Null | Variant::Boolean => highlight::STYLE_LITERAL,
        Variant::Number => highlight::STYLE_NUMBER,
        Variant::String => highlight::STYLE_STRING,
        Variant::Array | Variant::Object => highlight::STYLE_PUNCTUATION,
    }
}

impl From<&Node> for TreeItem<'static, JsonSelector> {
    fn from(node: &Node) -> Self {
        let mut spans = vec![Span::styled(node.label(), highlight::STYLE_KEY)];
        if let Some(hint) = node.type_hint() {
            spans.push(Span::raw(": "));
            spans.push(Span::styled(hint, STYLE_HINT));
        }
        if let Some(scalar) = &node.scalar {
            spans.push(Span::raw(": "));
            spans.push(Span::styled(scalar.to_string(), scalar_style(node.variant)));
        }
        let text = Line::from(spans);
        if node.is_expandable() {
            let children = node.children.iter().map(Self::from).collect();
            Self::new(node.selector.clone(), text, children)
                .expect("siblings always have unique selectors")
        } else {
            Self::new_leaf(node.selector.clone(), text)
        }
    }
}

/// Hierarchical pane of the decoded value with caller owned collapse state.
///
/// Every update starts fully expanded. Which paths count as opened lives in
/// the widget state, the nodes themselves stay untouched.
#[derive(Default)]
pub struct TreeView {
    items: Vec<TreeItem<'static, JsonSelector>>,
    state: TreeState<JsonSelector>,
    node_count: usize,
    pub last_area: Rect,
}

impl TreeView {
    pub fn update(&mut self, root: &Node) {
        self.items = vec![TreeItem::from(root)];
        self.node_count = root.size();
        self.state = TreeState::default();
        for path in root.expandable_paths() {
            self.state.open(path);
        }
        self.state.select(vec![JsonSelector::None]);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn change_selected(&mut self, cursor_move: CursorMove) -> bool {
        let visible = self.state.flatten(&self.items);
        if visible.is_empty() {
            return false;
        }
        let current_identifier = self.state.selected();
        let current_index = visible
            .iter()
            .position(|flattened| flattened.identifier == current_identifier);
        let new_index = match cursor_move {
            CursorMove::Absolute(index) => index,
            CursorMove::RelativeUp => {
                current_index.map_or(usize::MAX, |index| index.overflowing_sub(1).0)
            }
            CursorMove::RelativeDown => current_index.map_or(0, |index| index.saturating_add(1)),
        }
        .min(visible.len() - 1);
        let changed = current_index != Some(new_index);
        let identifier = visible[new_index].identifier.clone();
        self.state.select(identifier);
        changed
    }

    pub fn select_first(&mut self) -> bool {
        self.change_selected(CursorMove::Absolute(0))
    }

    pub fn select_last(&mut self) -> bool {
        self.change_selected(CursorMove::Absolute(usize::MAX))
    }

    pub fn open_selected(&mut self) {
        self.state.open(self.state.selected().to_vec());
    }

    /// Close the selected node. When it can not close the parent gets selected.
    pub fn close_selected(&mut self) {
        let mut selected = self.state.selected().to_vec();
        if !self.state.close(&selected) {
            selected.pop();
            self.state.select(selected);
        }
    }

    pub fn toggle_selected(&mut self) {
        self.state.toggle_selected();
    }

    fn index_of_click(&self, column: u16, row: u16) -> Option<usize> {
        let index = get_row_inside(self.last_area, column, row)?;
        Some(usize::from(index) + self.state.get_offset())
    }

    /// Handle a mouse click. Selects the row, a second click toggles it.
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        let Some(index) = self.index_of_click(column, row) else {
            return false;
        };
        let visible = self.state.flatten(&self.items);
        let Some(flattened) = visible.get(index) else {
            return true;
        };
        let identifier = flattened.identifier.clone();
        if self.state.selected() == identifier {
            self.state.toggle_selected();
        } else {
            self.state.select(identifier);
        }
        true
    }

    pub fn draw(&mut self, frame: &mut Frame, area: Rect, has_focus: bool) {
        self.last_area = area;
        let focus_color = focus_color(has_focus);
        let widget = Tree::new(&self.items)
            .unwrap()
            .experimental_scrollbar(Some(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None)
                    .track_symbol(None),
            ))
            .highlight_style(Style::new().fg(Color::Black).bg(focus_color))
            .block(
                Block::new()
                    .border_type(BorderType::Rounded)
                    .borders(BORDERS_TOP_RIGHT)
                    .title_alignment(Alignment::Center)
                    .border_style(Style::new().fg(focus_color))
                    .title(format!("Tree (Nodes: {})", self.node_count)),
            );
        frame.render_stateful_widget(widget, area, &mut self.state);
    }
}

#[cfg(test)]
use ratatui::Terminal;
#[cfg(test)]
use ratatui::backend::TestBackend;
#[cfg(test)]
use serde_json::json;

#[cfg(test)]
fn example_view() -> TreeView {
    let root = Node::new(JsonSelector::None, &json!({"a": 1, "b": [2, 3]}));
    let mut view = TreeView::default();
    view.update(&root);
    view
}

#[test]
fn update_opens_every_level() {
    let view = example_view();
    assert_eq!(view.state.flatten(&view.items).len(), 5);
    assert_eq!(view.state.selected(), [JsonSelector::None]);
    assert_eq!(view.node_count, 5);
}

#[test]
fn scalar_root_has_a_single_row() {
    let root = Node::new(JsonSelector::None, &json!(42));
    let mut view = TreeView::default();
    view.update(&root);
    assert_eq!(view.state.flatten(&view.items).len(), 1);
    assert_eq!(view.node_count, 1);
}

#[test]
fn toggle_collapses_and_expands() {
    let mut view = example_view();
    view.toggle_selected();
    assert_eq!(view.state.flatten(&view.items).len(), 1);
    view.toggle_selected();
    assert_eq!(view.state.flatten(&view.items).len(), 5);
}

#[test]
fn cursor_wraps_up_and_stops_at_the_bottom() {
    let mut view = example_view();
    assert!(view.change_selected(CursorMove::RelativeUp));
    assert_eq!(
        view.state.selected(),
        [
            JsonSelector::None,
            JsonSelector::ObjectKey("b".to_owned()),
            JsonSelector::ArrayIndex(1),
        ]
    );
    assert!(!view.change_selected(CursorMove::RelativeDown));
    assert!(view.select_first());
    assert_eq!(view.state.selected(), [JsonSelector::None]);
}

#[test]
fn closing_a_leaf_selects_the_parent() {
    let mut view = example_view();
    view.change_selected(CursorMove::Absolute(3));
    view.close_selected();
    assert_eq!(
        view.state.selected(),
        [JsonSelector::None, JsonSelector::ObjectKey("b".to_owned())]
    );
    view.close_selected();
    assert_eq!(view.state.flatten(&view.items).len(), 3);
}

#[test]
fn open_expands_a_closed_node_again() {
    let mut view = example_view();
    view.change_selected(CursorMove::Absolute(2));
    view.close_selected();
    assert_eq!(view.state.flatten(&view.items).len(), 3);
    view.open_selected();
    assert_eq!(view.state.flatten(&view.items).len(), 5);
}

#[test]
fn click_selects_then_toggles() {
    let mut view = example_view();
    view.last_area = Rect::new(0, 0, 30, 10);
    assert!(view.click(5, 3));
    assert_eq!(
        view.state.selected(),
        [JsonSelector::None, JsonSelector::ObjectKey("b".to_owned())]
    );
    assert!(view.click(5, 3));
    assert_eq!(view.state.flatten(&view.items).len(), 3);
    assert!(!view.click(5, 25));
}

#[test]
fn rendered_rows_put_a_colon_after_the_label() {
    let mut view = example_view();
    let mut terminal = Terminal::new(TestBackend::new(30, 7)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.size();
            view.draw(frame, area, false);
        })
        .unwrap();
    let buffer = terminal.backend().buffer();
    let rows = (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer.get(x, y).symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>();
    assert!(rows[1].contains("JSON: Object[2]"), "{rows:?}");
    assert!(rows[2].contains("a: 1"), "{rows:?}");
    assert!(rows[3].contains("b: Array[2]"), "{rows:?}");
    assert!(rows[4].contains("0: 2"), "{rows:?}");
}

#[test]
fn clear_leaves_nothing_to_select() {
    let mut view = example_view();
    view.clear();
    assert!(view.state.flatten(&view.items).is_empty());
    assert!(!view.change_selected(CursorMove::RelativeDown));
}
