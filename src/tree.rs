use serde_json::Value as JsonValue;

use crate::selector::JsonSelector;

/// Label of the node every tree starts with.
pub const ROOT_LABEL: &str = "JSON";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl Variant {
    pub const fn of(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(_) => Self::Boolean,
            JsonValue::Number(_) => Self::Number,
            JsonValue::String(_) => Self::String,
            JsonValue::Array(_) => Self::Array,
            JsonValue::Object(_) => Self::Object,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Boolean => "Boolean",
            Self::Number => "Number",
            Self::String => "String",
            Self::Array => "Array",
            Self::Object => "Object",
        }
    }

    pub const fn is_container(self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }
}

/// Tree form of one decoded JSON value at one position in the hierarchy.
///
/// Building is pure and deterministic.
/// Collapse state lives in the view as a set of opened paths, not on the node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub selector: JsonSelector,
    pub variant: Variant,
    /// Scalar in its literal JSON form. Containers carry children instead.
    pub scalar: Option<JsonValue>,
    pub children: Vec<Self>,
}

impl Node {
    pub fn new(selector: JsonSelector, value: &JsonValue) -> Self {
        let variant = Variant::of(value);
        let (scalar, children) = match value {
            JsonValue::Object(object) => (
                None,
                object
                    .iter()
                    .map(|(key, value)| Self::new(JsonSelector::ObjectKey(key.clone()), value))
                    .collect(),
            ),
            JsonValue::Array(array) => (
                None,
                array
                    .iter()
                    .enumerate()
                    .map(|(index, value)| Self::new(JsonSelector::ArrayIndex(index), value))
                    .collect(),
            ),
            scalar => (Some(scalar.clone()), Vec::new()),
        };
        Self {
            selector,
            variant,
            scalar,
            children,
        }
    }

    /// Property key, stringified array index or the fixed root label.
    pub fn label(&self) -> String {
        match &self.selector {
            JsonSelector::None => ROOT_LABEL.to_owned(),
            selector => selector.to_string(),
        }
    }

    pub fn is_expandable(&self) -> bool {
        self.variant.is_container() && !self.children.is_empty()
    }

    pub fn entry_count(&self) -> usize {
        self.children.len()
    }

    /// Hint shown for containers, like `Array[3]` or `Object[0]`.
    pub fn type_hint(&self) -> Option<String> {
        self.variant
            .is_container()
            .then(|| format!("{}[{}]", self.variant.name(), self.children.len()))
    }

    /// Total amount of nodes in this tree including itself.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Self::size).sum::<usize>()
    }

    /// Follow a path of selectors. The first step has to match this node itself.
    pub fn find(&self, path: &[JsonSelector]) -> Option<&Self> {
        let (first, rest) = path.split_first()?;
        if first != &self.selector {
            return None;
        }
        let mut current = self;
        for step in rest {
            current = current
                .children
                .iter()
                .find(|child| &child.selector == step)?;
        }
        Some(current)
    }

    /// Paths of all nodes that can collapse or expand, parents before children.
    pub fn expandable_paths(&self) -> Vec<Vec<JsonSelector>> {
        let mut paths = Vec::new();
        self.collect_expandable_paths(&mut Vec::new(), &mut paths);
        paths
    }

    fn collect_expandable_paths(
        &self,
        prefix: &mut Vec<JsonSelector>,
        paths: &mut Vec<Vec<JsonSelector>>,
    ) {
        if !self.is_expandable() {
            return;
        }
        prefix.push(self.selector.clone());
        paths.push(prefix.clone());
        for child in &self.children {
            child.collect_expandable_paths(prefix, paths);
        }
        prefix.pop();
    }

    #[cfg(test)]
    fn rebuild(&self) -> JsonValue {
        match self.variant {
            Variant::Array => JsonValue::Array(self.children.iter().map(Self::rebuild).collect()),
            Variant::Object => JsonValue::Object(
                self.children
                    .iter()
                    .map(|child| match &child.selector {
                        JsonSelector::ObjectKey(key) => (key.clone(), child.rebuild()),
                        _ => unreachable!("object children are selected by key"),
                    })
                    .collect(),
            ),
            _ => self.scalar.clone().expect("scalar nodes keep their value"),
        }
    }
}

#[cfg(test)]
use serde_json::json;

#[cfg(test)]
fn example_root() -> Node {
    Node::new(JsonSelector::None, &json!({"a": 1, "b": [2, 3]}))
}

#[test]
fn classifies_all_variants() {
    assert_eq!(Variant::of(&json!(null)), Variant::Null);
    assert_eq!(Variant::of(&json!(false)), Variant::Boolean);
    assert_eq!(Variant::of(&json!(42)), Variant::Number);
    assert_eq!(Variant::of(&json!("bla")), Variant::String);
    assert_eq!(Variant::of(&json!([])), Variant::Array);
    assert_eq!(Variant::of(&json!({})), Variant::Object);
}

#[test]
fn scalar_root_is_leaf() {
    let root = Node::new(JsonSelector::None, &json!(42));
    assert!(!root.is_expandable());
    assert_eq!(root.label(), "JSON");
    assert_eq!(root.scalar, Some(json!(42)));
    assert!(root.children.is_empty());
}

#[test]
fn string_scalar_keeps_quotes_in_literal_form() {
    let root = Node::new(JsonSelector::None, &json!("bla"));
    let literal = root.scalar.map(|scalar| scalar.to_string());
    assert_eq!(literal, Some(r#""bla""#.to_owned()));
}

#[test]
fn example_structure_works() {
    let root = example_root();
    assert!(root.is_expandable());
    assert_eq!(root.entry_count(), 2);

    let alpha = &root.children[0];
    assert_eq!(alpha.label(), "a");
    assert_eq!(alpha.variant, Variant::Number);
    assert_eq!(alpha.scalar, Some(json!(1)));
    assert!(!alpha.is_expandable());

    let beta = &root.children[1];
    assert_eq!(beta.label(), "b");
    assert_eq!(beta.variant, Variant::Array);
    assert!(beta.is_expandable());
    let labels = beta.children.iter().map(Node::label).collect::<Vec<_>>();
    assert_eq!(labels, ["0", "1"]);
    assert_eq!(beta.children[0].scalar, Some(json!(2)));
    assert_eq!(beta.children[1].scalar, Some(json!(3)));
}

#[test]
fn object_children_keep_source_order() {
    let root = Node::new(JsonSelector::None, &json!({"z": 1, "a": 2}));
    let labels = root.children.iter().map(Node::label).collect::<Vec<_>>();
    assert_eq!(labels, ["z", "a"]);
}

#[test]
fn empty_containers_are_leaves_with_zero_count() {
    let array = Node::new(JsonSelector::None, &json!([]));
    assert!(!array.is_expandable());
    assert_eq!(array.type_hint(), Some("Array[0]".to_owned()));
    assert_eq!(array.scalar, None);

    let object = Node::new(JsonSelector::None, &json!({}));
    assert!(!object.is_expandable());
    assert_eq!(object.type_hint(), Some("Object[0]".to_owned()));
}

#[test]
fn type_hints_show_entry_count() {
    let root = example_root();
    assert_eq!(root.type_hint(), Some("Object[2]".to_owned()));
    assert_eq!(root.children[1].type_hint(), Some("Array[2]".to_owned()));
    assert_eq!(root.children[0].type_hint(), None);
}

#[test]
fn nested_depth_is_preserved() {
    let root = Node::new(JsonSelector::None, &json!({"x": {"y": {"z": true}}}));
    let path = [
        JsonSelector::None,
        JsonSelector::ObjectKey("x".to_owned()),
        JsonSelector::ObjectKey("y".to_owned()),
        JsonSelector::ObjectKey("z".to_owned()),
    ];
    let leaf = root.find(&path).unwrap();
    assert_eq!(leaf.variant, Variant::Boolean);
    assert_eq!(leaf.scalar, Some(json!(true)));
    assert!(!leaf.is_expandable());

    for depth in 1..path.len() {
        let node = root.find(&path[..depth]).unwrap();
        assert!(node.is_expandable());
        assert_eq!(node.entry_count(), 1);
    }
}

#[test]
fn find_misses_unknown_path() {
    let root = example_root();
    assert_eq!(root.find(&[]), None);
    assert_eq!(root.find(&[JsonSelector::ObjectKey("a".to_owned())]), None);
    let missing = [
        JsonSelector::None,
        JsonSelector::ObjectKey("missing".to_owned()),
    ];
    assert_eq!(root.find(&missing), None);
}

#[test]
fn expandable_paths_cover_containers_only() {
    let paths = example_root().expandable_paths();
    assert_eq!(
        paths,
        [
            vec![JsonSelector::None],
            vec![JsonSelector::None, JsonSelector::ObjectKey("b".to_owned())],
        ]
    );
}

#[test]
fn size_counts_all_nodes() {
    assert_eq!(example_root().size(), 5);
}

#[test]
fn build_is_deterministic() {
    let value = json!({"a": 1, "b": [2, 3]});
    assert_eq!(
        Node::new(JsonSelector::None, &value),
        Node::new(JsonSelector::None, &value)
    );
}

#[test]
fn rebuild_reproduces_decoded_value() {
    let text = r#"{"z": 1, "a": [true, null], "m": {"k": "v"}}"#;
    let value = serde_json::from_str::<JsonValue>(text).unwrap();
    let root = Node::new(JsonSelector::None, &value);
    assert_eq!(root.rebuild(), value);
}

#[test]
fn rebuild_keeps_key_order() {
    let value = serde_json::from_str::<JsonValue>(r#"{"z":1,"a":2}"#).unwrap();
    let root = Node::new(JsonSelector::None, &value);
    assert_eq!(root.rebuild().to_string(), r#"{"z":1,"a":2}"#);
}
