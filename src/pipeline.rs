use serde_json::Value as JsonValue;

use crate::selector::JsonSelector;
use crate::tree::Node;

/// Result of handing raw input text to the decode pipeline.
///
/// Every submission fully replaces the previous one.
/// Identical input always produces an identical submission.
#[derive(Debug, PartialEq)]
pub enum Submission {
    /// Input is empty or whitespace only. All output stays cleared.
    Empty,
    Valid {
        /// Canonical pretty form with 2 space indentation.
        pretty: String,
        tree: Node,
    },
    /// Diagnostic of the decoder, verbatim.
    Invalid(String),
}

impl Submission {
    pub fn new(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::Empty;
        }
        match serde_json::from_str::<JsonValue>(raw) {
            Ok(value) => Self::Valid {
                pretty: pretty(&value),
                tree: Node::new(JsonSelector::None, &value),
            },
            Err(err) => Self::Invalid(err.to_string()),
        }
    }

    pub const fn state_label(&self) -> &'static str {
        match self {
            Self::Empty => "Ready",
            Self::Valid { .. } => "Valid JSON",
            Self::Invalid(_) => "Invalid JSON",
        }
    }
}

fn pretty(value: &JsonValue) -> String {
    serde_json::to_string_pretty(value).expect("serializing a decoded value should never fail")
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(Submission::new(""), Submission::Empty);
    assert_eq!(Submission::new("   \n\t "), Submission::Empty);
}

#[test]
fn valid_input_builds_pretty_text_and_tree() {
    let Submission::Valid { pretty, tree } = Submission::new(r#"{"a":1,"b":[2,3]}"#) else {
        panic!("should be valid");
    };
    assert_eq!(pretty, "{\n  \"a\": 1,\n  \"b\": [\n    2,\n    3\n  ]\n}");
    assert_eq!(tree.label(), "JSON");
    assert_eq!(tree.entry_count(), 2);
}

#[test]
fn trailing_comma_is_reported_verbatim() {
    assert_eq!(
        Submission::new(r#"{"a":1,}"#),
        Submission::Invalid("trailing comma at line 1 column 8".to_owned())
    );
}

#[test]
fn garbage_after_value_is_invalid() {
    assert!(matches!(Submission::new("42 bla"), Submission::Invalid(_)));
}

#[test]
fn empty_array_is_valid_with_leaf_root() {
    let Submission::Valid { pretty, tree } = Submission::new("[]") else {
        panic!("should be valid");
    };
    assert_eq!(pretty, "[]");
    assert!(!tree.is_expandable());
    assert_eq!(tree.type_hint(), Some("Array[0]".to_owned()));
}

#[test]
fn big_numbers_stay_exact() {
    let Submission::Valid { pretty, .. } = Submission::new("18446744073709551615") else {
        panic!("should be valid");
    };
    assert_eq!(pretty, "18446744073709551615");
}

#[test]
fn identical_input_yields_identical_submission() {
    let text = r#"{"x":{"y":{"z":true}}}"#;
    assert_eq!(Submission::new(text), Submission::new(text));
}

#[test]
fn state_labels_match_status_indicator() {
    assert_eq!(Submission::new("").state_label(), "Ready");
    assert_eq!(Submission::new("42").state_label(), "Valid JSON");
    assert_eq!(Submission::new("{").state_label(), "Invalid JSON");
}
