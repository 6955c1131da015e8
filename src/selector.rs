use core::fmt;

/// One step from a tree node down to one of its children.
///
/// A path of selectors addresses a node anywhere in the tree.
/// The root carries `None` as it is not selected from anywhere.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum JsonSelector {
    ObjectKey(String),
    ArrayIndex(usize),
    #[default]
    None,
}

impl fmt::Display for JsonSelector {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ObjectKey(key) => fmt.write_str(key),
            Self::ArrayIndex(index) => index.fmt(fmt),
            Self::None => Ok(()),
        }
    }
}

#[test]
fn displays_object_key() {
    assert_eq!("bla", JsonSelector::ObjectKey("bla".to_owned()).to_string());
}

#[test]
fn displays_array_index() {
    assert_eq!("42", JsonSelector::ArrayIndex(42).to_string());
}

#[test]
fn displays_root_as_empty() {
    assert_eq!("", JsonSelector::None.to_string());
}
