use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::hash::Hash;

/// The shape the widget needs from a result item: a stable identity and a
/// label to display and highlight.
///
/// Ids should be unique within one result set; duplicates are rendered but
/// logged.
pub trait AutocompleteItem: Clone + Send + 'static {
    type Id: Clone + Eq + Hash + fmt::Debug;

    fn id(&self) -> Self::Id;

    fn name(&self) -> Cow<'_, str>;
}

/// A string or numeric scalar, as used for ids and labels in JSON payloads.
/// Numbers keep their JSON form, so `1.5` and `66` both round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemValue {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ItemValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemValue::Number(n) => write!(f, "{}", n),
            ItemValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemValue {
    fn from(n: i64) -> Self {
        ItemValue::Number(n.into())
    }
}

impl From<serde_json::Number> for ItemValue {
    fn from(n: serde_json::Number) -> Self {
        ItemValue::Number(n)
    }
}

impl From<&str> for ItemValue {
    fn from(s: &str) -> Self {
        ItemValue::Text(s.to_string())
    }
}

impl From<String> for ItemValue {
    fn from(s: String) -> Self {
        ItemValue::Text(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleItem {
    pub id: ItemValue,
    pub name: ItemValue,
}

impl SimpleItem {
    pub fn new(id: impl Into<ItemValue>, name: impl Into<ItemValue>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl AutocompleteItem for SimpleItem {
    type Id = ItemValue;

    fn id(&self) -> ItemValue {
        self.id.clone()
    }

    fn name(&self) -> Cow<'_, str> {
        match &self.name {
            ItemValue::Text(s) => Cow::Borrowed(s.as_str()),
            ItemValue::Number(n) => Cow::Owned(n.to_string()),
        }
    }
}
