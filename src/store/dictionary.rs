//! Locale dictionaries: tagged values and dot-path resolution.
//!
//! A dictionary is a tree of [`Value`]s. Leaves are strings or ordered lists
//! of strings; tables provide the nesting that dot-path keys address. The
//! parity rules work on the flattened view ([`Dictionary::flatten`]), where
//! a list stays whole under a single key instead of being expanded into
//! indexed entries.

use std::collections::BTreeMap;
use std::fmt;

/// A value in a locale dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A translatable string: `"title": "Projetos"`.
    Text(String),
    /// An ordered list of strings: `"stack": ["React", "Go"]`.
    /// Addressed whole, or per element with a numeric segment (`stack.1`).
    List(Vec<String>),
    /// A nested table of values.
    Table(BTreeMap<String, Value>),
}

/// A leaf from the flattened view of a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlatValue {
    Text(String),
    List(Vec<String>),
}

impl FlatValue {
    pub fn shape(&self) -> ValueShape {
        match self {
            FlatValue::Text(_) => ValueShape::Text,
            FlatValue::List(items) => ValueShape::List(items.len()),
        }
    }

    /// Single-line rendering for reports. Lists are joined with `, `.
    pub fn preview(&self) -> String {
        match self {
            FlatValue::Text(text) => text.clone(),
            FlatValue::List(items) => items.join(", "),
        }
    }
}

/// The shape of a leaf value, compared across locales by the parity rules.
///
/// Two leaves have the same shape when both are strings, or both are lists
/// of the same length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ValueShape {
    Text,
    List(usize),
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueShape::Text => write!(f, "string"),
            ValueShape::List(len) => write!(f, "list of {}", len),
        }
    }
}

/// The set of translatable strings for one locale.
///
/// Immutable after construction; built by the JSON parser in
/// [`store::json`](crate::store::json).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    root: BTreeMap<String, Value>,
}

impl Dictionary {
    pub fn new(root: BTreeMap<String, Value>) -> Self {
        Self { root }
    }

    /// Resolve a dot-path key to its string value.
    ///
    /// Each segment descends one table level; a numeric segment selects an
    /// element of a list. Returns `None` when a segment is missing, a list
    /// index is out of range, or the path lands on a whole table or list;
    /// callers decide the fallback policy (the translator shows the raw
    /// key).
    ///
    /// # Examples
    ///
    /// ```
    /// use glossa::store::json::parse_dictionary;
    ///
    /// let dict = parse_dictionary(r#"{"nav": {"about": "Sobre"}, "tags": ["a", "b"]}"#).unwrap();
    /// assert_eq!(dict.resolve("nav.about"), Some("Sobre"));
    /// assert_eq!(dict.resolve("tags.1"), Some("b"));
    /// assert_eq!(dict.resolve("tags.9"), None);
    /// assert_eq!(dict.resolve("nav"), None);
    /// ```
    pub fn resolve(&self, key: &str) -> Option<&str> {
        let mut segments = key.split('.');
        let mut current = self.root.get(segments.next()?)?;

        while let Some(segment) = segments.next() {
            match current {
                Value::Table(entries) => current = entries.get(segment)?,
                Value::List(items) => {
                    let index: usize = segment.parse().ok()?;
                    let item = items.get(index)?;
                    // A list element is a string; nothing may follow it.
                    return segments.next().is_none().then_some(item.as_str());
                }
                Value::Text(_) => return None,
            }
        }

        match current {
            Value::Text(text) => Some(text),
            Value::List(_) | Value::Table(_) => None,
        }
    }

    /// Flatten to a `dot.path -> leaf` map.
    ///
    /// Lists stay whole under a single key (`skills.stack`), matching how
    /// the parity rules compare them across locales.
    pub fn flatten(&self) -> BTreeMap<String, FlatValue> {
        let mut flat = BTreeMap::new();
        flatten_into(&self.root, String::new(), &mut flat);
        flat
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

fn flatten_into(
    table: &BTreeMap<String, Value>,
    prefix: String,
    out: &mut BTreeMap<String, FlatValue>,
) {
    for (key, value) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match value {
            Value::Text(text) => {
                out.insert(path, FlatValue::Text(text.clone()));
            }
            Value::List(items) => {
                out.insert(path, FlatValue::List(items.clone()));
            }
            Value::Table(entries) => flatten_into(entries, path, out),
        }
    }
}
