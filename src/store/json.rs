//! JSON resource parsing.
//!
//! Locale resources are JSON objects whose leaves are strings or arrays of
//! strings. Anything else (numbers, booleans, nulls, mixed arrays, arrays
//! of objects) is malformed: the catalogs carry display text only, and a
//! resource that cannot be parsed leaves the application with no meaningful
//! degraded mode.

use std::collections::BTreeMap;

use anyhow::{Context, Result, bail};
use serde_json::Value as Json;

use super::dictionary::{Dictionary, Value};

/// Parse a locale resource document into a [`Dictionary`].
///
/// # Examples
///
/// ```
/// use glossa::store::json::parse_dictionary;
///
/// let dict = parse_dictionary(r#"{"nav": {"about": "Sobre"}}"#).unwrap();
/// assert_eq!(dict.resolve("nav.about"), Some("Sobre"));
///
/// assert!(parse_dictionary(r#"{"count": 3}"#).is_err());
/// ```
pub fn parse_dictionary(content: &str) -> Result<Dictionary> {
    let json: Json = serde_json::from_str(content).context("invalid JSON")?;
    let Json::Object(map) = json else {
        bail!("expected a JSON object at the document root");
    };
    Ok(Dictionary::new(convert_table(&map, "")?))
}

fn convert_table(
    map: &serde_json::Map<String, Json>,
    prefix: &str,
) -> Result<BTreeMap<String, Value>> {
    let mut table = BTreeMap::new();
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        table.insert(key.clone(), convert_value(value, &path)?);
    }
    Ok(table)
}

fn convert_value(value: &Json, path: &str) -> Result<Value> {
    match value {
        Json::String(text) => Ok(Value::Text(text.clone())),
        Json::Array(items) => {
            let mut list = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                let Json::String(text) = item else {
                    bail!(
                        "key '{}': list element {} is {}, expected a string",
                        path,
                        index,
                        json_type(item)
                    );
                };
                list.push(text.clone());
            }
            Ok(Value::List(list))
        }
        Json::Object(map) => Ok(Value::Table(convert_table(map, path)?)),
        other => bail!(
            "key '{}': value is {}, expected a string, a list of strings or a table",
            path,
            json_type(other)
        ),
    }
}

fn json_type(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let dict = parse_dictionary(r#"{"save": "Save", "cancel": "Cancel"}"#).unwrap();
        assert_eq!(dict.resolve("save"), Some("Save"));
        assert_eq!(dict.resolve("cancel"), Some("Cancel"));
    }

    #[test]
    fn test_parse_nested() {
        let dict =
            parse_dictionary(r#"{"auth": {"login": {"title": "Login", "button": "Submit"}}}"#)
                .unwrap();
        assert_eq!(dict.resolve("auth.login.title"), Some("Login"));
        assert_eq!(dict.resolve("auth.login.button"), Some("Submit"));
    }

    #[test]
    fn test_parse_string_list() {
        let dict = parse_dictionary(r#"{"page": {"tags": ["fast", "easy"]}}"#).unwrap();
        assert_eq!(dict.resolve("page.tags.0"), Some("fast"));
        assert_eq!(dict.resolve("page.tags.1"), Some("easy"));
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse_dictionary("{ not json }").unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn test_parse_rejects_non_object_root() {
        assert!(parse_dictionary(r#"["a", "b"]"#).is_err());
        assert!(parse_dictionary(r#""just a string""#).is_err());
    }

    #[test]
    fn test_parse_rejects_non_string_leaves() {
        let err = parse_dictionary(r#"{"page": {"count": 3}}"#).unwrap_err();
        assert!(err.to_string().contains("page.count"));
        assert!(err.to_string().contains("a number"));

        assert!(parse_dictionary(r#"{"flag": true}"#).is_err());
        assert!(parse_dictionary(r#"{"gone": null}"#).is_err());
    }

    #[test]
    fn test_parse_rejects_mixed_lists() {
        let err = parse_dictionary(r#"{"items": ["ok", 2]}"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("items"));
        assert!(msg.contains("element 1"));

        // Arrays of objects are not display text either.
        assert!(parse_dictionary(r#"{"faq": [{"q": "?"}]}"#).is_err());
    }
}
