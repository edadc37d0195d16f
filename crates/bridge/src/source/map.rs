//! In-memory property source.
//!
//! Responsibilities:
//! - Store dotted-key properties in a flat map.
//! - Build that map from an iterator of pairs or from a JSON document
//!   (nested objects flattened to dotted keys).
//!
//! Does NOT handle:
//! - File I/O (callers read the document and hand over the text).
//!
//! Invariants:
//! - JSON scalars are rendered as strings: strings verbatim, numbers and
//!   booleans via their canonical text form. `null` leaves no entry.
//! - JSON arrays flatten with numeric index segments (`servers.0.host`).

use std::collections::HashMap;

use serde_json::Value;

use super::PropertySource;

/// Flat dotted-key map, the shape of parsed config files and overrides.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    entries: HashMap<String, String>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a property.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Number of stored properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a JSON document and flatten it into dotted keys.
    ///
    /// # Errors
    ///
    /// Returns the underlying parse error if `text` is not valid JSON.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(text)?;
        let mut source = Self::new();
        flatten(&mut source.entries, String::new(), &value);
        Ok(source)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl PropertySource for MapSource {
    fn get_property(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}.{segment}")
    }
}

fn flatten(entries: &mut HashMap<String, String>, prefix: String, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                flatten(entries, join(&prefix, key), nested);
            }
        }
        Value::Array(items) => {
            for (index, nested) in items.iter().enumerate() {
                flatten(entries, join(&prefix, &index.to_string()), nested);
            }
        }
        Value::String(s) => {
            entries.insert(prefix, s.clone());
        }
        Value::Number(n) => {
            entries.insert(prefix, n.to_string());
        }
        Value::Bool(b) => {
            entries.insert(prefix, b.to_string());
        }
        Value::Null => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_lookup_hits_and_misses() {
        let source = MapSource::from_iter([("spring.datasource.url", "jdbc:test")]);
        assert_eq!(
            source.get_property("spring.datasource.url"),
            Some("jdbc:test".to_string())
        );
        assert_eq!(source.get_property("spring.datasource.username"), None);
    }

    #[test]
    fn test_json_objects_flatten_to_dotted_keys() {
        let source = MapSource::from_json_str(
            r#"{"spring": {"datasource": {"url": "jdbc:test", "pool": {"size": 8}}}}"#,
        )
        .unwrap();
        assert_eq!(
            source.get_property("spring.datasource.url"),
            Some("jdbc:test".to_string())
        );
        assert_eq!(
            source.get_property("spring.datasource.pool.size"),
            Some("8".to_string())
        );
    }

    #[test]
    fn test_json_scalars_and_nulls() {
        let source =
            MapSource::from_json_str(r#"{"debug": true, "retries": 3, "comment": null}"#).unwrap();
        assert_eq!(source.get_property("debug"), Some("true".to_string()));
        assert_eq!(source.get_property("retries"), Some("3".to_string()));
        assert_eq!(source.get_property("comment"), None);
    }

    #[test]
    fn test_json_arrays_flatten_with_index_segments() {
        let source =
            MapSource::from_json_str(r#"{"servers": [{"host": "a"}, {"host": "b"}]}"#).unwrap();
        assert_eq!(source.get_property("servers.0.host"), Some("a".to_string()));
        assert_eq!(source.get_property("servers.1.host"), Some("b".to_string()));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(MapSource::from_json_str("{not json").is_err());
    }
}
