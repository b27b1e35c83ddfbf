//! Dynamic configuration and state values
//!
//! Resource configuration arrives from the host as an untyped attribute
//! map; resources read attributes out of it and build the new state the
//! same way.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Dynamic value exchanged with the plugin host
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DynamicValue {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    List(Vec<DynamicValue>),
    Map(HashMap<String, DynamicValue>),
}

impl DynamicValue {
    pub fn as_string(&self) -> Option<&str> {
        match self {
            DynamicValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DynamicValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&HashMap<String, DynamicValue>> {
        match self {
            DynamicValue::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&DynamicValue> {
        self.as_map()?.get(key)
    }
}

/// Helper to extract a string attribute from a DynamicValue
pub fn get_string_attr(value: &DynamicValue, key: &str) -> String {
    value
        .get(key)
        .and_then(|v| v.as_string())
        .unwrap_or("")
        .to_string()
}

/// Helper to extract a non-empty string attribute from a DynamicValue
pub fn get_optional_string_attr(value: &DynamicValue, key: &str) -> Option<String> {
    value.get(key).and_then(|v| match v {
        DynamicValue::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    })
}

/// Helper to extract a bool attribute from a DynamicValue
pub fn get_bool_attr(value: &DynamicValue, key: &str, default: bool) -> bool {
    value.get(key).and_then(|v| v.as_bool()).unwrap_or(default)
}

/// Helper to extract a list of strings from a DynamicValue
pub fn get_string_list_attr(value: &DynamicValue, key: &str) -> Vec<String> {
    match value.get(key) {
        Some(DynamicValue::List(items)) => items
            .iter()
            .filter_map(|v| v.as_string())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Create a DynamicValue map with the given attributes
pub fn make_state(attrs: Vec<(&str, DynamicValue)>) -> DynamicValue {
    let mut map = HashMap::new();
    for (key, value) in attrs {
        map.insert(key.to_string(), value);
    }
    DynamicValue::Map(map)
}

/// Create a string DynamicValue
pub fn string_value(s: impl Into<String>) -> DynamicValue {
    DynamicValue::String(s.into())
}

/// Create a bool DynamicValue
pub fn bool_value(b: bool) -> DynamicValue {
    DynamicValue::Bool(b)
}

/// Create a list DynamicValue from strings
pub fn string_list_value<S: AsRef<str>>(items: &[S]) -> DynamicValue {
    DynamicValue::List(
        items
            .iter()
            .map(|s| DynamicValue::String(s.as_ref().to_string()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_helpers_read_typed_values() {
        let state = make_state(vec![
            ("name", string_value("p1")),
            ("all_buckets", bool_value(true)),
            ("buckets", string_list_value(&["b1", "b2"])),
        ]);

        assert_eq!(get_string_attr(&state, "name"), "p1");
        assert_eq!(get_string_attr(&state, "missing"), "");
        assert!(get_bool_attr(&state, "all_buckets", false));
        assert_eq!(get_string_list_attr(&state, "buckets"), vec!["b1", "b2"]);
        assert!(get_string_list_attr(&state, "missing").is_empty());
    }

    #[test]
    fn optional_string_treats_empty_as_absent() {
        let state = make_state(vec![("prefix", string_value(""))]);
        assert_eq!(get_optional_string_attr(&state, "prefix"), None);
    }

    #[test]
    fn dynamic_value_round_trips_through_json() {
        let state = make_state(vec![
            ("id", string_value("perm-123")),
            ("ready_state", bool_value(false)),
        ]);
        let encoded = serde_json::to_vec(&state).unwrap();
        let decoded: DynamicValue = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(get_string_attr(&decoded, "id"), "perm-123");
        assert!(!get_bool_attr(&decoded, "ready_state", true));
    }
}
