use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Catalog identifier: a numeric id or a permalink string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Numeric(u64),
    Text(String),
}

pub type PatternId = Identifier;

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(id) => write!(f, "{}", id),
            Identifier::Text(id) => f.write_str(id),
        }
    }
}

impl From<u64> for Identifier {
    fn from(id: u64) -> Self {
        Identifier::Numeric(id)
    }
}

impl From<&str> for Identifier {
    fn from(id: &str) -> Self {
        Identifier::Text(id.to_string())
    }
}

impl From<String> for Identifier {
    fn from(id: String) -> Self {
        Identifier::Text(id)
    }
}

/// Read-only view over one JSON mapping of the catalog payload.
///
/// Every lookup returns `None` when the key is missing, when the value is
/// `null`, or when it has a different JSON type than the one asked for.
/// Nothing here panics or fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawData {
    value: Value,
}

static NULL_DATA: RawData = RawData { value: Value::Null };

impl RawData {
    /// Shared empty container, for owners that have no data yet.
    pub fn null_ref() -> &'static RawData {
        &NULL_DATA
    }

    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn empty() -> Self {
        Self { value: Value::Null }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value.get(key).filter(|v| !v.is_null())
    }

    /// Follow `path` one mapping at a time; a missing link anywhere yields `None`.
    pub fn at(&self, path: &[&str]) -> Option<&Value> {
        path.iter()
            .try_fold(&self.value, |current, key| current.get(*key))
            .filter(|v| !v.is_null())
    }

    pub fn str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    pub fn u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(Value::as_u64)
    }

    pub fn f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    pub fn list(&self, key: &str) -> Option<&Vec<Value>> {
        self.get(key).and_then(Value::as_array)
    }

    pub fn str_at(&self, path: &[&str]) -> Option<&str> {
        self.at(path).and_then(Value::as_str)
    }

    pub fn i64_at(&self, path: &[&str]) -> Option<i64> {
        self.at(path).and_then(Value::as_i64)
    }

    pub fn f64_at(&self, path: &[&str]) -> Option<f64> {
        self.at(path).and_then(Value::as_f64)
    }

    pub fn bool_at(&self, path: &[&str]) -> Option<bool> {
        self.at(path).and_then(Value::as_bool)
    }
}

impl From<Value> for RawData {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_key_is_absent() {
        let data = RawData::new(json!({"name": "Test Sock"}));
        assert_eq!(data.str("name"), Some("Test Sock"));
        assert!(data.get("gauge").is_none());
        assert!(data.f64("gauge").is_none());
        assert!(data.list("packs").is_none());
    }

    #[test]
    fn test_null_payload_reads_absent() {
        let data = RawData::empty();
        assert!(data.is_null());
        assert!(data.str("name").is_none());
        assert!(data.at(&["craft", "name"]).is_none());
    }

    #[test]
    fn test_explicit_null_reads_absent() {
        let data = RawData::new(json!({"gauge": null, "craft": null}));
        assert!(data.get("gauge").is_none());
        assert!(data.str_at(&["craft", "name"]).is_none());
    }

    #[test]
    fn test_nested_path() {
        let data = RawData::new(json!({"craft": {"name": "Knitting", "id": 2}}));
        assert_eq!(data.str_at(&["craft", "name"]), Some("Knitting"));
        assert_eq!(data.i64_at(&["craft", "id"]), Some(2));
        assert!(data.str_at(&["craft", "permalink"]).is_none());
        assert!(data.str_at(&["yarn", "name"]).is_none());
    }

    #[test]
    fn test_wrong_type_reads_absent() {
        let data = RawData::new(json!({"free": "yes", "comments_count": "12"}));
        assert!(data.bool("free").is_none());
        assert!(data.i64("comments_count").is_none());
        assert_eq!(data.str("comments_count"), Some("12"));
    }

    #[test]
    fn test_pattern_id_display() {
        assert_eq!(PatternId::from(600u64).to_string(), "600");
        assert_eq!(PatternId::from("traveling-woman").to_string(), "traveling-woman");
        let parsed: PatternId = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(parsed, Identifier::Numeric(42));
    }
}
