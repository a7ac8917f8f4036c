use serde::{Deserialize, Serialize};

/// A literal on the right-hand side of a predicate.
///
/// Wraps the document value as-is; lists and sub-documents are carried
/// through for the renderer to deal with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value(pub serde_json::Value);

impl Value {
    pub fn as_json(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            serde_json::Value::Null => write!(f, "NULL"),
            serde_json::Value::String(s) => write!(f, "'{}'", s),
            other => write!(f, "{}", other),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value(v)
    }
}

impl From<&serde_json::Value> for Value {
    fn from(v: &serde_json::Value) -> Self {
        Value(v.clone())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value(v.into())
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value(v.into())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value(v.into())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value(v.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_from() {
        assert_eq!(Value::from(30), Value(json!(30)));
        assert_eq!(Value::from("bob"), Value(json!("bob")));
        assert_eq!(Value::from(true), Value(json!(true)));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::from("bob").to_string(), "'bob'");
        assert_eq!(Value::from(30).to_string(), "30");
        assert_eq!(Value(json!(null)).to_string(), "NULL");
        assert_eq!(Value(json!([1, 2])).to_string(), "[1,2]");
    }
}
