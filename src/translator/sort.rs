//! Sort arguments in the driver call shapes.

use crate::ast::Sort;
use crate::error::{TranslateError, TranslateResult};
use serde::{Deserialize, Deserializer, Serialize};

/// `sort(key, direction)` or `sort([(key, direction), ...])`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SortSpec {
    Single(String, i64),
    List(Vec<(String, i64)>),
}

impl SortSpec {
    /// Normalize to sort entries, keeping list order.
    pub fn into_sorts(self) -> Vec<Sort> {
        match self {
            SortSpec::Single(key, direction) => vec![Sort::new(key, direction)],
            SortSpec::List(pairs) => pairs
                .into_iter()
                .map(|(key, direction)| Sort::new(key, direction))
                .collect(),
        }
    }

    /// Read `["age", -1]`, `[["age", -1], ["name", 1]]` or `{"age": -1, ...}`.
    pub fn from_json(value: &serde_json::Value) -> TranslateResult<Self> {
        match value {
            serde_json::Value::Object(map) => {
                let pairs = map
                    .iter()
                    .map(|(k, v)| Ok((k.clone(), direction(v)?)))
                    .collect::<TranslateResult<Vec<_>>>()?;
                Ok(SortSpec::List(pairs))
            }
            serde_json::Value::Array(items) => match items.as_slice() {
                [serde_json::Value::String(key), dir] => {
                    Ok(SortSpec::Single(key.clone(), direction(dir)?))
                }
                _ => {
                    let pairs = items
                        .iter()
                        .map(pair)
                        .collect::<TranslateResult<Vec<_>>>()?;
                    Ok(SortSpec::List(pairs))
                }
            },
            other => Err(TranslateError::InvalidSort(format!(
                "expected a pair, a list of pairs or a document, got {}",
                other
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for SortSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        SortSpec::from_json(&value).map_err(serde::de::Error::custom)
    }
}

fn pair(value: &serde_json::Value) -> TranslateResult<(String, i64)> {
    match value.as_array().map(Vec::as_slice) {
        Some([serde_json::Value::String(key), dir]) => Ok((key.clone(), direction(dir)?)),
        _ => Err(TranslateError::InvalidSort(format!(
            "expected a [key, direction] pair, got {}",
            value
        ))),
    }
}

fn direction(value: &serde_json::Value) -> TranslateResult<i64> {
    value
        .as_i64()
        .ok_or_else(|| TranslateError::InvalidSort(format!("direction must be an integer, got {}", value)))
}

impl From<(&str, i64)> for SortSpec {
    fn from((key, direction): (&str, i64)) -> Self {
        SortSpec::Single(key.to_string(), direction)
    }
}

impl From<(String, i64)> for SortSpec {
    fn from((key, direction): (String, i64)) -> Self {
        SortSpec::Single(key, direction)
    }
}

impl From<Vec<(&str, i64)>> for SortSpec {
    fn from(pairs: Vec<(&str, i64)>) -> Self {
        SortSpec::List(pairs.into_iter().map(|(k, d)| (k.to_string(), d)).collect())
    }
}

impl From<Vec<(String, i64)>> for SortSpec {
    fn from(pairs: Vec<(String, i64)>) -> Self {
        SortSpec::List(pairs)
    }
}
