//! Query-document filter flattening.
//!
//! A filter is a document, or a list of documents that are conjoined. Each
//! document entry becomes one or more `column op value` predicates:
//!
//! - `{"$gt": 30}` under a column context is a comparison on that column.
//! - `{"age": {...}}` descends with `age` as the new column context.
//! - anything else is an equality on the key.
//!
//! The output is the flat conjunction of every predicate in document order.

use crate::ast::{Column, Operator, Predicate, Value};
use crate::error::{TranslateError, TranslateResult};
use crate::schema::resolve_column;
use crate::translator::OperatorTable;
use serde_json::Map;

/// Placeholder name of the top-level context. Never resolves.
const CONJUNCTION: &str = "and";

/// The column nested comparison tokens apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnContext<'a> {
    /// Top level: no column yet.
    Conjunction,
    Column(&'a str),
}

impl ColumnContext<'_> {
    fn resolve<'c>(&self, columns: &'c [Column]) -> TranslateResult<&'c Column> {
        match self {
            ColumnContext::Column(name) => resolve_column(columns, name),
            ColumnContext::Conjunction => Err(TranslateError::unknown_column(CONJUNCTION)),
        }
    }
}

/// Shape of a filter node, decided once per recursion step.
#[derive(Debug)]
pub enum FilterNode<'a> {
    Mapping(&'a Map<String, serde_json::Value>),
    Sequence(&'a [serde_json::Value]),
    Scalar(&'a serde_json::Value),
}

impl<'a> FilterNode<'a> {
    pub fn classify(value: &'a serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(map) => FilterNode::Mapping(map),
            serde_json::Value::Array(items) => FilterNode::Sequence(items),
            other => FilterNode::Scalar(other),
        }
    }
}

/// Meaning of one `key: value` entry of a filter document.
#[derive(Debug)]
enum FilterEntry<'a> {
    Comparison(Operator, &'a serde_json::Value),
    Nested(&'a str, &'a Map<String, serde_json::Value>),
    Equality(&'a str, &'a serde_json::Value),
}

impl<'a> FilterEntry<'a> {
    fn classify(ops: &OperatorTable, key: &'a str, value: &'a serde_json::Value) -> Self {
        if let Some(op) = ops.get(key) {
            return FilterEntry::Comparison(op, value);
        }
        match value {
            serde_json::Value::Object(map) => FilterEntry::Nested(key, map),
            _ => FilterEntry::Equality(key, value),
        }
    }
}

/// Flatten `filter` into predicates against `columns`.
pub fn flatten_filter(
    ops: &OperatorTable,
    filter: &serde_json::Value,
    columns: &[Column],
    context: ColumnContext<'_>,
) -> TranslateResult<Vec<Predicate>> {
    let mut out = Vec::new();
    match FilterNode::classify(filter) {
        FilterNode::Mapping(map) => flatten_mapping(ops, map, columns, context, &mut out)?,
        FilterNode::Sequence(items) => {
            for item in items {
                match FilterNode::classify(item) {
                    FilterNode::Mapping(map) => {
                        flatten_mapping(ops, map, columns, context, &mut out)?
                    }
                    _ => {
                        return Err(TranslateError::InvalidFilter(format!(
                            "expected a document in filter list, got {}",
                            item
                        )));
                    }
                }
            }
        }
        FilterNode::Scalar(v) => {
            return Err(TranslateError::InvalidFilter(format!(
                "expected a document or a list of documents, got {}",
                v
            )));
        }
    }
    Ok(out)
}

fn flatten_mapping(
    ops: &OperatorTable,
    map: &Map<String, serde_json::Value>,
    columns: &[Column],
    context: ColumnContext<'_>,
    out: &mut Vec<Predicate>,
) -> TranslateResult<()> {
    for (key, value) in map {
        match FilterEntry::classify(ops, key, value) {
            FilterEntry::Comparison(op, value) => {
                let column = context.resolve(columns)?;
                push(out, column, op, value);
            }
            FilterEntry::Nested(key, inner) => {
                flatten_mapping(ops, inner, columns, ColumnContext::Column(key), out)?;
            }
            FilterEntry::Equality(key, value) => {
                let column = resolve_column(columns, key)?;
                push(out, column, Operator::Eq, value);
            }
        }
    }
    Ok(())
}

fn push(out: &mut Vec<Predicate>, column: &Column, op: Operator, value: &serde_json::Value) {
    tracing::trace!("predicate {} {} {}", column, op, value);
    out.push(Predicate::new(column.clone(), op, Value::from(value)));
}
