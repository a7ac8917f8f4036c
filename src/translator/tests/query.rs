//! Whole-call assembly.

use super::{people, wide};
use crate::ast::*;
use crate::error::TranslateError;
use crate::translator::{ApiTranslator, FindCall, MongoTranslator};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_decode_query() {
    let t = MongoTranslator::new();
    let stmt = t
        .decode_query(
            "people",
            Some(&json!({"age": {"$gte": 21}})),
            Some(&json!({"email": -1})),
            &wide(),
        )
        .unwrap();
    assert_eq!(stmt.table, Table("people".to_string()));
    assert_eq!(
        stmt.fields.fields().unwrap(),
        &[
            Column::new("id"),
            Column::new("name"),
            Column::new("age"),
            Column::new("created_at"),
        ]
    );
    assert_eq!(
        stmt.where_clause,
        vec![Predicate::new(Column::new("age"), Operator::Gte, 21)]
    );
    assert_eq!(stmt.limit, None);
    assert_eq!(stmt.offset, None);
    assert!(stmt.sorts.is_empty());
}

#[test]
fn test_absent_filter_and_projection() {
    let t = MongoTranslator::new();
    let stmt = t.decode_query("people", None, None, &people()).unwrap();
    assert!(stmt.where_clause.is_empty());
    assert!(stmt.fields.is_wildcard());
    assert_eq!(stmt.to_string(), "SELECT * FROM people");

    let stmt = t
        .decode_query("people", Some(&serde_json::Value::Null), None, &people())
        .unwrap();
    assert!(stmt.where_clause.is_empty());
}

#[test]
fn test_failure_returns_no_statement() {
    let t = MongoTranslator::new();
    let result = t.decode_query("people", Some(&json!({"age": 1, "zip": 1})), None, &people());
    assert!(matches!(result, Err(TranslateError::UnknownColumn { .. })));

    let result = t.decode_query(
        "people",
        None,
        Some(&json!({"age": 1, "name": -1})),
        &people(),
    );
    assert!(matches!(
        result,
        Err(TranslateError::ProjectionModeConflict { .. })
    ));
}

#[test]
fn test_translate_find() {
    let call: FindCall = serde_json::from_value(json!({
        "collection": "users",
        "filter": [{"age": {"$lt": 40}}, {"name": "bob"}],
        "projection": {"name": 1},
        "limit": 10,
        "skip": 20,
        "sort": [["age", -1], ["name", 1]]
    }))
    .unwrap();
    let stmt = MongoTranslator::new().translate_find(&call, &people()).unwrap();
    assert_eq!(
        stmt.to_string(),
        "SELECT name FROM users WHERE age < 40 AND name = 'bob' ORDER BY age DESC, name ASC LIMIT 10 OFFSET 20"
    );
}

#[test]
fn test_translate_find_builder_skips_absent_modifiers() {
    let call = FindCall::new("users").filter(json!({"name": "x"})).sort(("age", 1));
    let stmt = MongoTranslator::new().translate_find(&call, &people()).unwrap();
    assert_eq!(stmt.limit, None);
    assert_eq!(stmt.offset, None);
    assert_eq!(stmt.sorts, vec![Sort::new("age", 1)]);
}
