//! Filter flattening tests.

use super::people;
use crate::ast::*;
use crate::error::TranslateError;
use crate::translator::{ApiTranslator, MongoTranslator};
use pretty_assertions::assert_eq;
use serde_json::json;

fn pred(column: &str, op: Operator, value: serde_json::Value) -> Predicate {
    Predicate::new(Column::new(column), op, value)
}

#[test]
fn test_nested_comparison() {
    let t = MongoTranslator::new();
    let preds = t.decode_where(&json!({"age": {"$gt": 30}}), &people()).unwrap();
    assert_eq!(preds, vec![pred("age", Operator::Gt, json!(30))]);
}

#[test]
fn test_equality() {
    let t = MongoTranslator::new();
    let preds = t.decode_where(&json!({"name": "bob"}), &people()).unwrap();
    assert_eq!(preds, vec![pred("name", Operator::Eq, json!("bob"))]);
}

#[test]
fn test_sequence_concatenates_in_order() {
    let t = MongoTranslator::new();
    let preds = t
        .decode_where(&json!([{"age": 10}, {"name": "x"}]), &people())
        .unwrap();
    assert_eq!(
        preds,
        vec![
            pred("age", Operator::Eq, json!(10)),
            pred("name", Operator::Eq, json!("x")),
        ]
    );
}

#[test]
fn test_every_comparison_token() {
    let t = MongoTranslator::new();
    let filter = json!({"age": {
        "$eq": 1, "$ne": 2, "$gt": 3, "$gte": 4, "$lt": 5, "$lte": 6
    }});
    let ops: Vec<Operator> = t
        .decode_where(&filter, &people())
        .unwrap()
        .into_iter()
        .map(|p| p.op)
        .collect();
    assert_eq!(
        ops,
        vec![
            Operator::Eq,
            Operator::Ne,
            Operator::Gt,
            Operator::Gte,
            Operator::Lt,
            Operator::Lte,
        ]
    );
}

#[test]
fn test_range_keeps_document_order() {
    let t = MongoTranslator::new();
    let filter = json!({"name": "ann", "age": {"$lte": 65, "$gte": 18}});
    let preds = t.decode_where(&filter, &people()).unwrap();
    assert_eq!(
        preds,
        vec![
            pred("name", Operator::Eq, json!("ann")),
            pred("age", Operator::Lte, json!(65)),
            pred("age", Operator::Gte, json!(18)),
        ]
    );
}

#[test]
fn test_list_values_pass_through() {
    let t = MongoTranslator::new();
    let preds = t
        .decode_where(&json!({"name": ["a", "b"]}), &people())
        .unwrap();
    assert_eq!(preds, vec![pred("name", Operator::Eq, json!(["a", "b"]))]);
}

#[test]
fn test_inner_plain_key_uses_its_own_name() {
    // A non-token key inside a nested document is an equality on that key.
    let t = MongoTranslator::new();
    let preds = t
        .decode_where(&json!({"age": {"name": "bob"}}), &people())
        .unwrap();
    assert_eq!(preds, vec![pred("name", Operator::Eq, json!("bob"))]);
}

#[test]
fn test_empty_filters() {
    let t = MongoTranslator::new();
    assert!(t.decode_where(&json!({}), &people()).unwrap().is_empty());
    assert!(t.decode_where(&json!([]), &people()).unwrap().is_empty());
}

#[test]
fn test_unknown_column() {
    let t = MongoTranslator::new();
    let err = t
        .decode_where(&json!({"age": 1, "salary": 10}), &people())
        .unwrap_err();
    match err {
        TranslateError::UnknownColumn { name, .. } => assert_eq!(name, "salary"),
        other => panic!("expected UnknownColumn, got {:?}", other),
    }
}

#[test]
fn test_unknown_nested_context() {
    let t = MongoTranslator::new();
    let err = t
        .decode_where(&json!({"salary": {"$gt": 10}}), &people())
        .unwrap_err();
    assert!(err.is_unknown_column());
}

#[test]
fn test_top_level_token_has_no_column() {
    let t = MongoTranslator::new();
    let err = t.decode_where(&json!({"$gt": 30}), &people()).unwrap_err();
    match err {
        TranslateError::UnknownColumn { name, .. } => assert_eq!(name, "and"),
        other => panic!("expected UnknownColumn, got {:?}", other),
    }
}

#[test]
fn test_logical_operators_are_not_composed() {
    let t = MongoTranslator::new();
    let err = t
        .decode_where(&json!({"$or": [{"age": 1}, {"age": 2}]}), &people())
        .unwrap_err();
    assert!(err.is_unknown_column());
}

#[test]
fn test_non_document_filters() {
    let t = MongoTranslator::new();
    assert!(matches!(
        t.decode_where(&json!("age"), &people()),
        Err(TranslateError::InvalidFilter(_))
    ));
    assert!(matches!(
        t.decode_where(&json!([{"age": 1}, 5]), &people()),
        Err(TranslateError::InvalidFilter(_))
    ));
}
