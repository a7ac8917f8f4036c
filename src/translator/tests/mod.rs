//! Translator tests.

mod filter;
mod query;

use crate::ast::Column;

pub(crate) fn people() -> Vec<Column> {
    vec![Column::new("age"), Column::new("name")]
}

pub(crate) fn wide() -> Vec<Column> {
    ["id", "name", "email", "age", "created_at"]
        .into_iter()
        .map(Column::new)
        .collect()
}
