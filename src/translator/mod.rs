//! Driver-call translators.
//!
//! Turns a `find()`-shaped call (collection, filter document, projection,
//! limit, skip, sort) into a [`SelectStatement`].
//!
//! ```
//! use mongosql::prelude::*;
//! use serde_json::json;
//!
//! let columns = vec![Column::new("age"), Column::new("name")];
//! let translator = MongoTranslator::new();
//!
//! let stmt = translator
//!     .decode_query("users", Some(&json!({"age": {"$gt": 30}})), None, &columns)
//!     .unwrap();
//! let stmt = translator.decode_limit(stmt, 10);
//!
//! assert_eq!(stmt.to_string(), "SELECT * FROM users WHERE age > 30 LIMIT 10");
//! ```

pub mod filter;
pub mod operator_table;
pub mod projection;
pub mod sort;

#[cfg(test)]
mod tests;

pub use filter::{ColumnContext, FilterNode};
pub use operator_table::OperatorTable;
pub use projection::ProjectionMode;
pub use sort::SortSpec;

use crate::ast::{Column, Predicate, Projection, SelectStatement, Table};
use crate::error::{TranslateError, TranslateResult};
use serde::{Deserialize, Serialize};

/// Translation from one driver's call shape to the relational AST.
pub trait ApiTranslator {
    /// Build a statement from collection, filter and projection.
    fn decode_query(
        &self,
        collection: &str,
        filter: Option<&serde_json::Value>,
        projection: Option<&serde_json::Value>,
        columns: &[Column],
    ) -> TranslateResult<SelectStatement>;

    /// Flatten a filter into predicates.
    fn decode_where(
        &self,
        filter: &serde_json::Value,
        columns: &[Column],
    ) -> TranslateResult<Vec<Predicate>>;

    /// Apply a projection map to the statement's field list.
    fn decode_projection(
        &self,
        stmt: SelectStatement,
        projection: Option<&serde_json::Value>,
        columns: &[Column],
    ) -> TranslateResult<SelectStatement>;

    fn decode_limit(&self, stmt: SelectStatement, limit: u64) -> SelectStatement {
        stmt.limit(limit)
    }

    fn decode_skip(&self, stmt: SelectStatement, skip: u64) -> SelectStatement {
        stmt.offset(skip)
    }

    fn decode_sort(&self, stmt: SelectStatement, sort: impl Into<SortSpec>) -> SelectStatement
    where
        Self: Sized,
    {
        let spec: SortSpec = sort.into();
        stmt.sorts(spec.into_sorts())
    }
}

/// A `collection.find(...)` call with its cursor modifiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FindCall {
    pub collection: String,
    #[serde(default)]
    pub filter: Option<serde_json::Value>,
    #[serde(default)]
    pub projection: Option<serde_json::Value>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub skip: Option<u64>,
    #[serde(default)]
    pub sort: Option<SortSpec>,
}

impl FindCall {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            ..Default::default()
        }
    }

    pub fn filter(mut self, filter: serde_json::Value) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn projection(mut self, projection: serde_json::Value) -> Self {
        self.projection = Some(projection);
        self
    }

    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn skip(mut self, n: u64) -> Self {
        self.skip = Some(n);
        self
    }

    pub fn sort(mut self, sort: impl Into<SortSpec>) -> Self {
        self.sort = Some(sort.into());
        self
    }
}

/// Translator for MongoDB-style calls.
#[derive(Debug, Clone, Default)]
pub struct MongoTranslator {
    ops: OperatorTable,
}

impl MongoTranslator {
    pub fn new() -> Self {
        Self {
            ops: OperatorTable::new(),
        }
    }

    pub fn operators(&self) -> &OperatorTable {
        &self.ops
    }

    /// Translate a whole `find()` call, modifiers included.
    pub fn translate_find(
        &self,
        call: &FindCall,
        columns: &[Column],
    ) -> TranslateResult<SelectStatement> {
        let mut stmt = self.decode_query(
            &call.collection,
            call.filter.as_ref(),
            call.projection.as_ref(),
            columns,
        )?;
        if let Some(n) = call.limit {
            stmt = self.decode_limit(stmt, n);
        }
        if let Some(n) = call.skip {
            stmt = self.decode_skip(stmt, n);
        }
        if let Some(sort) = &call.sort {
            stmt = self.decode_sort(stmt, sort.clone());
        }
        Ok(stmt)
    }
}

impl ApiTranslator for MongoTranslator {
    fn decode_query(
        &self,
        collection: &str,
        filter: Option<&serde_json::Value>,
        projection: Option<&serde_json::Value>,
        columns: &[Column],
    ) -> TranslateResult<SelectStatement> {
        let mut stmt = self.decode_projection(SelectStatement::new(), projection, columns)?;
        stmt.table = Table(collection.to_string());
        let empty = serde_json::Value::Object(serde_json::Map::new());
        let filter = match filter {
            None | Some(serde_json::Value::Null) => &empty,
            Some(f) => f,
        };
        stmt.where_clause = self.decode_where(filter, columns)?;
        Ok(stmt)
    }

    fn decode_where(
        &self,
        filter: &serde_json::Value,
        columns: &[Column],
    ) -> TranslateResult<Vec<Predicate>> {
        let preds =
            filter::flatten_filter(&self.ops, filter, columns, ColumnContext::Conjunction)?;
        tracing::debug!("filter flattened to {} predicates", preds.len());
        Ok(preds)
    }

    fn decode_projection(
        &self,
        mut stmt: SelectStatement,
        projection: Option<&serde_json::Value>,
        columns: &[Column],
    ) -> TranslateResult<SelectStatement> {
        let map = match projection {
            None | Some(serde_json::Value::Null) => return Ok(stmt),
            Some(serde_json::Value::Object(map)) => map,
            Some(other) => {
                return Err(TranslateError::InvalidProjection(format!(
                    "expected a document, got {}",
                    other
                )));
            }
        };
        if let Some(fields) = projection::resolve_projection(map, columns)? {
            stmt.fields = Projection::Fields(fields);
        }
        Ok(stmt)
    }
}
