//! SELECT statement and its parts.

use crate::ast::{Operator, Value};
use serde::{Deserialize, Serialize};

/// A named column of the active schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The table a statement reads from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table(pub String);

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One `column op value` triple of the WHERE clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    pub column: Column,
    pub op: Operator,
    pub value: Value,
}

impl Predicate {
    pub fn new(column: Column, op: Operator, value: impl Into<Value>) -> Self {
        Self {
            column,
            op,
            value: value.into(),
        }
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.column, self.op, self.value)
    }
}

/// An entry of the flattened WHERE sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum WhereToken<'a> {
    Column(&'a Column),
    Operator(Operator),
    Value(&'a Value),
}

/// Output columns of a statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Projection {
    /// No restriction: every column.
    #[default]
    Wildcard,
    /// Exactly these columns, in order. May be empty.
    Fields(Vec<Column>),
}

impl Projection {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Projection::Wildcard)
    }

    /// The explicit field list, if any.
    pub fn fields(&self) -> Option<&[Column]> {
        match self {
            Projection::Wildcard => None,
            Projection::Fields(cols) => Some(cols),
        }
    }
}

impl std::fmt::Display for Projection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Projection::Wildcard => write!(f, "*"),
            Projection::Fields(cols) => {
                let names: Vec<&str> = cols.iter().map(|c| c.name.as_str()).collect();
                write!(f, "{}", names.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Limit(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Offset(pub u64);

/// A sort key with a signed direction: positive ascends, negative descends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub key: String,
    pub direction: i64,
}

impl Sort {
    pub fn new(key: impl Into<String>, direction: i64) -> Self {
        Self {
            key: key.into(),
            direction,
        }
    }

    pub fn is_ascending(&self) -> bool {
        self.direction > 0
    }
}

impl std::fmt::Display for Sort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dir = if self.is_ascending() { "ASC" } else { "DESC" };
        write!(f, "{} {}", self.key, dir)
    }
}

/// Root of the AST handed to the SQL renderer.
///
/// Built fresh for each call: the assembler sets table, fields and
/// predicates, the modifier methods attach limit, offset and sort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectStatement {
    pub table: Table,
    pub fields: Projection,
    #[serde(rename = "where")]
    pub where_clause: Vec<Predicate>,
    #[serde(default)]
    pub limit: Option<Limit>,
    #[serde(default)]
    pub offset: Option<Offset>,
    #[serde(default)]
    pub sorts: Vec<Sort>,
}

impl SelectStatement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the limit, replacing any previous one.
    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(Limit(n));
        self
    }

    /// Set the offset, replacing any previous one.
    pub fn offset(mut self, n: u64) -> Self {
        self.offset = Some(Offset(n));
        self
    }

    /// Replace the sort list wholesale.
    pub fn sorts<I>(mut self, sorts: I) -> Self
    where
        I: IntoIterator<Item = Sort>,
    {
        self.sorts = sorts.into_iter().collect();
        self
    }

    /// The WHERE clause as the flat `column, operator, value, ...` sequence.
    pub fn where_tokens(&self) -> impl Iterator<Item = WhereToken<'_>> {
        self.where_clause.iter().flat_map(|p| {
            [
                WhereToken::Column(&p.column),
                WhereToken::Operator(p.op),
                WhereToken::Value(&p.value),
            ]
        })
    }
}

impl std::fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SELECT {} FROM {}", self.fields, self.table)?;
        if !self.where_clause.is_empty() {
            let conds: Vec<String> = self.where_clause.iter().map(|p| p.to_string()).collect();
            write!(f, " WHERE {}", conds.join(" AND "))?;
        }
        if !self.sorts.is_empty() {
            let sorts: Vec<String> = self.sorts.iter().map(|s| s.to_string()).collect();
            write!(f, " ORDER BY {}", sorts.join(", "))?;
        }
        if let Some(Limit(n)) = self.limit {
            write!(f, " LIMIT {}", n)?;
        }
        if let Some(Offset(n)) = self.offset {
            write!(f, " OFFSET {}", n)?;
        }
        Ok(())
    }
}
