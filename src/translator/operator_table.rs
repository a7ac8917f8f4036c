//! Comparison token lookup.

use crate::ast::Operator;
use std::collections::HashMap;

const TOKENS: [(&str, Operator); 6] = [
    ("$eq", Operator::Eq),
    ("$ne", Operator::Ne),
    ("$gt", Operator::Gt),
    ("$gte", Operator::Gte),
    ("$lt", Operator::Lt),
    ("$lte", Operator::Lte),
];

/// Immutable map from comparison tokens to relational operators.
#[derive(Debug, Clone)]
pub struct OperatorTable {
    ops: HashMap<&'static str, Operator>,
}

impl OperatorTable {
    pub fn new() -> Self {
        Self {
            ops: TOKENS.into_iter().collect(),
        }
    }

    pub fn get(&self, token: &str) -> Option<Operator> {
        self.ops.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.ops.contains_key(token)
    }

    /// Tokens with their operators, in declaration order.
    pub fn tokens(&self) -> impl Iterator<Item = (&'static str, Operator)> {
        TOKENS.into_iter()
    }
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::new()
    }
}
