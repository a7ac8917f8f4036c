//! # mongosql
//!
//! Translate MongoDB-style `find()` calls into a relational SELECT AST.
//!
//! The filter document is flattened into `column op value` predicates that
//! are implicitly ANDed, the projection map is resolved against the known
//! column schema, and limit/skip/sort become LIMIT, OFFSET and ORDER BY.
//! Rendering and executing the statement is left to the caller.
//!
//! ## Quick Example
//!
//! ```
//! use mongosql::prelude::*;
//! use serde_json::json;
//!
//! let columns = vec![Column::new("age"), Column::new("name")];
//! let call = FindCall::new("users")
//!     .filter(json!({"age": {"$gt": 30}}))
//!     .projection(json!({"name": 1}))
//!     .sort(("age", -1))
//!     .limit(10);
//!
//! let stmt = mongosql::translate(&call, &columns).unwrap();
//! assert_eq!(
//!     stmt.to_string(),
//!     "SELECT name FROM users WHERE age > 30 ORDER BY age DESC LIMIT 10"
//! );
//! ```
//!
//! ## Comparison tokens
//!
//! | Token  | SQL  |
//! |--------|------|
//! | `$eq`  | `=`  |
//! | `$ne`  | `!=` |
//! | `$gt`  | `>`  |
//! | `$gte` | `>=` |
//! | `$lt`  | `<`  |
//! | `$lte` | `<=` |

pub mod ast;
pub mod config;
pub mod error;
pub mod schema;
pub mod translator;

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::error::*;
    pub use crate::schema::{SchemaFile, resolve_column};
    pub use crate::translator::{ApiTranslator, FindCall, MongoTranslator, SortSpec};
}

/// Translate a `find()` call against `columns` with a fresh translator.
pub fn translate(
    call: &translator::FindCall,
    columns: &[ast::Column],
) -> error::TranslateResult<ast::SelectStatement> {
    translator::MongoTranslator::new().translate_find(call, columns)
}
