//! Column schema: name resolution and schema files.
//!
//! The translators take the active schema as an ordered `&[Column]`.
//! Callers that do not get one from their adapter can load it from a
//! JSON or TOML file:
//!
//! ```
//! use mongosql::schema::SchemaFile;
//!
//! let json = r#"{
//!     "tables": [{
//!         "name": "users",
//!         "columns": [
//!             { "name": "age", "type": "int" },
//!             { "name": "name", "type": "text" }
//!         ]
//!     }]
//! }"#;
//!
//! let schema = SchemaFile::from_json(json).unwrap();
//! let columns = schema.columns("users").unwrap();
//! assert_eq!(columns.len(), 2);
//! ```

use crate::ast::Column;
use crate::error::{TranslateError, TranslateResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strsim::levenshtein;

/// Return the column named `name`.
///
/// Fails with `UnknownColumn` when no column matches; the error carries the
/// closest schema name when one is within edit distance 3.
pub fn resolve_column<'a>(columns: &'a [Column], name: &str) -> TranslateResult<&'a Column> {
    columns
        .iter()
        .find(|c| c.name == name)
        .ok_or_else(|| TranslateError::UnknownColumn {
            name: name.to_string(),
            suggestion: did_you_mean(name, columns),
        })
}

/// Find the best match with Levenshtein distance <= 3.
fn did_you_mean(input: &str, columns: &[Column]) -> Option<String> {
    let mut best_match = None;
    let mut min_dist = usize::MAX;

    for col in columns {
        let dist = levenshtein(input, &col.name);
        if dist < min_dist && dist <= 3 {
            min_dist = dist;
            best_match = Some(col.name.clone());
        }
    }

    best_match
}

/// Schema file contents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaFile {
    pub tables: Vec<TableDef>,
}

/// Table definition with columns in output order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDef {
    pub name: String,
    pub columns: Vec<ColumnDef>,
}

/// Column definition. Type information is informational only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    #[serde(rename = "type", alias = "typ", default)]
    pub typ: Option<String>,
    #[serde(default)]
    pub nullable: bool,
}

impl SchemaFile {
    pub fn from_json(json: &str) -> TranslateResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_toml(input: &str) -> TranslateResult<Self> {
        Ok(toml::from_str(input)?)
    }

    /// Load a schema file, picking the format from the extension.
    pub fn load(path: impl AsRef<Path>) -> TranslateResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let schema = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&content)?,
            Some("json") | None => Self::from_json(&content)?,
            Some(other) => {
                return Err(TranslateError::Config(format!(
                    "Unsupported schema format '.{}' ({})",
                    other,
                    path.display()
                )));
            }
        };
        tracing::info!(
            "Loaded {} table schemas from {}",
            schema.tables.len(),
            path.display()
        );
        Ok(schema)
    }

    pub fn table(&self, name: &str) -> Option<&TableDef> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// The ordered column list of `table`.
    pub fn columns(&self, table: &str) -> TranslateResult<Vec<Column>> {
        self.table(table)
            .map(TableDef::columns)
            .ok_or_else(|| TranslateError::UnknownTable(table.to_string()))
    }
}

impl TableDef {
    pub fn columns(&self) -> Vec<Column> {
        self.columns.iter().map(|c| Column::new(&c.name)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Vec<Column> {
        vec![Column::new("age"), Column::new("name")]
    }

    #[test]
    fn test_resolve_found() {
        let cols = schema();
        assert_eq!(resolve_column(&cols, "name").unwrap(), &Column::new("name"));
    }

    #[test]
    fn test_resolve_unknown_with_suggestion() {
        let cols = schema();
        match resolve_column(&cols, "nmae") {
            Err(TranslateError::UnknownColumn { name, suggestion }) => {
                assert_eq!(name, "nmae");
                assert_eq!(suggestion.as_deref(), Some("name"));
            }
            other => panic!("expected UnknownColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_unknown_far_name() {
        let cols = schema();
        match resolve_column(&cols, "created_at_timestamp") {
            Err(TranslateError::UnknownColumn { suggestion, .. }) => assert!(suggestion.is_none()),
            other => panic!("expected UnknownColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_toml_schema() {
        let input = r#"
            [[tables]]
            name = "users"

            [[tables.columns]]
            name = "id"
            type = "int"

            [[tables.columns]]
            name = "email"
            nullable = true
        "#;
        let schema = SchemaFile::from_toml(input).unwrap();
        let cols = schema.columns("users").unwrap();
        assert_eq!(cols, vec![Column::new("id"), Column::new("email")]);
        assert!(schema.table("users").unwrap().columns[1].nullable);
        assert!(matches!(
            schema.columns("orders"),
            Err(TranslateError::UnknownTable(_))
        ));
    }
}
