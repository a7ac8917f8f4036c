//! Error types for mongosql.

pub use crate::translator::projection::ProjectionMode;
use thiserror::Error;

/// The main error type for translation.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// A filter key (or comparison context) is not a schema column.
    #[error("Unknown column: '{name}'{}", suggestion_hint(.suggestion))]
    UnknownColumn {
        name: String,
        suggestion: Option<String>,
    },

    /// A projection mixes inclusion and exclusion.
    #[error("Projection can't use {first} and {second} at the same time")]
    ProjectionModeConflict {
        first: ProjectionMode,
        second: ProjectionMode,
    },

    /// A projection value is neither an inclusion nor an exclusion.
    #[error("Invalid projection: {0}")]
    InvalidProjection(String),

    /// The filter is not a document or a list of documents.
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    /// A sort specification could not be read.
    #[error("Invalid sort: {0}")]
    InvalidSort(String),

    /// The schema file has no such table.
    #[error("Unknown table: '{0}'")]
    UnknownTable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(". Did you mean '{}'?", s),
        None => String::new(),
    }
}

impl TranslateError {
    /// Create an unknown-column error without a suggestion.
    pub fn unknown_column(name: impl Into<String>) -> Self {
        Self::UnknownColumn {
            name: name.into(),
            suggestion: None,
        }
    }

    /// True for the unknown-column kind.
    pub fn is_unknown_column(&self) -> bool {
        matches!(self, Self::UnknownColumn { .. })
    }
}

/// Result type alias for mongosql operations.
pub type TranslateResult<T> = Result<T, TranslateError>;
