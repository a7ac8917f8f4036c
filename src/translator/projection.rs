//! Inclusion/exclusion projection resolution.

use crate::ast::Column;
use crate::error::{TranslateError, TranslateResult};
use serde_json::Map;

/// Inclusion or exclusion in a projection map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionMode {
    Include,
    Exclude,
}

impl std::fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectionMode::Include => write!(f, "1"),
            ProjectionMode::Exclude => write!(f, "-1"),
        }
    }
}

impl ProjectionMode {
    /// Read a projection value: `1`/`true` include, `-1`/`0`/`false` exclude.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Bool(true) => Some(ProjectionMode::Include),
            serde_json::Value::Bool(false) => Some(ProjectionMode::Exclude),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(1) => Some(ProjectionMode::Include),
                Some(-1) | Some(0) => Some(ProjectionMode::Exclude),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Resolve `projection` against `columns`.
///
/// Walks the schema in order, so the result follows schema order in both
/// modes. Keys that are not schema columns are ignored. Returns `None` when
/// no key matched, leaving the statement's projection as it was.
pub fn resolve_projection(
    projection: &Map<String, serde_json::Value>,
    columns: &[Column],
) -> TranslateResult<Option<Vec<Column>>> {
    let mut mode: Option<ProjectionMode> = None;
    let mut matched: Vec<&Column> = Vec::new();

    for column in columns {
        let Some(value) = projection.get(&column.name) else {
            continue;
        };
        let current = ProjectionMode::from_json(value).ok_or_else(|| {
            TranslateError::InvalidProjection(format!(
                "'{}' must be 1 or -1, got {}",
                column.name, value
            ))
        })?;
        match mode {
            Some(first) if first != current => {
                return Err(TranslateError::ProjectionModeConflict {
                    first,
                    second: current,
                });
            }
            _ => mode = Some(current),
        }
        matched.push(column);
    }

    let fields: Vec<Column> = match mode {
        None => return Ok(None),
        Some(ProjectionMode::Include) => matched.into_iter().cloned().collect(),
        Some(ProjectionMode::Exclude) => columns
            .iter()
            .filter(|c| !matched.contains(c))
            .cloned()
            .collect(),
    };
    tracing::debug!("projection resolved to {} of {} columns", fields.len(), columns.len());
    Ok(Some(fields))
}
