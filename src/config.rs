//! CLI configuration.
//!
//! Read from `mongosql.toml` in the working directory, falling back to
//! `<config dir>/mongosql/config.toml`:
//!
//! ```toml
//! schema_path = "schema.json"
//! format = "json"
//! ```

use crate::error::{TranslateError, TranslateResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const LOCAL_CONFIG: &str = "mongosql.toml";

/// How the CLI prints statements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// Schema file used when `--schema` is not given.
    #[serde(default)]
    pub schema_path: Option<PathBuf>,

    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    pub fn from_toml(input: &str) -> TranslateResult<Self> {
        Ok(toml::from_str(input)?)
    }

    pub fn load_from(path: impl AsRef<Path>) -> TranslateResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TranslateError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Explicit path, then `./mongosql.toml`, then the user config dir.
    /// Without any file the defaults apply.
    pub fn load(explicit: Option<&Path>) -> TranslateResult<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        for candidate in Self::search_paths() {
            if candidate.exists() {
                return Self::load_from(candidate);
            }
        }
        Ok(Self::default())
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("mongosql").join("config.toml"));
        }
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let config = Config::from_toml("schema_path = \"db/schema.toml\"\nformat = \"json\"\n").unwrap();
        assert_eq!(config.schema_path, Some(PathBuf::from("db/schema.toml")));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.format, OutputFormat::Pretty);
    }

    #[test]
    fn test_bad_format() {
        assert!(matches!(
            Config::from_toml("format = \"yaml\""),
            Err(TranslateError::Toml(_))
        ));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/mongosql.toml"))).unwrap_err();
        assert!(matches!(err, TranslateError::Config(_)));
    }
}
