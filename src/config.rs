//! Grid settings loaded from a TOML file.
//!
//! ```toml
//! row_height = 40            # px per row, base estimate for virtualization
//! overscan = 10              # extra rows rendered above and below the viewport
//! max_rows = 50000           # warn when a dataset exceeds this
//! enable_debug_measures = false
//! dataset_config = "dataset.yaml"  # optional vocabulary/amount overrides
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default visual height for a single row, in px.
pub const DEFAULT_ROW_HEIGHT: u32 = 40;

/// Rows rendered above and below the viewport.
pub const VIRTUALIZED_OVERSCAN: usize = 10;

/// Upper bound for demo datasets.
pub const MAX_ROWS: usize = 50_000;

/// Timing logs for generation and row model computation.
pub const ENABLE_DEBUG_MEASURES: bool = false;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub row_height: u32,
    pub overscan: usize,
    pub max_rows: usize,
    pub enable_debug_measures: bool,
    /// YAML `DatasetConfig` used instead of the built-in vocabulary
    pub dataset_config: Option<PathBuf>,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT,
            overscan: VIRTUALIZED_OVERSCAN,
            max_rows: MAX_ROWS,
            enable_debug_measures: ENABLE_DEBUG_MEASURES,
            dataset_config: None,
        }
    }
}

impl GridSettings {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: GridSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`. Relative `dataset_config` paths resolve
    /// against the settings file's directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut settings = Self::from_toml(&content)?;
        if let (Some(dataset), Some(parent)) = (settings.dataset_config.as_mut(), path.parent()) {
            if dataset.is_relative() {
                *dataset = parent.join(&*dataset);
            }
        }
        Ok(settings)
    }

    /// Settings from `path`, or the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.row_height == 0 {
            return Err(ConfigError::Invalid("row_height must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings = GridSettings::default();
        assert_eq!(settings.row_height, 40);
        assert_eq!(settings.overscan, 10);
        assert_eq!(settings.max_rows, 50_000);
        assert!(!settings.enable_debug_measures);
        assert_eq!(settings.dataset_config, None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings =
            GridSettings::from_toml("row_height = 32\nenable_debug_measures = true\n").unwrap();
        assert_eq!(settings.row_height, 32);
        assert!(settings.enable_debug_measures);
        assert_eq!(settings.overscan, 10);
    }

    #[test]
    fn test_empty_toml() {
        assert_eq!(GridSettings::from_toml("").unwrap(), GridSettings::default());
    }

    #[test]
    fn test_rejects_zero_row_height() {
        assert!(matches!(
            GridSettings::from_toml("row_height = 0"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_bad_types() {
        assert!(matches!(
            GridSettings::from_toml("overscan = \"ten\""),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_from_file_resolves_dataset_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "dataset_config = \"dataset.yaml\"").unwrap();

        let settings = GridSettings::from_file(file.path()).unwrap();
        let expected = file.path().parent().unwrap().join("dataset.yaml");
        assert_eq!(settings.dataset_config, Some(expected));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            GridSettings::from_file("/nonexistent/grid.toml"),
            Err(ConfigError::Io { .. })
        ));
        assert_eq!(GridSettings::load(None).unwrap(), GridSettings::default());
    }
}
