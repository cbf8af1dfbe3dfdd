// Copyright 2025 the Prog1 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Title and initial size of the application window.
///
/// Every field has a default, so a configuration file only needs the keys it
/// changes:
///
/// ```
/// use prog1_app::AppConfig;
///
/// let config = AppConfig::from_toml_str("title = \"Button\"\nheight = 100").unwrap();
/// assert_eq!(config.title, "Button");
/// assert_eq!((config.width, config.height), (800.0, 100.0));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Window title.
    pub title: String,
    /// Scene width.
    pub width: f64,
    /// Scene height.
    pub height: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Prog1".into(),
            width: 800.0,
            height: 600.0,
        }
    }
}

impl AppConfig {
    /// A configuration with the given title and scene size.
    pub fn new(title: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            title: title.into(),
            width,
            height,
        }
    }

    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

/// Errors from loading an [`AppConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// The file that was requested.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },
    /// The document is not valid TOML or has fields of the wrong type.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.title, "Prog1");
    }

    #[test]
    fn full_document() {
        let config =
            AppConfig::from_toml_str("title = \"Sorting Game\"\nwidth = 600.0\nheight = 600.0\n")
                .unwrap();
        assert_eq!(config, AppConfig::new("Sorting Game", 600.0, 600.0));
    }

    #[test]
    fn wrong_type_is_a_parse_error() {
        let err = AppConfig::from_toml_str("width = \"wide\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid configuration"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("prog1_app_no_such_config.toml");
        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_reads_a_file() {
        let path = std::env::temp_dir().join("prog1_app_config_test.toml");
        std::fs::write(&path, "title = \"Queue\"").unwrap();
        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.title, "Queue");
        let _ = std::fs::remove_file(&path);
    }
}
