//! Engine configuration.
//!
//! Configuration is a small YAML document; every field has a default, so an
//! empty document is valid. Environment variables override the file:
//!
//! - `SKYVIEW_REFERENCE_PATH` overrides `reference_path`
//! - `SKYVIEW_LOG` overrides `logging.level`

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use skyview_types::ReferenceData;
use tracing::info;

/// Errors that can occur when loading configuration or reference data.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a file from disk.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// YAML file overriding the built-in reference tables.
    #[serde(default)]
    pub reference_path: Option<PathBuf>,

    /// Document-store lookups.
    #[serde(default)]
    pub lookup: LookupConfig,

    /// Logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Lookup settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LookupConfig {
    /// Whether lookups run at all; when off, placeholders are used.
    #[serde(default = "default_lookup_enabled")]
    pub enabled: bool,

    /// Deadline per lookup, in milliseconds.
    #[serde(default = "default_lookup_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            enabled: default_lookup_enabled(),
            timeout_ms: default_lookup_timeout_ms(),
        }
    }
}

impl LookupConfig {
    /// Deadline per lookup.
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log filter (trace, debug, info, warn, error, or an `EnvFilter` directive).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

const fn default_lookup_enabled() -> bool {
    true
}

const fn default_lookup_timeout_ms() -> u64 {
    2_000
}

fn default_log_level() -> String {
    "info".to_owned()
}

impl EngineConfig {
    /// Load configuration from a YAML file, then apply environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = read(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string, without environment
    /// overrides.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply `SKYVIEW_REFERENCE_PATH` and `SKYVIEW_LOG`.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply overrides from any variable source.
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(path) = var("SKYVIEW_REFERENCE_PATH") {
            self.reference_path = Some(PathBuf::from(path));
        }
        if let Some(level) = var("SKYVIEW_LOG") {
            self.logging.level = level;
        }
    }

    /// The reference tables: built in, or overridden by
    /// [`EngineConfig::reference_path`].
    ///
    /// Tables the override file omits keep their built-in value.
    pub fn load_reference(&self) -> Result<Arc<ReferenceData>, ConfigError> {
        let Some(path) = &self.reference_path else {
            return Ok(Arc::new(ReferenceData::default()));
        };
        let reference = parse_reference(&read(path)?)?;
        info!(path = %path.display(), "reference data loaded");
        Ok(Arc::new(reference))
    }
}

/// Parse a reference override document.
pub fn parse_reference(yaml: &str) -> Result<ReferenceData, ConfigError> {
    if yaml.trim().is_empty() {
        return Ok(ReferenceData::default());
    }
    Ok(serde_yml::from_str(yaml)?)
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = EngineConfig::parse("").unwrap();

        assert_eq!(config, EngineConfig::default());
        assert!(config.lookup.enabled);
        assert_eq!(config.lookup.timeout(), Duration::from_millis(2_000));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_document() {
        let yaml = "lookup:\n  timeout_ms: 250\nlogging:\n  level: debug\n";
        let config = EngineConfig::parse(yaml).unwrap();

        assert!(config.lookup.enabled);
        assert_eq!(config.lookup.timeout_ms, 250);
        assert_eq!(config.logging.level, "debug");
        assert!(config.reference_path.is_none());
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut config = EngineConfig::parse("logging:\n  level: warn\n").unwrap();
        let vars = BTreeMap::from([
            ("SKYVIEW_REFERENCE_PATH", "/etc/skyview/reference.yaml"),
            ("SKYVIEW_LOG", "skyview_core=trace"),
        ]);
        config.apply_overrides(|name| vars.get(name).map(|value| (*value).to_owned()));

        assert_eq!(
            config.reference_path.as_deref(),
            Some(Path::new("/etc/skyview/reference.yaml"))
        );
        assert_eq!(config.logging.level, "skyview_core=trace");
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let result = EngineConfig::parse("lookup: [not, a, map");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn missing_reference_file_is_an_io_error() {
        let config = EngineConfig {
            reference_path: Some(PathBuf::from("/nonexistent/skyview/reference.yaml")),
            ..EngineConfig::default()
        };
        assert!(matches!(config.load_reference(), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn reference_override_keeps_other_tables() {
        let reference = parse_reference("max_fairy_souls: 220\n").unwrap();

        assert_eq!(reference.max_fairy_souls, 220);
        assert_eq!(reference.skill_xp.len(), 50);
    }
}
