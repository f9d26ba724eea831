//! Catalog configuration.
//!
//! Supports loading configuration from:
//! 1. Configuration files (YAML)
//! 2. Environment variables (with `QBENCH_` prefix)
//!
//! Precedence (highest to lowest): environment, file, defaults.

use std::path::{Path, PathBuf};

use qbench_gatesets::MAX_GATESET_QUBITS;
use serde::{Deserialize, Serialize};

/// Complete catalog configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub calibration: CalibrationConfig,
    #[serde(default)]
    pub gatesets: GatesetConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where calibration documents come from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalibrationConfig {
    /// Directory of `<device>_calibration.json` files replacing the
    /// embedded documents. Unset means embedded.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Gateset scaffolding settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatesetConfig {
    /// Width used when a gateset is requested without a qubit count
    #[serde(default = "default_num_qubits")]
    pub default_num_qubits: u32,
    /// Seed for the generic scaffold's synthetic properties
    #[serde(default = "default_seed")]
    pub seed: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format: "console" or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_num_qubits() -> u32 {
    20
}

fn default_seed() -> u64 {
    qbench_gatesets::DEFAULT_SEED
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "console".to_string()
}

impl Default for GatesetConfig {
    fn default() -> Self {
        Self {
            default_num_qubits: default_num_qubits(),
            seed: default_seed(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl CatalogConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {e}", path.display())))?;
        let config: CatalogConfig = serde_yaml_ng::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        Self::default().merge_env()
    }

    /// Load configuration: file (if given) or defaults, then environment.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        let config = config.merge_env();
        config.validate()?;
        Ok(config)
    }

    /// Apply `QBENCH_*` environment variables on top of this configuration.
    pub fn merge_env(self) -> Self {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable source.
    ///
    /// Variables that are absent leave fields unchanged; numeric variables
    /// that fail to parse are ignored.
    pub fn merge_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = var("QBENCH_CALIBRATION_DIR") {
            self.calibration.dir = (!v.is_empty()).then(|| PathBuf::from(v));
        }
        if let Some(v) = var("QBENCH_GATESET_QUBITS") {
            if let Ok(val) = v.parse() {
                self.gatesets.default_num_qubits = val;
            }
        }
        if let Some(v) = var("QBENCH_SCAFFOLD_SEED") {
            if let Ok(val) = v.parse() {
                self.gatesets.seed = val;
            }
        }
        if let Some(v) = var("QBENCH_LOG_LEVEL") {
            self.logging.level = v;
        }
        if let Some(v) = var("QBENCH_LOG_FORMAT") {
            self.logging.format = v;
        }
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_GATESET_QUBITS).contains(&self.gatesets.default_num_qubits) {
            return Err(ConfigError::ValidationError(format!(
                "gatesets.default_num_qubits must be between 1 and {MAX_GATESET_QUBITS}"
            )));
        }

        if let Some(dir) = &self.calibration.dir {
            if !dir.is_dir() {
                return Err(ConfigError::ValidationError(format!(
                    "Calibration directory does not exist: {}",
                    dir.display()
                )));
            }
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: {other}"
                )));
            }
        }

        match self.logging.format.as_str() {
            "console" | "json" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: {other}"
                )));
            }
        }

        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CatalogConfig::default();
        assert_eq!(config.gatesets.default_num_qubits, 20);
        assert_eq!(config.gatesets.seed, 42);
        assert_eq!(config.calibration.dir, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let config = CatalogConfig::default().merge_vars(vars(&[
            ("QBENCH_GATESET_QUBITS", "8"),
            ("QBENCH_SCAFFOLD_SEED", "not-a-number"),
            ("QBENCH_LOG_FORMAT", "json"),
        ]));
        assert_eq!(config.gatesets.default_num_qubits, 8);
        assert_eq!(config.gatesets.seed, 42);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = CatalogConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_width() {
        let mut config = CatalogConfig::default();
        config.gatesets.default_num_qubits = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_width_above_limit() {
        let mut config = CatalogConfig::default();
        config.gatesets.default_num_qubits = MAX_GATESET_QUBITS + 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: CatalogConfig = serde_yaml_ng::from_str("gatesets:\n  seed: 7\n").unwrap();
        assert_eq!(config.gatesets.seed, 7);
        assert_eq!(config.gatesets.default_num_qubits, 20);
        assert_eq!(config.logging, LoggingConfig::default());
    }
}
