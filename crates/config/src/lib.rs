//! Configuration models and loaders for the desk calculator.

use std::fs::File;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Oracle executable used when no configuration overrides it.
#[cfg(target_os = "macos")]
pub const DEFAULT_UNITS_EXECUTABLE: &str = "gunits";
#[cfg(not(target_os = "macos"))]
pub const DEFAULT_UNITS_EXECUTABLE: &str = "units";

pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_RESET_DAY: u32 = 11;
pub const DEFAULT_DICEWARE_COUNT: usize = 5;

/// Top-level configuration file. Every section is optional.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DeskConfig {
    pub units: UnitsConfig,
    pub data_plan: DataPlanConfig,
    pub diceware: DicewareConfig,
}

/// How to reach the external unit-conversion oracle.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UnitsConfig {
    pub executable: String,
    pub timeout_ms: u64,
}

impl UnitsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for UnitsConfig {
    fn default() -> Self {
        Self {
            executable: DEFAULT_UNITS_EXECUTABLE.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Monthly data plan used by the pacing report.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DataPlanConfig {
    pub allowance_gb: Option<f64>,
    pub reset_day: u32,
}

impl Default for DataPlanConfig {
    fn default() -> Self {
        Self {
            allowance_gb: None,
            reset_day: DEFAULT_RESET_DAY,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DicewareConfig {
    pub count: usize,
}

impl Default for DicewareConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_DICEWARE_COUNT,
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Load a configuration file, TOML when the extension is `.toml` and YAML otherwise.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DeskConfig, ConfigError> {
    let path = path.as_ref();
    let config: DeskConfig = if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)?
    } else {
        let reader = File::open(path)?;
        // an empty YAML document deserializes as unit, not as a map
        if reader.metadata()?.len() == 0 {
            DeskConfig::default()
        } else {
            serde_yaml::from_reader(reader)?
        }
    };
    validate(&config)?;
    tracing::info!("loaded configuration from {}", path.display());
    Ok(config)
}

/// Load `path` when given, otherwise fall back to built-in defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<DeskConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(DeskConfig::default()),
    }
}

fn validate(config: &DeskConfig) -> Result<(), ConfigError> {
    if config.units.executable.trim().is_empty() {
        return Err(ConfigError::Invalid("units.executable must not be empty".into()));
    }
    if config.units.timeout_ms == 0 {
        return Err(ConfigError::Invalid("units.timeout_ms must be positive".into()));
    }
    if !(1..=31).contains(&config.data_plan.reset_day) {
        return Err(ConfigError::Invalid(format!(
            "data_plan.reset_day must be within 1..=31, got {}",
            config.data_plan.reset_day
        )));
    }
    if let Some(allowance) = config.data_plan.allowance_gb {
        if allowance.is_nan() || allowance <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "data_plan.allowance_gb must be positive, got {allowance}"
            )));
        }
    }
    if config.diceware.count == 0 {
        return Err(ConfigError::Invalid("diceware.count must be positive".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(name: &str, contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(name);
        let mut file = File::create(&path).expect("create config");
        file.write_all(contents.as_bytes()).expect("write config");
        (dir, path)
    }

    #[test]
    fn toml_overrides_only_named_fields() {
        let (_dir, path) = write_config(
            "desk.toml",
            "[units]\nexecutable = \"gunits\"\n\n[data_plan]\nallowance_gb = 12.5\n",
        );
        let config = load_config(&path).expect("toml config");
        assert_eq!(config.units.executable, "gunits");
        assert_eq!(config.units.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(config.data_plan.allowance_gb, Some(12.5));
        assert_eq!(config.data_plan.reset_day, DEFAULT_RESET_DAY);
        assert_eq!(config.diceware.count, DEFAULT_DICEWARE_COUNT);
    }

    #[test]
    fn yaml_is_the_fallback_format() {
        let (_dir, path) = write_config(
            "desk.yaml",
            "units:\n  timeout_ms: 250\ndiceware:\n  count: 8\n",
        );
        let config = load_config(&path).expect("yaml config");
        assert_eq!(config.units.timeout(), Duration::from_millis(250));
        assert_eq!(config.units.executable, DEFAULT_UNITS_EXECUTABLE);
        assert_eq!(config.diceware.count, 8);
    }

    #[test]
    fn empty_yaml_yields_defaults() {
        let (_dir, path) = write_config("desk.yml", "");
        assert_eq!(load_config(&path).expect("empty yaml"), DeskConfig::default());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let (_dir, path) = write_config("bad.toml", "[data_plan]\nreset_day = 40\n");
        assert!(matches!(load_config(&path), Err(ConfigError::Invalid(_))));

        let (_dir, path) = write_config("bad.toml", "[units]\ntimeout_ms = 0\n");
        assert!(matches!(load_config(&path), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_config("/nonexistent/desk.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(load_or_default(None).unwrap(), DeskConfig::default());
    }
}
