//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Default number of variates per run.
pub const DEFAULT_COUNT: usize = 10;

/// Largest number of variates a single run may request.
pub const MAX_COUNT: usize = 10_000_000;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid count: {0}. Must be between 1 and {max}", max = MAX_COUNT)]
    InvalidCount(usize),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: plain, json, csv")]
    InvalidFormat(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How variates and summaries are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One value per line
    #[default]
    Plain,
    /// A single JSON document
    Json,
    /// Comma-separated with a header row
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Generator seed; drawn from OS entropy when absent
    pub seed: Option<u64>,
    /// Number of variates to draw
    pub count: usize,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: None,
            count: DEFAULT_COUNT,
            format: OutputFormat::Plain,
            log_level: LogLevel::Warn,
        }
    }
}

const ENV_SEED: &str = "VARIATES_SEED";
const ENV_COUNT: &str = "VARIATES_COUNT";
const ENV_FORMAT: &str = "VARIATES_FORMAT";
const ENV_LOG_LEVEL: &str = "VARIATES_LOG_LEVEL";

impl CliConfig {
    /// Apply environment overrides from `lookup`
    ///
    /// Only variables the lookup returns are applied; everything else keeps
    /// its current value.
    fn apply_lookup<F>(&mut self, lookup: &F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Seed
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = Some(seed.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("{} is not a u64: {}", ENV_SEED, seed))
            })?);
        }

        // Count
        if let Some(count) = lookup(ENV_COUNT) {
            self.count = count.trim().parse().map_err(|_| {
                ConfigError::EnvError(format!("{} is not a count: {}", ENV_COUNT, count))
            })?;
        }

        // Output format
        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = OutputFormat::from_str(&format)?;
        }

        // Log level
        if let Some(log_level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&log_level)?;
        }

        Ok(())
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_COUNT).contains(&self.count) {
            return Err(ConfigError::InvalidCount(self.count));
        }

        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(count) = cli.count {
            self.count = count;
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        Ok(())
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Seed override
    pub seed: Option<u64>,
    /// Count override
    pub count: Option<usize>,
    /// Output format override
    pub format: Option<String>,
    /// Log level override
    pub log_level: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    // Start with defaults or file config
    let mut config = if let Some(config_path) = &cli.config_file {
        CliConfig::from_file(config_path)?
    } else {
        CliConfig::default()
    };

    // Override with environment variables
    config.apply_lookup(&lookup)?;

    // Override with CLI arguments
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn env_only(vars: &[(&str, &str)]) -> Result<CliConfig, ConfigError> {
        build_config_with(&CliArgs::default(), env(vars))
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.count, 10);
        assert_eq!(config.format, OutputFormat::Plain);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("plain").unwrap(), OutputFormat::Plain);
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Plain);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);

        assert!(OutputFormat::from_str("table").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", LogLevel::Trace), "trace");
        assert_eq!(format!("{}", LogLevel::Error), "error");
        assert_eq!(format!("{}", OutputFormat::Plain), "plain");
        assert_eq!(format!("{}", OutputFormat::Json), "json");
        assert_eq!(format!("{}", OutputFormat::Csv), "csv");
    }

    #[test]
    fn test_validate_count() {
        let mut config = CliConfig::default();
        config.count = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidCount(0))));

        config.count = MAX_COUNT;
        assert!(config.validate().is_ok());

        config.count = MAX_COUNT + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides() {
        let config = env_only(&[
            ("VARIATES_SEED", "42"),
            ("VARIATES_COUNT", " 250 "),
            ("VARIATES_FORMAT", "csv"),
            ("VARIATES_LOG_LEVEL", "debug"),
        ])
        .unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.count, 250);
        assert_eq!(config.format, OutputFormat::Csv);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_env_rejects_bad_values() {
        let err = env_only(&[("VARIATES_SEED", "-1")]).unwrap_err();
        assert!(matches!(err, ConfigError::EnvError(_)));

        let err = env_only(&[("VARIATES_COUNT", "many")]).unwrap_err();
        assert!(matches!(err, ConfigError::EnvError(_)));

        let err = env_only(&[("VARIATES_COUNT", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCount(0)));

        let err = env_only(&[("VARIATES_FORMAT", "xml")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFormat(_)));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            seed: Some(7),
            count: Some(3),
            format: Some("json".to_string()),
            log_level: Some("info".to_string()),
            config_file: None,
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.count, 3);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_cli_args_merge_rejects_bad_format() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            format: Some("yaml".to_string()),
            ..Default::default()
        };
        assert!(config.merge_with_cli(&cli).is_err());
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            seed = 12345
            count = 500
            format = "json"
            log_level = "error"
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.seed, Some(12345));
        assert_eq!(config.count, 500);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, LogLevel::Error);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let toml_str = r#"
            count = 20
        "#;

        let config: CliConfig = toml::from_str(toml_str).unwrap();
        // Should use defaults for unspecified fields
        assert_eq!(config.seed, None);
        assert_eq!(config.count, 20);
        assert_eq!(config.format, OutputFormat::Plain);
    }

    #[test]
    fn test_toml_rejects_unknown_format() {
        let result: Result<CliConfig, _> = toml::from_str(r#"format = "xml""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_config_priority() {
        let path = std::env::temp_dir().join(format!(
            "variates-config-test-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "seed = 1\ncount = 100\nformat = \"csv\"\n").unwrap();

        // File only
        let cli = CliArgs {
            config_file: Some(path.clone()),
            ..Default::default()
        };
        let config = build_config_with(&cli, env(&[])).unwrap();
        assert_eq!(config.seed, Some(1));
        assert_eq!(config.count, 100);
        assert_eq!(config.format, OutputFormat::Csv);

        // Environment beats file
        let config = build_config_with(&cli, env(&[("VARIATES_COUNT", "200")])).unwrap();
        assert_eq!(config.count, 200);
        assert_eq!(config.seed, Some(1));

        // CLI beats environment
        let cli = CliArgs {
            config_file: Some(path.clone()),
            count: Some(300),
            ..Default::default()
        };
        let config = build_config_with(&cli, env(&[("VARIATES_COUNT", "200")])).unwrap();
        assert_eq!(config.count, 300);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_build_config_with_defaults() {
        let config = build_config_with(&CliArgs::default(), env(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/variates.toml")),
            ..Default::default()
        };
        let err = build_config_with(&cli, env(&[])).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidCount(0);
        assert!(err.to_string().contains("Invalid count"));
        assert!(err.to_string().contains("10000000"));

        let err = ConfigError::InvalidLogLevel("bad".to_string());
        assert!(err.to_string().contains("Invalid log level"));

        let err = ConfigError::InvalidFormat("bad".to_string());
        assert!(err.to_string().contains("Invalid output format"));
    }
}
