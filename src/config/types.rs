//! Configuration types.
//!
//! This module defines the enums and the library `Config` struct. The CLI
//! options live in `cli.rs` and the JSON settings file in `settings.rs`; both
//! resolve into a `Config`.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{
    DEFAULT_API_KEY_ENV_VAR, DEFAULT_BACKOFF_FACTOR_SECS, DEFAULT_BASE_URL, DEFAULT_INPUT_PATH,
    DEFAULT_MAX_CONCURRENCY, DEFAULT_MAX_RETRIES, DEFAULT_OUTPUT_PATH, DEFAULT_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Parses the settings-file spelling (`"INFO"`, `"warning"`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" | "critical" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("unknown log level: {other}")),
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Serialized format of the exported records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array, nested fields preserved
    Json,
    /// Flat CSV, nested fields stored as JSON strings
    Csv,
    /// Flat spreadsheet, same columns as CSV
    Xlsx,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Xlsx => "xlsx",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "xlsx" => Ok(OutputFormat::Xlsx),
            other => Err(format!("unsupported output format: {other}")),
        }
    }
}

/// Provider request settings shared by the remote source.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    /// Endpoint prefix; the domain and `/overview` are appended
    pub base_url: String,

    /// Name of the environment variable holding the API key
    pub api_key_env_var: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Total attempts per domain
    pub max_retries: usize,

    /// Base backoff delay in seconds
    pub backoff_factor_seconds: f64,
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env_var: DEFAULT_API_KEY_ENV_VAR.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_factor_seconds: DEFAULT_BACKOFF_FACTOR_SECS,
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without touching the CLI or a settings file.
///
/// # Examples
///
/// ```no_run
/// use domain_traffic::{Config, OutputFormat};
/// use std::path::PathBuf;
///
/// let config = Config {
///     input_file: PathBuf::from("domains.csv"),
///     output_format: OutputFormat::Csv,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// CSV file listing the domains
    pub input_file: PathBuf,

    /// Where the exported records are written
    pub output_path: PathBuf,

    /// Export format
    pub output_format: OutputFormat,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Use the synthetic generator instead of the provider API
    pub use_mock_data: bool,

    /// Maximum domains processed concurrently
    pub max_concurrency: usize,

    /// Provider endpoint and request policy
    pub provider: ProviderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            output_format: OutputFormat::Json,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            use_mock_data: true,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            provider: ProviderConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.use_mock_data);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.max_concurrency, DEFAULT_MAX_CONCURRENCY);
        assert_eq!(config.provider.api_key_env_var, "SIMILARWEB_API_KEY");
        assert_eq!(config.provider.timeout_seconds, 10);
        assert_eq!(config.provider.max_retries, 3);
        assert!((config.provider.backoff_factor_seconds - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_log_level_from_settings_spelling() {
        assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("Warning".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("critical".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_log_level_into_filter() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(" xlsx ".parse::<OutputFormat>().unwrap(), OutputFormat::Xlsx);
        assert!("parquet".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
    }
}
