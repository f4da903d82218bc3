//! JSON settings file.
//!
//! Layout:
//!
//! ```json
//! {
//!   "similarweb": { "base_url": "...", "api_key_env": "SIMILARWEB_API_KEY", "use_mock_data": true },
//!   "request": { "timeout": 10, "max_retries": 3, "backoff_factor": 0.5, "max_concurrency": 4 },
//!   "log_level": "INFO",
//!   "input_file": "data/inputs.sample.csv",
//!   "output_path": "data/sample_output.json",
//!   "output_format": "json"
//! }
//! ```
//!
//! Every key is optional. Absent keys keep the value already in the `Config`.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::types::{Config, LogLevel, OutputFormat};
use crate::error_handling::SettingsError;

/// Provider section of the settings file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    pub base_url: Option<String>,
    pub api_key_env: Option<String>,
    pub use_mock_data: Option<bool>,
}

/// Request policy section of the settings file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RequestSettings {
    pub timeout: Option<u64>,
    pub max_retries: Option<usize>,
    pub backoff_factor: Option<f64>,
    pub max_concurrency: Option<usize>,
}

/// Parsed settings file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub similarweb: ProviderSettings,
    pub request: RequestSettings,
    pub log_level: Option<String>,
    pub input_file: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub output_format: Option<String>,
}

impl Settings {
    /// Reads and parses a settings file.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::NotFound` if the file does not exist,
    /// `SettingsError::Io` if it cannot be read, and `SettingsError::Parse`
    /// if it is not valid JSON of the expected shape.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Err(SettingsError::NotFound(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parses settings from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Overlays the settings onto `config`.
    ///
    /// # Errors
    ///
    /// Rejects an unparseable base URL, log level, or output format, and a
    /// zero retry or concurrency count.
    pub fn apply_to(&self, config: &mut Config) -> Result<(), SettingsError> {
        if let Some(base_url) = &self.similarweb.base_url {
            url::Url::parse(base_url).map_err(|e| SettingsError::InvalidValue {
                key: "similarweb.base_url",
                reason: e.to_string(),
            })?;
            config.provider.base_url = base_url.clone();
        }
        if let Some(env_var) = &self.similarweb.api_key_env {
            config.provider.api_key_env_var = env_var.clone();
        }
        if let Some(use_mock) = self.similarweb.use_mock_data {
            config.use_mock_data = use_mock;
        }

        if let Some(timeout) = self.request.timeout {
            config.provider.timeout_seconds = timeout;
        }
        if let Some(max_retries) = self.request.max_retries {
            if max_retries == 0 {
                return Err(SettingsError::InvalidValue {
                    key: "request.max_retries",
                    reason: "must be at least 1".to_string(),
                });
            }
            config.provider.max_retries = max_retries;
        }
        if let Some(backoff) = self.request.backoff_factor {
            if !backoff.is_finite() || backoff < 0.0 {
                return Err(SettingsError::InvalidValue {
                    key: "request.backoff_factor",
                    reason: format!("must be a non-negative number, got {backoff}"),
                });
            }
            config.provider.backoff_factor_seconds = backoff;
        }
        if let Some(max_concurrency) = self.request.max_concurrency {
            if max_concurrency == 0 {
                return Err(SettingsError::InvalidValue {
                    key: "request.max_concurrency",
                    reason: "must be at least 1".to_string(),
                });
            }
            config.max_concurrency = max_concurrency;
        }

        if let Some(level) = &self.log_level {
            config.log_level = level
                .parse::<LogLevel>()
                .map_err(|reason| SettingsError::InvalidValue {
                    key: "log_level",
                    reason,
                })?;
        }
        if let Some(input) = &self.input_file {
            config.input_file = input.clone();
        }
        if let Some(output) = &self.output_path {
            config.output_path = output.clone();
        }
        if let Some(format) = &self.output_format {
            config.output_format =
                format
                    .parse::<OutputFormat>()
                    .map_err(|reason| SettingsError::InvalidValue {
                        key: "output_format",
                        reason,
                    })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_settings_keep_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        let mut config = Config::default();
        settings.apply_to(&mut config).unwrap();
        assert!(config.use_mock_data);
        assert_eq!(config.provider, crate::config::ProviderConfig::default());
    }

    #[test]
    fn test_full_settings_override() {
        let settings = Settings::from_json(
            r#"{
                "similarweb": {
                    "base_url": "https://analytics.internal/v2/site",
                    "api_key_env": "TRAFFIC_KEY",
                    "use_mock_data": false
                },
                "request": {"timeout": 3, "max_retries": 5, "backoff_factor": 1.5, "max_concurrency": 8},
                "log_level": "DEBUG",
                "input_file": "in.csv",
                "output_path": "out/records.csv",
                "output_format": "csv"
            }"#,
        )
        .unwrap();
        let mut config = Config::default();
        settings.apply_to(&mut config).unwrap();

        assert!(!config.use_mock_data);
        assert_eq!(config.provider.base_url, "https://analytics.internal/v2/site");
        assert_eq!(config.provider.api_key_env_var, "TRAFFIC_KEY");
        assert_eq!(config.provider.timeout_seconds, 3);
        assert_eq!(config.provider.max_retries, 5);
        assert!((config.provider.backoff_factor_seconds - 1.5).abs() < f64::EPSILON);
        assert_eq!(config.max_concurrency, 8);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.input_file, PathBuf::from("in.csv"));
        assert_eq!(config.output_path, PathBuf::from("out/records.csv"));
        assert_eq!(config.output_format, OutputFormat::Csv);
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let settings = Settings::from_json(r#"{"similarweb": {"base_url": "not a url"}}"#).unwrap();
        let err = settings.apply_to(&mut Config::default()).unwrap_err();
        assert!(err.to_string().contains("similarweb.base_url"));
    }

    #[test]
    fn test_zero_retries_rejected() {
        let settings = Settings::from_json(r#"{"request": {"max_retries": 0}}"#).unwrap();
        assert!(settings.apply_to(&mut Config::default()).is_err());
    }

    #[test]
    fn test_unknown_output_format_rejected() {
        let settings = Settings::from_json(r#"{"output_format": "parquet"}"#).unwrap();
        let err = settings.apply_to(&mut Config::default()).unwrap_err();
        assert!(err.to_string().contains("output_format"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load(Path::new("/nonexistent/settings.json")).unwrap_err();
        assert!(matches!(err, SettingsError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"log_level": "warning"}}"#).unwrap();
        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.log_level.as_deref(), Some("warning"));
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
