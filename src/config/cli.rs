//! Command-line options.
//!
//! Options are layered: built-in defaults, then the settings file, then any
//! flag given on the command line.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::config::constants::DEFAULT_SETTINGS_PATH;
use crate::config::settings::Settings;
use crate::config::types::{Config, LogFormat, LogLevel, OutputFormat};
use crate::error_handling::SettingsError;

/// Command-line options and configuration.
///
/// # Examples
///
/// ```bash
/// # Mock data, defaults from config/settings.json
/// domain_traffic
///
/// # Live API, CSV output
/// SIMILARWEB_API_KEY=... domain_traffic --no-mock --input domains.csv --format csv --output out.csv
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "domain_traffic",
    version,
    about = "Fetches traffic analytics for a list of domains and exports normalized records."
)]
pub struct Opt {
    /// Settings file (JSON). Defaults to config/settings.json when present.
    #[arg(long, value_parser)]
    pub config: Option<PathBuf>,

    /// Input CSV with a `domain` column, or one domain per row
    #[arg(long = "input", value_parser)]
    pub input_file: Option<PathBuf>,

    /// Output file path
    #[arg(long = "output", value_parser)]
    pub output_path: Option<PathBuf>,

    /// Output format: json|csv|xlsx
    #[arg(long = "format", value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Call the provider API instead of generating mock data
    #[arg(long)]
    pub no_mock: bool,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Maximum domains processed concurrently
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub max_concurrency: Option<u16>,
}

impl Opt {
    /// Resolves the options into a library `Config`.
    ///
    /// # Errors
    ///
    /// Fails if an explicitly requested settings file is missing or if the
    /// settings file holds invalid values.
    pub fn into_config(self) -> Result<Config, SettingsError> {
        let mut config = Config::default();

        match &self.config {
            Some(path) => Settings::load(path)?.apply_to(&mut config)?,
            None => {
                let default_path = Path::new(DEFAULT_SETTINGS_PATH);
                if default_path.exists() {
                    Settings::load(default_path)?.apply_to(&mut config)?;
                }
            }
        }

        if let Some(input) = self.input_file {
            config.input_file = input;
        }
        if let Some(output) = self.output_path {
            config.output_path = output;
        }
        if let Some(format) = self.output_format {
            config.output_format = format;
        }
        if self.no_mock {
            config.use_mock_data = false;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
        if let Some(max_concurrency) = self.max_concurrency {
            config.max_concurrency = usize::from(max_concurrency);
        }
        config.log_format = self.log_format;

        Ok(config)
    }
}
