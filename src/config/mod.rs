//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults for every option)
//! - The library `Config` and its enums
//! - The JSON settings file and CLI option layers

mod cli;
mod constants;
mod settings;
mod types;

// Re-export all constants
pub use cli::Opt;
pub use constants::*;
pub use settings::Settings;
pub use types::{Config, LogFormat, LogLevel, OutputFormat, ProviderConfig};
