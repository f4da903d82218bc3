//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_traffic` library that handles:
//! - Command-line argument parsing and settings file layering
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_traffic::config::Opt;
use domain_traffic::initialization::init_logger_with;
use domain_traffic::run_export;

#[tokio::main]
async fn main() -> Result<()> {
    // .env may hold SIMILARWEB_API_KEY; a missing file is fine
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = match Opt::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("domain_traffic error: {e}");
            process::exit(2);
        }
    };

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_export(config).await {
        Ok(report) => {
            println!(
                "✅ Processed {} domain{} ({} succeeded, {} failed) in {:.1}s",
                report.total_domains,
                if report.total_domains == 1 { "" } else { "s" },
                report.successful,
                report.failed,
                report.elapsed_seconds
            );
            println!(
                "Results saved as {} in {}",
                report.format,
                report.output_path.display()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("domain_traffic error: {:#}", e);
            process::exit(1);
        }
    }
}
