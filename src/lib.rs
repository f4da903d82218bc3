//! domain_traffic library: bulk web-traffic analytics for lists of domains
//!
//! Fetches analytics for each domain from the provider API (or a deterministic
//! synthetic generator when no API key is configured), normalizes both sources
//! into one record schema, and exports the records as JSON, CSV, or XLSX.
//!
//! # Example
//!
//! ```no_run
//! use domain_traffic::{run_export, Config, OutputFormat};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     input_file: std::path::PathBuf::from("domains.csv"),
//!     output_path: std::path::PathBuf::from("out/traffic.csv"),
//!     output_format: OutputFormat::Csv,
//!     ..Default::default()
//! };
//!
//! let report = run_export(config).await?;
//! println!("Exported {} of {} domains", report.successful, report.total_domains);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod config;
pub mod domain;
pub mod error_handling;
pub mod export;
pub mod fetch;
pub mod initialization;
pub mod input;
pub mod mock;
pub mod models;
pub mod normalize;
pub mod source;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat, ProviderConfig};
pub use error_handling::FetchError;
pub use models::NormalizedRecord;
pub use run::{run_export, RunReport};
pub use source::{get_normalized_record, DataSource};

// Internal run module (contains the orchestration logic)
mod run {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use anyhow::{bail, Context, Result};
    use futures::StreamExt;
    use log::{info, warn};

    use crate::app::{log_progress, print_error_statistics, print_simple_summary};
    use crate::config::{Config, OutputFormat, LOGGING_INTERVAL};
    use crate::error_handling::{update_error_stats, InfoType, ProcessingStats};
    use crate::export::export_records;
    use crate::initialization::init_client;
    use crate::input::load_domains_from_csv;
    use crate::models::NormalizedRecord;
    use crate::source::{get_normalized_record, DataSource};

    /// Results of an export run.
    #[derive(Debug, Clone)]
    pub struct RunReport {
        /// Domains read from the input file
        pub total_domains: usize,
        /// Domains that produced a record
        pub successful: usize,
        /// Domains that failed
        pub failed: usize,
        /// Where the records were written
        pub output_path: PathBuf,
        /// Format of the output file
        pub format: OutputFormat,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs an export with the provided configuration.
    ///
    /// Reads the domain list, fetches and normalizes each domain with bounded
    /// concurrency, and writes the successful records in input order. Failed
    /// domains are logged and counted but do not stop the run.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The input file cannot be read or lists no domains
    /// - The HTTP client cannot be initialized
    /// - No domain produced a record
    /// - The output file cannot be written
    pub async fn run_export(config: Config) -> Result<RunReport> {
        let domains = load_domains_from_csv(&config.input_file)?;
        if domains.is_empty() {
            bail!("No domains found in {}", config.input_file.display());
        }
        let total = domains.len();
        info!("Total domains in file: {}", total);

        let client = init_client(&config.provider).context("Failed to initialize HTTP client")?;
        let source = DataSource::from_config(&config, client);
        if source.is_mock() {
            info!("Using mock data");
        } else {
            info!("Using provider API at {}", config.provider.base_url);
        }
        let info_type = if source.is_mock() {
            InfoType::MockProfile
        } else {
            InfoType::RemotePayload
        };

        let start_time = std::time::Instant::now();
        let stats = ProcessingStats::new();
        let completed = AtomicUsize::new(0);

        let source = &source;
        let stats = &stats;
        let completed = &completed;
        let outcomes: Vec<Option<NormalizedRecord>> =
            futures::stream::iter(domains.iter().enumerate())
                .map(move |(index, domain)| async move {
                    info!("Processing {}/{}: {}", index + 1, total, domain);
                    let outcome = get_normalized_record(source, domain).await;

                    let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
                    if done % LOGGING_INTERVAL == 0 {
                        log_progress(start_time, completed, total);
                    }

                    match outcome {
                        Ok(record) => {
                            stats.increment_info(info_type);
                            Some(record)
                        }
                        Err(e) => {
                            update_error_stats(stats, &e);
                            warn!("Failed to process {}: {:#}", domain, anyhow::Error::from(e));
                            None
                        }
                    }
                })
                .buffered(config.max_concurrency.max(1))
                .collect()
                .await;

        let records: Vec<NormalizedRecord> = outcomes.into_iter().flatten().collect();
        let successful = records.len();
        let failed = total - successful;

        log_progress(start_time, completed, total);
        print_error_statistics(stats);

        if records.is_empty() {
            bail!("No domains were processed successfully ({} failed)", failed);
        }

        export_records(&records, config.output_format, &config.output_path)
            .context("Failed to export records")?;

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        print_simple_summary(total, successful, failed, elapsed_seconds);

        Ok(RunReport {
            total_domains: total,
            successful,
            failed,
            output_path: config.output_path,
            format: config.output_format,
            elapsed_seconds,
        })
    }
}
