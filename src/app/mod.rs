//! Run reporting helpers.
//!
//! Progress and end-of-run statistics logging used by the run orchestrator.

pub mod logging;
pub mod statistics;

// Re-export public API
pub use logging::log_progress;
pub use statistics::{print_error_statistics, print_simple_summary};
