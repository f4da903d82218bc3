//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions and failure categorization
//! - Processing statistics tracking (failures and info metrics)
//! - Retry strategy configuration
//!
//! Missing or malformed fields in a provider payload are not errors; the
//! normalizer defaults them.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{
    categorize_fetch_error, categorize_transport_error, get_retry_strategy, update_error_stats,
};
pub use stats::ProcessingStats;
pub use types::{
    FailureType, FetchError, InfoType, InitializationError, SettingsError, TransportError,
};
