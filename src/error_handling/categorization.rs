//! Error categorization and retry strategy.
//!
//! This module provides functions to categorize fetch errors and to build the
//! backoff schedule used between provider attempts.

use std::time::Duration;

use super::stats::ProcessingStats;
use super::types::{FailureType, FetchError, TransportError};

/// Creates the exponential backoff schedule for provider requests.
///
/// Yields one delay per retry, so `max_attempts - 1` delays in total. The
/// delay slept after attempt `n` (1-indexed) is `backoff_factor * 2^(n-1)`
/// seconds, with no jitter. Delays too large for a `Duration` saturate at
/// `Duration::MAX`.
///
/// # Returns
///
/// A retry strategy iterator ready for use with `tokio_retry::Retry`.
pub fn get_retry_strategy(
    backoff_factor_secs: f64,
    max_attempts: usize,
) -> impl Iterator<Item = Duration> {
    let factor = if backoff_factor_secs.is_finite() {
        backoff_factor_secs.max(0.0)
    } else {
        0.0
    };
    (0..max_attempts.saturating_sub(1)).map(move |retry| {
        if factor == 0.0 {
            return Duration::ZERO;
        }
        let exponent = i32::try_from(retry).unwrap_or(i32::MAX);
        Duration::try_from_secs_f64(factor * 2f64.powi(exponent)).unwrap_or(Duration::MAX)
    })
}

/// Categorizes a `TransportError` into a `FailureType`.
pub fn categorize_transport_error(error: &TransportError) -> FailureType {
    match error {
        TransportError::Timeout(_) => FailureType::RequestTimeout,
        TransportError::Connect(_) => FailureType::ConnectError,
        TransportError::Request(_) => FailureType::RequestError,
        TransportError::Decode(_) => FailureType::DecodeError,
        TransportError::Other(_) => FailureType::OtherFetchError,
    }
}

/// Categorizes a `FetchError` into a `FailureType`.
///
/// For exhausted retries the last transport error wins; without one, a
/// recorded non-2xx status makes it an HTTP status failure.
pub fn categorize_fetch_error(error: &FetchError) -> FailureType {
    match error {
        FetchError::InvalidDomain(_) => FailureType::InvalidDomain,
        FetchError::CredentialUnavailable { .. } => FailureType::CredentialUnavailable,
        FetchError::FetchFailed {
            source: Some(transport),
            ..
        } => categorize_transport_error(transport),
        FetchError::FetchFailed {
            last_status: Some(_),
            ..
        } => FailureType::HttpStatusError,
        FetchError::FetchFailed { .. } => FailureType::OtherFetchError,
    }
}

/// Updates processing statistics based on a `FetchError`.
pub fn update_error_stats(stats: &ProcessingStats, error: &FetchError) {
    stats.increment_failure(categorize_fetch_error(error));
}
