//! HTTP client initialization.

use reqwest::ClientBuilder;

use crate::config::{ProviderConfig, DEFAULT_USER_AGENT};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for provider requests.
///
/// Creates a `reqwest::Client` configured with:
/// - Per-request timeout from the provider settings
/// - A `domain_traffic/<version>` User-Agent
///
/// The client is cheap to clone and shares its connection pool, so one
/// instance serves every concurrent domain.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(provider: &ProviderConfig) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(provider.timeout())
        .user_agent(DEFAULT_USER_AGENT)
        .build()?;
    Ok(client)
}
