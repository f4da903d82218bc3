//! Remote provider fetcher.
//!
//! Requests `{base_url}/{domain}/overview` with the API key as a query
//! parameter, retrying failed attempts with exponential backoff. A failed
//! attempt is a transport error, a non-2xx status, or a 2xx body that is not
//! JSON.

mod credential;
mod transport;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use log::{debug, warn};
use serde_json::Value;

use crate::config::{ProviderConfig, ERROR_BODY_PREVIEW_CHARS};
use crate::error_handling::{get_retry_strategy, FetchError, TransportError};

pub use credential::Credential;
pub use transport::{ReqwestTransport, Transport, TransportResponse};

/// Outcome of one failed attempt.
#[derive(Debug)]
enum AttemptFailure {
    Status(u16),
    Transport,
}

/// Last failure details carried across attempts.
#[derive(Debug, Default)]
struct FailureLog {
    last_status: Option<u16>,
    last_transport: Option<TransportError>,
}

/// Fetches raw provider payloads for canonical domains.
#[derive(Debug)]
pub struct RemoteFetcher<T = ReqwestTransport> {
    transport: T,
    base_url: String,
    credential: Credential,
    max_retries: usize,
    backoff_factor_seconds: f64,
}

impl<T: Transport> RemoteFetcher<T> {
    /// Builds a fetcher from provider settings.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::CredentialUnavailable` when no credential is
    /// given, so no request is ever attempted without a key.
    pub fn new(
        transport: T,
        provider: &ProviderConfig,
        credential: Option<Credential>,
    ) -> Result<Self, FetchError> {
        let credential = credential.ok_or_else(|| FetchError::CredentialUnavailable {
            env_var: provider.api_key_env_var.clone(),
        })?;
        Ok(Self {
            transport,
            base_url: provider.base_url.trim_end_matches('/').to_string(),
            credential,
            max_retries: provider.max_retries.max(1),
            backoff_factor_seconds: provider.backoff_factor_seconds,
        })
    }

    /// Endpoint URL for `domain`, without the query string.
    pub fn overview_url(&self, domain: &str) -> String {
        format!("{}/{}/overview", self.base_url, domain)
    }

    pub fn max_retries(&self) -> usize {
        self.max_retries
    }

    /// Fetches the provider's overview payload for a canonical domain.
    ///
    /// Makes up to `max_retries` attempts and sleeps `backoff * 2^(n-1)`
    /// seconds after failed attempt `n` when another attempt remains.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::FetchFailed` once every attempt has failed. It
    /// carries the last non-2xx status and the last transport error seen.
    pub async fn fetch(&self, domain: &str) -> Result<Value, FetchError> {
        let url = self.overview_url(domain);
        let query = [("api_key", self.credential.expose()), ("format", "json")];
        let attempts = Arc::new(AtomicUsize::new(0));
        let failures = Arc::new(Mutex::new(FailureLog::default()));
        let retry_strategy = get_retry_strategy(self.backoff_factor_seconds, self.max_retries);

        let result = tokio_retry::Retry::start(retry_strategy, {
            let attempts = Arc::clone(&attempts);
            let failures = Arc::clone(&failures);
            let url = url.as_str();
            let query = &query;
            move || {
                let attempt = attempts.fetch_add(1, Ordering::SeqCst) + 1;
                let failures = Arc::clone(&failures);
                async move {
                    let outcome = self.attempt(url, query).await;
                    match outcome {
                        Ok(body) => {
                            debug!("Fetched {domain} on attempt {attempt}");
                            Ok(body)
                        }
                        Err(Ok(response)) => {
                            warn!(
                                "Non-success status {} for {} (attempt {}/{}): {}",
                                response.status,
                                domain,
                                attempt,
                                self.max_retries,
                                body_preview(&response.body)
                            );
                            if let Ok(mut log) = failures.lock() {
                                log.last_status = Some(response.status);
                            }
                            Err(AttemptFailure::Status(response.status))
                        }
                        Err(Err(error)) => {
                            warn!(
                                "Request error for {} (attempt {}/{}): {}",
                                domain, attempt, self.max_retries, error
                            );
                            if let Ok(mut log) = failures.lock() {
                                log.last_transport = Some(error);
                            }
                            Err(AttemptFailure::Transport)
                        }
                    }
                }
            }
        })
        .await;

        match result {
            Ok(body) => Ok(body),
            Err(last) => {
                match last {
                    AttemptFailure::Status(status) => {
                        debug!("Giving up on {domain}, last attempt returned {status}")
                    }
                    AttemptFailure::Transport => {
                        debug!("Giving up on {domain}, last attempt hit a transport error")
                    }
                }
                let log = match failures.lock() {
                    Ok(mut log) => std::mem::take(&mut *log),
                    Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
                };
                Err(FetchError::FetchFailed {
                    domain: domain.to_string(),
                    attempts: attempts.load(Ordering::SeqCst),
                    last_status: log.last_status,
                    source: log.last_transport,
                })
            }
        }
    }

    /// One request. The outer `Err` holds either the non-2xx response or the
    /// transport error.
    async fn attempt(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, Result<TransportResponse, TransportError>> {
        let response = match self.transport.get(url, query).await {
            Ok(response) => response,
            Err(error) => return Err(Err(error)),
        };
        if !response.is_success() {
            return Err(Ok(response));
        }
        serde_json::from_str(&response.body).map_err(|e| Err(TransportError::from(e)))
    }
}

/// First `ERROR_BODY_PREVIEW_CHARS` characters of a response body.
fn body_preview(body: &str) -> String {
    body.chars().take(ERROR_BODY_PREVIEW_CHARS).collect()
}
