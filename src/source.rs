//! Data source selection and the "get normalized record" entry point.

use log::{debug, warn};
use serde_json::Value;

use crate::config::Config;
use crate::domain::canonical_domain;
use crate::error_handling::FetchError;
use crate::fetch::{Credential, RemoteFetcher, ReqwestTransport, Transport};
use crate::mock::{generate_profile, MockProfile};
use crate::models::NormalizedRecord;
use crate::normalize::normalize_payload;

/// Raw output of a source, tagged by origin.
#[derive(Debug, Clone)]
pub enum RawPayload {
    Mock(MockProfile),
    Remote { domain: String, body: Value },
}

/// Deterministic generator, no I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSource;

impl MockSource {
    pub fn fetch_raw(&self, domain: &str) -> RawPayload {
        RawPayload::Mock(generate_profile(domain))
    }
}

/// Live provider API.
#[derive(Debug)]
pub struct RemoteSource<T = ReqwestTransport> {
    fetcher: RemoteFetcher<T>,
}

impl<T: Transport> RemoteSource<T> {
    pub fn new(fetcher: RemoteFetcher<T>) -> Self {
        Self { fetcher }
    }

    pub async fn fetch_raw(&self, domain: &str) -> Result<RawPayload, FetchError> {
        let body = self.fetcher.fetch(domain).await?;
        Ok(RawPayload::Remote {
            domain: domain.to_string(),
            body,
        })
    }
}

/// Where records come from for a run.
#[derive(Debug)]
pub enum DataSource<T = ReqwestTransport> {
    Mock(MockSource),
    Remote(RemoteSource<T>),
}

impl DataSource<ReqwestTransport> {
    /// Selects the source for a run.
    ///
    /// Mock mode is used when requested, or when remote mode is requested
    /// but the API key variable is unset or empty. The fallback is logged at
    /// warning level.
    pub fn from_config(config: &Config, client: reqwest::Client) -> Self {
        if config.use_mock_data {
            debug!("Mock mode enabled; no provider requests will be made");
            return DataSource::Mock(MockSource);
        }
        let credential = Credential::from_env(&config.provider.api_key_env_var);
        Self::remote_or_mock(ReqwestTransport::new(client), config, credential)
    }
}

impl<T: Transport> DataSource<T> {
    /// Remote source over `transport`, or mock when `credential` is absent.
    pub fn remote_or_mock(transport: T, config: &Config, credential: Option<Credential>) -> Self {
        match RemoteFetcher::new(transport, &config.provider, credential) {
            Ok(fetcher) => DataSource::Remote(RemoteSource::new(fetcher)),
            Err(e) => {
                warn!("{e}; falling back to mock data");
                DataSource::Mock(MockSource)
            }
        }
    }

    pub fn is_mock(&self) -> bool {
        matches!(self, DataSource::Mock(_))
    }

    /// Fetches the raw payload for a canonical domain.
    pub async fn fetch_raw(&self, domain: &str) -> Result<RawPayload, FetchError> {
        match self {
            DataSource::Mock(source) => Ok(source.fetch_raw(domain)),
            DataSource::Remote(source) => source.fetch_raw(domain).await,
        }
    }
}

/// Canonicalizes `raw_domain`, fetches it from `source`, and normalizes the
/// payload.
///
/// # Errors
///
/// `FetchError::InvalidDomain` when the input normalizes to nothing (no
/// request is made), or the fetcher's error when every attempt fails.
pub async fn get_normalized_record<T: Transport>(
    source: &DataSource<T>,
    raw_domain: &str,
) -> Result<NormalizedRecord, FetchError> {
    let domain = canonical_domain(raw_domain)?;
    let payload = source.fetch_raw(&domain).await?;
    Ok(normalize_payload(payload))
}
