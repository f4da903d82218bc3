//! Configuration constants.
//!
//! Defaults for the provider endpoint, request policy, and run plumbing.
//! Every value here can be overridden by the settings file or the CLI.

/// Default provider endpoint. Requests go to `{base}/{domain}/overview`.
pub const DEFAULT_BASE_URL: &str = "https://api.similarweb.com/v1/website";

/// Environment variable holding the provider API key.
pub const DEFAULT_API_KEY_ENV_VAR: &str = "SIMILARWEB_API_KEY";

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Total attempts per remote fetch (initial attempt included)
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Base backoff in seconds; the delay after attempt `n` is `factor * 2^(n-1)`.
pub const DEFAULT_BACKOFF_FACTOR_SECS: f64 = 0.5;

/// Domains processed concurrently during a run
pub const DEFAULT_MAX_CONCURRENCY: usize = 4;

/// Settings file read when `--config` is not given
pub const DEFAULT_SETTINGS_PATH: &str = "config/settings.json";

/// Input CSV read when neither settings nor CLI name one
pub const DEFAULT_INPUT_PATH: &str = "data/inputs.sample.csv";

/// Output path used when neither settings nor CLI name one
pub const DEFAULT_OUTPUT_PATH: &str = "data/sample_output.json";

/// Characters of a non-2xx response body included in the warning log
pub const ERROR_BODY_PREVIEW_CHARS: usize = 300;

/// Log a progress line every N completed domains
pub const LOGGING_INTERVAL: usize = 25;

/// User-Agent sent with provider requests.
pub const DEFAULT_USER_AGENT: &str = concat!("domain_traffic/", env!("CARGO_PKG_VERSION"));
