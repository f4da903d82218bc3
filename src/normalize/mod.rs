//! Response normalization.
//!
//! Two entry points share one output shape: `normalize_mock` for generated
//! profiles and `normalize_remote` for provider payloads. `normalize_payload`
//! dispatches on the source tag.

mod mock;
pub mod path;
mod remote;

use chrono::{SecondsFormat, Utc};

use crate::models::NormalizedRecord;
use crate::source::RawPayload;

pub use mock::normalize_mock;
pub use remote::{normalize_remote, title_case};

/// Maps a raw payload from either source into a `NormalizedRecord`.
pub fn normalize_payload(payload: RawPayload) -> NormalizedRecord {
    match payload {
        RawPayload::Mock(profile) => normalize_mock(profile),
        RawPayload::Remote { domain, body } => normalize_remote(&domain, &body),
    }
}

/// Current UTC time, RFC 3339 with second precision (`2026-10-19T08:30:00+00:00`).
pub fn snapshot_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, false)
}

fn format_fixed(value: f64, places: usize) -> String {
    format!("{value:.places$}")
}
