//! Output record types.
//!
//! `NormalizedRecord` is the single schema produced for every successfully
//! processed domain, whether the data came from the mock generator or the
//! provider API. Field names serialize in camelCase.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Rank of a domain within its top country.
///
/// Both sources emit this structured form. A missing country is an empty
/// name and code with rank 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRank {
    pub country: String,
    pub country_code: String,
    pub rank: i64,
}

/// Share of traffic coming from one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryShare {
    pub country_code: String,
    pub value: f64,
}

/// A search keyword driving traffic to the domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub name: String,
    pub value: i64,
    pub cpc: f64,
}

/// Normalized analytics snapshot for one domain.
///
/// Constructed once per fetch and never mutated afterwards. Rates and counts
/// that the provider reports as numbers are rendered as fixed-precision
/// strings (`bounce_rate` to 4 places, `pages_per_visit` and `time_on_site`
/// to 2, `visits` and `category_rank` as integers).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecord {
    /// Canonical domain
    pub domain: String,
    /// UTC time the record was normalized, RFC 3339 with second precision
    pub snapshot_date: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub screenshot: String,
    pub global_rank: i64,
    pub country_rank: CountryRank,
    pub category_rank: String,
    /// `YYYY-MM-01` → visits; keys sort chronologically
    pub estimated_monthly_visits: BTreeMap<String, i64>,
    pub bounce_rate: String,
    pub pages_per_visit: String,
    pub visits: String,
    pub time_on_site: String,
    pub top_country_shares: Vec<CountryShare>,
    pub traffic_sources: BTreeMap<String, f64>,
    pub top_keywords: Vec<Keyword>,
    #[serde(rename = "isDataFromGA")]
    pub is_data_from_ga: bool,
    pub competitors: Vec<String>,
}

/// Fully populated record for unit tests.
#[cfg(test)]
pub(crate) fn sample_record() -> NormalizedRecord {
    NormalizedRecord {
        domain: "example.com".into(),
        snapshot_date: "2026-10-19T08:00:00+00:00".into(),
        title: "Example".into(),
        description: String::new(),
        category: "news".into(),
        screenshot: String::new(),
        global_rank: 42,
        country_rank: CountryRank {
            country: "United States".into(),
            country_code: "US".into(),
            rank: 7,
        },
        category_rank: "3".into(),
        estimated_monthly_visits: BTreeMap::from([("2026-10-01".to_string(), 1200)]),
        bounce_rate: "0.4500".into(),
        pages_per_visit: "3.10".into(),
        visits: "1200".into(),
        time_on_site: "95.00".into(),
        top_country_shares: vec![CountryShare {
            country_code: "US".into(),
            value: 0.6,
        }],
        traffic_sources: BTreeMap::from([("Search".to_string(), 0.5)]),
        top_keywords: vec![Keyword {
            name: "example".into(),
            value: 900,
            cpc: 1.25,
        }],
        is_data_from_ga: false,
        competitors: vec!["example.org".into()],
    }
}
