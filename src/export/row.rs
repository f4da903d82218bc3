//! Flat row building shared by the CSV and XLSX exporters.
//!
//! Scalar fields map to one cell each. Nested values (country rank, maps,
//! sequences) are stored as compact JSON strings.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::NormalizedRecord;

/// Column headers, in record field order.
pub const COLUMNS: [&str; 19] = [
    "domain",
    "snapshotDate",
    "title",
    "description",
    "category",
    "screenshot",
    "globalRank",
    "countryRank",
    "categoryRank",
    "estimatedMonthlyVisits",
    "bounceRate",
    "pagesPerVisit",
    "visits",
    "timeOnSite",
    "topCountryShares",
    "trafficSources",
    "topKeywords",
    "isDataFromGA",
    "competitors",
];

/// One cell of a flattened record.
#[derive(Debug, Clone, PartialEq)]
pub enum FlatCell {
    Text(String),
    Integer(i64),
    Bool(bool),
}

impl FlatCell {
    /// Text rendering used by the CSV exporter.
    pub fn render(&self) -> String {
        match self {
            FlatCell::Text(s) => s.clone(),
            FlatCell::Integer(n) => n.to_string(),
            FlatCell::Bool(b) => b.to_string(),
        }
    }
}

fn text(value: &str) -> FlatCell {
    FlatCell::Text(value.to_string())
}

fn compact<T: Serialize + ?Sized>(value: &T) -> Result<FlatCell> {
    serde_json::to_string(value)
        .map(FlatCell::Text)
        .context("Failed to serialize nested field")
}

/// Flattens a record into cells aligned with `COLUMNS`.
pub fn flatten_record(record: &NormalizedRecord) -> Result<Vec<FlatCell>> {
    Ok(vec![
        text(&record.domain),
        text(&record.snapshot_date),
        text(&record.title),
        text(&record.description),
        text(&record.category),
        text(&record.screenshot),
        FlatCell::Integer(record.global_rank),
        compact(&record.country_rank)?,
        text(&record.category_rank),
        compact(&record.estimated_monthly_visits)?,
        text(&record.bounce_rate),
        text(&record.pages_per_visit),
        text(&record.visits),
        text(&record.time_on_site),
        compact(&record.top_country_shares)?,
        compact(&record.traffic_sources)?,
        compact(&record.top_keywords)?,
        FlatCell::Bool(record.is_data_from_ga),
        compact(&record.competitors)?,
    ])
}
