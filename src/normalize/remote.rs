//! Provider payload → `NormalizedRecord`.
//!
//! The provider gives no shape guarantees, so every field is looked up by
//! dotted path and defaulted when missing or malformed. This mapping never
//! fails.

use std::collections::BTreeMap;

use serde_json::Value;

use super::path::{
    array_at, as_number, bool_at, coerce_f64, f64_at, i64_at, lookup, object_at, str_at,
};
use super::{format_fixed, snapshot_timestamp};
use crate::models::{CountryRank, CountryShare, Keyword, NormalizedRecord};

/// Maps a raw provider payload for `domain` into the canonical schema.
pub fn normalize_remote(domain: &str, payload: &Value) -> NormalizedRecord {
    let record = NormalizedRecord {
        domain: domain.to_string(),
        snapshot_date: snapshot_timestamp(),
        title: first_str(payload, &["overview.title", "meta.title"]),
        description: first_str(payload, &["overview.description", "meta.description"]),
        category: first_str(payload, &["classification.category"]),
        screenshot: first_str(payload, &["meta.screenshot_url"]),
        global_rank: i64_at(payload, "ranking.global.rank").unwrap_or(0),
        country_rank: country_rank(payload),
        category_rank: category_rank(payload),
        estimated_monthly_visits: estimated_monthly_visits(payload),
        bounce_rate: format_fixed(f64_at(payload, "engagement.bounce_rate").unwrap_or(0.0), 4),
        pages_per_visit: format_fixed(
            f64_at(payload, "engagement.pages_per_visit").unwrap_or(0.0),
            2,
        ),
        visits: i64_at(payload, "engagement.visits").unwrap_or(0).to_string(),
        time_on_site: format_fixed(f64_at(payload, "engagement.time_on_site").unwrap_or(0.0), 2),
        top_country_shares: top_country_shares(payload),
        traffic_sources: traffic_sources(payload),
        top_keywords: top_keywords(payload),
        is_data_from_ga: bool_at(payload, "meta.is_from_ga").unwrap_or(false),
        competitors: competitors(payload),
    };

    log::debug!(
        "Normalized provider response for {}: {} keyword(s), {} country share(s)",
        domain,
        record.top_keywords.len(),
        record.top_country_shares.len()
    );
    record
}

/// First non-empty string among `paths`, else `""`.
fn first_str(payload: &Value, paths: &[&str]) -> String {
    paths
        .iter()
        .find_map(|path| str_at(payload, path))
        .unwrap_or_default()
        .to_string()
}

fn country_rank(payload: &Value) -> CountryRank {
    CountryRank {
        country: first_str(payload, &["ranking.country.name"]),
        country_code: first_str(payload, &["ranking.country.code"]),
        rank: i64_at(payload, "ranking.country.rank").unwrap_or(0),
    }
}

/// Category rank as a decimal string; `""` when absent.
fn category_rank(payload: &Value) -> String {
    match lookup(payload, "ranking.category.rank") {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(value) => i64_at(payload, "ranking.category.rank")
            .filter(|_| value.is_number())
            .map(|rank| rank.to_string())
            .unwrap_or_default(),
        None => String::new(),
    }
}

/// `traffic.estimated_monthly_visits`, numeric entries only, values truncated.
#[allow(clippy::cast_possible_truncation)]
fn estimated_monthly_visits(payload: &Value) -> BTreeMap<String, i64> {
    let Some(entries) = object_at(payload, "traffic.estimated_monthly_visits") else {
        return BTreeMap::new();
    };
    entries
        .iter()
        .filter_map(|(month, visits)| {
            let visits = visits
                .as_i64()
                .or_else(|| as_number(visits).map(|v| v.trunc() as i64))?;
            Some((month.clone(), visits))
        })
        .collect()
}

/// `audience.top_countries`, entries with a country code and a numeric share.
fn top_country_shares(payload: &Value) -> Vec<CountryShare> {
    array_at(payload, "audience.top_countries")
        .map(|countries| {
            countries
                .iter()
                .filter_map(|entry| {
                    let code = entry
                        .get("country_code")
                        .and_then(Value::as_str)
                        .filter(|code| !code.is_empty())?;
                    let share = entry.get("share").and_then(as_number)?;
                    Some(CountryShare {
                        country_code: code.to_string(),
                        value: share,
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

/// `traffic.sources`, numeric shares only, channel names title-cased.
fn traffic_sources(payload: &Value) -> BTreeMap<String, f64> {
    let Some(sources) = object_at(payload, "traffic.sources") else {
        return BTreeMap::new();
    };
    sources
        .iter()
        .filter_map(|(channel, share)| Some((title_case(channel), as_number(share)?)))
        .collect()
}

/// `traffic.top_keywords`. Name from `keyword` or `name`, value from
/// `visits` or `value`; entries missing either are dropped.
#[allow(clippy::cast_possible_truncation)]
fn top_keywords(payload: &Value) -> Vec<Keyword> {
    array_at(payload, "traffic.top_keywords")
        .map(|keywords| {
            keywords
                .iter()
                .filter_map(|entry| {
                    let name = ["keyword", "name"].iter().find_map(|key| {
                        entry
                            .get(*key)
                            .and_then(Value::as_str)
                            .filter(|name| !name.is_empty())
                    })?;
                    let value = ["visits", "value"]
                        .iter()
                        .find_map(|key| entry.get(*key).and_then(as_number))?;
                    let cpc = entry.get("cpc").and_then(coerce_f64).unwrap_or(0.0);
                    Some(Keyword {
                        name: name.to_string(),
                        value: value.trunc() as i64,
                        cpc,
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

/// `competition.competitors`, string entries only.
fn competitors(payload: &Value) -> Vec<String> {
    array_at(payload, "competition.competitors")
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest
/// (`"paid_search"` → `"Paid_Search"`).
pub fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut previous_is_letter = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                output.extend(c.to_lowercase());
            } else {
                output.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            output.push(c);
            previous_is_letter = false;
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> Value {
        json!({
            "overview": {"title": "Example Domain", "description": ""},
            "meta": {
                "title": "ignored",
                "description": "Illustrative examples",
                "screenshot_url": "https://img.example/shot.png",
                "is_from_ga": true
            },
            "classification": {"category": "Reference"},
            "ranking": {
                "global": {"rank": 1500},
                "country": {"name": "United States", "code": "US", "rank": 320},
                "category": {"rank": 12}
            },
            "engagement": {
                "bounce_rate": 0.51234,
                "pages_per_visit": 2.456,
                "visits": 987654.7,
                "time_on_site": 123.4
            },
            "traffic": {
                "estimated_monthly_visits": {"2026-08-01": 1000, "2026-09-01": 2000.9, "2026-10-01": "n/a"},
                "sources": {"search": 0.5, "direct": 0.3, "paid_social": 0.1, "not_a_number": "x"},
                "top_keywords": [
                    {"keyword": "example", "visits": 500, "cpc": 1.5},
                    {"name": "example domain", "value": 200},
                    {"keyword": "", "name": "fallback", "visits": 10, "cpc": "0.25"},
                    {"keyword": "no value"},
                    {"visits": 50},
                    "not an object"
                ]
            },
            "audience": {
                "top_countries": [
                    {"country_code": "US", "share": 0.6},
                    {"country_code": "", "share": 0.2},
                    {"country_code": "DE", "share": "0.1"},
                    {"country_code": "FR", "share": 0.05}
                ]
            },
            "competition": {"competitors": ["example.org", 7, "example.net"]}
        })
    }

    #[test]
    fn test_full_payload_mapping() {
        let record = normalize_remote("example.com", &full_payload());

        assert_eq!(record.domain, "example.com");
        assert_eq!(record.title, "Example Domain");
        // empty overview.description falls through to meta.description
        assert_eq!(record.description, "Illustrative examples");
        assert_eq!(record.category, "Reference");
        assert_eq!(record.screenshot, "https://img.example/shot.png");
        assert_eq!(record.global_rank, 1500);
        assert_eq!(
            record.country_rank,
            CountryRank {
                country: "United States".into(),
                country_code: "US".into(),
                rank: 320
            }
        );
        assert_eq!(record.category_rank, "12");
        assert_eq!(record.bounce_rate, "0.5123");
        assert_eq!(record.pages_per_visit, "2.46");
        assert_eq!(record.visits, "987654");
        assert_eq!(record.time_on_site, "123.40");
        assert!(record.is_data_from_ga);
        assert_eq!(record.competitors, vec!["example.org", "example.net"]);
    }

    #[test]
    fn test_estimated_visits_numeric_only() {
        let record = normalize_remote("example.com", &full_payload());
        assert_eq!(
            record.estimated_monthly_visits,
            BTreeMap::from([
                ("2026-08-01".to_string(), 1000),
                ("2026-09-01".to_string(), 2000),
            ])
        );
    }

    #[test]
    fn test_top_countries_filtering() {
        let record = normalize_remote("example.com", &full_payload());
        let codes: Vec<&str> = record
            .top_country_shares
            .iter()
            .map(|c| c.country_code.as_str())
            .collect();
        assert_eq!(codes, vec!["US", "FR"]);
        assert!((record.top_country_shares[0].value - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_top_countries() {
        let payload = json!({"audience": {}});
        assert!(normalize_remote("example.com", &payload)
            .top_country_shares
            .is_empty());
        assert!(normalize_remote("example.com", &json!({}))
            .top_country_shares
            .is_empty());
    }

    #[test]
    fn test_traffic_sources_numeric_and_title_cased() {
        let payload = json!({"traffic": {"sources": {"search": 0.5, "not_a_number": "x"}}});
        let record = normalize_remote("example.com", &payload);
        assert_eq!(
            record.traffic_sources,
            BTreeMap::from([("Search".to_string(), 0.5)])
        );

        let record = normalize_remote("example.com", &full_payload());
        assert!(record.traffic_sources.contains_key("Paid_Social"));
        assert_eq!(record.traffic_sources.len(), 3);
    }

    #[test]
    fn test_keywords_fallbacks_and_drops() {
        let record = normalize_remote("example.com", &full_payload());
        assert_eq!(
            record.top_keywords,
            vec![
                Keyword {
                    name: "example".into(),
                    value: 500,
                    cpc: 1.5
                },
                Keyword {
                    name: "example domain".into(),
                    value: 200,
                    cpc: 0.0
                },
                Keyword {
                    name: "fallback".into(),
                    value: 10,
                    cpc: 0.25
                },
            ]
        );
    }

    #[test]
    fn test_empty_payload_defaults() {
        let record = normalize_remote("example.com", &json!({}));
        assert_eq!(record.title, "");
        assert_eq!(record.description, "");
        assert_eq!(record.category, "");
        assert_eq!(record.screenshot, "");
        assert_eq!(record.global_rank, 0);
        assert_eq!(record.country_rank, CountryRank::default());
        assert_eq!(record.category_rank, "");
        assert!(record.estimated_monthly_visits.is_empty());
        assert_eq!(record.bounce_rate, "0.0000");
        assert_eq!(record.pages_per_visit, "0.00");
        assert_eq!(record.visits, "0");
        assert_eq!(record.time_on_site, "0.00");
        assert!(record.traffic_sources.is_empty());
        assert!(record.top_keywords.is_empty());
        assert!(!record.is_data_from_ga);
        assert!(record.competitors.is_empty());
    }

    #[test]
    fn test_wrongly_typed_containers_default() {
        let payload = json!({
            "traffic": {"sources": [0.5], "estimated_monthly_visits": "lots", "top_keywords": {"a": 1}},
            "audience": {"top_countries": "US"},
            "ranking": {"global": "first", "country": 3},
            "competition": {"competitors": "example.org"}
        });
        let record = normalize_remote("example.com", &payload);
        assert!(record.traffic_sources.is_empty());
        assert!(record.estimated_monthly_visits.is_empty());
        assert!(record.top_keywords.is_empty());
        assert!(record.top_country_shares.is_empty());
        assert_eq!(record.global_rank, 0);
        assert_eq!(record.country_rank, CountryRank::default());
        assert!(record.competitors.is_empty());
    }

    #[test]
    fn test_non_object_payload() {
        let record = normalize_remote("example.com", &json!(["unexpected"]));
        assert_eq!(record.domain, "example.com");
        assert_eq!(record.visits, "0");
    }

    #[test]
    fn test_category_rank_string_passthrough() {
        let payload = json!({"ranking": {"category": {"rank": " 44 "}}});
        assert_eq!(normalize_remote("example.com", &payload).category_rank, "44");
        let payload = json!({"ranking": {"category": {"rank": 9.7}}});
        assert_eq!(normalize_remote("example.com", &payload).category_rank, "9");
        let payload = json!({"ranking": {"category": {"rank": true}}});
        assert_eq!(normalize_remote("example.com", &payload).category_rank, "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("search"), "Search");
        assert_eq!(title_case("paid_search"), "Paid_Search");
        assert_eq!(title_case("SOCIAL media"), "Social Media");
        assert_eq!(title_case("3d views"), "3D Views");
        assert_eq!(title_case(""), "");
    }
}
