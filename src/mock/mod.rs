//! Deterministic synthetic analytics profiles.
//!
//! A profile is derived entirely from the canonical domain (through a
//! SHA-256 seed) and the current calendar month (which anchors the visits
//! history). No I/O happens here, so the same domain yields the same profile
//! for the whole month.

mod history;
mod prng;

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};

use crate::domain::domain_stem;
use crate::models::{CountryRank, CountryShare, Keyword};

pub use history::{build_estimated_visits, recent_month_starts, MIN_MONTHLY_VISITS};
pub use prng::{pseudo_random_float, seed_from_domain};

use prng::{field_seed, pseudo_random_index, pseudo_random_int};

/// Countries a mock profile draws its audience from.
const COUNTRIES: &[(&str, &str)] = &[
    ("US", "United States"),
    ("GB", "United Kingdom"),
    ("DE", "Germany"),
    ("IN", "India"),
    ("FR", "France"),
    ("CA", "Canada"),
    ("BR", "Brazil"),
    ("JP", "Japan"),
    ("AU", "Australia"),
    ("ES", "Spain"),
];

const TOP_COUNTRY_COUNT: usize = 5;

const TRAFFIC_CHANNELS: &[&str] = &["direct", "search", "social", "referral", "mail"];

const CATEGORIES: &[&str] = &[
    "Computers Electronics and Technology",
    "News and Media",
    "E-commerce and Shopping",
    "Finance",
    "Travel and Tourism",
    "Arts and Entertainment",
    "Games",
    "Health",
    "Science and Education",
    "Business and Consumer Services",
];

const KEYWORD_SUFFIXES: &[&str] = &["", " login", " app", " reviews", " alternatives"];

const COMPETITOR_PREFIXES: &[&str] = &["get", "try", "my", "go", "the", "use"];
const COMPETITOR_TLDS: &[&str] = &["com", "net", "io", "co", "org"];
const COMPETITOR_COUNT: usize = 4;

// Per-field seed offsets
const GLOBAL_RANK: u64 = 1;
const COUNTRY_RANK: u64 = 2;
const CATEGORY_RANK: u64 = 3;
const BOUNCE_RATE: u64 = 4;
const PAGES_PER_VISIT: u64 = 5;
const VISITS: u64 = 6;
const TIME_ON_SITE: u64 = 7;
const CATEGORY: u64 = 8;
const COUNTRY_START: u64 = 20;
const COUNTRY_SHARE: u64 = 30;
const CHANNEL_WEIGHT: u64 = 40;
const KEYWORD_VISITS: u64 = 50;
const KEYWORD_CPC: u64 = 60;
const COMPETITOR: u64 = 70;

/// Synthetic analytics profile for one domain.
///
/// Built fresh per call and handed straight to the normalizer.
#[derive(Debug, Clone, PartialEq)]
pub struct MockProfile {
    pub domain: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub screenshot: String,
    pub global_rank: i64,
    pub country_rank: CountryRank,
    pub category_rank: i64,
    pub bounce_rate: f64,
    pub pages_per_visit: f64,
    pub visits: i64,
    pub time_on_site: f64,
    pub estimated_monthly_visits: BTreeMap<String, i64>,
    pub top_country_shares: Vec<CountryShare>,
    pub traffic_sources: BTreeMap<String, f64>,
    pub top_keywords: Vec<Keyword>,
    pub competitors: Vec<String>,
}

/// Generates the mock profile of `domain` for the current UTC month.
pub fn generate_profile(domain: &str) -> MockProfile {
    generate_profile_at(domain, Utc::now().date_naive())
}

/// Generates the mock profile of `domain` as of `today`.
///
/// `domain` is expected to be canonical and non-empty; any string is accepted.
pub fn generate_profile_at(domain: &str, today: NaiveDate) -> MockProfile {
    let seed = seed_from_domain(domain);
    let draw = |field: u64, min: f64, max: f64| pseudo_random_float(field_seed(seed, field), min, max);

    let global_rank = pseudo_random_int(field_seed(seed, GLOBAL_RANK), 1_000, 5_000_000);
    let category_rank = pseudo_random_int(field_seed(seed, CATEGORY_RANK), 10, 50_000);
    let visits = pseudo_random_int(field_seed(seed, VISITS), 50_000, 50_000_000);
    let bounce_rate = draw(BOUNCE_RATE, 0.25, 0.85);
    let pages_per_visit = draw(PAGES_PER_VISIT, 1.2, 8.0);
    let time_on_site = draw(TIME_ON_SITE, 30.0, 600.0);

    let top_country_shares = top_country_shares(seed);
    let country_rank = country_rank(seed, top_country_shares.first());

    let category =
        CATEGORIES[pseudo_random_index(field_seed(seed, CATEGORY), CATEGORIES.len())].to_string();
    let stem = domain_stem(domain);

    MockProfile {
        domain: domain.to_string(),
        title: format!("{} | {}", capitalize(stem), category),
        description: format!(
            "{domain} is a {} website with about {visits} monthly visits.",
            category.to_lowercase()
        ),
        screenshot: format!(
            "https://site-images.similarcdn.com/image?url={domain}&t=2&s=1&h={seed:012x}"
        ),
        category,
        global_rank,
        country_rank,
        category_rank,
        bounce_rate,
        pages_per_visit,
        visits,
        time_on_site,
        estimated_monthly_visits: build_estimated_visits(seed, visits, today),
        top_country_shares,
        traffic_sources: traffic_sources(seed),
        top_keywords: top_keywords(seed, stem),
        competitors: competitors(seed, domain, stem),
    }
}

/// Five consecutive countries from the pool, shares shrinking down the list.
fn top_country_shares(seed: u64) -> Vec<CountryShare> {
    let start = pseudo_random_index(field_seed(seed, COUNTRY_START), COUNTRIES.len());
    let mut share = pseudo_random_float(field_seed(seed, COUNTRY_SHARE), 0.25, 0.55);

    (0..TOP_COUNTRY_COUNT)
        .zip(0u64..)
        .map(|(i, step)| {
            let (code, _) = COUNTRIES[(start + i) % COUNTRIES.len()];
            let entry = CountryShare {
                country_code: code.to_string(),
                value: round_to(share, 4),
            };
            share *= pseudo_random_float(field_seed(seed, COUNTRY_SHARE + 1 + step), 0.35, 0.75);
            entry
        })
        .collect()
}

fn country_rank(seed: u64, top: Option<&CountryShare>) -> CountryRank {
    let rank = pseudo_random_int(field_seed(seed, COUNTRY_RANK), 100, 500_000);
    let Some(top) = top else {
        return CountryRank {
            rank,
            ..CountryRank::default()
        };
    };
    let country = COUNTRIES
        .iter()
        .find(|(code, _)| *code == top.country_code)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_default();
    CountryRank {
        country,
        country_code: top.country_code.clone(),
        rank,
    }
}

/// Channel shares, scaled so they sum to roughly one.
fn traffic_sources(seed: u64) -> BTreeMap<String, f64> {
    let weights: Vec<f64> = (0u64..)
        .zip(TRAFFIC_CHANNELS)
        .map(|(i, _)| pseudo_random_float(field_seed(seed, CHANNEL_WEIGHT + i), 0.05, 1.0))
        .collect();
    let total: f64 = weights.iter().sum();

    TRAFFIC_CHANNELS
        .iter()
        .zip(weights)
        .map(|(channel, weight)| ((*channel).to_string(), round_to(weight / total, 4)))
        .collect()
}

/// Keywords built from the domain stem, most visited first.
fn top_keywords(seed: u64, stem: &str) -> Vec<Keyword> {
    let mut keywords: Vec<Keyword> = (0u64..)
        .zip(KEYWORD_SUFFIXES)
        .map(|(i, suffix)| Keyword {
            name: format!("{stem}{suffix}"),
            value: pseudo_random_int(field_seed(seed, KEYWORD_VISITS + i), 100, 100_000),
            cpc: round_to(
                pseudo_random_float(field_seed(seed, KEYWORD_CPC + i), 0.05, 5.0),
                2,
            ),
        })
        .collect();
    keywords.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    keywords
}

/// Up to four look-alike domains, never the domain itself and never repeated.
fn competitors(seed: u64, domain: &str, stem: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::with_capacity(COMPETITOR_COUNT);
    let candidates = COMPETITOR_PREFIXES.len() * COMPETITOR_TLDS.len();

    for attempt in (0u64..).take(candidates) {
        if found.len() == COMPETITOR_COUNT {
            break;
        }
        let pick = pseudo_random_index(field_seed(seed, COMPETITOR + attempt), candidates);
        let prefix = COMPETITOR_PREFIXES[pick % COMPETITOR_PREFIXES.len()];
        let tld = COMPETITOR_TLDS[pick / COMPETITOR_PREFIXES.len()];
        let candidate = format!("{prefix}{stem}.{tld}");
        if candidate != domain && !found.contains(&candidate) {
            found.push(candidate);
        }
    }

    found
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[allow(clippy::cast_possible_wrap)]
fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    fn october() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_profile_is_deterministic_within_month() {
        let a = generate_profile_at("example.com", october());
        let b = generate_profile_at(
            "example.com",
            NaiveDate::from_ymd_opt(2026, 10, 2).unwrap(),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_history_moves_with_month() {
        let october_profile = generate_profile_at("example.com", october());
        let november_profile = generate_profile_at(
            "example.com",
            NaiveDate::from_ymd_opt(2026, 11, 5).unwrap(),
        );
        assert_ne!(
            october_profile.estimated_monthly_visits,
            november_profile.estimated_monthly_visits
        );
        // Everything not anchored to the calendar stays put
        assert_eq!(october_profile.global_rank, november_profile.global_rank);
        assert_eq!(october_profile.competitors, november_profile.competitors);
    }

    #[test]
    fn test_different_domains_differ() {
        let a = generate_profile_at("example.com", october());
        let b = generate_profile_at("example.org", october());
        assert_ne!(a.global_rank, b.global_rank);
    }

    #[test]
    fn test_profile_ranges() {
        for domain in ["example.com", "rust-lang.org", "news.ycombinator.com", "a.io"] {
            let p = generate_profile_at(domain, october());
            assert!((1_000..5_000_000).contains(&p.global_rank));
            assert!((100..500_000).contains(&p.country_rank.rank));
            assert!((10..50_000).contains(&p.category_rank));
            assert!((0.25..0.85).contains(&p.bounce_rate));
            assert!((1.2..8.0).contains(&p.pages_per_visit));
            assert!((30.0..600.0).contains(&p.time_on_site));
            assert!((50_000..50_000_000).contains(&p.visits));
        }
    }

    #[test]
    fn test_history_has_three_months_floored() {
        let p = generate_profile_at("example.com", october());
        assert_eq!(p.estimated_monthly_visits.len(), 3);
        assert!(p
            .estimated_monthly_visits
            .values()
            .all(|&v| v >= MIN_MONTHLY_VISITS));
        assert_eq!(p.estimated_monthly_visits["2026-10-01"], p.visits);
    }

    #[test]
    fn test_top_countries_distinct_and_shrinking() {
        let p = generate_profile_at("example.com", october());
        assert_eq!(p.top_country_shares.len(), TOP_COUNTRY_COUNT);
        let mut codes: Vec<&str> = p
            .top_country_shares
            .iter()
            .map(|c| c.country_code.as_str())
            .collect();
        codes.dedup();
        assert_eq!(codes.len(), TOP_COUNTRY_COUNT);
        for pair in p.top_country_shares.windows(2) {
            assert!(pair[1].value <= pair[0].value);
        }
    }

    #[test]
    fn test_country_rank_uses_top_country() {
        let p = generate_profile_at("example.com", october());
        assert_eq!(
            p.country_rank.country_code,
            p.top_country_shares[0].country_code
        );
        assert!(!p.country_rank.country.is_empty());
    }

    #[test]
    fn test_traffic_sources_plausible() {
        let p = generate_profile_at("example.com", october());
        let keys: Vec<&str> = p.traffic_sources.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["direct", "mail", "referral", "search", "social"]);
        let total: f64 = p.traffic_sources.values().sum();
        assert!((total - 1.0).abs() < 0.01, "total share {total}");
        assert!(p.traffic_sources.values().all(|&v| v > 0.0));
    }

    #[test]
    fn test_keywords_use_stem_and_sorted() {
        let p = generate_profile_at("www.example.com", october());
        assert_eq!(p.top_keywords.len(), KEYWORD_SUFFIXES.len());
        assert!(p.top_keywords.iter().all(|k| k.name.starts_with("example")));
        for pair in p.top_keywords.windows(2) {
            assert!(pair[0].value >= pair[1].value);
        }
        assert!(p.top_keywords.iter().all(|k| (0.05..=5.0).contains(&k.cpc)));
    }

    #[test]
    fn test_competitors_unique_and_exclude_self() {
        for domain in ["example.com", "getexample.com", "x.io"] {
            let p = generate_profile_at(domain, october());
            assert!(!p.competitors.is_empty());
            assert!(p.competitors.len() <= COMPETITOR_COUNT);
            assert!(!p.competitors.iter().any(|c| c == domain));
            let mut sorted = p.competitors.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), p.competitors.len());
        }
    }

    #[test]
    fn test_bare_www_domain_gets_named_fields() {
        let p = generate_profile_at("www.", october());
        assert!(p.title.starts_with("Www | "));
        assert!(p.top_keywords.iter().all(|k| k.name.starts_with("www")));
        assert!(p.competitors.iter().all(|c| c.contains("www.")));
    }

    #[test]
    fn test_descriptive_fields() {
        let p = generate_profile_at("example.com", october());
        assert!(p.title.starts_with("Example | "));
        assert!(CATEGORIES.contains(&p.category.as_str()));
        assert!(p.description.starts_with("example.com is a "));
        assert!(p.screenshot.contains("url=example.com"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("example"), "Example");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_round_to() {
        assert!((round_to(0.123_456, 4) - 0.1235).abs() < 1e-12);
        assert!((round_to(2.005, 0) - 2.0).abs() < 1e-12);
    }
}
