//! `MockProfile` → `NormalizedRecord`.

use super::{format_fixed, snapshot_timestamp};
use crate::mock::MockProfile;
use crate::models::NormalizedRecord;

/// Maps a mock profile into the canonical schema.
///
/// Total and pure apart from the snapshot timestamp. Mock data never comes
/// from Google Analytics, so `is_data_from_ga` is always false.
pub fn normalize_mock(profile: MockProfile) -> NormalizedRecord {
    NormalizedRecord {
        domain: profile.domain,
        snapshot_date: snapshot_timestamp(),
        title: profile.title,
        description: profile.description,
        category: profile.category,
        screenshot: profile.screenshot,
        global_rank: profile.global_rank,
        country_rank: profile.country_rank,
        category_rank: profile.category_rank.to_string(),
        estimated_monthly_visits: profile.estimated_monthly_visits,
        bounce_rate: format_fixed(profile.bounce_rate, 4),
        pages_per_visit: format_fixed(profile.pages_per_visit, 2),
        visits: profile.visits.to_string(),
        time_on_site: format_fixed(profile.time_on_site, 2),
        top_country_shares: profile.top_country_shares,
        traffic_sources: profile.traffic_sources,
        top_keywords: profile.top_keywords,
        is_data_from_ga: false,
        competitors: profile.competitors,
    }
}
