//! Estimated monthly visits history for mock profiles.

use std::collections::BTreeMap;

use chrono::{Datelike, Months, NaiveDate};

use super::prng::{field_seed, pseudo_random_float};

/// Months of history in a mock profile.
pub const HISTORY_MONTHS: u32 = 3;

/// Floor applied to every month's visit count.
pub const MIN_MONTHLY_VISITS: i64 = 1000;

/// Seed field offset for the month-over-month decay draws.
const DECAY_FIELD: u64 = 100;

/// First day of the `HISTORY_MONTHS` most recent calendar months, oldest first.
///
/// `today`'s month is the newest entry.
pub fn recent_month_starts(today: NaiveDate) -> Vec<NaiveDate> {
    let current = today.with_day(1).unwrap_or(today);
    (0..HISTORY_MONTHS)
        .rev()
        .filter_map(|back| current.checked_sub_months(Months::new(back)))
        .collect()
}

/// Builds the `YYYY-MM-01 → visits` history ending at `base` visits.
///
/// The newest month gets `base`; each step back multiplies by a seeded decay
/// in `[0.80, 0.98)`, so visits generally grow toward the present. Every
/// value is floored at [`MIN_MONTHLY_VISITS`].
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn build_estimated_visits(seed: u64, base: i64, today: NaiveDate) -> BTreeMap<String, i64> {
    let months = recent_month_starts(today);
    let mut visits = BTreeMap::new();
    let mut current = base as f64;

    for (step, month) in (0u64..).zip(months.iter().rev()) {
        let key = month.format("%Y-%m-01").to_string();
        visits.insert(key, (current as i64).max(MIN_MONTHLY_VISITS));
        current *= pseudo_random_float(field_seed(seed, DECAY_FIELD + step), 0.80, 0.98);
    }

    visits
}
