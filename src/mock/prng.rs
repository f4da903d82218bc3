//! Seed derivation and the linear congruential generator behind mock profiles.

use sha2::{Digest, Sha256};

const LCG_MULTIPLIER: u64 = 1_664_525;
const LCG_INCREMENT: u64 = 1_013_904_223;
const LCG_MODULUS_MASK: u64 = 0xFFFF_FFFF;

/// Golden-ratio spread between per-field seeds. Adjacent raw seeds would map
/// to almost identical draws because one LCG step is nearly linear.
const FIELD_SPREAD: u64 = 0x9E37_79B9;

/// Derives the 48-bit profile seed of a canonical domain.
///
/// SHA-256 of the UTF-8 bytes, first 12 hex digits read as a big-endian integer.
pub fn seed_from_domain(domain: &str) -> u64 {
    let digest = Sha256::digest(domain.as_bytes());
    let hex_digest = hex::encode(digest);
    // 12 hex digits always fit in a u64
    u64::from_str_radix(&hex_digest[..12], 16).unwrap_or_default()
}

/// Seed for one metric of a profile.
pub fn field_seed(seed: u64, field: u64) -> u64 {
    seed.wrapping_add(field.wrapping_mul(FIELD_SPREAD))
}

/// One LCG step: `(1664525 * seed + 1013904223) mod 2^32`.
///
/// Wrapping u64 arithmetic is exact here because 2^32 divides 2^64.
pub fn lcg_next(seed: u64) -> u64 {
    seed.wrapping_mul(LCG_MULTIPLIER)
        .wrapping_add(LCG_INCREMENT)
        & LCG_MODULUS_MASK
}

/// Deterministic float in `[minimum, maximum)` for `seed`.
pub fn pseudo_random_float(seed: u64, minimum: f64, maximum: f64) -> f64 {
    // lcg_next is below 2^32, so the conversion is exact
    #[allow(clippy::cast_precision_loss)]
    let fraction = lcg_next(seed) as f64 / (LCG_MODULUS_MASK as f64 + 1.0);
    minimum + (maximum - minimum) * fraction
}

/// Deterministic integer in `[minimum, maximum)` for `seed`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn pseudo_random_int(seed: u64, minimum: i64, maximum: i64) -> i64 {
    pseudo_random_float(seed, minimum as f64, maximum as f64).floor() as i64
}

/// Deterministic index into a slice of length `len` (`len > 0`).
#[allow(clippy::cast_possible_truncation)]
pub fn pseudo_random_index(seed: u64, len: usize) -> usize {
    (lcg_next(seed) % len.max(1) as u64) as usize
}
