//! Cross-cutting helpers: case-insensitive matching and money rounding.
//!
//! All name/brand comparisons in the crate go through these so the
//! normalization rule lives in one place.

/// Case-insensitive product-name equality, normalized by lowercasing.
pub fn name_matches(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Brand filter match: an absent or empty filter matches any brand.
pub fn brand_matches(filter: Option<&str>, brand: &str) -> bool {
    match filter {
        None => true,
        Some(f) if f.is_empty() => true,
        Some(f) => f.to_lowercase() == brand.to_lowercase(),
    }
}

/// Rounds a monetary value to two decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
