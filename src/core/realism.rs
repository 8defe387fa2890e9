//! Advisory bands for "typical" investment scenarios.
//!
//! These are deliberately narrower than the acceptance ranges in
//! [`super::validation`]; a value can pass validation and still be flagged.

use std::ops::RangeInclusive;

use super::types::Quantity;

pub const REALISTIC_CAGR: RangeInclusive<f64> = -50.0..=100.0;
pub const REALISTIC_MULTIPLIER: RangeInclusive<f64> = 0.1..=100.0;
pub const REALISTIC_YEARS: RangeInclusive<f64> = 1.0..=50.0;

pub const UNREALISTIC_WARNING: &str = "This result may be outside typical investment scenarios.";

pub fn realistic_band(kind: Quantity) -> RangeInclusive<f64> {
    match kind {
        Quantity::Cagr => REALISTIC_CAGR,
        Quantity::Multiplier => REALISTIC_MULTIPLIER,
        Quantity::Years => REALISTIC_YEARS,
    }
}

/// CAGR is in percent.
pub fn is_realistic(value: f64, kind: Quantity) -> bool {
    realistic_band(kind).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges_are_inclusive() {
        assert!(is_realistic(-50.0, Quantity::Cagr));
        assert!(is_realistic(100.0, Quantity::Cagr));
        assert!(is_realistic(0.1, Quantity::Multiplier));
        assert!(is_realistic(100.0, Quantity::Multiplier));
        assert!(is_realistic(1.0, Quantity::Years));
        assert!(is_realistic(50.0, Quantity::Years));
    }

    #[test]
    fn valid_but_unrealistic_values_are_flagged() {
        assert!(!is_realistic(250.0, Quantity::Cagr));
        assert!(!is_realistic(-75.0, Quantity::Cagr));
        assert!(!is_realistic(500.0, Quantity::Multiplier));
        assert!(!is_realistic(0.05, Quantity::Multiplier));
        assert!(!is_realistic(120.0, Quantity::Years));
        assert!(!is_realistic(0.5, Quantity::Years));
    }

    #[test]
    fn nan_is_never_realistic() {
        assert!(!is_realistic(f64::NAN, Quantity::Years));
    }
}
