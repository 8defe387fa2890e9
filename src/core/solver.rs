use tracing::debug;

use super::error::{DomainError, SolveError};
use super::format::{format_multiplier, format_percentage, format_years};
use super::formulas::{cagr_from, multiplier_from, years_from};
use super::types::{CalculationResult, KnownPair, VerificationResult};

/// Fixed acceptance window for [`verify`], in percentage points. Not
/// configurable: it decides pass/fail at the boundary, so
/// `|provided - implied| == 1.0` still counts as consistent.
pub const VERIFY_TOLERANCE: f64 = 1.0;

/// Solves for the quantity missing from `pair`.
///
/// Operand order follows the pair name: `(cagr, years)`, `(multiplier, years)`
/// or `(cagr, multiplier)`. CAGR in and out is in percent.
pub fn solve(first: f64, second: f64, pair: KnownPair) -> Result<CalculationResult, SolveError> {
    debug!(%pair, first, second, "solving for missing quantity");
    let wrap = |source: DomainError| SolveError { pair, source };

    let result = match pair {
        KnownPair::CagrYears => {
            let (cagr, years) = (first, second);
            let value = multiplier_from(cagr, years).map_err(wrap)?;
            CalculationResult {
                value,
                formula: format!("Multiplier = (1 + {cagr}%)^{years}"),
                explanation: format!(
                    "With a CAGR of {cagr}% over {years} years, the investment multiplier is {}.",
                    format_multiplier(value)
                ),
            }
        }
        KnownPair::MultiplierYears => {
            let (multiplier, years) = (first, second);
            let value = cagr_from(multiplier, years).map_err(wrap)? * 100.0;
            CalculationResult {
                value,
                formula: format!(
                    "CAGR = ({})^(1/{years}) - 1",
                    format_multiplier(multiplier)
                ),
                explanation: format!(
                    "With a {} multiplier over {years} years, the CAGR is {}.",
                    format_multiplier(multiplier),
                    format_percentage(value / 100.0)
                ),
            }
        }
        KnownPair::CagrMultiplier => {
            let (cagr, multiplier) = (first, second);
            let value = years_from(cagr, multiplier).map_err(wrap)?;
            CalculationResult {
                value,
                formula: format!(
                    "Years = ln({}) / ln(1 + {cagr}%)",
                    format_multiplier(multiplier)
                ),
                explanation: format!(
                    "To achieve a {} multiplier with {cagr}% CAGR, it takes {}.",
                    format_multiplier(multiplier),
                    format_years(value)
                ),
            }
        }
    };

    Ok(result)
}

/// Checks a supplied CAGR (percent) against the one implied by
/// `multiplier` and `years`.
pub fn verify(cagr: f64, multiplier: f64, years: f64) -> Result<VerificationResult, DomainError> {
    let expected = cagr_from(multiplier, years)? * 100.0;
    let difference = (cagr - expected).abs();
    Ok(VerificationResult {
        is_correct: difference <= VERIFY_TOLERANCE,
        expected,
        difference,
        tolerance: VERIFY_TOLERANCE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}, tolerance {tol}"
        );
    }

    #[test]
    fn cagr_and_years_give_multiplier() {
        let result = solve(10.0, 5.0, KnownPair::CagrYears).expect("must solve");
        assert_close(result.value, 1.61051, 1e-6);
        assert_eq!(result.formula, "Multiplier = (1 + 10%)^5");
        assert_eq!(
            result.explanation,
            "With a CAGR of 10% over 5 years, the investment multiplier is 1.61×."
        );
    }

    #[test]
    fn multiplier_and_years_give_cagr_in_percent() {
        let result = solve(2.0, 1.0, KnownPair::MultiplierYears).expect("must solve");
        assert_close(result.value, 100.0, 1e-9);
        assert_eq!(result.formula, "CAGR = (2.00×)^(1/1) - 1");
        assert!(result.explanation.ends_with("the CAGR is 100.00%."));
    }

    #[test]
    fn cagr_and_multiplier_give_years() {
        let result = solve(12.5, 3.0, KnownPair::CagrMultiplier).expect("must solve");
        assert_close(result.value, 3.0f64.ln() / 1.125f64.ln(), 1e-12);
        assert_eq!(result.formula, "Years = ln(3.00×) / ln(1 + 12.5%)");
        assert_eq!(
            result.explanation,
            "To achieve a 3.00× multiplier with 12.5% CAGR, it takes 9.33 years."
        );
    }

    #[test]
    fn total_loss_cagr_is_a_domain_error() {
        let err = solve(-100.0, 5.0, KnownPair::CagrYears).expect_err("must fail");
        assert_eq!(err.pair, KnownPair::CagrYears);
        assert_eq!(err.source, DomainError::GrowthAtOrBelowTotalLoss(-100.0));
    }

    #[test]
    fn zero_growth_cannot_reach_a_target() {
        let err = solve(0.0, 2.0, KnownPair::CagrMultiplier).expect_err("must fail");
        assert!(matches!(err.source, DomainError::NearZeroGrowth(_)));
        assert!(err.to_string().contains("cagr-multiplier"));
    }

    #[test]
    fn verify_accepts_within_one_point() {
        let v = verify(10.5, 1.10, 1.0).expect("in domain");
        assert_close(v.expected, 10.0, 1e-9);
        assert_close(v.difference, 0.5, 1e-9);
        assert_eq!(v.tolerance, 1.0);
        assert!(v.is_correct);
    }

    #[test]
    fn verify_rejects_two_points_off() {
        let v = verify(12.0, 1.10, 1.0).expect("in domain");
        assert_close(v.difference, 2.0, 1e-9);
        assert!(!v.is_correct);
    }

    #[test]
    fn verify_accepts_a_full_point_of_drift() {
        let v = verify(11.0, 1.10, 1.0).expect("in domain");
        assert_close(v.difference, 1.0, 1e-9);
        assert!(v.difference <= VERIFY_TOLERANCE);
        assert!(v.is_correct);
    }

    #[test]
    fn verify_propagates_domain_errors() {
        assert_eq!(
            verify(5.0, 0.0, 3.0),
            Err(DomainError::NonPositiveMultiplier(0.0))
        );
    }

    #[test]
    fn verify_is_symmetric_around_implied_rate() {
        let below = verify(9.5, 1.10, 1.0).expect("in domain");
        let above = verify(10.5, 1.10, 1.0).expect("in domain");
        assert!(below.is_correct && above.is_correct);
        assert_close(below.difference, above.difference, 1e-9);
    }
}
