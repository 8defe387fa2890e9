use std::ops::RangeInclusive;

use super::types::{FieldError, Inputs, Quantity, ValidationOutcome};

pub const CAGR_RANGE: RangeInclusive<f64> = -100.0..=500.0;
pub const MULTIPLIER_RANGE: RangeInclusive<f64> = 0.01..=1000.0;
pub const YEARS_RANGE: RangeInclusive<f64> = 1.0..=1000.0;

/// Range-checks every present field. Errors come back in field order
/// (cagr, multiplier, years); absent fields are never reported.
pub fn validate(inputs: &Inputs) -> ValidationOutcome {
    let mut errors = Vec::new();

    if let Some(cagr) = inputs.cagr {
        if !CAGR_RANGE.contains(&cagr) {
            errors.push(FieldError {
                field: Quantity::Cagr,
                message: "CAGR must be between -100% and 500%".to_string(),
            });
        }
    }

    if let Some(multiplier) = inputs.multiplier {
        if !MULTIPLIER_RANGE.contains(&multiplier) {
            errors.push(FieldError {
                field: Quantity::Multiplier,
                message: "Multiplier must be between 0.01 and 1000".to_string(),
            });
        }
    }

    if let Some(years) = inputs.years {
        if !YEARS_RANGE.contains(&years) || years.fract() != 0.0 {
            errors.push(FieldError {
                field: Quantity::Years,
                message: "Years must be an integer between 1 and 1000".to_string(),
            });
        }
    }

    ValidationOutcome {
        is_valid: errors.is_empty(),
        errors,
    }
}
