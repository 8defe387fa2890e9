//! Closed-form conversions between CAGR, total multiplier and years.
//!
//! CAGR arguments are percentages (`12.5` means 12.5%); [`cagr_from`] returns
//! a decimal fraction and callers scale it by 100 for display.

use super::error::DomainError;

/// Below this magnitude (as a decimal rate) years-to-target is unbounded.
pub const MIN_GROWTH_FOR_YEARS: f64 = 0.0001;

fn growth_factor(cagr_percent: f64) -> Result<f64, DomainError> {
    let factor = 1.0 + cagr_percent / 100.0;
    if cagr_percent / 100.0 <= -1.0 || factor <= 0.0 || factor.is_nan() {
        return Err(DomainError::GrowthAtOrBelowTotalLoss(cagr_percent));
    }
    Ok(factor)
}

fn positive_years(years: f64) -> Result<f64, DomainError> {
    if years > 0.0 {
        Ok(years)
    } else {
        Err(DomainError::NonPositiveYears(years))
    }
}

fn positive_multiplier(multiplier: f64) -> Result<f64, DomainError> {
    if multiplier > 0.0 {
        Ok(multiplier)
    } else {
        Err(DomainError::NonPositiveMultiplier(multiplier))
    }
}

/// `(1 + cagr/100) ^ years`.
pub fn multiplier_from(cagr_percent: f64, years: f64) -> Result<f64, DomainError> {
    let years = positive_years(years)?;
    let factor = growth_factor(cagr_percent)?;
    Ok(factor.powf(years))
}

/// `multiplier ^ (1/years) - 1`, as a decimal fraction.
pub fn cagr_from(multiplier: f64, years: f64) -> Result<f64, DomainError> {
    let multiplier = positive_multiplier(multiplier)?;
    let years = positive_years(years)?;
    Ok(multiplier.powf(1.0 / years) - 1.0)
}

/// `ln(multiplier) / ln(1 + cagr/100)`.
pub fn years_from(cagr_percent: f64, multiplier: f64) -> Result<f64, DomainError> {
    let multiplier = positive_multiplier(multiplier)?;
    let factor = growth_factor(cagr_percent)?;
    if (cagr_percent / 100.0).abs() < MIN_GROWTH_FOR_YEARS {
        return Err(DomainError::NearZeroGrowth(cagr_percent));
    }
    Ok(multiplier.ln() / factor.ln())
}
