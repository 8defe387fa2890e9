use thiserror::Error;

use super::types::{KnownPair, ValidationOutcome};

/// A mathematically undefined combination of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("Years must be positive (got {0})")]
    NonPositiveYears(f64),

    #[error("Multiplier must be positive (got {0})")]
    NonPositiveMultiplier(f64),

    #[error("CAGR must be greater than -100% (got {0}%)")]
    GrowthAtOrBelowTotalLoss(f64),

    #[error("CAGR cannot be zero for years calculation (got {0}%)")]
    NearZeroGrowth(f64),
}

/// A domain failure raised while solving for the missing quantity.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("Calculation error ({pair}): {source}")]
pub struct SolveError {
    pub pair: KnownPair,
    #[source]
    pub source: DomainError,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluateError {
    #[error("invalid input: {}", summarize(.0))]
    Invalid(ValidationOutcome),

    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error("Verification error: {0}")]
    Verify(#[from] DomainError),
}

fn summarize(outcome: &ValidationOutcome) -> String {
    outcome
        .errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
