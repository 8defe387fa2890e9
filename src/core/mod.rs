mod classify;
mod engine;
mod error;
mod format;
mod formulas;
mod projection;
mod realism;
mod solver;
mod types;
mod validation;

pub use classify::classify;
pub use engine::{PROMPT_MESSAGE, evaluate};
pub use error::{DomainError, EvaluateError, SolveError};
pub use format::{format_multiplier, format_percentage, format_years};
pub use formulas::{MIN_GROWTH_FOR_YEARS, cagr_from, multiplier_from, years_from};
pub use projection::{Projection, chart_spec, project};
pub use realism::{UNREALISTIC_WARNING, is_realistic, realistic_band};
pub use solver::{VERIFY_TOLERANCE, solve, verify};
pub use types::{
    CalculationResult, ChartSpec, Evaluation, FieldError, Inputs, KnownPair, MessageLevel, Mode,
    ProjectionPoint, ProjectionReport, Quantity, SolvedReport, ValidationOutcome,
    VerificationReport, VerificationResult,
};
pub use validation::{CAGR_RANGE, MULTIPLIER_RANGE, YEARS_RANGE, validate};
