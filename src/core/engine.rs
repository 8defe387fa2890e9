use tracing::debug;

use super::classify::classify;
use super::error::EvaluateError;
use super::format::{format_multiplier, format_percentage, format_years};
use super::projection::{chart_spec, project};
use super::realism::{UNREALISTIC_WARNING, is_realistic};
use super::solver::{solve, verify};
use super::types::{
    Evaluation, Inputs, KnownPair, MessageLevel, ProjectionReport, Quantity, SolvedReport,
    VerificationReport,
};
use super::validation::validate;

pub const PROMPT_MESSAGE: &str = "Please provide at least one input or refer to the matrix below to explore variable relationships.";

/// Validates, picks a mode from the number of present inputs and runs it.
pub fn evaluate(inputs: &Inputs) -> Result<Evaluation, EvaluateError> {
    let validation = validate(inputs);
    if !validation.is_valid {
        debug!(errors = validation.errors.len(), "inputs rejected");
        return Err(EvaluateError::Invalid(validation));
    }

    let mode = classify(inputs);
    debug!(?mode, "evaluating");

    let evaluation = match (inputs.cagr, inputs.multiplier, inputs.years) {
        (None, None, None) => Evaluation::Prompt {
            message: PROMPT_MESSAGE.to_string(),
            level: MessageLevel::Info,
        },
        (Some(cagr), None, None) => projection_report(cagr, Quantity::Cagr),
        (None, Some(multiplier), None) => projection_report(multiplier, Quantity::Multiplier),
        (None, None, Some(years)) => projection_report(years, Quantity::Years),
        (Some(cagr), None, Some(years)) => solved_report(cagr, years, KnownPair::CagrYears)?,
        (None, Some(multiplier), Some(years)) => {
            solved_report(multiplier, years, KnownPair::MultiplierYears)?
        }
        (Some(cagr), Some(multiplier), None) => {
            solved_report(cagr, multiplier, KnownPair::CagrMultiplier)?
        }
        (Some(cagr), Some(multiplier), Some(years)) => {
            verification_report(cagr, multiplier, years)?
        }
    };

    Ok(evaluation)
}

fn projection_report(value: f64, fixed: Quantity) -> Evaluation {
    let points: Vec<_> = project(value, fixed).collect();
    let message = match fixed {
        Quantity::Cagr => format!(
            "Showing growth potential with {} CAGR over different time periods.",
            format_percentage(value / 100.0)
        ),
        Quantity::Multiplier => format!(
            "Showing CAGR required to achieve {} growth over different time periods.",
            format_multiplier(value)
        ),
        Quantity::Years => format!(
            "Showing growth potential over {} with different CAGR rates.",
            format_years(value)
        ),
    };

    Evaluation::Projection(ProjectionReport {
        fixed,
        fixed_value: value,
        chart: chart_spec(value, fixed),
        points,
        message,
        level: MessageLevel::Info,
    })
}

fn solved_report(first: f64, second: f64, pair: KnownPair) -> Result<Evaluation, EvaluateError> {
    let result = solve(first, second, pair)?;
    let target = pair.target();
    let display_value = match target {
        Quantity::Cagr => format_percentage(result.value / 100.0),
        Quantity::Multiplier => format_multiplier(result.value),
        Quantity::Years => format_years(result.value),
    };
    let realistic = is_realistic(result.value, target);

    Ok(Evaluation::Solved(SolvedReport {
        pair,
        target,
        result,
        display_value,
        realistic,
        warning: (!realistic).then(|| UNREALISTIC_WARNING.to_string()),
    }))
}

fn verification_report(cagr: f64, multiplier: f64, years: f64) -> Result<Evaluation, EvaluateError> {
    let verification = verify(cagr, multiplier, years)?;
    let (message, level) = if verification.is_correct {
        (
            "All inputs are mathematically consistent!".to_string(),
            MessageLevel::Success,
        )
    } else {
        (
            format!(
                "The provided values are not mathematically consistent. Expected CAGR: {}",
                format_percentage(verification.expected / 100.0)
            ),
            MessageLevel::Warning,
        )
    };

    Ok(Evaluation::Verified(VerificationReport {
        provided_cagr: cagr,
        verification,
        message,
        level,
    }))
}
