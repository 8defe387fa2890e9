use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three related quantities.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    Cagr,
    Multiplier,
    Years,
}

impl Quantity {
    pub fn as_str(self) -> &'static str {
        match self {
            Quantity::Cagr => "cagr",
            Quantity::Multiplier => "multiplier",
            Quantity::Years => "years",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The unordered pair of quantities handed to the solver. The missing third
/// is the one being solved for.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KnownPair {
    CagrYears,
    MultiplierYears,
    CagrMultiplier,
}

impl KnownPair {
    pub fn as_str(self) -> &'static str {
        match self {
            KnownPair::CagrYears => "cagr-years",
            KnownPair::MultiplierYears => "multiplier-years",
            KnownPair::CagrMultiplier => "cagr-multiplier",
        }
    }

    pub fn target(self) -> Quantity {
        match self {
            KnownPair::CagrYears => Quantity::Multiplier,
            KnownPair::MultiplierYears => Quantity::Cagr,
            KnownPair::CagrMultiplier => Quantity::Years,
        }
    }
}

impl fmt::Display for KnownPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Computation mode chosen from how many inputs are present.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Zero,
    One,
    Two,
    Three,
}

/// Caller-supplied values. `None` means "not given", which is not the same
/// thing as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Inputs {
    /// Percent, e.g. `12.5` for 12.5%.
    pub cagr: Option<f64>,
    pub multiplier: Option<f64>,
    /// Whole number of years; kept as `f64` so fractional input can be reported.
    pub years: Option<f64>,
}

impl Inputs {
    pub fn new(cagr: Option<f64>, multiplier: Option<f64>, years: Option<f64>) -> Self {
        Self {
            cagr,
            multiplier,
            years,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    pub field: Quantity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: Vec<FieldError>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub value: f64,
    pub formula: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub is_correct: bool,
    /// CAGR implied by multiplier and years, in percent.
    pub expected: f64,
    pub difference: f64,
    pub tolerance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Axis and title text for whoever draws the projection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub title: String,
    pub x_axis_name: &'static str,
    pub y_axis_name: &'static str,
    pub x_axis_suffix: &'static str,
    pub y_axis_suffix: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionReport {
    pub fixed: Quantity,
    pub fixed_value: f64,
    pub chart: ChartSpec,
    pub points: Vec<ProjectionPoint>,
    pub message: String,
    pub level: MessageLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolvedReport {
    pub pair: KnownPair,
    pub target: Quantity,
    pub result: CalculationResult,
    pub display_value: String,
    pub realistic: bool,
    pub warning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    pub provided_cagr: f64,
    pub verification: VerificationResult,
    pub message: String,
    pub level: MessageLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum Evaluation {
    Prompt { message: String, level: MessageLevel },
    Projection(ProjectionReport),
    Solved(SolvedReport),
    Verified(VerificationReport),
}

impl Evaluation {
    pub fn mode(&self) -> Mode {
        match self {
            Evaluation::Prompt { .. } => Mode::Zero,
            Evaluation::Projection(_) => Mode::One,
            Evaluation::Solved(_) => Mode::Two,
            Evaluation::Verified(_) => Mode::Three,
        }
    }
}
