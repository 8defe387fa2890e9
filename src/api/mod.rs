use axum::{
    Router,
    extract::{
        Json, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use std::io;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::core::{
    EvaluateError, Evaluation, FieldError, Inputs, Quantity, evaluate, format_percentage,
};

#[derive(Parser, Debug)]
#[command(
    name = "cagr",
    version,
    about = "Relate CAGR, total growth multiplier and years: solve for the missing one, verify all three, or sweep from one"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Compound annual growth rate in percent, e.g. 12.5"
    )]
    pub cagr: Option<f64>,

    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Final value divided by initial value, e.g. 2 for doubling"
    )]
    pub multiplier: Option<f64>,

    #[arg(long, allow_negative_numbers = true, help = "Whole number of years")]
    pub years: Option<f64>,

    #[arg(long, help = "Print the evaluation as JSON instead of a text report")]
    pub json: bool,

    #[arg(
        long,
        global = true,
        env = "CAGR_LOG_LEVEL",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Serve the calculator over HTTP.
    Serve {
        #[arg(long, env = "CAGR_HOST")]
        host: Option<String>,
        #[arg(short, long, env = "CAGR_PORT")]
        port: Option<u16>,
    },
}

impl Cli {
    pub fn inputs(&self) -> Inputs {
        Inputs::new(self.cagr, self.multiplier, self.years)
    }
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Evaluate(#[from] EvaluateError),

    #[error("failed to encode JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

/// One-shot evaluation for the command line; returns the text to print.
pub fn run_once(cli: &Cli) -> Result<String, CliError> {
    let evaluation = evaluate(&cli.inputs())?;
    if cli.json {
        Ok(serde_json::to_string_pretty(&evaluation)?)
    } else {
        Ok(render_text(&evaluation))
    }
}

fn unit_name(kind: Quantity) -> &'static str {
    match kind {
        Quantity::Cagr => "CAGR",
        Quantity::Multiplier => "Multiplier",
        Quantity::Years => "Time Period",
    }
}

pub fn render_text(evaluation: &Evaluation) -> String {
    let mut lines = Vec::new();
    match evaluation {
        Evaluation::Prompt { message, .. } => lines.push(message.clone()),
        Evaluation::Projection(report) => {
            lines.push(report.chart.title.clone());
            lines.push(report.message.clone());
            lines.push(format!(
                "{} vs {} ({} points)",
                report.chart.y_axis_name,
                report.chart.x_axis_name,
                report.points.len()
            ));
            lines.extend(report.points.iter().map(|p| format!("  {}", p.label)));
        }
        Evaluation::Solved(report) => {
            lines.push(format!(
                "Calculated {}: {}",
                unit_name(report.target),
                report.display_value
            ));
            lines.push(format!("Formula: {}", report.result.formula));
            lines.push(report.result.explanation.clone());
            if let Some(warning) = &report.warning {
                lines.push(format!("⚠️ {warning}"));
            }
        }
        Evaluation::Verified(report) => {
            let v = &report.verification;
            let icon = if v.is_correct { "✅" } else { "❌" };
            lines.push(format!("{icon} CAGR Verification"));
            lines.push(report.message.clone());
            lines.push(format!(
                "Provided CAGR: {}",
                format_percentage(report.provided_cagr / 100.0)
            ));
            lines.push(format!("Expected CAGR: {}", format_percentage(v.expected / 100.0)));
            lines.push(format!("Difference: {}", format_percentage(v.difference / 100.0)));
        }
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CalculatePayload {
    #[serde(deserialize_with = "blank_as_none")]
    cagr: Option<f64>,
    #[serde(deserialize_with = "blank_as_none")]
    multiplier: Option<f64>,
    #[serde(deserialize_with = "blank_as_none")]
    years: Option<f64>,
}

/// Accepts a JSON number, a numeric string, or an empty string meaning
/// "not given". Query strings always arrive as text, so an unfilled form
/// field shows up as `cagr=`.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawField {
        Number(f64),
        Text(String),
    }

    match Option::<RawField>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawField::Number(value)) => Ok(Some(value)),
        Some(RawField::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse()
                .map(Some)
                .map_err(|_| D::Error::custom(format!("invalid number: {text:?}")))
        }
    }
}

impl From<CalculatePayload> for Inputs {
    fn from(payload: CalculatePayload) -> Self {
        Inputs::new(payload.cagr, payload.multiplier, payload.years)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    field_errors: Vec<FieldError>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

pub fn build_router() -> Router {
    Router::new()
        .route(
            "/api/calculate",
            get(calculate_get_handler)
                .post(calculate_post_handler)
                .fallback(method_not_allowed_handler),
        )
        .route(
            "/api/health",
            get(health_handler).fallback(method_not_allowed_handler),
        )
        .fallback(not_found_handler)
}

pub async fn run_http_server(config: &ServerConfig) -> io::Result<()> {
    let addr = config
        .socket_addr()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "CAGR HTTP API listening");
    info!("Local access: http://127.0.0.1:{}/api/calculate", config.port);

    axum::serve(listener, build_router()).await
}

async fn health_handler() -> Response {
    json_response(
        StatusCode::OK,
        HealthResponse {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        },
    )
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found", Vec::new())
}

async fn method_not_allowed_handler() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed", Vec::new())
}

async fn calculate_get_handler(
    payload: Result<Query<CalculatePayload>, QueryRejection>,
) -> Response {
    match payload {
        Ok(Query(payload)) => calculate_handler_impl(payload),
        Err(rejection) => malformed_request(&rejection.body_text()),
    }
}

async fn calculate_post_handler(
    payload: Result<Json<CalculatePayload>, JsonRejection>,
) -> Response {
    match payload {
        Ok(Json(payload)) => calculate_handler_impl(payload),
        Err(rejection) => malformed_request(&rejection.body_text()),
    }
}

fn malformed_request(reason: &str) -> Response {
    warn!(reason, "rejected malformed request");
    error_response(StatusCode::BAD_REQUEST, reason, Vec::new())
}

fn calculate_handler_impl(payload: CalculatePayload) -> Response {
    let inputs = Inputs::from(payload);
    match evaluate(&inputs) {
        Ok(evaluation) => json_response(StatusCode::OK, evaluation),
        Err(EvaluateError::Invalid(outcome)) => {
            warn!(errors = outcome.errors.len(), "rejected out-of-range inputs");
            error_response(StatusCode::BAD_REQUEST, "Invalid input", outcome.errors)
        }
        Err(err) => {
            warn!(error = %err, "calculation failed");
            error_response(StatusCode::UNPROCESSABLE_ENTITY, &err.to_string(), Vec::new())
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str, field_errors: Vec<FieldError>) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
            field_errors,
        },
    )
}
