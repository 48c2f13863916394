//! Turning the outcome of an optimization action into display text.

use std::fmt::Write as _;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use super::response::{OptimizationResponse, Performance, Weight};

/// Shown when the ticker list fails validation.
pub const INVALID_INPUT_MESSAGE: &str =
    "Invalid input. Please enter stock tickers separated by commas (e.g., AAPL, MSFT).";

/// Shown when the response body cannot be parsed.
pub const PARSE_ERROR_MESSAGE: &str = "Error parsing response from server.";

/// Prefix for transport failures.
pub const TRANSPORT_ERROR_PREFIX: &str = "Error: Could not optimize portfolio.";

/// Terminal outcome of one optimization action.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    /// The ticker list was rejected before any network activity.
    ValidationError,
    /// The request could not be completed. Carries the human readable cause.
    TransportError(String),
    /// The body was malformed or incomplete.
    ParseError,
    /// The body parsed; it may still carry a backend error status.
    Success(OptimizationResponse),
}

impl ActionResult {
    /// Classify a raw response body. Parse details are logged, not surfaced.
    pub fn from_body(body: &str) -> Self {
        match OptimizationResponse::parse(body) {
            Ok(response) => Self::Success(response),
            Err(e) => {
                tracing::warn!("Could not parse optimization response: {}", e);
                Self::ParseError
            }
        }
    }

    /// Check if this outcome is an error of any kind.
    pub fn is_error(&self) -> bool {
        !matches!(
            self,
            Self::Success(OptimizationResponse::Optimized { .. })
        )
    }
}

/// Render an outcome as the text shown in the result panel.
pub fn render(result: &ActionResult) -> String {
    match result {
        ActionResult::ValidationError => INVALID_INPUT_MESSAGE.to_string(),
        ActionResult::TransportError(cause) => format!("{TRANSPORT_ERROR_PREFIX}\n{cause}"),
        ActionResult::ParseError => PARSE_ERROR_MESSAGE.to_string(),
        ActionResult::Success(OptimizationResponse::Failed { message }) => {
            format!("Error: {message}")
        }
        ActionResult::Success(OptimizationResponse::Optimized {
            weights,
            performance,
        }) => render_portfolio(weights, performance),
    }
}

fn render_portfolio(weights: &[Weight], performance: &Performance) -> String {
    let mut out = String::from("Optimized Portfolio Weights:\n");
    for weight in weights {
        let _ = writeln!(out, "{}: {}%", weight.ticker, two_places(weight.fraction * 100.0));
    }

    out.push_str("\nPerformance Metrics:\n");
    let _ = writeln!(
        out,
        "Expected Annual Return: {}%",
        two_places(performance.expected_return * 100.0)
    );
    let _ = writeln!(out, "Risk (Std Dev): {}%", two_places(performance.risk * 100.0));
    let _ = writeln!(out, "Sharpe Ratio: {}", two_places(performance.sharpe_ratio));
    out
}

/// Format with two decimals, rounding the shortest decimal form of `value`
/// half away from zero (`1.005` -> `1.01`).
///
/// Values outside `Decimal` range (and NaN/infinity) fall back to `{:.2}`.
fn two_places(value: f64) -> String {
    match Decimal::from_str(&value.to_string()) {
        Ok(decimal) => {
            let mut rounded =
                decimal.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            rounded.to_string()
        }
        Err(_) => format!("{value:.2}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SUCCESS: &str = r#"{"status":"success",
        "optimized_weights":{"AAPL":0.6,"MSFT":0.4},
        "performance":{"expected_return":0.12,"risk":0.18,"sharpe_ratio":0.67}}"#;

    #[test]
    fn test_render_success() {
        let text = render(&ActionResult::from_body(SUCCESS));
        assert!(text.contains("AAPL: 60.00%"));
        assert!(text.contains("MSFT: 40.00%"));
        assert!(text.contains("Expected Annual Return: 12.00%"));
        assert!(text.contains("Risk (Std Dev): 18.00%"));
        assert!(text.contains("Sharpe Ratio: 0.67"));
    }

    #[test]
    fn test_render_success_layout() {
        let text = render(&ActionResult::from_body(SUCCESS));
        assert_eq!(
            text,
            "Optimized Portfolio Weights:\n\
             AAPL: 60.00%\n\
             MSFT: 40.00%\n\
             \n\
             Performance Metrics:\n\
             Expected Annual Return: 12.00%\n\
             Risk (Std Dev): 18.00%\n\
             Sharpe Ratio: 0.67\n"
        );
    }

    #[test]
    fn test_two_places_rounds_half_up() {
        assert_eq!(two_places(1.005), "1.01");
        assert_eq!(two_places(0.125), "0.13");
        assert_eq!(two_places(2.675), "2.68");
        assert_eq!(two_places(-0.125), "-0.13");
        assert_eq!(two_places(60.0), "60.00");
        assert_eq!(two_places(0.6 * 100.0), "60.00");
        assert_eq!(two_places(f64::NAN), "NaN");
    }

    #[test]
    fn test_render_metrics_round_half_up() {
        let body = r#"{"status":"success",
            "optimized_weights":{"AAPL":0.00125},
            "performance":{"expected_return":0.0,"risk":0.0,"sharpe_ratio":1.005}}"#;
        let text = render(&ActionResult::from_body(body));
        assert!(text.contains("AAPL: 0.13%"));
        assert!(text.contains("Sharpe Ratio: 1.01"));

        let body = r#"{"status":"success",
            "optimized_weights":{"AAPL":1.0},
            "performance":{"expected_return":0.0,"risk":0.0,"sharpe_ratio":0.125}}"#;
        let text = render(&ActionResult::from_body(body));
        assert!(text.contains("Sharpe Ratio: 0.13"));
    }

    #[test]
    fn test_render_backend_error() {
        let result = ActionResult::from_body(r#"{"status":"error","message":"bad ticker"}"#);
        assert!(result.is_error());
        assert_eq!(render(&result), "Error: bad ticker");
    }

    #[test]
    fn test_render_unparsable() {
        let result = ActionResult::from_body("not json");
        assert_eq!(result, ActionResult::ParseError);
        assert_eq!(render(&result), PARSE_ERROR_MESSAGE);
    }

    #[test]
    fn test_render_missing_fields_is_parse_error() {
        let result = ActionResult::from_body(r#"{"status":"success"}"#);
        assert_eq!(render(&result), PARSE_ERROR_MESSAGE);
    }

    #[test]
    fn test_render_validation_error() {
        assert_eq!(
            render(&ActionResult::ValidationError),
            INVALID_INPUT_MESSAGE
        );
    }

    #[test]
    fn test_render_transport_error() {
        let result = ActionResult::TransportError(
            "Failed to send optimization request: API Error: down".to_string(),
        );
        assert_eq!(
            render(&result),
            "Error: Could not optimize portfolio.\nFailed to send optimization request: API Error: down"
        );
    }
}
