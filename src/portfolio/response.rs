//! Parsing of the optimization endpoint's reply.

use serde::Deserialize;
use serde::de::Error as _;
use serde_json::Value;

use crate::error::Result;

/// Status value marking a successful optimization.
const STATUS_SUCCESS: &str = "success";

/// Allocation of one ticker in the optimized portfolio.
#[derive(Debug, Clone, PartialEq)]
pub struct Weight {
    pub ticker: String,
    /// Fraction of capital, nominally in `[0, 1]`.
    pub fraction: f64,
}

/// Portfolio performance metrics, passed through from the backend.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Performance {
    #[serde(deserialize_with = "number_or_string")]
    pub expected_return: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub risk: f64,
    #[serde(deserialize_with = "number_or_string")]
    pub sharpe_ratio: f64,
}

/// A parsed reply from the optimization endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum OptimizationResponse {
    /// The backend produced a portfolio.
    ///
    /// Weights follow the parser's key order, which is not necessarily the
    /// order the tickers were submitted in. Keys and sum are not checked
    /// against the request.
    Optimized {
        weights: Vec<Weight>,
        performance: Performance,
    },
    /// The backend answered with a non-success status.
    Failed { message: String },
}

/// A JSON number, or a string holding one.
fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Accepts `0.12` as well as `"0.12"`.
fn number_or_string<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    as_number(&value).ok_or_else(|| D::Error::custom(format!("expected a number, got {value}")))
}

#[derive(Deserialize)]
struct Envelope {
    status: String,
}

#[derive(Deserialize)]
struct SuccessBody {
    optimized_weights: serde_json::Map<String, Value>,
    performance: Performance,
}

#[derive(Deserialize)]
struct FailureBody {
    message: String,
}

impl OptimizationResponse {
    /// Parse a raw response body.
    ///
    /// Fails on malformed JSON, a missing `status`, or missing fields for the
    /// variant that `status` selects.
    pub fn parse(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        let envelope = Envelope::deserialize(&value)?;

        if envelope.status == STATUS_SUCCESS {
            let success = SuccessBody::deserialize(&value)?;
            let weights = success
                .optimized_weights
                .into_iter()
                .map(|(ticker, fraction)| {
                    let fraction = as_number(&fraction).ok_or_else(|| {
                        serde_json::Error::custom(format!("weight for {ticker} is not a number"))
                    })?;
                    Ok(Weight { ticker, fraction })
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(Self::Optimized {
                weights,
                performance: success.performance,
            })
        } else {
            let failure = FailureBody::deserialize(&value)?;
            Ok(Self::Failed {
                message: failure.message,
            })
        }
    }

    /// Check if the backend reported success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Optimized { .. })
    }
}
