//! Outgoing optimization request body.

use serde::{Deserialize, Serialize};

use super::tickers::split_tickers;

/// JSON body POSTed to the optimization endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRequest {
    /// Ticker symbols in submission order.
    pub stocks: Vec<String>,
    /// Optional target annual return.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_return: Option<f64>,
}

impl OptimizationRequest {
    /// Create a request for the given tickers.
    pub fn new(stocks: Vec<String>) -> Self {
        Self {
            stocks,
            target_return: None,
        }
    }

    /// Build a request from a raw, already validated ticker list.
    pub fn from_raw(raw: &str) -> Self {
        Self::new(split_tickers(raw))
    }

    /// Set the target return.
    pub fn with_target_return(mut self, target_return: Option<f64>) -> Self {
        self.target_return = target_return;
        self
    }
}
