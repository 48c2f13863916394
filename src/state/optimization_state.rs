//! State of the current optimization action and the result panel.

use crate::portfolio::{ActionResult, OptimizationResponse, render};
use chrono::{DateTime, Utc};

/// How the last action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The input was rejected before sending.
    InvalidInput,
    /// The backend returned a portfolio.
    Success,
    /// Transport, parse or backend error.
    Error,
}

impl From<&ActionResult> for Outcome {
    fn from(result: &ActionResult) -> Self {
        match result {
            ActionResult::ValidationError => Outcome::InvalidInput,
            ActionResult::Success(OptimizationResponse::Optimized { .. }) => Outcome::Success,
            _ => Outcome::Error,
        }
    }
}

/// Lifecycle of a single user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    Validating,
    Sending,
    Displaying(Outcome),
}

/// Optimization state.
#[derive(Debug, Default)]
pub struct OptimizationState {
    /// Where the current action is.
    pub phase: RequestPhase,
    /// Tickers of the request in flight or last sent.
    pub tickers: Vec<String>,
    /// Text shown in the result panel. Survives across actions until the
    /// next one completes.
    pub output: String,
    /// When the request in flight was started.
    pub started_at: Option<DateTime<Utc>>,
    /// When `output` was last rewritten.
    pub completed_at: Option<DateTime<Utc>>,
    /// Round trip time of the last request that reached the network.
    pub last_duration: Option<chrono::Duration>,
    /// Vertical scroll offset of the result panel.
    pub scroll: u16,
    /// Number of requests sent this session.
    pub requests_sent: u64,
}

impl OptimizationState {
    /// Create a new optimization state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a request is in flight.
    pub fn is_busy(&self) -> bool {
        self.phase == RequestPhase::Sending
    }

    /// Record that a request was sent.
    pub fn start(&mut self, tickers: Vec<String>) {
        self.phase = RequestPhase::Sending;
        self.tickers = tickers;
        self.started_at = Some(Utc::now());
        self.requests_sent += 1;
    }

    /// Rewrite the result panel from a terminal outcome.
    pub fn finish(&mut self, result: ActionResult) {
        let now = Utc::now();
        self.last_duration = match (self.phase, self.started_at) {
            (RequestPhase::Sending, Some(start)) => Some(now - start),
            _ => None,
        };
        self.phase = RequestPhase::Displaying(Outcome::from(&result));
        self.output = render(&result);
        self.completed_at = Some(now);
        self.scroll = 0;
    }

    /// Scroll the result panel by `delta` lines.
    pub fn scroll_by(&mut self, delta: i32) {
        let max = self.output.lines().count().saturating_sub(1) as i32;
        let next = (self.scroll as i32 + delta).clamp(0, max.max(0));
        self.scroll = next as u16;
    }
}
