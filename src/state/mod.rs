//! State management for portopt.
//!
//! This module provides centralized state management with a unidirectional
//! data flow pattern inspired by Redux/Elm architecture.

mod app_state;
mod optimization_state;

pub use app_state::{AppState, InputMode};
pub use optimization_state::{OptimizationState, Outcome, RequestPhase};

use crate::portfolio::{ActionResult, is_valid_ticker_list, split_tickers, trim_input};
use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

/// Actions that can be dispatched to modify state.
#[derive(Debug, Clone)]
pub enum Action {
    // Ticker input editing
    InsertChar(char),
    Backspace,
    Delete,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ClearInput,
    SetInputMode(InputMode),

    // Optimization
    Submit,
    OptimizationStarted(Vec<String>),
    OptimizationFinished(ActionResult),

    // UI actions
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    GoToTop,
    ToggleHelp,
    ShowNotification(Notification),
    Tick,

    // Quit
    Quit,
}

/// A notification to display to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration_secs: u64,
    pub created_at: DateTime<Utc>,
}

/// Notification severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

impl Notification {
    fn new(message: impl Into<String>, level: NotificationLevel, duration_secs: u64) -> Self {
        Self {
            message: message.into(),
            level,
            duration_secs,
            created_at: Utc::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info, 3)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Warning, 5)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error, 10)
    }

    /// Check if the notification has outlived its display duration.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at >= chrono::Duration::seconds(self.duration_secs as i64)
    }
}

/// The global state store.
#[derive(Debug)]
pub struct Store {
    /// Application state.
    pub app: AppState,
    /// Optimization state.
    pub optimization: OptimizationState,
    /// Action sender for dispatching actions.
    action_tx: mpsc::UnboundedSender<Action>,
}

impl Store {
    /// Create a new store with the given action sender.
    pub fn new(action_tx: mpsc::UnboundedSender<Action>) -> Self {
        Self {
            app: AppState::new(),
            optimization: OptimizationState::new(),
            action_tx,
        }
    }

    /// A sender that delivers actions back to this store's owner.
    pub fn sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Validate the typed ticker list and move into the next phase.
    ///
    /// Returns the trimmed input to send when the action should reach the
    /// network. Returns `None` when a request is already in flight or the
    /// input was rejected; in the latter case the result panel has already
    /// been rewritten.
    pub fn begin_submission(&mut self) -> Option<String> {
        if self.optimization.is_busy() {
            self.reduce(Action::ShowNotification(Notification::warning(
                "A request is already in flight",
            )));
            return None;
        }

        self.optimization.phase = RequestPhase::Validating;
        let raw = trim_input(&self.app.input_buffer).to_string();

        if !is_valid_ticker_list(&raw) {
            self.reduce(Action::OptimizationFinished(ActionResult::ValidationError));
            return None;
        }

        self.reduce(Action::OptimizationStarted(split_tickers(&raw)));
        Some(raw)
    }

    /// Apply an action to update state.
    pub fn reduce(&mut self, action: Action) {
        match action {
            // Ticker input editing
            Action::InsertChar(c) => self.app.push_char(c),
            Action::Backspace => self.app.pop_char(),
            Action::Delete => self.app.delete_char(),
            Action::CursorLeft => self.app.cursor_left(),
            Action::CursorRight => self.app.cursor_right(),
            Action::CursorHome => self.app.cursor_home(),
            Action::CursorEnd => self.app.cursor_end(),
            Action::ClearInput => self.app.clear_input(),
            Action::SetInputMode(mode) => self.app.input_mode = mode,

            // Optimization
            Action::Submit => {
                // Needs the network; handled by the app via begin_submission.
            }
            Action::OptimizationStarted(tickers) => {
                tracing::info!("Optimizing portfolio for {:?}", tickers);
                self.optimization.start(tickers);
            }
            Action::OptimizationFinished(result) => {
                if result.is_error() {
                    tracing::info!("Optimization action ended with {:?}", result);
                }
                if matches!(result, ActionResult::TransportError(_)) {
                    self.app.notification = Some(Notification::error(
                        "Could not reach the optimization service",
                    ));
                }
                self.optimization.finish(result);
            }

            // UI actions
            Action::ScrollUp => self.optimization.scroll_by(-1),
            Action::ScrollDown => self.optimization.scroll_by(1),
            Action::PageUp => self.optimization.scroll_by(-10),
            Action::PageDown => self.optimization.scroll_by(10),
            Action::GoToTop => self.optimization.scroll = 0,
            Action::ToggleHelp => self.app.show_help = !self.app.show_help,
            Action::ShowNotification(notification) => {
                self.app.notification = Some(notification);
            }
            Action::Tick => {
                let now = Utc::now();
                if self
                    .app
                    .notification
                    .as_ref()
                    .is_some_and(|n| n.is_expired(now))
                {
                    self.app.notification = None;
                }
            }

            // Quit
            Action::Quit => {
                self.app.should_quit = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::{INVALID_INPUT_MESSAGE, OptimizationResponse, PARSE_ERROR_MESSAGE};
    use pretty_assertions::assert_eq;

    fn store() -> Store {
        let (tx, _rx) = mpsc::unbounded_channel();
        Store::new(tx)
    }

    fn type_text(store: &mut Store, text: &str) {
        for c in text.chars() {
            store.reduce(Action::InsertChar(c));
        }
    }

    #[test]
    fn test_invalid_submission_rewrites_output() {
        let mut store = store();
        type_text(&mut store, "AAPL123");

        assert_eq!(store.begin_submission(), None);
        assert_eq!(store.optimization.output, INVALID_INPUT_MESSAGE);
        assert_eq!(
            store.optimization.phase,
            RequestPhase::Displaying(Outcome::InvalidInput)
        );
        assert_eq!(store.optimization.requests_sent, 0);
    }

    #[test]
    fn test_empty_submission_is_invalid() {
        let mut store = store();
        type_text(&mut store, "   ");
        assert_eq!(store.begin_submission(), None);
        assert_eq!(store.optimization.output, INVALID_INPUT_MESSAGE);
    }

    #[test]
    fn test_valid_submission_starts_request() {
        let mut store = store();
        type_text(&mut store, " AAPL, MSFT ");

        assert_eq!(store.begin_submission(), Some("AAPL, MSFT".to_string()));
        assert!(store.optimization.is_busy());
        assert_eq!(store.optimization.tickers, vec!["AAPL", "MSFT"]);
        assert_eq!(store.optimization.requests_sent, 1);
    }

    #[test]
    fn test_second_submission_while_sending_is_ignored() {
        let mut store = store();
        type_text(&mut store, "AAPL");
        assert!(store.begin_submission().is_some());

        assert_eq!(store.begin_submission(), None);
        assert_eq!(store.optimization.requests_sent, 1);
        assert!(store.optimization.is_busy());
        let notification = store.app.notification.as_ref().unwrap();
        assert_eq!(notification.level, NotificationLevel::Warning);
    }

    #[test]
    fn test_completion_rewrites_output_once() {
        let mut store = store();
        type_text(&mut store, "AAPL");
        store.begin_submission();

        store.reduce(Action::OptimizationFinished(ActionResult::Success(
            OptimizationResponse::Failed {
                message: "bad ticker".to_string(),
            },
        )));
        assert_eq!(store.optimization.output, "Error: bad ticker");
        assert_eq!(
            store.optimization.phase,
            RequestPhase::Displaying(Outcome::Error)
        );
        assert!(store.optimization.last_duration.is_some());

        // Output persists until the next action completes.
        store.reduce(Action::InsertChar('X'));
        assert_eq!(store.optimization.output, "Error: bad ticker");

        store.reduce(Action::OptimizationFinished(ActionResult::ParseError));
        assert_eq!(store.optimization.output, PARSE_ERROR_MESSAGE);
        assert!(store.optimization.last_duration.is_none());
    }

    #[test]
    fn test_transport_failure_raises_error_notification() {
        let mut store = store();
        type_text(&mut store, "AAPL");
        store.begin_submission();

        store.reduce(Action::OptimizationFinished(ActionResult::TransportError(
            "Failed to send optimization request: connection refused".to_string(),
        )));
        let notification = store.app.notification.as_ref().unwrap();
        assert_eq!(notification.level, NotificationLevel::Error);
        assert!(
            store
                .optimization
                .output
                .starts_with("Error: Could not optimize portfolio.\n")
        );
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut store = store();
        store.optimization.output = "a\nb\nc".to_string();

        store.reduce(Action::ScrollUp);
        assert_eq!(store.optimization.scroll, 0);
        store.reduce(Action::PageDown);
        assert_eq!(store.optimization.scroll, 2);
        store.reduce(Action::GoToTop);
        assert_eq!(store.optimization.scroll, 0);
    }

    #[test]
    fn test_tick_expires_notification() {
        let mut store = store();
        let mut notification = Notification::info("hello");
        notification.created_at = Utc::now() - chrono::Duration::seconds(60);
        store.reduce(Action::ShowNotification(notification));

        store.reduce(Action::Tick);
        assert!(store.app.notification.is_none());
    }

    #[test]
    fn test_unicode_whitespace_submission_is_invalid() {
        let mut store = store();
        type_text(&mut store, "AAPL,\u{a0}MSFT");
        assert_eq!(store.begin_submission(), None);
        assert_eq!(store.optimization.output, INVALID_INPUT_MESSAGE);
    }
}
