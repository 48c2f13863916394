//! UI rendering using ratatui.
//!
//! This module contains all TUI components and rendering logic.

mod layout;
mod widgets;

pub use layout::Layout;
pub use widgets::{HelpPanel, HintBar, ResultView, StatusBar, TickerInput};

use crate::config::UiConfig;
use crate::state::Store;
use ratatui::Frame;

/// Main UI renderer.
pub struct Ui;

impl Ui {
    /// Render the entire UI.
    pub fn render(frame: &mut Frame, store: &Store, config: &UiConfig) {
        let layout = Layout::new(frame.area(), config.show_status_bar, config.show_help_bar);

        if config.show_status_bar {
            StatusBar::render(frame, layout.status_area, store);
        }

        TickerInput::render(frame, layout.input_area, store);
        ResultView::render(frame, layout.result_area, store);

        if config.show_help_bar {
            HintBar::render(frame, layout.help_area, store);
        }

        // Render help panel if visible
        if store.app.show_help {
            HelpPanel::render(frame, frame.area());
        }

        // Render notification if present
        if let Some(notification) = &store.app.notification {
            widgets::render_notification(frame, layout.notification_area, notification);
        }
    }
}
