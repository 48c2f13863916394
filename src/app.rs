//! Main application module.
//!
//! This module contains the main `App` struct that coordinates
//! the event loop, state management, and rendering.

use crate::api::OptimizationService;
use crate::config::Config;
use crate::error::Result;
use crate::events::EventHandler;
use crate::portfolio;
use crate::state::{Action, Store};
use crate::ui::Ui;

use crossterm::{
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// The main application.
pub struct App {
    /// Terminal.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application store.
    store: Store,
    /// Event handler.
    event_handler: EventHandler,
    /// Action receiver.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Optimization backend.
    service: Arc<dyn OptimizationService>,
    /// Configuration.
    config: Config,
}

impl App {
    /// Create a new application.
    pub fn new(config: Config, service: Arc<dyn OptimizationService>) -> Result<Self> {
        // Set up terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        if config.ui.mouse_support {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        // Create action channel
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        // Create store
        let mut store = Store::new(action_tx.clone());
        store.app.endpoint = config.api.endpoint.clone();

        // Create event handler
        let event_handler = EventHandler::new(
            action_tx,
            &config.keybindings,
            Duration::from_millis(config.ui.tick_rate_ms),
        );

        Ok(Self {
            terminal,
            store,
            event_handler,
            action_rx,
            service,
            config,
        })
    }

    /// Run the application event loop.
    pub async fn run(&mut self) -> Result<()> {
        tracing::info!("Starting with endpoint {}", self.config.api.endpoint);

        loop {
            // Update event handler with current state
            self.event_handler.update_store_snapshot(&self.store);

            // Render UI
            self.terminal.draw(|frame| {
                Ui::render(frame, &self.store, &self.config.ui);
            })?;

            // Handle events and actions
            tokio::select! {
                // Handle terminal events
                result = self.event_handler.next() => {
                    if let Some(action) = result? {
                        self.handle_action(action);
                    }
                }

                // Handle actions from the channel
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                }
            }

            // Check if we should quit
            if self.store.app.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle an action.
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Submit => self.submit(),
            _ => {
                // Let the store handle the action
                self.store.reduce(action);
            }
        }
    }

    /// Validate the input and, if accepted, send it from a worker task.
    ///
    /// The outcome comes back through the action channel so the interface
    /// keeps redrawing while the request is in flight.
    fn submit(&mut self) {
        let Some(raw) = self.store.begin_submission() else {
            return;
        };

        let service = Arc::clone(&self.service);
        let action_tx = self.store.sender();
        tokio::spawn(async move {
            let result = portfolio::request(service.as_ref(), &raw).await;
            if action_tx
                .send(Action::OptimizationFinished(result))
                .is_err()
            {
                tracing::warn!("Dropping optimization result, application is shutting down");
            }
        });
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        );
        let _ = self.terminal.show_cursor();
    }
}
