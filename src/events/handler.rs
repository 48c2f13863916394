//! Event handler for processing input events.

use super::{InputEvent, Key, KeyBinding};
use crate::config::KeyBindings;
use crate::error::Result;
use crate::state::{Action, InputMode, Store};
use crossterm::event::{
    self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind,
};
use std::time::Duration;
use tokio::sync::mpsc;

/// Key bindings resolved from configuration.
#[derive(Debug, Clone, Copy)]
struct Bindings {
    quit: KeyBinding,
    help: KeyBinding,
    submit: KeyBinding,
    clear: KeyBinding,
}

impl From<&KeyBindings> for Bindings {
    fn from(config: &KeyBindings) -> Self {
        let defaults = KeyBindings::default();
        let resolve = |value: &str, default: &str| {
            KeyBinding::parse_or(
                value,
                KeyBinding::parse(default).unwrap_or(KeyBinding::plain(Key::Other)),
            )
        };
        Self {
            quit: resolve(&config.quit, &defaults.quit),
            help: resolve(&config.help, &defaults.help),
            submit: resolve(&config.submit, &defaults.submit),
            clear: resolve(&config.clear, &defaults.clear),
        }
    }
}

/// Handles input events and produces actions.
pub struct EventHandler {
    /// Action sender for events that expand into several actions.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Key bindings.
    bindings: Bindings,
    /// How long to wait for input before emitting a tick.
    tick_rate: Duration,
    /// Store reference for state-aware handling.
    store_snapshot: StoreSnapshot,
}

/// Snapshot of relevant store state for event handling.
#[derive(Debug, Clone, Copy, Default)]
struct StoreSnapshot {
    input_mode: InputMode,
    show_help: bool,
}

impl EventHandler {
    /// Create a new event handler with the given action sender.
    pub fn new(
        action_tx: mpsc::UnboundedSender<Action>,
        keybindings: &KeyBindings,
        tick_rate: Duration,
    ) -> Self {
        Self {
            action_tx,
            bindings: Bindings::from(keybindings),
            tick_rate,
            store_snapshot: StoreSnapshot::default(),
        }
    }

    /// Update the store snapshot for state-aware event handling.
    pub fn update_store_snapshot(&mut self, store: &Store) {
        self.store_snapshot = StoreSnapshot {
            input_mode: store.app.input_mode,
            show_help: store.app.show_help,
        };
    }

    /// Get the next action from user input, or a tick when none arrives.
    pub async fn next(&mut self) -> Result<Option<Action>> {
        if !event::poll(self.tick_rate)? {
            return Ok(Some(Action::Tick));
        }

        let action = match event::read()? {
            CrosstermEvent::Key(key) => self.handle_key(key),
            CrosstermEvent::Mouse(mouse) => self.handle_mouse(mouse),
            CrosstermEvent::Paste(text) => {
                self.handle_paste(&text)?;
                None
            }
            // Terminal will automatically redraw
            _ => None,
        };
        Ok(action)
    }

    /// Handle a key event and return an optional action.
    fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        // Only process key press events
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let input = InputEvent::from(key);

        if input.matches(&self.bindings.quit) {
            return Some(Action::Quit);
        }

        if self.store_snapshot.show_help {
            return match input.key {
                Key::Escape | Key::Enter | Key::Char('?') => Some(Action::ToggleHelp),
                _ if input.matches(&self.bindings.help) => Some(Action::ToggleHelp),
                _ => None,
            };
        }

        if input.matches(&self.bindings.help) {
            return Some(Action::ToggleHelp);
        }

        if input.matches(&self.bindings.submit) {
            return Some(Action::Submit);
        }

        match self.store_snapshot.input_mode {
            InputMode::Editing => self.handle_editing_mode(input),
            InputMode::Normal => self.handle_normal_mode(input),
        }
    }

    /// Handle a mouse event and return an optional action.
    fn handle_mouse(&self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            _ => None,
        }
    }

    /// Pasted text goes into the ticker input, newlines dropped.
    fn handle_paste(&self, text: &str) -> Result<()> {
        if self.store_snapshot.input_mode != InputMode::Editing {
            return Ok(());
        }
        for c in text.chars().filter(|c| !c.is_control()) {
            self.action_tx
                .send(Action::InsertChar(c))
                .map_err(|e| crate::Error::channel(e.to_string()))?;
        }
        Ok(())
    }

    fn handle_editing_mode(&self, input: InputEvent) -> Option<Action> {
        if input.matches(&self.bindings.clear) {
            return Some(Action::ClearInput);
        }

        if let Some(c) = input.text_char() {
            return Some(Action::InsertChar(c));
        }

        match input.key {
            Key::Escape => Some(Action::SetInputMode(InputMode::Normal)),
            Key::Backspace => Some(Action::Backspace),
            Key::Delete => Some(Action::Delete),
            Key::Left => Some(Action::CursorLeft),
            Key::Right => Some(Action::CursorRight),
            Key::Home => Some(Action::CursorHome),
            Key::End => Some(Action::CursorEnd),
            Key::Up => Some(Action::ScrollUp),
            Key::Down => Some(Action::ScrollDown),
            Key::PageUp => Some(Action::PageUp),
            Key::PageDown => Some(Action::PageDown),
            _ => None,
        }
    }

    fn handle_normal_mode(&self, input: InputEvent) -> Option<Action> {
        match input.key {
            Key::Char('q') | Key::Char('Q') => Some(Action::Quit),
            Key::Char('?') => Some(Action::ToggleHelp),
            Key::Char('i') | Key::Tab | Key::Escape => {
                Some(Action::SetInputMode(InputMode::Editing))
            }
            Key::Char('k') | Key::Up => Some(Action::ScrollUp),
            Key::Char('j') | Key::Down => Some(Action::ScrollDown),
            Key::Char('g') | Key::Home => Some(Action::GoToTop),
            Key::PageUp => Some(Action::PageUp),
            Key::PageDown => Some(Action::PageDown),
            _ => None,
        }
    }
}
