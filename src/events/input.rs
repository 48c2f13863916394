//! Input event types and key binding parsing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    Other,
}

impl From<KeyCode> for Key {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Other,
        }
    }
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Self {
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

/// A processed input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        Self {
            key: Key::from(event.code),
            modifiers: Modifiers::from(event.modifiers),
        }
    }
}

impl InputEvent {
    /// The character to insert into a text field, if this is plain typing.
    ///
    /// Shift is folded into the character itself, so only Ctrl and Alt
    /// disqualify a key.
    pub fn text_char(&self) -> Option<char> {
        match self.key {
            Key::Char(c) if !self.modifiers.ctrl && !self.modifiers.alt => Some(c),
            _ => None,
        }
    }

    /// Check if this event triggers the given binding.
    pub fn matches(&self, binding: &KeyBinding) -> bool {
        if self.modifiers != binding.modifiers {
            return false;
        }
        match (self.key, binding.key) {
            (Key::Char(a), Key::Char(b)) => a.eq_ignore_ascii_case(&b),
            (a, b) => a == b,
        }
    }
}

/// A key binding parsed from configuration (e.g. "Ctrl+u", "Enter", "F1").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyBinding {
    /// Parse a binding string. Returns `None` for unknown key names.
    pub fn parse(binding: &str) -> Option<Self> {
        let mut modifiers = Modifiers::default();
        let mut key = None;

        for part in binding.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" => modifiers.ctrl = true,
                "alt" => modifiers.alt = true,
                "enter" => key = Some(Key::Enter),
                "esc" | "escape" => key = Some(Key::Escape),
                "backspace" => key = Some(Key::Backspace),
                "delete" | "del" => key = Some(Key::Delete),
                "tab" => key = Some(Key::Tab),
                "up" => key = Some(Key::Up),
                "down" => key = Some(Key::Down),
                "left" => key = Some(Key::Left),
                "right" => key = Some(Key::Right),
                "home" => key = Some(Key::Home),
                "end" => key = Some(Key::End),
                "pageup" => key = Some(Key::PageUp),
                "pagedown" => key = Some(Key::PageDown),
                s if s.len() > 1 && s.starts_with('f') => {
                    key = Some(Key::F(s[1..].parse().ok()?));
                }
                _ => {
                    let mut chars = part.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => key = Some(Key::Char(c)),
                        _ => return None,
                    }
                }
            }
        }

        key.map(|key| Self { key, modifiers })
    }

    /// Parse a binding, falling back to `default` when it is malformed.
    pub fn parse_or(binding: &str, default: KeyBinding) -> Self {
        Self::parse(binding).unwrap_or_else(|| {
            tracing::warn!("Ignoring invalid key binding {:?}", binding);
            default
        })
    }

    /// Binding for a plain key without modifiers.
    pub const fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers {
                ctrl: false,
                alt: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(code: KeyCode, mods: KeyModifiers) -> InputEvent {
        InputEvent::from(KeyEvent::new(code, mods))
    }

    #[test]
    fn test_parse_bindings() {
        assert_eq!(KeyBinding::parse("Enter"), Some(KeyBinding::plain(Key::Enter)));
        assert_eq!(KeyBinding::parse("F1"), Some(KeyBinding::plain(Key::F(1))));
        let ctrl_u = KeyBinding::parse("Ctrl+u").unwrap();
        assert_eq!(ctrl_u.key, Key::Char('u'));
        assert!(ctrl_u.modifiers.ctrl);
        assert_eq!(KeyBinding::parse("Ctrl+"), None);
        assert_eq!(KeyBinding::parse("nonsense"), None);
    }

    #[test]
    fn test_matches_modifiers_exactly() {
        let binding = KeyBinding::parse("Ctrl+c").unwrap();
        assert!(event(KeyCode::Char('c'), KeyModifiers::CONTROL).matches(&binding));
        assert!(!event(KeyCode::Char('c'), KeyModifiers::NONE).matches(&binding));
    }

    #[test]
    fn test_char_match_ignores_case() {
        let binding = KeyBinding::parse("q").unwrap();
        assert!(event(KeyCode::Char('Q'), KeyModifiers::NONE).matches(&binding));
    }

    #[test]
    fn test_text_char() {
        assert_eq!(
            event(KeyCode::Char('A'), KeyModifiers::SHIFT).text_char(),
            Some('A')
        );
        assert_eq!(
            event(KeyCode::Char('a'), KeyModifiers::CONTROL).text_char(),
            None
        );
        assert_eq!(event(KeyCode::Enter, KeyModifiers::NONE).text_char(), None);
    }

    #[test]
    fn test_parse_or_falls_back() {
        let fallback = KeyBinding::plain(Key::Enter);
        assert_eq!(KeyBinding::parse_or("???", fallback), fallback);
    }
}
