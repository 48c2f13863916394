//! Event handling for portopt.
//!
//! Terminal key, mouse and paste events are translated into store
//! [`Action`](crate::state::Action)s.

mod handler;
mod input;

pub use handler::EventHandler;
pub use input::{InputEvent, Key, KeyBinding, Modifiers};
