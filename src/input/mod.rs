//! Key-to-command translation for hosts.
//!
//! Accepts the usual 2048 bindings: `w/a/s/d`, vi-style `k/h/j/l`, and
//! upper-case variants. Anything else is rejected before it reaches the
//! game.

use crate::rules::Direction;

/// A host-level request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Restart,
    Quit,
}

impl Command {
    /// Translate a key press. Returns `None` for unbound keys.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        let command = match key.to_ascii_lowercase() {
            'w' | 'k' => Command::Move(Direction::Up),
            's' | 'j' => Command::Move(Direction::Down),
            'a' | 'h' => Command::Move(Direction::Left),
            'd' | 'l' => Command::Move(Direction::Right),
            'r' => Command::Restart,
            'q' => Command::Quit,
            _ => return None,
        };
        Some(command)
    }

    /// Translate a host direction code, as sent by embedding adapters.
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        Direction::from_code(code).map(Command::Move)
    }
}
