//! Keyboard input surface
//!
//! The host forwards raw key identifiers; only five are meaningful and the
//! rest are dropped here so the simulation never sees them.

use serde::{Deserialize, Serialize};

/// Recognized keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Thrust,
    Fire,
    /// Start or restart from the title / game-over screen
    Confirm,
}

impl Key {
    /// Map a DOM-style key identifier
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Thrust),
            " " | "Space" => Some(Key::Fire),
            "Enter" => Some(Key::Confirm),
            _ => None,
        }
    }
}

/// A key transition reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Down(Key),
    Up(Key),
}

impl KeyEvent {
    pub fn key(&self) -> Key {
        match *self {
            KeyEvent::Down(key) | KeyEvent::Up(key) => key,
        }
    }
}

/// Snapshot of held keys, sampled once at the start of each tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub space: bool,
}

impl Keys {
    /// Record a held/released key. Returns false for keys that are not held
    /// flags (confirm).
    pub fn set(&mut self, key: Key, held: bool) -> bool {
        match key {
            Key::Left => self.left = held,
            Key::Right => self.right = held,
            Key::Thrust => self.up = held,
            Key::Fire => self.space = held,
            Key::Confirm => return false,
        }
        true
    }
}
