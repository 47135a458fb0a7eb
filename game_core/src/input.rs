//! Keyboard state and per-frame snapshots

use std::collections::HashSet;

use crate::PaddleIntent;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl Key {
    /// Map a `KeyboardEvent.key` value
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "w" | "W" => Some(Key::LeftUp),
            "s" | "S" => Some(Key::LeftDown),
            "ArrowUp" => Some(Key::RightUp),
            "ArrowDown" => Some(Key::RightDown),
            _ => None,
        }
    }
}

/// Held keys, updated as key events arrive
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Freeze the held keys into paddle intents for one frame
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            left: PaddleIntent::from_keys(self.is_held(Key::LeftUp), self.is_held(Key::LeftDown)),
            right: PaddleIntent::from_keys(
                self.is_held(Key::RightUp),
                self.is_held(Key::RightDown),
            ),
        }
    }
}

/// Intents for both paddles, read once at the start of a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: PaddleIntent,
    pub right: PaddleIntent,
}

impl InputSnapshot {
    pub fn for_player(&self, player_id: u8) -> PaddleIntent {
        if player_id == 0 {
            self.left
        } else {
            self.right
        }
    }
}
