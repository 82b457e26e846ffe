//! Keyboard state and bindings
//!
//! The simulation only ever reads which movement keys are held. Fire and
//! debug are discrete actions handled when the key goes down.

use serde::{Deserialize, Serialize};

/// Movement keys the simulation cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
}

/// Currently held movement keys, in press order, without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet {
    held: Vec<Key>,
}

impl KeySet {
    pub fn press(&mut self, key: Key) {
        if !self.held.contains(&key) {
            self.held.push(key);
        }
    }

    pub fn release(&mut self, key: Key) {
        self.held.retain(|k| *k != key);
    }

    pub fn contains(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}

/// What a physical key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Held for as long as the key is down
    Move(Key),
    Fire,
    ToggleDebug,
}

impl KeyAction {
    /// Map a DOM `KeyboardEvent.key` value to an action
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(KeyAction::Move(Key::Up)),
            "ArrowDown" => Some(KeyAction::Move(Key::Down)),
            " " => Some(KeyAction::Fire),
            "d" => Some(KeyAction::ToggleDebug),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_idempotent() {
        let mut keys = KeySet::default();
        keys.press(Key::Up);
        keys.press(Key::Up);
        keys.release(Key::Up);
        assert!(!keys.contains(Key::Up));
        assert!(keys.is_empty());
    }

    #[test]
    fn test_bindings() {
        assert_eq!(KeyAction::from_key("ArrowUp"), Some(KeyAction::Move(Key::Up)));
        assert_eq!(KeyAction::from_key("ArrowDown"), Some(KeyAction::Move(Key::Down)));
        assert_eq!(KeyAction::from_key(" "), Some(KeyAction::Fire));
        assert_eq!(KeyAction::from_key("d"), Some(KeyAction::ToggleDebug));
        assert_eq!(KeyAction::from_key("ArrowLeft"), None);
        assert_eq!(KeyAction::from_key("D"), None);
    }
}
