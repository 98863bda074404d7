//! Keyboard state
//!
//! Key events arrive between frames and only touch the pressed set; the next
//! tick samples it once.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Keys the game cares about
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    /// Toggles autopilot
    Autopilot,
    /// Anything else; still counts as "any key" for starting
    Other(String),
}

impl Key {
    /// Map a `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowUp" | "w" | "W" => Key::Up,
            "ArrowDown" | "s" | "S" => Key::Down,
            "a" | "A" => Key::Autopilot,
            other => Key::Other(other.to_string()),
        }
    }
}

/// Currently held keys plus sticky toggles
#[derive(Debug, Clone, Default)]
pub struct KeySet {
    held: HashSet<Key>,
    autopilot: bool,
}

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Auto-repeat presses are ignored for toggles.
    pub fn press(&mut self, key: Key) {
        if key == Key::Autopilot && !self.held.contains(&key) {
            self.autopilot = !self.autopilot;
            log::info!("Autopilot: {}", self.autopilot);
        }
        self.held.insert(key);
    }

    /// Mark a key held without acting on toggles
    pub fn hold(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: &Key) {
        self.held.remove(key);
    }

    pub fn is_held(&self, key: &Key) -> bool {
        self.held.contains(key)
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    /// Snapshot for the next tick; opposite keys cancel out
    pub fn sample(&self) -> TickInput {
        let up = self.is_held(&Key::Up) as i8;
        let down = self.is_held(&Key::Down) as i8;
        TickInput {
            direction: down - up,
            autopilot: self.autopilot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dom_mapping() {
        assert_eq!(Key::from_dom("ArrowUp"), Key::Up);
        assert_eq!(Key::from_dom("s"), Key::Down);
        assert_eq!(Key::from_dom("Enter"), Key::Other("Enter".into()));
    }

    #[test]
    fn test_sample_direction() {
        let mut keys = KeySet::new();
        assert_eq!(keys.sample().direction, 0);

        keys.press(Key::Up);
        assert_eq!(keys.sample().direction, -1);

        keys.press(Key::Down);
        assert_eq!(keys.sample().direction, 0);

        keys.release(&Key::Up);
        assert_eq!(keys.sample().direction, 1);
    }

    #[test]
    fn test_autopilot_toggle_ignores_repeat() {
        let mut keys = KeySet::new();
        keys.press(Key::Autopilot);
        keys.press(Key::Autopilot); // auto-repeat
        assert!(keys.autopilot());

        keys.release(&Key::Autopilot);
        keys.press(Key::Autopilot);
        assert!(!keys.autopilot());
        assert!(!keys.sample().autopilot);
    }

    #[test]
    fn test_hold_skips_toggle() {
        let mut keys = KeySet::new();
        keys.hold(Key::Autopilot);
        assert!(keys.is_held(&Key::Autopilot));
        assert!(!keys.autopilot());
    }
}
