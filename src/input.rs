//! Keyboard state to paddle intents
//!
//! The platform layer keeps a `KeySet` of held keys up to date from
//! press/release events; once per frame `map_input` turns that snapshot
//! into a `TickInput`. No history is kept between frames.

use crate::sim::{Intent, TickInput};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Player 1 up
    W,
    /// Player 1 down
    S,
    /// Player 2 up
    I,
    /// Player 2 down
    K,
    LeftCtrl,
    C,
}

impl Key {
    pub const ALL: [Key; 6] = [Key::W, Key::S, Key::I, Key::K, Key::LeftCtrl, Key::C];

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Snapshot of which keys are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeySet {
    held: u8,
}

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held |= key.bit();
    }

    pub fn release(&mut self, key: Key) {
        self.held &= !key.bit();
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held & key.bit() != 0
    }

    /// Builder-style press, handy for tests and scripted input
    pub fn with(mut self, key: Key) -> Self {
        self.press(key);
        self
    }
}

/// Translate held keys and the window-close flag into this frame's input
pub fn map_input(keys: &KeySet, close_requested: bool) -> TickInput {
    for key in Key::ALL {
        if keys.is_held(key) {
            log::debug!("key held: {:?}", key);
        }
    }

    let kill_combo = keys.is_held(Key::LeftCtrl) && keys.is_held(Key::C);
    if kill_combo {
        log::debug!("quit (Ctrl + C)");
    }

    TickInput {
        left: Intent::from_keys(keys.is_held(Key::W), keys.is_held(Key::S)),
        right: Intent::from_keys(keys.is_held(Key::I), keys.is_held(Key::K)),
        quit: close_requested || kill_combo,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyset_press_release() {
        let mut keys = KeySet::new();
        keys.press(Key::W);
        keys.press(Key::K);
        assert!(keys.is_held(Key::W));
        assert!(keys.is_held(Key::K));
        assert!(!keys.is_held(Key::S));

        keys.release(Key::W);
        assert!(!keys.is_held(Key::W));
        assert!(keys.is_held(Key::K));
    }

    #[test]
    fn test_paddle_keys() {
        let input = map_input(&KeySet::new().with(Key::W).with(Key::K), false);
        assert_eq!(input.left, Intent::Up);
        assert_eq!(input.right, Intent::Down);
        assert!(!input.quit);

        let input = map_input(&KeySet::new().with(Key::S).with(Key::I), false);
        assert_eq!(input.left, Intent::Down);
        assert_eq!(input.right, Intent::Up);
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let keys = KeySet::new().with(Key::W).with(Key::S);
        assert_eq!(map_input(&keys, false).left, Intent::Idle);
    }

    #[test]
    fn test_quit_sources() {
        assert!(map_input(&KeySet::new(), true).quit);
        assert!(map_input(&KeySet::new().with(Key::LeftCtrl).with(Key::C), false).quit);
        assert!(!map_input(&KeySet::new().with(Key::C), false).quit);
        assert!(!map_input(&KeySet::new().with(Key::LeftCtrl), false).quit);
    }
}
