//! Physical key codes to game keys

use winit::keyboard::KeyCode;

use crate::input::Key;

/// Game key bound to a physical key, if any. Physical codes keep the
/// bindings in the same place on non-QWERTY layouts.
pub fn key_from_code(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::KeyW => Some(Key::W),
        KeyCode::KeyS => Some(Key::S),
        KeyCode::KeyI => Some(Key::I),
        KeyCode::KeyK => Some(Key::K),
        KeyCode::ControlLeft => Some(Key::LeftCtrl),
        KeyCode::KeyC => Some(Key::C),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_keys() {
        assert_eq!(key_from_code(KeyCode::KeyW), Some(Key::W));
        assert_eq!(key_from_code(KeyCode::KeyK), Some(Key::K));
        assert_eq!(key_from_code(KeyCode::ControlLeft), Some(Key::LeftCtrl));
        assert_eq!(key_from_code(KeyCode::ControlRight), None);
        assert_eq!(key_from_code(KeyCode::KeyA), None);
    }
}
