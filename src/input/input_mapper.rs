//! Input mapping from raw key events to semantic actions
//!
//! Keyboard shortcuts become explorer [`Intent`]s or window-level actions.
//! Pointer input is NOT mapped here - it goes directly to the OrbitController.

use cyviz_core::state::DIMENSION_MIN;
use cyviz_core::Intent;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// Change the explorer state
    Explorer(Intent),
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Exit application (Escape)
    Exit,
}

/// Maps raw key events to actions
pub struct InputMapper {
    speed_step: f32,
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new(0.2)
    }
}

impl InputMapper {
    /// `speed_step` is the rotation speed change per arrow key press
    pub fn new(speed_step: f32) -> Self {
        Self { speed_step }
    }

    /// Map keyboard input to an action
    ///
    /// Returns `None` for releases and unbound keys
    pub fn map_keyboard(&self, key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        if let Some(n) = digit_dimension(key) {
            return Some(InputAction::Explorer(Intent::SetDimension(n)));
        }

        let intent = match key {
            KeyCode::Escape => return Some(InputAction::Exit),
            KeyCode::KeyF => return Some(InputAction::ToggleFullscreen),

            KeyCode::Space => Intent::TogglePlay,
            KeyCode::ArrowLeft => Intent::CycleDimension(-1),
            KeyCode::ArrowRight => Intent::CycleDimension(1),
            KeyCode::ArrowUp => Intent::AdjustSpeed(self.speed_step),
            KeyCode::ArrowDown => Intent::AdjustSpeed(-self.speed_step),
            KeyCode::KeyH => Intent::ToggleHud,
            KeyCode::KeyI => Intent::ToggleInfoPanel,
            KeyCode::KeyR => Intent::ResetCamera,
            KeyCode::KeyD | KeyCode::KeyM => Intent::ToggleDuality,
            KeyCode::KeyP => Intent::CycleProjection,
            KeyCode::KeyS => Intent::ToggleAudio,
            _ => return None,
        };
        Some(InputAction::Explorer(intent))
    }
}

/// Digits 1-9 select dimensions 3-11
fn digit_dimension(key: KeyCode) -> Option<u32> {
    let digit = match key {
        KeyCode::Digit1 => 1,
        KeyCode::Digit2 => 2,
        KeyCode::Digit3 => 3,
        KeyCode::Digit4 => 4,
        KeyCode::Digit5 => 5,
        KeyCode::Digit6 => 6,
        KeyCode::Digit7 => 7,
        KeyCode::Digit8 => 8,
        KeyCode::Digit9 => 9,
        _ => return None,
    };
    Some(DIMENSION_MIN + digit - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: KeyCode) -> Option<InputAction> {
        InputMapper::default().map_keyboard(key, ElementState::Pressed)
    }

    #[test]
    fn test_escape_exits() {
        assert_eq!(press(KeyCode::Escape), Some(InputAction::Exit));
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::default().map_keyboard(KeyCode::Space, ElementState::Released);
        assert_eq!(action, None);
    }

    #[test]
    fn test_digits_select_dimension() {
        assert_eq!(press(KeyCode::Digit1), Some(InputAction::Explorer(Intent::SetDimension(3))));
        assert_eq!(press(KeyCode::Digit5), Some(InputAction::Explorer(Intent::SetDimension(7))));
        assert_eq!(press(KeyCode::Digit9), Some(InputAction::Explorer(Intent::SetDimension(11))));
        assert_eq!(press(KeyCode::Digit0), None);
    }

    #[test]
    fn test_arrows() {
        assert_eq!(press(KeyCode::ArrowLeft), Some(InputAction::Explorer(Intent::CycleDimension(-1))));
        assert_eq!(press(KeyCode::ArrowRight), Some(InputAction::Explorer(Intent::CycleDimension(1))));

        let mapper = InputMapper::new(0.5);
        assert_eq!(
            mapper.map_keyboard(KeyCode::ArrowDown, ElementState::Pressed),
            Some(InputAction::Explorer(Intent::AdjustSpeed(-0.5)))
        );
    }

    #[test]
    fn test_duality_has_two_keys() {
        let d = press(KeyCode::KeyD);
        assert_eq!(d, Some(InputAction::Explorer(Intent::ToggleDuality)));
        assert_eq!(press(KeyCode::KeyM), d);
    }

    #[test]
    fn test_toggle_keys() {
        assert_eq!(press(KeyCode::Space), Some(InputAction::Explorer(Intent::TogglePlay)));
        assert_eq!(press(KeyCode::KeyH), Some(InputAction::Explorer(Intent::ToggleHud)));
        assert_eq!(press(KeyCode::KeyI), Some(InputAction::Explorer(Intent::ToggleInfoPanel)));
        assert_eq!(press(KeyCode::KeyP), Some(InputAction::Explorer(Intent::CycleProjection)));
        assert_eq!(press(KeyCode::KeyS), Some(InputAction::Explorer(Intent::ToggleAudio)));
        assert_eq!(press(KeyCode::KeyR), Some(InputAction::Explorer(Intent::ResetCamera)));
        assert_eq!(press(KeyCode::KeyF), Some(InputAction::ToggleFullscreen));
    }

    #[test]
    fn test_unbound_keys() {
        for key in [KeyCode::KeyW, KeyCode::KeyA, KeyCode::KeyQ, KeyCode::Tab] {
            assert_eq!(press(key), None, "Key {:?} should not be mapped", key);
        }
    }
}
