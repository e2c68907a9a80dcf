//! Orbit controller for pointer input
//!
//! Controls:
//! - Left drag: orbit yaw (horizontal) and pitch (vertical)
//! - Wheel: zoom in/out
//! - Pointer hover: moves the attracting cursor over the surface
//!
//! Pointer motion is accumulated between frames and flushed into an
//! [`OrbitControl`] target by [`OrbitController::update`].

use cyviz_core::state::ExplorerState;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};

/// Pointer controller that drives the orbit camera
pub struct OrbitController {
    // Drag state
    dragging: bool,
    last_pointer: Option<(f64, f64)>,
    pending_yaw: f32,
    pending_pitch: f32,
    pending_zoom: f32,

    // Cursor in normalized device coordinates
    cursor_ndc: [f32; 2],
    cursor_active: bool,

    // Configuration
    pub orbit_sensitivity: f32,
    pub zoom_sensitivity: f32,
    pub line_scroll_pixels: f32,
}

impl Default for OrbitController {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitController {
    pub fn new() -> Self {
        Self {
            dragging: false,
            last_pointer: None,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_zoom: 0.0,

            cursor_ndc: [0.0, 0.0],
            cursor_active: false,

            orbit_sensitivity: 0.005,
            zoom_sensitivity: 0.005,
            line_scroll_pixels: 100.0,
        }
    }

    /// Process mouse button input. Only the left button drags.
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button != MouseButton::Left {
            return;
        }
        match state {
            ElementState::Pressed => {
                self.dragging = true;
                self.last_pointer = None;
            }
            ElementState::Released => {
                self.dragging = false;
                self.last_pointer = None;
            }
        }
    }

    /// Process a pointer position in physical pixels inside a `width × height` surface
    pub fn process_cursor_moved(&mut self, x: f64, y: f64, width: u32, height: u32) {
        if width > 0 && height > 0 {
            let nx = (x / width as f64) * 2.0 - 1.0;
            let ny = -((y / height as f64) * 2.0 - 1.0);
            self.cursor_ndc = [nx as f32, ny as f32];
            self.cursor_active = true;
        }

        if !self.dragging {
            return;
        }
        if let Some((lx, ly)) = self.last_pointer {
            self.pending_yaw += (x - lx) as f32;
            self.pending_pitch += (y - ly) as f32;
        }
        self.last_pointer = Some((x, y));
    }

    /// The pointer left the window; the cursor stops attracting the surface
    pub fn process_cursor_left(&mut self) {
        self.cursor_active = false;
        self.last_pointer = None;
    }

    /// Process wheel input.
    ///
    /// Scrolling toward the user (negative winit delta) zooms out. Line deltas
    /// are converted to pixels first so both delta kinds share one sensitivity.
    pub fn process_scroll(&mut self, delta: MouseScrollDelta) {
        let pixels = match delta {
            MouseScrollDelta::LineDelta(_, y) => y * self.line_scroll_pixels,
            MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
        };
        self.pending_zoom -= pixels;
    }

    /// Flush accumulated pointer input into the target
    pub fn update<C: OrbitControl>(&mut self, target: &mut C) {
        if self.pending_yaw != 0.0 || self.pending_pitch != 0.0 {
            target.orbit_by(
                self.pending_yaw * self.orbit_sensitivity,
                self.pending_pitch * self.orbit_sensitivity,
            );
        }
        if self.pending_zoom != 0.0 {
            target.zoom_by(self.pending_zoom * self.zoom_sensitivity);
        }

        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
        self.pending_zoom = 0.0;
    }

    pub fn cursor_ndc(&self) -> [f32; 2] {
        self.cursor_ndc
    }

    /// Attraction strength: 1 while hovering without dragging, otherwise 0
    pub fn cursor_strength(&self) -> f32 {
        if self.cursor_active && !self.dragging {
            1.0
        } else {
            0.0
        }
    }

    /// Builder: set orbit sensitivity in radians per pixel
    pub fn with_orbit_sensitivity(mut self, sensitivity: f32) -> Self {
        self.orbit_sensitivity = sensitivity;
        self
    }

    /// Builder: set zoom sensitivity per scrolled pixel
    pub fn with_zoom_sensitivity(mut self, sensitivity: f32) -> Self {
        self.zoom_sensitivity = sensitivity;
        self
    }

    /// Builder: set how many pixels one scrolled line counts as
    pub fn with_line_scroll_pixels(mut self, pixels: f32) -> Self {
        self.line_scroll_pixels = pixels;
        self
    }
}

/// Trait for orbit camera control
/// Allows the controller to drive anything that can orbit and zoom
pub trait OrbitControl {
    fn orbit_by(&mut self, delta_yaw: f32, delta_pitch: f32);
    fn zoom_by(&mut self, delta: f32);
}

impl OrbitControl for ExplorerState {
    fn orbit_by(&mut self, delta_yaw: f32, delta_pitch: f32) {
        ExplorerState::orbit_by(self, delta_yaw, delta_pitch);
    }

    fn zoom_by(&mut self, delta: f32) {
        let zoom = self.zoom();
        self.set_zoom(zoom + delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[derive(Default)]
    struct Recorder {
        yaw: f32,
        pitch: f32,
        zoom: f32,
        calls: u32,
    }

    impl OrbitControl for Recorder {
        fn orbit_by(&mut self, delta_yaw: f32, delta_pitch: f32) {
            self.yaw += delta_yaw;
            self.pitch += delta_pitch;
            self.calls += 1;
        }

        fn zoom_by(&mut self, delta: f32) {
            self.zoom += delta;
            self.calls += 1;
        }
    }

    #[test]
    fn test_drag_orbits() {
        let mut ctrl = OrbitController::new();
        let mut target = Recorder::default();

        ctrl.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        ctrl.process_cursor_moved(100.0, 100.0, 800, 600);
        ctrl.process_cursor_moved(120.0, 90.0, 800, 600);
        ctrl.update(&mut target);

        assert!((target.yaw - 0.1).abs() < 1e-6);
        assert!((target.pitch + 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_move_without_drag_does_not_orbit() {
        let mut ctrl = OrbitController::new();
        let mut target = Recorder::default();

        ctrl.process_cursor_moved(100.0, 100.0, 800, 600);
        ctrl.process_cursor_moved(300.0, 200.0, 800, 600);
        ctrl.update(&mut target);

        assert_eq!(target.calls, 0);
    }

    #[test]
    fn test_right_button_ignored() {
        let mut ctrl = OrbitController::new();
        let mut target = Recorder::default();

        ctrl.process_cursor_moved(100.0, 100.0, 800, 600);
        ctrl.process_mouse_button(MouseButton::Right, ElementState::Pressed);
        ctrl.process_cursor_moved(300.0, 200.0, 800, 600);
        ctrl.update(&mut target);

        assert_eq!(target.calls, 0);
        assert_eq!(ctrl.cursor_strength(), 1.0);
    }

    #[test]
    fn test_pending_cleared_after_update() {
        let mut ctrl = OrbitController::new();
        let mut target = Recorder::default();

        ctrl.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        ctrl.process_cursor_moved(0.0, 0.0, 800, 600);
        ctrl.process_cursor_moved(10.0, 0.0, 800, 600);
        ctrl.update(&mut target);
        ctrl.update(&mut target);

        assert_eq!(target.calls, 1);
    }

    #[test]
    fn test_cursor_ndc() {
        let mut ctrl = OrbitController::new();
        ctrl.process_cursor_moved(400.0, 300.0, 800, 600);
        assert_eq!(ctrl.cursor_ndc(), [0.0, 0.0]);

        ctrl.process_cursor_moved(0.0, 0.0, 800, 600);
        assert_eq!(ctrl.cursor_ndc(), [-1.0, 1.0]);

        ctrl.process_cursor_moved(800.0, 600.0, 800, 600);
        assert_eq!(ctrl.cursor_ndc(), [1.0, -1.0]);
        assert_eq!(ctrl.cursor_strength(), 1.0);
    }

    #[test]
    fn test_cursor_strength() {
        let mut ctrl = OrbitController::new();
        assert_eq!(ctrl.cursor_strength(), 0.0);

        ctrl.process_cursor_moved(10.0, 10.0, 800, 600);
        assert_eq!(ctrl.cursor_strength(), 1.0);

        ctrl.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        assert_eq!(ctrl.cursor_strength(), 0.0);

        ctrl.process_mouse_button(MouseButton::Left, ElementState::Released);
        ctrl.process_cursor_left();
        assert_eq!(ctrl.cursor_strength(), 0.0);
    }

    #[test]
    fn test_zero_sized_window_keeps_cursor() {
        let mut ctrl = OrbitController::new();
        ctrl.process_cursor_moved(5.0, 5.0, 0, 0);
        assert_eq!(ctrl.cursor_strength(), 0.0);
    }

    #[test]
    fn test_scroll_zoom() {
        let mut ctrl = OrbitController::new();
        let mut target = Recorder::default();

        // One line toward the user: +100 px -> zoom out by 0.5
        ctrl.process_scroll(MouseScrollDelta::LineDelta(0.0, -1.0));
        ctrl.update(&mut target);
        assert!((target.zoom - 0.5).abs() < 1e-6);

        ctrl.process_scroll(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 40.0)));
        ctrl.update(&mut target);
        assert!((target.zoom - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_explorer_state_target_clamps() {
        let mut ctrl = OrbitController::new();
        let mut state = ExplorerState::new();

        ctrl.process_scroll(MouseScrollDelta::LineDelta(0.0, 50.0));
        ctrl.update(&mut state);
        assert_eq!(state.zoom(), cyviz_core::state::ZOOM_MIN);

        ctrl.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        ctrl.process_cursor_moved(0.0, 0.0, 800, 600);
        ctrl.process_cursor_moved(0.0, 2000.0, 800, 600);
        ctrl.update(&mut state);
        assert_eq!(state.orbit_pitch(), cyviz_core::state::PITCH_LIMIT);
    }
}
