//! Frame scheduling system
//!
//! Measures the time between redraws and advances fade-in, auto rotation and
//! FPS sampling. Publishes the FPS sample into the explorer state.

use std::time::Instant;
use cyviz_core::ExplorerState;
use cyviz_input::OrbitController;
use cyviz_render::{FrameInputs, FrameLoopState};

/// Drives per-frame timing
pub struct FrameScheduler {
    last_frame: Instant,
    loop_state: FrameLoopState,
}

impl FrameScheduler {
    pub fn new(fade_duration: f32) -> Self {
        Self {
            last_frame: Instant::now(),
            loop_state: FrameLoopState::new(fade_duration),
        }
    }

    /// Measure the elapsed time and advance.
    ///
    /// Returns the FPS sample when one second has accumulated.
    pub fn tick(&mut self, state: &mut ExplorerState) -> Option<u32> {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.advance(dt, state)
    }

    /// Advance by a known time step
    pub fn advance(&mut self, dt: f32, state: &mut ExplorerState) -> Option<u32> {
        let fps_sample = self
            .loop_state
            .advance(dt, state.is_playing(), state.rotation_speed());

        if let Some(fps) = fps_sample {
            state.set_fps(fps);
            log::debug!("FPS: {}", fps);
        }

        fps_sample
    }

    /// Restart timing without resetting fade or rotation, e.g. after a stall
    pub fn reset_clock(&mut self) {
        self.last_frame = Instant::now();
    }

    pub fn loop_state(&self) -> &FrameLoopState {
        &self.loop_state
    }

    /// Snapshot of everything the frame's uniforms depend on
    pub fn frame_inputs(
        &self,
        state: &ExplorerState,
        pointer: &OrbitController,
        aspect: f32,
        light_dir: [f32; 3],
    ) -> FrameInputs {
        FrameInputs {
            dimension: state.dimension(),
            orbit_yaw: state.orbit_yaw(),
            orbit_pitch: state.orbit_pitch(),
            zoom: state.zoom(),
            aspect,
            auto_angle: self.loop_state.auto_angle(),
            time: self.loop_state.elapsed(),
            opacity: self.loop_state.opacity(),
            cursor_ndc: pointer.cursor_ndc(),
            cursor_strength: pointer.cursor_strength(),
            light_dir,
        }
    }
}
