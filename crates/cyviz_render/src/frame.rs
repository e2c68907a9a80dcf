//! Per-frame timing, camera math and uniform packing
//!
//! Nothing here touches the device: [`FrameLoopState`] advances time-based
//! values and [`pack_uniforms`] turns a [`FrameInputs`] snapshot into the two
//! uniform blocks the pipelines upload.

use cyviz_core::dimension_color;
use cyviz_math::mat4::{self, Mat4};

use crate::pipeline::{ManifoldUniforms, StarfieldUniforms};

/// Auto-rotation angle gained per second at speed 1
pub const AUTO_ROTATION_RATE: f32 = 0.5;
/// Share of the auto-rotation angle added to the starfield yaw
pub const STARFIELD_AUTO_PARALLAX: f32 = 0.1;
/// Cursor plane scale relative to the camera distance
pub const CURSOR_DEPTH_SCALE: f32 = 0.3;

/// Camera projection settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSettings {
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    /// Auto pitch as a fraction of the auto yaw angle
    pub auto_pitch_ratio: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_y: std::f32::consts::FRAC_PI_4,
            near: 0.1,
            far: 100.0,
            auto_pitch_ratio: 0.3,
        }
    }
}

/// Time-driven values that persist across frames
#[derive(Clone, Debug)]
pub struct FrameLoopState {
    elapsed: f32,
    auto_angle: f32,
    opacity: f32,
    fade_duration: f32,
    fps_frames: u32,
    fps_accum: f32,
}

impl FrameLoopState {
    /// Start a loop that fades the surface in over `fade_duration` seconds
    pub fn new(fade_duration: f32) -> Self {
        Self {
            elapsed: 0.0,
            auto_angle: 0.0,
            opacity: 0.0,
            fade_duration,
            fps_frames: 0,
            fps_accum: 0.0,
        }
    }

    /// Advance by `dt` seconds.
    ///
    /// Returns an FPS sample once at least one second has accumulated, then
    /// starts a new window.
    pub fn advance(&mut self, dt: f32, playing: bool, speed: f32) -> Option<u32> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        self.elapsed += dt;

        self.opacity = if self.fade_duration > 0.0 {
            (self.opacity + dt / self.fade_duration).min(1.0)
        } else {
            1.0
        };

        if playing {
            self.auto_angle += dt * speed * AUTO_ROTATION_RATE;
        }

        self.fps_frames += 1;
        self.fps_accum += dt;
        if self.fps_accum >= 1.0 {
            let fps = (self.fps_frames as f32 / self.fps_accum).round() as u32;
            self.fps_frames = 0;
            self.fps_accum = 0.0;
            Some(fps)
        } else {
            None
        }
    }

    /// Seconds since the loop started
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn auto_angle(&self) -> f32 {
        self.auto_angle
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

/// Everything a frame's uniforms depend on
#[derive(Clone, Copy, Debug)]
pub struct FrameInputs {
    pub dimension: u32,
    pub orbit_yaw: f32,
    pub orbit_pitch: f32,
    pub zoom: f32,
    pub aspect: f32,
    pub auto_angle: f32,
    pub time: f32,
    pub opacity: f32,
    pub cursor_ndc: [f32; 2],
    pub cursor_strength: f32,
    pub light_dir: [f32; 3],
}

/// Manual orbit outermost, automatic spin innermost
pub fn model_matrix(orbit_yaw: f32, orbit_pitch: f32, auto_angle: f32, auto_pitch_ratio: f32) -> Mat4 {
    let orbit = mat4::mul(mat4::rotate_y(orbit_yaw), mat4::rotate_x(orbit_pitch));
    let spin = mat4::mul(
        mat4::rotate_y(auto_angle),
        mat4::rotate_x(auto_angle * auto_pitch_ratio),
    );
    mat4::mul(orbit, spin)
}

/// Camera on the +Z axis at distance `zoom`, looking at the origin
pub fn view_matrix(zoom: f32) -> Mat4 {
    mat4::look_at([0.0, 0.0, zoom], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0])
}

pub fn projection_matrix(camera: &CameraSettings, aspect: f32) -> Mat4 {
    mat4::perspective(camera.fov_y, aspect, camera.near, camera.far)
}

/// Approximate world position of the cursor on a plane through the origin.
///
/// The NDC cursor is scaled by the half-extent of the view frustum at a
/// fraction of the camera distance. The w component carries the strength.
pub fn cursor_world(cursor_ndc: [f32; 2], strength: f32, fov_y: f32, aspect: f32, zoom: f32) -> [f32; 4] {
    let half = (fov_y / 2.0).tan() * zoom * CURSOR_DEPTH_SCALE;
    [cursor_ndc[0] * half * aspect, cursor_ndc[1] * half, 0.0, strength]
}

/// Build both uniform blocks for a frame
pub fn pack_uniforms(inputs: &FrameInputs, camera: &CameraSettings) -> (ManifoldUniforms, StarfieldUniforms) {
    let color = dimension_color(inputs.dimension);
    let light = inputs.light_dir;

    let manifold = ManifoldUniforms {
        model: model_matrix(inputs.orbit_yaw, inputs.orbit_pitch, inputs.auto_angle, camera.auto_pitch_ratio),
        view: view_matrix(inputs.zoom),
        projection: projection_matrix(camera, inputs.aspect),
        color: [color[0], color[1], color[2], 0.0],
        light_dir: [light[0], light[1], light[2], inputs.time],
        cursor: cursor_world(inputs.cursor_ndc, inputs.cursor_strength, camera.fov_y, inputs.aspect, inputs.zoom),
        opacity: [inputs.opacity, 0.0, 0.0, 0.0],
    };

    let starfield = StarfieldUniforms::new(
        inputs.orbit_yaw + inputs.auto_angle * STARFIELD_AUTO_PARALLAX,
        inputs.orbit_pitch,
        inputs.time,
    );

    (manifold, starfield)
}
