//! Interaction state shared by input, rendering and audio
//!
//! A single [`ExplorerState`] is created at startup and passed explicitly to
//! whoever reads or writes it. Every field is written through a setter that
//! enforces its invariant, and input collaborators go through [`Intent`]s so
//! keyboard, pointer and UI sources share the same clamping paths.

use cyviz_math::{DualityMode, ProjectionMethod};

pub const DIMENSION_MIN: u32 = 3;
pub const DIMENSION_MAX: u32 = 11;

pub const SPEED_MIN: f32 = 0.0;
pub const SPEED_MAX: f32 = 3.0;

/// Orbit pitch is kept within ±π/2.2 so the camera never flips over the pole
pub const PITCH_LIMIT: f32 = std::f32::consts::PI / 2.2;

pub const ZOOM_MIN: f32 = 1.5;
pub const ZOOM_MAX: f32 = 12.0;
pub const DEFAULT_ZOOM: f32 = 4.0;

/// Fraction in `[0, 1]` for an in-range dimension
pub fn dimension_to_fraction(n: u32) -> f32 {
    (n.clamp(DIMENSION_MIN, DIMENSION_MAX) - DIMENSION_MIN) as f32
        / (DIMENSION_MAX - DIMENSION_MIN) as f32
}

/// Nearest dimension for a fraction, `round(min + t·(max − min))`
pub fn fraction_to_dimension(t: f32) -> u32 {
    let t = t.clamp(0.0, 1.0);
    let span = (DIMENSION_MAX - DIMENSION_MIN) as f32;
    (DIMENSION_MIN as f32 + t * span).round() as u32
}

/// A normalized request from an input collaborator
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent {
    SetDimension(u32),
    SetDimensionFraction(f32),
    CycleDimension(i32),
    SetDuality(DualityMode),
    ToggleDuality,
    SetProjection(ProjectionMethod),
    CycleProjection,
    SetPlaying(bool),
    TogglePlay,
    SetSpeed(f32),
    AdjustSpeed(f32),
    OrbitBy { yaw: f32, pitch: f32 },
    SetZoom(f32),
    ZoomBy(f32),
    ResetCamera,
    ToggleHud,
    ToggleInfoPanel,
    SetAudioEnabled(bool),
    ToggleAudio,
}

/// Process-wide interaction state
#[derive(Clone, Debug)]
pub struct ExplorerState {
    dimension: u32,
    dimension_t: f32,
    duality: DualityMode,
    projection: ProjectionMethod,
    rotation_speed: f32,
    playing: bool,
    orbit_yaw: f32,
    orbit_pitch: f32,
    zoom: f32,
    hud_visible: bool,
    info_panel_open: bool,
    audio_enabled: bool,

    // Published by the render side
    fps: u32,
    vertex_count: usize,
    gpu_ready: bool,
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self::new()
    }
}

impl ExplorerState {
    /// Startup defaults: n = 3, type-I, stereographic, speed 1, zoom 4, playing
    pub fn new() -> Self {
        Self {
            dimension: DIMENSION_MIN,
            dimension_t: 0.0,
            duality: DualityMode::TypeI,
            projection: ProjectionMethod::Stereographic,
            rotation_speed: 1.0,
            playing: true,
            orbit_yaw: 0.0,
            orbit_pitch: 0.0,
            zoom: DEFAULT_ZOOM,
            hud_visible: true,
            info_panel_open: false,
            audio_enabled: false,
            fps: 0,
            vertex_count: 0,
            gpu_ready: false,
        }
    }

    // --- Readers ---

    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    pub fn dimension_fraction(&self) -> f32 {
        self.dimension_t
    }

    pub fn duality(&self) -> DualityMode {
        self.duality
    }

    pub fn projection(&self) -> ProjectionMethod {
        self.projection
    }

    pub fn rotation_speed(&self) -> f32 {
        self.rotation_speed
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn orbit_yaw(&self) -> f32 {
        self.orbit_yaw
    }

    pub fn orbit_pitch(&self) -> f32 {
        self.orbit_pitch
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn hud_visible(&self) -> bool {
        self.hud_visible
    }

    pub fn info_panel_open(&self) -> bool {
        self.info_panel_open
    }

    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    /// Last FPS sample published by the frame loop
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Vertex count of the installed mesh
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn gpu_ready(&self) -> bool {
        self.gpu_ready
    }

    // --- Writers ---

    /// Set the dimension, clamped to `[3, 11]`, and recompute the fraction
    pub fn set_dimension(&mut self, n: u32) {
        let n = n.clamp(DIMENSION_MIN, DIMENSION_MAX);
        self.dimension = n;
        self.dimension_t = dimension_to_fraction(n);
    }

    /// Set the fraction, clamped to `[0, 1]`, and recompute the dimension
    pub fn set_dimension_fraction(&mut self, t: f32) {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        self.dimension_t = t;
        self.dimension = fraction_to_dimension(t);
    }

    /// Step the dimension by `delta`, stopping at the range ends
    pub fn cycle_dimension(&mut self, delta: i32) {
        let n = (self.dimension as i64 + delta as i64)
            .clamp(DIMENSION_MIN as i64, DIMENSION_MAX as i64);
        self.set_dimension(n as u32);
    }

    pub fn set_duality(&mut self, mode: DualityMode) {
        self.duality = mode;
    }

    pub fn toggle_duality(&mut self) {
        self.duality = self.duality.toggled();
    }

    pub fn set_projection(&mut self, method: ProjectionMethod) {
        self.projection = method;
    }

    pub fn cycle_projection(&mut self) {
        self.projection = self.projection.next();
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Set the auto-rotation speed, clamped to `[0, 3]`
    pub fn set_speed(&mut self, speed: f32) {
        if speed.is_nan() {
            return;
        }
        self.rotation_speed = speed.clamp(SPEED_MIN, SPEED_MAX);
    }

    /// Add to the orbit angles; yaw is unbounded, pitch is clamped to ±[`PITCH_LIMIT`]
    pub fn orbit_by(&mut self, delta_yaw: f32, delta_pitch: f32) {
        if delta_yaw.is_finite() {
            self.orbit_yaw += delta_yaw;
        }
        if delta_pitch.is_finite() {
            self.orbit_pitch = (self.orbit_pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
    }

    /// Set the camera distance, clamped to `[1.5, 12]`
    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom.is_nan() {
            return;
        }
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Orbit back to the front view at the default distance
    pub fn reset_camera(&mut self) {
        self.orbit_yaw = 0.0;
        self.orbit_pitch = 0.0;
        self.zoom = DEFAULT_ZOOM;
    }

    pub fn toggle_hud(&mut self) {
        self.hud_visible = !self.hud_visible;
    }

    pub fn toggle_info_panel(&mut self) {
        self.info_panel_open = !self.info_panel_open;
    }

    pub fn set_audio_enabled(&mut self, enabled: bool) {
        self.audio_enabled = enabled;
    }

    pub fn set_fps(&mut self, fps: u32) {
        self.fps = fps;
    }

    pub fn set_vertex_count(&mut self, count: usize) {
        self.vertex_count = count;
    }

    pub fn set_gpu_ready(&mut self, ready: bool) {
        self.gpu_ready = ready;
    }

    /// Apply a collaborator intent
    pub fn apply(&mut self, intent: Intent) {
        log::debug!("Intent: {:?}", intent);
        match intent {
            Intent::SetDimension(n) => self.set_dimension(n),
            Intent::SetDimensionFraction(t) => self.set_dimension_fraction(t),
            Intent::CycleDimension(delta) => self.cycle_dimension(delta),
            Intent::SetDuality(mode) => self.set_duality(mode),
            Intent::ToggleDuality => self.toggle_duality(),
            Intent::SetProjection(method) => self.set_projection(method),
            Intent::CycleProjection => self.cycle_projection(),
            Intent::SetPlaying(playing) => self.set_playing(playing),
            Intent::TogglePlay => self.set_playing(!self.playing),
            Intent::SetSpeed(speed) => self.set_speed(speed),
            Intent::AdjustSpeed(delta) => self.set_speed(self.rotation_speed + delta),
            Intent::OrbitBy { yaw, pitch } => self.orbit_by(yaw, pitch),
            Intent::SetZoom(zoom) => self.set_zoom(zoom),
            Intent::ZoomBy(delta) => self.set_zoom(self.zoom + delta),
            Intent::ResetCamera => self.reset_camera(),
            Intent::ToggleHud => self.toggle_hud(),
            Intent::ToggleInfoPanel => self.toggle_info_panel(),
            Intent::SetAudioEnabled(enabled) => self.set_audio_enabled(enabled),
            Intent::ToggleAudio => self.set_audio_enabled(!self.audio_enabled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = ExplorerState::new();
        assert_eq!(s.dimension(), 3);
        assert_eq!(s.dimension_fraction(), 0.0);
        assert_eq!(s.duality(), DualityMode::TypeI);
        assert_eq!(s.projection(), ProjectionMethod::Stereographic);
        assert_eq!(s.rotation_speed(), 1.0);
        assert_eq!(s.zoom(), 4.0);
        assert!(s.is_playing());
        assert!(s.hud_visible());
        assert!(!s.info_panel_open());
        assert!(!s.audio_enabled());
        assert!(!s.gpu_ready());
    }

    #[test]
    fn test_dimension_fraction_round_trip() {
        let mut s = ExplorerState::new();
        for n in DIMENSION_MIN..=DIMENSION_MAX {
            s.set_dimension(n);
            assert_eq!(fraction_to_dimension(s.dimension_fraction()), n);
        }
    }

    #[test]
    fn test_fraction_sets_dimension() {
        let mut s = ExplorerState::new();
        s.set_dimension_fraction(0.5);
        assert_eq!(s.dimension(), 7);
        assert_eq!(s.dimension_fraction(), 0.5);

        // 3 + 0.3 * 8 = 5.4 -> 5, fraction kept as given
        s.set_dimension_fraction(0.3);
        assert_eq!(s.dimension(), 5);
        assert_eq!(s.dimension_fraction(), 0.3);

        s.set_dimension_fraction(2.0);
        assert_eq!(s.dimension(), 11);
        assert_eq!(s.dimension_fraction(), 1.0);
    }

    #[test]
    fn test_dimension_clamped() {
        let mut s = ExplorerState::new();
        s.set_dimension(1);
        assert_eq!(s.dimension(), 3);
        s.set_dimension(40);
        assert_eq!(s.dimension(), 11);
        assert_eq!(s.dimension_fraction(), 1.0);
    }

    #[test]
    fn test_cycle_dimension_stops_at_ends() {
        let mut s = ExplorerState::new();
        s.cycle_dimension(-1);
        assert_eq!(s.dimension(), 3);
        s.cycle_dimension(1);
        assert_eq!(s.dimension(), 4);
        assert_eq!(s.dimension_fraction(), 0.125);
        s.cycle_dimension(100);
        assert_eq!(s.dimension(), 11);
    }

    #[test]
    fn test_speed_clamped() {
        let mut s = ExplorerState::new();
        s.set_speed(5.0);
        assert_eq!(s.rotation_speed(), 3.0);
        s.set_speed(-1.0);
        assert_eq!(s.rotation_speed(), 0.0);
        s.apply(Intent::AdjustSpeed(0.2));
        assert!((s.rotation_speed() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_orbit_pitch_clamped_yaw_free() {
        let mut s = ExplorerState::new();
        s.orbit_by(10.0, 5.0);
        assert_eq!(s.orbit_yaw(), 10.0);
        assert_eq!(s.orbit_pitch(), PITCH_LIMIT);
        s.orbit_by(-30.0, -50.0);
        assert_eq!(s.orbit_yaw(), -20.0);
        assert_eq!(s.orbit_pitch(), -PITCH_LIMIT);
        assert!((PITCH_LIMIT - 1.428).abs() < 1e-3);
    }

    #[test]
    fn test_zoom_clamped_and_reset() {
        let mut s = ExplorerState::new();
        s.set_zoom(0.2);
        assert_eq!(s.zoom(), ZOOM_MIN);
        s.apply(Intent::ZoomBy(100.0));
        assert_eq!(s.zoom(), ZOOM_MAX);
        s.orbit_by(1.0, 0.5);
        s.apply(Intent::ResetCamera);
        assert_eq!((s.orbit_yaw(), s.orbit_pitch(), s.zoom()), (0.0, 0.0, 4.0));
    }

    #[test]
    fn test_nan_inputs_ignored() {
        let mut s = ExplorerState::new();
        s.set_zoom(f32::NAN);
        s.set_speed(f32::NAN);
        s.orbit_by(f32::NAN, f32::NAN);
        s.set_dimension_fraction(f32::NAN);
        assert_eq!(s.zoom(), 4.0);
        assert_eq!(s.rotation_speed(), 1.0);
        assert_eq!((s.orbit_yaw(), s.orbit_pitch()), (0.0, 0.0));
        assert_eq!(s.dimension(), 3);
    }

    #[test]
    fn test_toggles() {
        let mut s = ExplorerState::new();
        s.apply(Intent::ToggleDuality);
        assert_eq!(s.duality(), DualityMode::HeteroticE);
        s.apply(Intent::CycleProjection);
        assert_eq!(s.projection(), ProjectionMethod::Orthographic);
        s.apply(Intent::TogglePlay);
        assert!(!s.is_playing());
        s.apply(Intent::ToggleHud);
        assert!(!s.hud_visible());
        s.apply(Intent::ToggleInfoPanel);
        assert!(s.info_panel_open());
        s.apply(Intent::ToggleAudio);
        assert!(s.audio_enabled());
        s.apply(Intent::SetAudioEnabled(false));
        assert!(!s.audio_enabled());
    }
}
