//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`CYVIZ_SECTION__KEY`)

use cyviz_core::ExplorerState;
use cyviz_math::{DualityMode, ProjectionMethod};
use cyviz_render::CameraSettings;
use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Initial explorer state
    #[serde(default)]
    pub explorer: ExplorerConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`CYVIZ_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // CYVIZ_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("CYVIZ_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Interaction state at startup
    pub fn initial_state(&self) -> ExplorerState {
        let mut state = ExplorerState::new();
        self.explorer.apply_to(&mut state);
        if !self.debug.hud_visible {
            state.toggle_hud();
        }
        state
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title, also the HUD prefix
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Calabi-Yau Explorer".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Auto-rotation pitch as a fraction of the auto yaw
    pub auto_pitch_ratio: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 45.0,
            near: 0.1,
            far: 100.0,
            auto_pitch_ratio: 0.3,
        }
    }
}

impl CameraConfig {
    pub fn to_settings(&self) -> CameraSettings {
        CameraSettings {
            fov_y: self.fov.to_radians(),
            near: self.near,
            far: self.far,
            auto_pitch_ratio: self.auto_pitch_ratio,
        }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Orbit radians per dragged pixel
    pub orbit_sensitivity: f32,
    /// Zoom change per scrolled pixel
    pub zoom_sensitivity: f32,
    /// Pixels counted for one scrolled line
    pub line_scroll_pixels: f32,
    /// Rotation speed change per arrow key press
    pub speed_step: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            orbit_sensitivity: 0.005,
            zoom_sensitivity: 0.005,
            line_scroll_pixels: 100.0,
            speed_step: 0.2,
        }
    }
}

/// Explorer startup values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub dimension: u32,
    pub duality: DualityMode,
    pub projection: ProjectionMethod,
    pub rotation_speed: f32,
    pub playing: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            dimension: 3,
            duality: DualityMode::TypeI,
            projection: ProjectionMethod::Stereographic,
            rotation_speed: 1.0,
            playing: true,
        }
    }
}

impl ExplorerConfig {
    /// Write these values through the state's clamping setters
    pub fn apply_to(&self, state: &mut ExplorerState) {
        state.set_dimension(self.dimension);
        state.set_duality(self.duality);
        state.set_projection(self.projection);
        state.set_speed(self.rotation_speed);
        state.set_playing(self.playing);
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Light direction (not necessarily normalized)
    pub light_dir: [f32; 3],
    /// Seconds for the surface to fade in
    pub fade_duration: f32,
    /// Clear color [r, g, b, a]
    pub background_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            light_dir: [0.5, 0.8, 1.0],
            fade_duration: 1.5,
            background_color: [0.039, 0.039, 0.059, 1.0],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Show the HUD in the window title at startup
    pub hud_visible: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            hud_visible: true,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
