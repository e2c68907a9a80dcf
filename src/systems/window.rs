//! Window management system
//!
//! Handles window creation, fullscreen toggle, and the HUD shown in the title bar.

use std::sync::Arc;
use cyviz_core::{dimension_info, ExplorerState};
use winit::{
    event_loop::ActiveEventLoop,
    window::{Fullscreen, Window},
};
use crate::config::WindowConfig;

/// Manages the application window and its title
pub struct WindowSystem {
    window: Arc<Window>,
    base_title: String,
    last_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            base_title: config.title.clone(),
            last_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Current inner size in physical pixels
    pub fn size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    /// Toggle fullscreen mode
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.window.fullscreen().is_some() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Show the HUD in the title, or just the base title when hidden
    pub fn update_hud(&mut self, state: &ExplorerState) {
        let title = if state.hud_visible() {
            hud_title(&self.base_title, state)
        } else {
            self.base_title.clone()
        };
        self.set_title(title);
    }

    /// Replace the title with a terminal error message
    pub fn show_fatal(&mut self, message: &str) {
        self.set_title(format!("{} - {}", self.base_title, message));
    }

    // Skip redundant platform calls, the HUD is refreshed every frame
    fn set_title(&mut self, title: String) {
        if title != self.last_title {
            self.window.set_title(&title);
            self.last_title = title;
        }
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Title bar HUD: dimension, duality, projection, FPS and vertex count
pub fn hud_title(base: &str, state: &ExplorerState) -> String {
    let n = state.dimension();
    let label = dimension_info(n).map(|info| info.name).unwrap_or("?");
    let play = if state.is_playing() { "" } else { " [paused]" };
    format!(
        "{} | n={} {} | {} | {} | {} FPS | {} verts{}",
        base,
        n,
        label,
        state.duality(),
        state.projection(),
        state.fps(),
        state.vertex_count(),
        play,
    )
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}
