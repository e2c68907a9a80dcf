//! cyviz - Calabi-Yau Explorer
//!
//! Interactive viewer for Fermat-type Calabi-Yau cross-sections projected
//! from ℂ² ≅ ℝ⁴ into 3D.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use cyviz::config::AppConfig;
use cyviz::input::{InputAction, InputMapper};
use cyviz::systems::{FrameScheduler, RenderError, RenderSystem, WindowSystem};
use cyviz_core::{dimension_info, AudioCue, ExplorerState, Intent};
use cyviz_input::OrbitController;

/// Main application state
struct App {
    config: AppConfig,
    explorer: ExplorerState,
    input_mapper: InputMapper,
    pointer: OrbitController,
    scheduler: FrameScheduler,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    /// Set once teardown starts; no frame runs after this
    destroyed: bool,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let explorer = config.initial_state();
        let input_mapper = InputMapper::new(config.input.speed_step);
        let pointer = OrbitController::new()
            .with_orbit_sensitivity(config.input.orbit_sensitivity)
            .with_zoom_sensitivity(config.input.zoom_sensitivity)
            .with_line_scroll_pixels(config.input.line_scroll_pixels);
        let scheduler = FrameScheduler::new(config.rendering.fade_duration);

        Self {
            config,
            explorer,
            input_mapper,
            pointer,
            scheduler,
            window: None,
            render: None,
            destroyed: false,
        }
    }

    /// Apply an intent and log the toggles worth seeing in the log
    fn apply_intent(&mut self, intent: Intent) {
        self.explorer.apply(intent);
        let s = &self.explorer;

        match intent {
            Intent::ToggleDuality | Intent::SetDuality(_) => {
                log::info!("Duality: {} ({})", s.duality(), s.duality().description());
            }
            Intent::CycleProjection | Intent::SetProjection(_) => {
                log::info!("Projection: {}", s.projection());
            }
            Intent::ToggleHud => log::info!("HUD: {}", if s.hud_visible() { "ON" } else { "OFF" }),
            Intent::TogglePlay | Intent::SetPlaying(_) => {
                log::info!("Rotation {}", if s.is_playing() { "playing" } else { "paused" });
            }
            Intent::ToggleInfoPanel if s.info_panel_open() => {
                if let Some(info) = dimension_info(s.dimension()) {
                    log::info!(
                        "{} {}: {} | {} | {}",
                        info.label, info.name, info.symmetry_group, info.topology, info.description
                    );
                }
            }
            Intent::ToggleAudio | Intent::SetAudioEnabled(_) => {
                log::info!("Audio: {}", if s.audio_enabled() { "ON" } else { "OFF" });
            }
            _ => {}
        }

        if let Some(cue) = AudioCue::from_state(&self.explorer) {
            log::debug!("Audio cue: {:?}", cue);
        }
    }

    /// Release GPU resources exactly once
    fn teardown(&mut self) {
        self.destroyed = true;
        if let Some(mut render) = self.render.take() {
            render.release();
        }
        self.explorer.set_gpu_ready(false);
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        if self.destroyed {
            return;
        }
        let (Some(window), Some(render)) = (&mut self.window, &mut self.render) else {
            return;
        };

        self.pointer.update(&mut self.explorer);
        self.scheduler.tick(&mut self.explorer);
        render.sync_geometry(&mut self.explorer);

        let (width, height) = window.size();
        if width > 0 && height > 0 {
            let inputs = self.scheduler.frame_inputs(
                &self.explorer,
                &self.pointer,
                render.aspect_ratio(),
                self.config.rendering.light_dir,
            );
            match render.render_frame(&inputs) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => render.recover_surface(),
                Err(RenderError::OutOfMemory) => {
                    log::error!("GPU out of memory, exiting");
                    event_loop.exit();
                    return;
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        window.update_hud(&self.explorer);
        window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.destroyed {
            return;
        }

        let mut window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        match RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            &self.config.camera,
            self.config.window.vsync,
        ) {
            Ok(render) => {
                self.explorer.set_gpu_ready(true);
                self.render = Some(render);
                self.scheduler.reset_clock();
                window.request_redraw();
            }
            Err(e) => {
                log::error!("GPU initialization failed: {}", e);
                window.show_fatal(&e.to_string());
            }
        }

        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match self.input_mapper.map_keyboard(key, event.state) {
                        Some(InputAction::Explorer(intent)) => self.apply_intent(intent),
                        Some(InputAction::ToggleFullscreen) => {
                            if let Some(window) = &self.window {
                                window.toggle_fullscreen();
                            }
                        }
                        Some(InputAction::Exit) => event_loop.exit(),
                        None => {}
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(window) = &self.window {
                    let (width, height) = window.size();
                    self.pointer.process_cursor_moved(position.x, position.y, width, height);
                }
            }

            WindowEvent::CursorLeft { .. } => {
                self.pointer.process_cursor_left();
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.pointer.process_mouse_button(button, state);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.pointer.process_scroll(delta);
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        log::info!("Shutting down");
        self.teardown();
    }
}

fn main() {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // RUST_LOG still wins over the configured level
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting cyviz");

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
    }
}
