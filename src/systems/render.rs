//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Geometry rebuilds when mesh inputs change
//! - Starfield and manifold passes

use std::sync::Arc;
use std::time::Instant;
use winit::window::Window;
use cyviz_core::{ExplorerState, FermatMeshBuilder, MeshParams, RebuildFlags};
use cyviz_render::{
    context::{GpuInitError, RenderContext},
    frame::{pack_uniforms, CameraSettings, FrameInputs},
    RenderState,
};
use crate::config::{CameraConfig, RenderingConfig};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost or outdated (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<wgpu::SurfaceError> for RenderError {
    fn from(e: wgpu::SurfaceError) -> Self {
        match e {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => RenderError::SurfaceLost,
            wgpu::SurfaceError::OutOfMemory => RenderError::OutOfMemory,
            e => RenderError::Other(format!("{:?}", e)),
        }
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    state: RenderState,
    builder: FermatMeshBuilder,
    camera: CameraSettings,
    render_config: RenderingConfig,
}

impl RenderSystem {
    /// Acquire the GPU and create both pipelines
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        camera_config: &CameraConfig,
        vsync: bool,
    ) -> Result<Self, GpuInitError> {
        let context = pollster::block_on(RenderContext::new(window, vsync))?;

        let mut state = RenderState::new(&context.device, context.surface_format());
        state.ensure_depth(&context.device, context.size.width, context.size.height);

        Ok(Self {
            context,
            state,
            builder: FermatMeshBuilder::new(),
            camera: camera_config.to_settings(),
            render_config,
        })
    }

    /// Handle window resize. Zero-sized windows are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.state.ensure_depth(&self.context.device, width, height);
    }

    /// Rebuild the mesh if any mesh input changed since the last build.
    ///
    /// Called once per frame, so changes made between two frames coalesce
    /// into a single rebuild.
    pub fn sync_geometry(&mut self, explorer: &mut ExplorerState) -> RebuildFlags {
        let wanted = MeshParams::from_state(explorer);
        let flags = wanted.needs_rebuild(self.state.installed_params());
        if flags.is_empty() {
            return flags;
        }

        let start = Instant::now();
        let geometry = self.builder.build(&wanted);
        let mesh = self.state.install_mesh(&self.context.device, &geometry, wanted);
        explorer.set_vertex_count(mesh.vertex_count as usize);

        log::info!(
            "Rebuilt geometry ({:?}): n={} r={} {} {} -> {} vertices, {} triangles in {:.1} ms",
            flags,
            wanted.dimension,
            wanted.resolution,
            wanted.duality,
            wanted.projection,
            mesh.vertex_count,
            mesh.triangle_count(),
            start.elapsed().as_secs_f64() * 1000.0,
        );
        flags
    }

    /// Upload uniforms and draw one frame
    pub fn render_frame(&mut self, inputs: &FrameInputs) -> Result<(), RenderError> {
        let (manifold, starfield) = pack_uniforms(inputs, &self.camera);
        self.state
            .update_uniforms(&self.context.queue, &manifold, &starfield);

        let output = self.context.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        let bg = &self.render_config.background_color;
        self.state.render(
            &mut encoder,
            &view,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Reapply the surface configuration after it was lost or outdated
    pub fn recover_surface(&mut self) {
        log::warn!("Surface lost, reconfiguring at {}x{}", self.context.size.width, self.context.size.height);
        self.context.reconfigure();
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.context.aspect_ratio()
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }

    /// Destroy mesh, depth and uniform resources, then the device
    pub fn release(&mut self) {
        self.state.release();
        self.context.device.destroy();
        log::info!("GPU resources released");
    }
}
