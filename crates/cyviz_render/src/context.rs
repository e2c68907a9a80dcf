//! GPU device, queue and surface acquisition
//!
//! Acquisition happens once at startup. Any failure is terminal for the
//! session: the caller shows [`GpuInitError`]'s message and never retries.

use std::sync::Arc;
use winit::{dpi::PhysicalSize, window::Window};

/// Why the GPU could not be brought up
#[derive(Debug)]
pub enum GpuInitError {
    /// The window could not be turned into a render surface
    SurfaceCreation(String),
    /// No adapter compatible with the surface
    NoAdapter,
    /// The adapter refused to create a device
    DeviceRequest(String),
    /// The surface offers no configuration for this adapter
    UnsupportedSurface,
}

impl std::fmt::Display for GpuInitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GpuInitError::SurfaceCreation(msg) => {
                write!(f, "GPU rendering is not supported on this display: {}", msg)
            }
            GpuInitError::NoAdapter => {
                write!(f, "Failed to obtain a GPU adapter. Your GPU may not be supported.")
            }
            GpuInitError::DeviceRequest(msg) => {
                write!(f, "Failed to create a GPU device: {}", msg)
            }
            GpuInitError::UnsupportedSurface => {
                write!(f, "The window surface is not compatible with the GPU adapter.")
            }
        }
    }
}

impl std::error::Error for GpuInitError {}

/// WGPU device, queue, and configured surface
pub struct RenderContext {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub size: PhysicalSize<u32>,
}

impl RenderContext {
    /// Acquire an adapter and device and configure the window surface
    pub async fn new(window: Arc<Window>, vsync: bool) -> Result<Self, GpuInitError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .map_err(|e| GpuInitError::SurfaceCreation(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(GpuInitError::NoAdapter)?;

        let info = adapter.get_info();
        log::info!("GPU: {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("cyviz Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await
            .map_err(|e| GpuInitError::DeviceRequest(e.to_string()))?;

        let mut config = surface
            .get_default_config(&adapter, size.width.max(1), size.height.max(1))
            .ok_or(GpuInitError::UnsupportedSurface)?;
        config.present_mode = if vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        };
        surface.configure(&device, &config);
        log::info!("Surface format: {:?}, present mode: {:?}", config.format, config.present_mode);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
        })
    }

    /// Reconfigure the surface for a new size. Zero-sized windows are ignored.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    /// Reapply the current configuration after the surface was lost or outdated
    pub fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn aspect_ratio(&self) -> f32 {
        aspect_ratio(self.config.width, self.config.height)
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }
}

/// Width over height, 1.0 for a degenerate height
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    if height == 0 {
        1.0
    } else {
        width as f32 / height as f32
    }
}
