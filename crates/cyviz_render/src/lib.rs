//! wgpu rendering for the Fermat surface explorer
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::ManifoldPipeline`] - Lit, blended surface pass
//! - [`pipeline::StarfieldPipeline`] - Procedural background pass
//! - [`render_state::RenderState`] - Mesh buffers and depth target lifecycle
//! - [`frame::FrameLoopState`] - Fade-in, auto rotation and FPS sampling

pub mod context;
pub mod frame;
pub mod pipeline;
pub mod render_state;

pub use context::{GpuInitError, RenderContext};
pub use frame::{CameraSettings, FrameInputs, FrameLoopState};
pub use render_state::{MeshBuffers, RenderState};
