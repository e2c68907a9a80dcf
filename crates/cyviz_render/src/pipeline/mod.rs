//! Rendering pipeline components
//!
//! Two passes per frame: the starfield clears and fills the background, then
//! the manifold pass draws the surface over it.

pub mod types;
pub mod manifold_pipeline;
pub mod starfield_pipeline;

// Re-export types
pub use types::{
    ManifoldVertex, ManifoldUniforms, StarfieldUniforms,
    MANIFOLD_UNIFORMS_SIZE, STARFIELD_UNIFORMS_SIZE,
};

// Re-export pipelines
pub use manifold_pipeline::{ManifoldPipeline, DEPTH_FORMAT};
pub use starfield_pipeline::StarfieldPipeline;
