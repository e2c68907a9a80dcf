//! GPU-compatible data types for the manifold and starfield pipelines
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use cyviz_math::mat4::{self, Mat4};

/// Interleaved surface vertex, 24-byte stride
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ManifoldVertex {
    /// Projected position in 3D (location 0, offset 0)
    pub position: [f32; 3],
    /// Smooth vertex normal (location 1, offset 12)
    pub normal: [f32; 3],
}

impl ManifoldVertex {
    pub fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }
}

/// Uniforms for the manifold pass
/// Layout: 256 bytes total (must match manifold.wgsl ManifoldUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ManifoldUniforms {
    /// Model matrix (64 bytes, offset 0)
    pub model: Mat4,
    /// View matrix (64 bytes, offset 64)
    pub view: Mat4,
    /// Projection matrix (64 bytes, offset 128)
    pub projection: Mat4,
    /// Base color, w = 0 (offset 192)
    pub color: [f32; 4],
    /// Light direction xyz, w = time in seconds (offset 208)
    pub light_dir: [f32; 4],
    /// Cursor world position xyz, w = strength (offset 224)
    pub cursor: [f32; 4],
    /// Opacity in x, rest padding (offset 240)
    pub opacity: [f32; 4],
}

impl Default for ManifoldUniforms {
    fn default() -> Self {
        Self {
            model: mat4::IDENTITY,
            view: mat4::IDENTITY,
            projection: mat4::IDENTITY,
            color: [0.5, 0.5, 0.8, 0.0],
            light_dir: [0.5, 0.8, 1.0, 0.0],
            cursor: [0.0; 4],
            opacity: [0.0; 4],
        }
    }
}

/// Uniforms for the starfield pass
/// Layout: 16 bytes total (must match starfield.wgsl StarfieldUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct StarfieldUniforms {
    pub yaw: f32,
    pub pitch: f32,
    pub time: f32,
    pub _pad: f32,
}

impl StarfieldUniforms {
    pub fn new(yaw: f32, pitch: f32, time: f32) -> Self {
        Self { yaw, pitch, time, _pad: 0.0 }
    }
}

/// Size of [`ManifoldUniforms`] in bytes
pub const MANIFOLD_UNIFORMS_SIZE: usize = 256;

/// Size of [`StarfieldUniforms`] in bytes
pub const STARFIELD_UNIFORMS_SIZE: usize = 16;
