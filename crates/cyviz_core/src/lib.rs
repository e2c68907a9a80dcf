//! Geometry, level-of-detail policy and interaction state for cyviz
//!
//! Everything here is CPU-side and device-free: the mesh builder turns
//! [`MeshParams`] into a [`Geometry`], and [`ExplorerState`] carries the
//! user-facing controls that decide which parameters are current.

pub mod audio;
pub mod dimension;
pub mod lod;
pub mod mesh;
pub mod state;

pub use audio::{AudioCue, Waveform};
pub use dimension::{dimension_color, dimension_info, DimensionInfo};
pub use lod::{base_resolution, lod_resolution, MeshParams, RebuildFlags};
pub use mesh::{compute_normals, FermatMeshBuilder, Geometry};
pub use state::{ExplorerState, Intent};
