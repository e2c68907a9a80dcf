//! Level of detail and the geometry rebuild policy
//!
//! Resolution is a step function of the dimension and zoom. Mesh geometry
//! depends on exactly four inputs, gathered in [`MeshParams`]; the installed
//! mesh is rebuilt when any of them differ from the ones it was built with.

use bitflags::bitflags;
use cyviz_math::{DualityMode, ProjectionMethod};

use crate::state::ExplorerState;

/// Zoom below which patches are sampled more finely
pub const ZOOM_NEAR_THRESHOLD: f32 = 2.5;
/// Zoom above which patches are sampled more coarsely
pub const ZOOM_FAR_THRESHOLD: f32 = 7.0;

pub const MIN_RESOLUTION: u32 = 8;
pub const MAX_RESOLUTION: u32 = 32;

const NEAR_BOOST: u32 = 8;
const FAR_CUT: u32 = 4;

/// Per-patch resolution before zoom adjustment.
///
/// The patch count grows as n², so higher dimensions get coarser patches.
pub fn base_resolution(dimension: u32) -> u32 {
    match dimension {
        0..=5 => 24,
        6..=7 => 16,
        _ => 12,
    }
}

/// Tessellation resolution for a dimension and zoom.
///
/// Zoomed in (< 2.5) adds 8 up to 32, zoomed out (> 7) removes 4 down to 8.
/// There is no hysteresis, so crossing a threshold changes the resolution
/// immediately.
pub fn lod_resolution(dimension: u32, zoom: f32) -> u32 {
    let base = base_resolution(dimension);
    if zoom < ZOOM_NEAR_THRESHOLD {
        (base + NEAR_BOOST).min(MAX_RESOLUTION)
    } else if zoom > ZOOM_FAR_THRESHOLD {
        base.saturating_sub(FAR_CUT).max(MIN_RESOLUTION)
    } else {
        base
    }
}

bitflags! {
    /// Which mesh inputs differ from those of the installed geometry
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct RebuildFlags: u8 {
        const NONE = 0;
        const DIMENSION = 1 << 0;
        const DUALITY = 1 << 1;
        const PROJECTION = 1 << 2;
        const RESOLUTION = 1 << 3;
        const ALL = Self::DIMENSION.bits()
            | Self::DUALITY.bits()
            | Self::PROJECTION.bits()
            | Self::RESOLUTION.bits();
    }
}

/// The full set of inputs a mesh is built from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshParams {
    pub dimension: u32,
    pub resolution: u32,
    pub projection: ProjectionMethod,
    pub duality: DualityMode,
}

impl MeshParams {
    pub fn new(
        dimension: u32,
        resolution: u32,
        projection: ProjectionMethod,
        duality: DualityMode,
    ) -> Self {
        Self { dimension, resolution, projection, duality }
    }

    /// Parameters the current interaction state asks for, with LOD applied
    pub fn from_state(state: &ExplorerState) -> Self {
        Self {
            dimension: state.dimension(),
            resolution: lod_resolution(state.dimension(), state.zoom()),
            projection: state.projection(),
            duality: state.duality(),
        }
    }

    /// Fields of `self` that differ from `installed`
    pub fn changes_from(&self, installed: &MeshParams) -> RebuildFlags {
        let mut flags = RebuildFlags::NONE;
        if self.dimension != installed.dimension {
            flags |= RebuildFlags::DIMENSION;
        }
        if self.duality != installed.duality {
            flags |= RebuildFlags::DUALITY;
        }
        if self.projection != installed.projection {
            flags |= RebuildFlags::PROJECTION;
        }
        if self.resolution != installed.resolution {
            flags |= RebuildFlags::RESOLUTION;
        }
        flags
    }

    /// Whether a mesh built from `installed` must be replaced.
    ///
    /// `None` means nothing is installed yet.
    pub fn needs_rebuild(&self, installed: Option<&MeshParams>) -> RebuildFlags {
        match installed {
            Some(prev) => self.changes_from(prev),
            None => RebuildFlags::ALL,
        }
    }
}
