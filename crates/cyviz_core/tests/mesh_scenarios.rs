//! End-to-end checks for mesh generation
//!
//! These tests drive the full CPU pipeline:
//! 1. Interaction state selects dimension, duality, projection and zoom
//! 2. LOD policy chooses the resolution
//! 3. The mesh builder tessellates, transforms and projects every patch
//! 4. Normals and indices satisfy the invariants the renderer relies on

use cyviz_core::lod::{MAX_RESOLUTION, MIN_RESOLUTION};
use cyviz_core::state::{DIMENSION_MAX, DIMENSION_MIN};
use cyviz_core::{
    lod_resolution, ExplorerState, FermatMeshBuilder, Intent, MeshParams, RebuildFlags,
};
use cyviz_math::{DualityMode, ProjectionMethod, Vec4};

fn build(n: u32, r: u32, projection: ProjectionMethod, duality: DualityMode) -> cyviz_core::Geometry {
    FermatMeshBuilder::new().build(&MeshParams::new(n, r, projection, duality))
}

// ==================== Scenarios ====================

#[test]
fn test_scenario_a_counts() {
    let geometry = build(5, 24, ProjectionMethod::Stereographic, DualityMode::TypeI);

    assert_eq!(geometry.vertex_count(), 15625);
    assert_eq!(geometry.index_count(), 86400);
    assert_eq!(geometry.triangle_count(), 28800);
    assert_eq!(geometry.normals().len(), geometry.vertex_count());
}

#[test]
fn test_scenario_b_duality_toggle() {
    let p = Vec4::new(1.0, 0.0, 0.5, 0.2);
    let mode = DualityMode::TypeI.toggled();

    let once = mode.apply(p);
    assert_eq!(once, Vec4::new(0.5, -0.2, 1.0, 0.0));
    assert_eq!(mode.apply(once), p);
}

#[test]
fn test_scenario_c_lod_from_state() {
    let mut state = ExplorerState::new();
    state.apply(Intent::SetDimension(5));

    state.apply(Intent::SetZoom(1.0));
    // Zoom is clamped to 1.5, still below the near threshold
    assert_eq!(MeshParams::from_state(&state).resolution, 32);

    state.apply(Intent::SetZoom(8.0));
    assert_eq!(MeshParams::from_state(&state).resolution, 20);

    assert_eq!(lod_resolution(5, 1.0), 32);
    assert_eq!(lod_resolution(5, 8.0), 20);
}

// ==================== Properties ====================

#[test]
fn test_index_counts_and_bounds_all_dimensions() {
    for n in DIMENSION_MIN..=DIMENSION_MAX {
        for r in [1, 2, 5, 8] {
            let geometry = build(n, r, ProjectionMethod::Orthographic, DualityMode::TypeI);
            let patches = (n * n) as usize;
            let r = r as usize;

            assert_eq!(geometry.index_count(), patches * r * r * 6, "n={} r={}", n, r);
            assert_eq!(geometry.vertex_count(), patches * (r + 1) * (r + 1), "n={} r={}", n, r);

            let vertex_count = geometry.vertex_count() as u32;
            assert!(geometry.indices().iter().all(|&i| i < vertex_count), "n={} r={}", n, r);
        }
    }
}

#[test]
fn test_normals_unit_or_zero() {
    for projection in ProjectionMethod::ALL {
        for duality in [DualityMode::TypeI, DualityMode::HeteroticE] {
            for n in [3, 6, 11] {
                let geometry = build(n, 6, projection, duality);
                for normal in geometry.normals() {
                    let len = (normal[0] * normal[0] + normal[1] * normal[1] + normal[2] * normal[2]).sqrt();
                    assert!(
                        len == 0.0 || (len - 1.0).abs() < 1e-5,
                        "normal length {} for n={} {:?} {:?}",
                        len, n, projection, duality
                    );
                }
            }
        }
    }
}

#[test]
fn test_positions_finite_across_projections() {
    for projection in ProjectionMethod::ALL {
        for duality in [DualityMode::TypeI, DualityMode::HeteroticE] {
            for n in DIMENSION_MIN..=DIMENSION_MAX {
                let geometry = build(n, 4, projection, duality);
                assert!(
                    geometry.positions().iter().flatten().all(|c| c.is_finite()),
                    "non-finite position for n={} {:?} {:?}",
                    n, projection, duality
                );
            }
        }
    }
}

#[test]
fn test_lod_monotonic_in_dimension() {
    for zoom in [1.5, 2.4, 2.5, 4.0, 7.0, 7.1, 12.0] {
        let mut previous = u32::MAX;
        for n in DIMENSION_MIN..=DIMENSION_MAX {
            let r = lod_resolution(n, zoom);
            assert!(r <= previous, "resolution rose at n={} zoom={}", n, zoom);
            assert!((MIN_RESOLUTION..=MAX_RESOLUTION).contains(&r));
            previous = r;
        }
    }
}

// ==================== Rebuild policy ====================

#[test]
fn test_rebuild_only_on_mesh_inputs() {
    let mut state = ExplorerState::new();
    let installed = MeshParams::from_state(&state);

    // Orbit and play state do not affect geometry
    state.apply(Intent::OrbitBy { yaw: 1.0, pitch: 0.3 });
    state.apply(Intent::TogglePlay);
    state.apply(Intent::ToggleHud);
    assert!(MeshParams::from_state(&state).needs_rebuild(Some(&installed)).is_empty());

    // Zoom within the same LOD band does not either
    state.apply(Intent::SetZoom(5.0));
    assert!(MeshParams::from_state(&state).needs_rebuild(Some(&installed)).is_empty());

    state.apply(Intent::CycleProjection);
    state.apply(Intent::SetZoom(10.0));
    let flags = MeshParams::from_state(&state).needs_rebuild(Some(&installed));
    assert_eq!(flags, RebuildFlags::PROJECTION | RebuildFlags::RESOLUTION);
}
