//! Triangulated mesh of the Fermat surface
//!
//! The surface is tessellated as `n²` independent patches, each an
//! `(r+1) × (r+1)` vertex grid over the (α, β) domain. Vertices are laid out
//! patch-major, then by α row, then by β column. Normals are smooth within a
//! patch; patches do not share vertices, so seams are not smoothed.

use cyviz_math::{fermat_point, symmetry_order, vec3, ParameterDomain};

use crate::lod::MeshParams;

/// Accumulated normals shorter than this are left as zero vectors
pub const NORMAL_EPSILON: f32 = 1e-8;

/// Immutable CPU-side mesh, ready to be interleaved and uploaded
#[derive(Clone, Debug, Default)]
pub struct Geometry {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    indices: Vec<u32>,
}

impl Geometry {
    #[inline]
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    #[inline]
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Builds [`Geometry`] for a set of [`MeshParams`]
#[derive(Clone, Copy, Debug, Default)]
pub struct FermatMeshBuilder {
    domain: ParameterDomain,
}

impl FermatMeshBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tessellate the surface.
    ///
    /// A resolution of 0 is treated as 1.
    pub fn build(&self, params: &MeshParams) -> Geometry {
        let n = params.dimension;
        let r = params.resolution.max(1);
        let stride = (r + 1) as usize;
        let verts_per_patch = stride * stride;
        let patches = symmetry_order(n) as usize;
        let quads_per_patch = (r * r) as usize;

        let mut positions = Vec::with_capacity(patches * verts_per_patch);
        for k1 in 0..n {
            for k2 in 0..n {
                for ai in 0..=r {
                    let alpha = self.domain.alpha(ai, r);
                    for bi in 0..=r {
                        let beta = self.domain.beta(bi, r);
                        let p4 = fermat_point(n, alpha, beta, k1, k2);
                        let p4 = params.duality.apply(p4);
                        positions.push(params.projection.project(p4));
                    }
                }
            }
        }

        let mut indices = Vec::with_capacity(patches * quads_per_patch * 6);
        for p in 0..patches {
            let base = p * verts_per_patch;
            for ai in 0..r as usize {
                for bi in 0..r as usize {
                    let i0 = (base + ai * stride + bi) as u32;
                    let i1 = i0 + 1;
                    let i2 = i0 + stride as u32;
                    let i3 = i2 + 1;

                    indices.extend_from_slice(&[i0, i2, i1, i1, i2, i3]);
                }
            }
        }

        let normals = compute_normals(&positions, &indices);

        Geometry { positions, normals, indices }
    }
}

/// Area-weighted vertex normals.
///
/// Each triangle's unnormalized cross product is added to its three vertices,
/// then every sum is normalized. Sums shorter than [`NORMAL_EPSILON`] stay as
/// they are, which leaves isolated degenerate vertices at zero.
pub fn compute_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut normals = vec![[0.0f32; 3]; positions.len()];

    for tri in indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let a = vec3::sub(positions[i1], positions[i0]);
        let b = vec3::sub(positions[i2], positions[i0]);
        let face = vec3::cross(a, b);

        for idx in [i0, i1, i2] {
            normals[idx] = vec3::add(normals[idx], face);
        }
    }

    for n in normals.iter_mut() {
        *n = vec3::normalize_or_keep(*n, NORMAL_EPSILON);
    }

    normals
}
