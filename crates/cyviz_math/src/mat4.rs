//! 4x4 matrix utilities for the camera and model transforms
//!
//! Matrices are column-major `[[f32; 4]; 4]` (`m[column][row]`), which is the
//! layout WGSL expects for `mat4x4<f32>` in a uniform buffer, so they can be
//! copied into GPU structs without transposing.

use crate::vec3::{self, Vec3};

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Create a rotation matrix in the plane spanned by axes `p1` and `p2`.
///
/// A positive angle rotates `p1` toward `p2` (0=X, 1=Y, 2=Z, 3=W).
///
/// # Example
/// ```
/// use cyviz_math::mat4::plane_rotation;
/// // Same as rotate_x(0.5)
/// let pitch_matrix = plane_rotation(0.5, 1, 2);
/// ```
pub fn plane_rotation(angle: f32, p1: usize, p2: usize) -> Mat4 {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;

    m[p1][p1] = cs;
    m[p2][p2] = cs;
    m[p1][p2] = sn;
    m[p2][p1] = -sn;

    m
}

/// Rotation about the X axis (Y toward Z)
pub fn rotate_x(angle: f32) -> Mat4 {
    plane_rotation(angle, 1, 2)
}

/// Rotation about the Y axis (Z toward X)
pub fn rotate_y(angle: f32) -> Mat4 {
    plane_rotation(angle, 2, 0)
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Perspective projection with a `[0, 1]` clip-space depth range (wgpu/WebGPU).
///
/// `fov_y` is the full vertical field of view in radians.
pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let f = 1.0 / (fov_y / 2.0).tan();
    let range_inv = 1.0 / (near - far);

    [
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, far * range_inv, -1.0],
        [0.0, 0.0, near * far * range_inv, 0.0],
    ]
}

/// Right-handed view matrix looking from `eye` toward `target`
pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let fz = vec3::normalize_or_keep(vec3::sub(eye, target), 0.0);
    let fx = vec3::normalize_or_keep(vec3::cross(up, fz), 0.0);
    let fy = vec3::cross(fz, fx);

    [
        [fx[0], fy[0], fz[0], 0.0],
        [fx[1], fy[1], fz[1], 0.0],
        [fx[2], fy[2], fz[2], 0.0],
        [-vec3::dot(fx, eye), -vec3::dot(fy, eye), -vec3::dot(fz, eye), 1.0],
    ]
}
