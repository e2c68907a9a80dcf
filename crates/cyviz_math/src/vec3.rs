//! Small helpers for 3D vectors stored as `[f32; 3]`
//!
//! Projected positions and normals travel to the GPU as plain arrays, so the
//! mesh and camera code works on arrays directly instead of a wrapper type.

pub type Vec3 = [f32; 3];

#[inline]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub fn scale(v: Vec3, s: f32) -> Vec3 {
    [v[0] * s, v[1] * s, v[2] * s]
}

#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
pub fn length(v: Vec3) -> f32 {
    dot(v, v).sqrt()
}

/// Normalize `v`, returning it unchanged when its length is not above `min_len`
#[inline]
pub fn normalize_or_keep(v: Vec3, min_len: f32) -> Vec3 {
    let len = length(v);
    if len > min_len {
        scale(v, 1.0 / len)
    } else {
        v
    }
}
