//! Points in the real 4-space that hosts the (z1, z2) embedding

/// 4D vector with x, y, z, w components
///
/// For surface points the components are `(Re z1, Im z1, Re z2, Im z2)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    /// Create a new Vec4
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v.w, 4.0);
    }

    #[test]
    fn test_default_is_origin() {
        assert_eq!(Vec4::default(), Vec4::new(0.0, 0.0, 0.0, 0.0));
    }
}
