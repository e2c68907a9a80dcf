//! Discrete duality symmetry applied to the embedding before projection

use serde::{Serialize, Deserialize};
use crate::Vec4;

/// Which physical description the surface is drawn in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DualityMode {
    /// Identity
    #[default]
    TypeI,
    /// Z₂ orbifold: swap z1 and z2 and conjugate both
    HeteroticE,
}

impl DualityMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            DualityMode::TypeI => DualityMode::HeteroticE,
            DualityMode::HeteroticE => DualityMode::TypeI,
        }
    }

    /// Apply the symmetry to an ℝ⁴ point.
    ///
    /// `(a, b, c, d) → (c, −d, a, −b)` for heterotic-E. Applying it twice
    /// returns the original point.
    pub fn apply(self, p: Vec4) -> Vec4 {
        match self {
            DualityMode::TypeI => p,
            DualityMode::HeteroticE => Vec4::new(p.z, -p.w, p.x, -p.y),
        }
    }

    /// Short human-readable name
    pub fn label(self) -> &'static str {
        match self {
            DualityMode::TypeI => "Type I",
            DualityMode::HeteroticE => "Heterotic E",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DualityMode::TypeI => "Open + closed strings, SO(32) gauge group",
            DualityMode::HeteroticE => "Closed strings only, E\u{2088}\u{d7}E\u{2088} gauge group",
        }
    }
}

impl std::fmt::Display for DualityMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_i_is_identity() {
        let p = Vec4::new(1.0, -2.0, 3.0, 0.25);
        assert_eq!(DualityMode::TypeI.apply(p), p);
    }

    #[test]
    fn test_heterotic_swaps_and_conjugates() {
        let p = Vec4::new(1.0, 0.0, 0.5, 0.2);
        assert_eq!(DualityMode::HeteroticE.apply(p), Vec4::new(0.5, -0.2, 1.0, 0.0));
    }

    #[test]
    fn test_involutive_in_both_modes() {
        let points = [
            Vec4::new(1.0, 0.0, 0.5, 0.2),
            Vec4::new(-3.5, 2.25, 0.0, -1.0),
            Vec4::new(1e-7, -1e7, 42.0, 0.125),
        ];
        for mode in [DualityMode::TypeI, DualityMode::HeteroticE] {
            for p in points {
                assert_eq!(mode.apply(mode.apply(p)), p, "{:?} on {:?}", mode, p);
            }
        }
    }

    #[test]
    fn test_toggled() {
        assert_eq!(DualityMode::TypeI.toggled(), DualityMode::HeteroticE);
        assert_eq!(DualityMode::TypeI.toggled().toggled(), DualityMode::TypeI);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", DualityMode::HeteroticE), "Heterotic E");
    }
}
