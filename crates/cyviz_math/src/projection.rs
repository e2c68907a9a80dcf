//! ℝ⁴ → ℝ³ projections

use serde::{Serialize, Deserialize};
use crate::Vec4;

/// Focal distance of the perspective projection along w
pub const PERSPECTIVE_DISTANCE: f32 = 4.0;

/// How the w coordinate is folded into the visible three
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectionMethod {
    #[default]
    Stereographic,
    Orthographic,
    Perspective,
}

impl ProjectionMethod {
    /// All methods in cycling order
    pub const ALL: [ProjectionMethod; 3] = [
        ProjectionMethod::Stereographic,
        ProjectionMethod::Orthographic,
        ProjectionMethod::Perspective,
    ];

    /// The next method in [`ProjectionMethod::ALL`], wrapping around
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&m| m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Project a point into 3-space.
    ///
    /// - Stereographic scales by `1 / (1 − w/2)`, using 1 when the
    ///   denominator is exactly zero.
    /// - Orthographic drops w.
    /// - Perspective scales by `d / (d − w)` with `d = 4`. There is no guard
    ///   at `w == d`; surface points never get that far out along w.
    pub fn project(self, p: Vec4) -> [f32; 3] {
        let scale = match self {
            ProjectionMethod::Stereographic => {
                let denom = 1.0 - p.w * 0.5;
                if denom != 0.0 { 1.0 / denom } else { 1.0 }
            }
            ProjectionMethod::Orthographic => 1.0,
            ProjectionMethod::Perspective => {
                PERSPECTIVE_DISTANCE / (PERSPECTIVE_DISTANCE - p.w)
            }
        };
        [p.x * scale, p.y * scale, p.z * scale]
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectionMethod::Stereographic => "stereographic",
            ProjectionMethod::Orthographic => "orthographic",
            ProjectionMethod::Perspective => "perspective",
        }
    }
}

impl std::fmt::Display for ProjectionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
