//! Per-dimension colour palette and descriptive metadata

use crate::state::{DIMENSION_MAX, DIMENSION_MIN};

/// Colour used when a dimension has no palette entry
pub const FALLBACK_COLOR: [f32; 3] = [0.5, 0.5, 0.8];

/// Base surface colour for n = 3..=11
pub const DIMENSION_COLORS: [[f32; 3]; 9] = [
    [0.18, 0.55, 0.84], // blue
    [0.30, 0.69, 0.31], // green
    [0.80, 0.56, 0.15], // amber
    [0.74, 0.21, 0.18], // red
    [0.56, 0.27, 0.68], // purple
    [0.16, 0.71, 0.65], // teal
    [0.85, 0.44, 0.55], // rose
    [0.39, 0.56, 0.82], // slate blue
    [0.91, 0.73, 0.26], // gold
];

/// Palette colour for `dimension`, or [`FALLBACK_COLOR`] outside the table
pub fn dimension_color(dimension: u32) -> [f32; 3] {
    dimension
        .checked_sub(DIMENSION_MIN)
        .and_then(|i| DIMENSION_COLORS.get(i as usize))
        .copied()
        .unwrap_or(FALLBACK_COLOR)
}

/// Text shown in the HUD and info panel for one dimension
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DimensionInfo {
    pub label: &'static str,
    pub name: &'static str,
    pub symmetry_group: &'static str,
    pub topology: &'static str,
    pub description: &'static str,
}

const DIMENSION_INFO: [DimensionInfo; 9] = [
    DimensionInfo {
        label: "3D",
        name: "Euclidean Space",
        symmetry_group: "SU(2)",
        topology: "S\u{b3} / Z_n",
        description: "Minimal Calabi-Yau cross-section in real 3-space.",
    },
    DimensionInfo {
        label: "4D",
        name: "Spacetime",
        symmetry_group: "SU(2) \u{d7} U(1)",
        topology: "K3 surface",
        description: "K3 manifold, the unique compact CY 2-fold.",
    },
    DimensionInfo {
        label: "5D",
        name: "Kaluza-Klein",
        symmetry_group: "SU(3)",
        topology: "Quintic threefold",
        description: "Fermat quintic in CP\u{2074}, the classic CY 3-fold.",
    },
    DimensionInfo {
        label: "6D",
        name: "Calabi-Yau",
        symmetry_group: "SU(3) \u{d7} SU(2)",
        topology: "CY\u{2083} fibration",
        description: "Compactified extra dimensions for Type IIA strings.",
    },
    DimensionInfo {
        label: "7D",
        name: "G\u{2082} Manifold",
        symmetry_group: "G\u{2082}",
        topology: "G\u{2082} holonomy",
        description: "Joyce manifold with exceptional holonomy in M-theory.",
    },
    DimensionInfo {
        label: "8D",
        name: "Spin(7)",
        symmetry_group: "Spin(7)",
        topology: "Spin(7) holonomy",
        description: "8-dimensional manifold with Spin(7) holonomy.",
    },
    DimensionInfo {
        label: "9D",
        name: "F-Theory",
        symmetry_group: "SU(4) \u{d7} U(1)",
        topology: "CY\u{2084} manifold",
        description: "Calabi-Yau 4-fold used in F-theory compactifications.",
    },
    DimensionInfo {
        label: "10D",
        name: "Superstring",
        symmetry_group: "E\u{2088} \u{d7} E\u{2088}",
        topology: "Heterotic bundle",
        description: "Full 10D target space of the heterotic string.",
    },
    DimensionInfo {
        label: "11D",
        name: "M-Theory",
        symmetry_group: "E\u{2088}",
        topology: "M-theory bulk",
        description: "11-dimensional M-theory with CY\u{2085} compactification.",
    },
];

/// Metadata for `dimension`, if it is in range
pub fn dimension_info(dimension: u32) -> Option<&'static DimensionInfo> {
    if !(DIMENSION_MIN..=DIMENSION_MAX).contains(&dimension) {
        return None;
    }
    DIMENSION_INFO.get((dimension - DIMENSION_MIN) as usize)
}
