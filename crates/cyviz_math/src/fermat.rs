//! Parametrization of the Fermat curve `z1^n + z2^n = 1`
//!
//! With `w = α + iβ`, the pair `(cos w^(2/n), sin w^(2/n))` satisfies
//! `z1^n + z2^n = cos² w + sin² w = 1`. Multiplying each factor by an n-th
//! root of unity gives the other `n²` sheets, one per patch `(k1, k2)`.

use crate::complex::Complex;
use crate::Vec4;

/// Distance kept from the poles of the parametrization at α = 0 and α = π/2
pub const ALPHA_EPSILON: f64 = 0.01;

/// Default half-width of the sampled β interval
pub const DEFAULT_BETA_RANGE: f64 = 1.2;

/// The sampled rectangle in (α, β) parameter space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterDomain {
    pub alpha_min: f64,
    pub alpha_max: f64,
    pub beta_range: f64,
}

impl Default for ParameterDomain {
    fn default() -> Self {
        Self {
            alpha_min: ALPHA_EPSILON,
            alpha_max: std::f64::consts::FRAC_PI_2 - ALPHA_EPSILON,
            beta_range: DEFAULT_BETA_RANGE,
        }
    }
}

impl ParameterDomain {
    /// α at grid step `i` of `steps`
    #[inline]
    pub fn alpha(&self, i: u32, steps: u32) -> f64 {
        self.alpha_min + (i as f64 / steps as f64) * (self.alpha_max - self.alpha_min)
    }

    /// β at grid step `j` of `steps`, spanning `[-range, range]`
    #[inline]
    pub fn beta(&self, j: u32, steps: u32) -> f64 {
        -self.beta_range + (j as f64 / steps as f64) * (2.0 * self.beta_range)
    }
}

/// Evaluate the patch `(k1, k2)` of the degree-`n` surface at `(α, β)`.
///
/// Returns `(Re z1, Im z1, Re z2, Im z2)`.
pub fn fermat_point(n: u32, alpha: f64, beta: f64, k1: u32, k2: u32) -> Vec4 {
    let exponent = 2.0 / n as f64;

    let z1 = Complex::root_of_unity(k1, n) * Complex::cos_of(alpha, beta).powf(exponent);
    let z2 = Complex::root_of_unity(k2, n) * Complex::sin_of(alpha, beta).powf(exponent);

    Vec4::new(z1.re as f32, z1.im as f32, z2.re as f32, z2.im as f32)
}

/// Number of sheets covering the surface of degree `n`
pub fn symmetry_order(n: u32) -> u32 {
    n * n
}
