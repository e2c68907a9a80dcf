//! Minimal complex arithmetic for the surface parametrization
//!
//! Only the handful of operations the Fermat map needs: products, polar
//! form, trigonometric functions of `α + iβ` and a real power on the
//! principal branch. Everything is `f64` so the `2/n` power stays accurate
//! for large `n` before positions are narrowed to `f32`.

/// Modulus below which a power is treated as exactly zero
pub const POW_EPSILON: f64 = 1e-12;

/// A complex number `re + i·im`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Build from modulus and argument
    #[inline]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    /// The root of unity `e^{2πik/n}`
    pub fn root_of_unity(k: u32, n: u32) -> Self {
        let theta = std::f64::consts::TAU * k as f64 / n as f64;
        Self::from_polar(1.0, theta)
    }

    /// `cos(α + iβ) = cos α cosh β − i sin α sinh β`
    pub fn cos_of(alpha: f64, beta: f64) -> Self {
        Self::new(alpha.cos() * beta.cosh(), -alpha.sin() * beta.sinh())
    }

    /// `sin(α + iβ) = sin α cosh β + i cos α sinh β`
    pub fn sin_of(alpha: f64, beta: f64) -> Self {
        Self::new(alpha.sin() * beta.cosh(), alpha.cos() * beta.sinh())
    }

    #[inline]
    pub fn modulus(self) -> f64 {
        self.re.hypot(self.im)
    }

    #[inline]
    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Real power on the principal branch: `(r, θ) → (r^p, p·θ)`.
    ///
    /// Returns zero when the modulus is below [`POW_EPSILON`].
    pub fn powf(self, p: f64) -> Self {
        let r = self.modulus();
        if r < POW_EPSILON {
            return Self::ZERO;
        }
        Self::from_polar(r.powf(p), p * self.arg())
    }
}

impl std::ops::Mul for Complex {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }
}

impl std::ops::Add for Complex {
    type Output = Self;
    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.re + other.re, self.im + other.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    fn approx(a: Complex, b: Complex) -> bool {
        (a.re - b.re).abs() < EPSILON && (a.im - b.im).abs() < EPSILON
    }

    #[test]
    fn test_mul() {
        // (1 + 2i)(3 - i) = 3 - i + 6i + 2 = 5 + 5i
        let p = Complex::new(1.0, 2.0) * Complex::new(3.0, -1.0);
        assert!(approx(p, Complex::new(5.0, 5.0)));
    }

    #[test]
    fn test_roots_of_unity() {
        let n = 5;
        for k in 0..n {
            let w = Complex::root_of_unity(k, n);
            assert!((w.modulus() - 1.0).abs() < EPSILON);

            let mut acc = Complex::new(1.0, 0.0);
            for _ in 0..n {
                acc = acc * w;
            }
            assert!(approx(acc, Complex::new(1.0, 0.0)), "k={} gives {:?}", k, acc);
        }
    }

    #[test]
    fn test_cos_sin_identity() {
        // cos² + sin² = 1 holds for complex arguments too
        for &(a, b) in &[(0.3, 0.0), (0.7, 1.1), (1.2, -0.9)] {
            let c = Complex::cos_of(a, b);
            let s = Complex::sin_of(a, b);
            let sum = c * c + s * s;
            assert!(approx(sum, Complex::new(1.0, 0.0)), "α={} β={} gives {:?}", a, b, sum);
        }
    }

    #[test]
    fn test_powf_principal_branch() {
        // i^(2/4) = e^{iπ/4}
        let z = Complex::new(0.0, 1.0).powf(0.5);
        let expected = Complex::from_polar(1.0, std::f64::consts::FRAC_PI_4);
        assert!(approx(z, expected));

        // -1 sits on the branch cut: arg = π, so (-1)^(1/2) = i
        let z = Complex::new(-1.0, 0.0).powf(0.5);
        assert!(approx(z, Complex::new(0.0, 1.0)));
    }

    #[test]
    fn test_powf_near_zero_is_zero() {
        assert_eq!(Complex::new(1e-13, -1e-13).powf(2.0 / 3.0), Complex::ZERO);
        assert_eq!(Complex::ZERO.powf(0.25), Complex::ZERO);
    }

    #[test]
    fn test_powf_then_n_recovers_square() {
        // (z^(2/n))^n = z^2 for z away from the branch cut
        let z = Complex::new(0.8, 0.3);
        let n = 7;
        let mut acc = Complex::new(1.0, 0.0);
        let root = z.powf(2.0 / n as f64);
        for _ in 0..n {
            acc = acc * root;
        }
        assert!(approx(acc, z * z));
    }
}
