//! Geometric helpers on top of glam's `DVec3`.

use crate::Vec3;

/// Components smaller than this in magnitude count as zero.
const NEAR_ZERO_EPSILON: f64 = 1e-8;

/// Vector operations the tracer needs beyond glam's arithmetic.
///
/// glam already provides negation, addition, subtraction, component-wise and
/// scalar products, `length`, `length_squared`, `dot` and `cross`.
pub trait Vec3Ext {
    /// `self / self.length()`.
    ///
    /// Unguarded: a zero vector yields NaN components.
    fn unit(self) -> Self;

    /// Mirror `self` about the normal `n`: `v - 2 * dot(v, n) * n`.
    fn reflected(self, n: Vec3) -> Self;

    /// Bend `self` through a surface with normal `n` using Snell's law.
    ///
    /// `eta_ratio` is the ratio of refractive indices (incident over
    /// transmitted). `self` and `n` are expected to be unit length.
    fn refracted(self, n: Vec3, eta_ratio: f64) -> Self;

    /// True if every component is within `1e-8` of zero.
    fn near_zero(&self) -> bool;
}

impl Vec3Ext for Vec3 {
    #[inline]
    fn unit(self) -> Self {
        self / self.length()
    }

    #[inline]
    fn reflected(self, n: Vec3) -> Self {
        self - 2.0 * self.dot(n) * n
    }

    fn refracted(self, n: Vec3, eta_ratio: f64) -> Self {
        let cos_theta = (-self).dot(n).min(1.0);
        let r_out_perp = eta_ratio * (self + cos_theta * n);
        let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
        r_out_perp + r_out_parallel
    }

    #[inline]
    fn near_zero(&self) -> bool {
        self.abs().cmplt(Vec3::splat(NEAR_ZERO_EPSILON)).all()
    }
}
