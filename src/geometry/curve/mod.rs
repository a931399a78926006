mod catmull_rom;
mod ellipse;

pub use catmull_rom::CatmullRom;
pub use ellipse::Ellipse;

use crate::error::Result;
use crate::math::{Point3, Vector3};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Maps a fraction in `[0, 1]` onto this domain.
    #[must_use]
    pub fn lerp(&self, fraction: f64) -> f64 {
        self.t_min + (self.t_max - self.t_min) * fraction
    }
}

/// Trait for parametric curves in 3D space.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    fn evaluate(&self, t: f64) -> Result<Point3>;

    /// Computes the unit tangent vector at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tangent is degenerate.
    fn tangent(&self, t: f64) -> Result<Vector3>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;

    /// Evaluates the curve at a normalized fraction of its domain.
    ///
    /// The fraction wraps for closed curves and clamps to `[0, 1]` for
    /// open ones. Implementations may override this to sample by arc
    /// length instead of by parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    fn point_at_fraction(&self, fraction: f64) -> Result<Point3> {
        let fraction = normalize_fraction(fraction, self.is_closed());
        self.evaluate(self.domain().lerp(fraction))
    }
}

/// Wraps (closed) or clamps (open) a fraction into `[0, 1]`.
///
/// A closed curve never sees `1.0`: it wraps to `0.0`, which is the same
/// point. Non-finite input maps to `0.0`.
#[must_use]
pub fn normalize_fraction(fraction: f64, closed: bool) -> f64 {
    if !fraction.is_finite() {
        return 0.0;
    }
    if closed {
        let wrapped = fraction.rem_euclid(1.0);
        // rem_euclid can round up to the divisor for tiny negative inputs
        if wrapped >= 1.0 {
            0.0
        } else {
            wrapped
        }
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_fractions_wrap() {
        assert!((normalize_fraction(1.25, true) - 0.25).abs() < 1e-12);
        assert!((normalize_fraction(-0.25, true) - 0.75).abs() < 1e-12);
        assert!(normalize_fraction(1.0, true).abs() < 1e-12);
        assert!(normalize_fraction(-1e-20, true) < 1.0);
    }

    #[test]
    fn open_fractions_clamp() {
        assert!((normalize_fraction(1.25, false) - 1.0).abs() < 1e-12);
        assert!(normalize_fraction(-0.5, false).abs() < 1e-12);
        assert!((normalize_fraction(0.4, false) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn non_finite_fraction_is_zero() {
        assert!(normalize_fraction(f64::NAN, true).abs() < 1e-12);
        assert!(normalize_fraction(f64::INFINITY, false).abs() < 1e-12);
    }

    #[test]
    fn domain_lerp() {
        let d = CurveDomain::new(2.0, 6.0);
        assert!((d.lerp(0.25) - 3.0).abs() < 1e-12);
    }
}
