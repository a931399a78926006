use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain};

/// A full planar ellipse in 3D space.
///
/// `P(t) = center + radius_u * cos(t) * u_dir + radius_v * sin(t) * v_dir`
/// where `v_dir = normal x u_dir` and `t` runs over `[0, 2*pi]`.
///
/// The two radii carry no ordering: `radius_u == radius_v` is a circle.
#[derive(Debug, Clone)]
pub struct Ellipse {
    center: Point3,
    radius_u: f64,
    radius_v: f64,
    normal: Vector3,
    u_dir: Vector3,
}

impl Ellipse {
    /// Creates a new ellipse.
    ///
    /// # Errors
    ///
    /// Returns an error if either radius is non-positive, the normal or
    /// `u_dir` is zero-length, or `u_dir` is not perpendicular to the normal.
    pub fn new(
        center: Point3,
        radius_u: f64,
        radius_v: f64,
        normal: Vector3,
        u_dir: Vector3,
    ) -> Result<Self> {
        for (parameter, value) in [("radius_u", radius_u), ("radius_v", radius_v)] {
            if value < TOLERANCE || !value.is_finite() {
                return Err(GeometryError::ParameterOutOfRange {
                    parameter,
                    value,
                    min: TOLERANCE,
                    max: f64::INFINITY,
                }
                .into());
            }
        }

        let normal_len = normal.norm();
        if normal_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / normal_len;

        let u_len = u_dir.norm();
        if u_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let u_dir = u_dir / u_len;

        if normal.dot(&u_dir).abs() > TOLERANCE {
            return Err(GeometryError::Degenerate(
                "u direction must be perpendicular to normal".into(),
            )
            .into());
        }

        Ok(Self {
            center,
            radius_u,
            radius_v,
            normal,
            u_dir,
        })
    }

    /// Creates an ellipse in the horizontal plane `y = height`.
    ///
    /// `radius_x` runs along +X and `radius_z` along +Z, so the curve starts
    /// at `(radius_x, height, 0)` and moves toward +Z.
    ///
    /// # Errors
    ///
    /// Returns an error if either radius is non-positive.
    pub fn horizontal(radius_x: f64, radius_z: f64, height: f64) -> Result<Self> {
        // (-Y) x X = +Z
        Self::new(
            Point3::new(0.0, height, 0.0),
            radius_x,
            radius_z,
            -Vector3::y(),
            Vector3::x(),
        )
    }

    /// Returns the center of the ellipse.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the unit normal of the ellipse plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Samples `count` points evenly spaced in angle.
    ///
    /// The closing point is not repeated: sample `count` would coincide
    /// with sample 0.
    #[must_use]
    pub fn sample(&self, count: usize) -> Vec<Point3> {
        (0..count)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let t = TAU * i as f64 / count as f64;
                self.point(t)
            })
            .collect()
    }

    fn v_dir(&self) -> Vector3 {
        self.normal.cross(&self.u_dir)
    }

    fn point(&self, t: f64) -> Point3 {
        let (sin, cos) = t.sin_cos();
        self.center + self.u_dir * (self.radius_u * cos) + self.v_dir() * (self.radius_v * sin)
    }
}

impl Curve for Ellipse {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        Ok(self.point(t))
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        let (sin, cos) = t.sin_cos();
        let tangent = self.u_dir * (-self.radius_u * sin) + self.v_dir() * (self.radius_v * cos);
        let len = tangent.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(tangent / len)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn horizontal_starts_on_x_axis() {
        let e = Ellipse::horizontal(3.0, 2.0, 0.5).unwrap();
        assert_abs_diff_eq!(e.evaluate(0.0).unwrap(), Point3::new(3.0, 0.5, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn horizontal_quarter_turn_reaches_z() {
        let e = Ellipse::horizontal(3.0, 2.0, 0.0).unwrap();
        assert_abs_diff_eq!(e.evaluate(FRAC_PI_2).unwrap(), Point3::new(0.0, 0.0, 2.0), epsilon = 1e-9);
    }

    #[test]
    fn tangent_at_zero_points_toward_z() {
        let e = Ellipse::horizontal(3.0, 2.0, 0.0).unwrap();
        assert_abs_diff_eq!(e.tangent(0.0).unwrap(), Vector3::z(), epsilon = 1e-9);
    }

    #[test]
    fn samples_keep_constant_height() {
        let e = Ellipse::horizontal(10.0, 6.0, 1.5).unwrap();
        let samples = e.sample(32);
        assert_eq!(samples.len(), 32);
        for s in &samples {
            assert_abs_diff_eq!(s.y, 1.5, epsilon = 1e-12);
            let q = (s.x / 10.0).powi(2) + (s.z / 6.0).powi(2);
            assert_abs_diff_eq!(q, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn samples_do_not_repeat_start() {
        let e = Ellipse::horizontal(2.0, 2.0, 0.0).unwrap();
        let samples = e.sample(4);
        assert!((samples[3] - samples[0]).norm() > 1.0);
    }

    #[test]
    fn equal_radii_give_circle() {
        let e = Ellipse::horizontal(2.0, 2.0, 0.0).unwrap();
        for s in e.sample(12) {
            assert_abs_diff_eq!(s.coords.norm(), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn fraction_wraps_on_closed_ellipse() {
        let e = Ellipse::horizontal(3.0, 2.0, 0.0).unwrap();
        assert!(e.is_closed());
        let a = e.point_at_fraction(0.0).unwrap();
        let b = e.point_at_fraction(1.0).unwrap();
        assert_abs_diff_eq!(a, b, epsilon = 1e-12);
    }

    #[test]
    fn invalid_radius() {
        assert!(Ellipse::horizontal(0.0, 1.0, 0.0).is_err());
        assert!(Ellipse::horizontal(1.0, -1.0, 0.0).is_err());
        assert!(Ellipse::horizontal(f64::NAN, 1.0, 0.0).is_err());
    }

    #[test]
    fn skewed_u_direction_is_rejected() {
        let r = Ellipse::new(Point3::origin(), 1.0, 1.0, Vector3::z(), Vector3::new(1.0, 0.0, 1.0));
        assert!(r.is_err());
    }
}
