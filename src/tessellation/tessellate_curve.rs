use crate::error::{GeometryError, Result};
use crate::geometry::Curve;

use super::Polyline;

/// Tessellates a curve into `segments + 1` evenly spaced points.
///
/// Points are spaced by [`Curve::point_at_fraction`], so on an arc-length
/// parameterized curve the segments have equal length. For a closed curve
/// the last point repeats the first.
pub struct TessellateCurve {
    segments: usize,
}

impl TessellateCurve {
    /// Creates a new `TessellateCurve` operation.
    #[must_use]
    pub fn new(segments: usize) -> Self {
        Self { segments }
    }

    /// Executes the tessellation, returning a polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if `segments` is zero or evaluation fails.
    pub fn execute<C: Curve + ?Sized>(&self, curve: &C) -> Result<Polyline> {
        if self.segments == 0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "segments",
                value: 0.0,
                min: 1.0,
                max: f64::INFINITY,
            }
            .into());
        }
        let points = (0..=self.segments)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let fraction = i as f64 / self.segments as f64;
                curve.point_at_fraction(fraction)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Polyline { points })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::BuildLoop;
    use crate::geometry::CatmullRom;
    use crate::math::Point3;
    use approx::assert_abs_diff_eq;

    #[test]
    fn closed_curve_polyline_is_closed() {
        let curve = BuildLoop::new(4.0, 4.0, 12).execute().unwrap();
        let poly = TessellateCurve::new(40).execute(&curve).unwrap();
        assert_eq!(poly.points.len(), 41);
        assert_abs_diff_eq!(poly.points[0], poly.points[40], epsilon = 1e-12);
    }

    #[test]
    fn open_curve_polyline_hits_both_ends() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(0.0, 6.0, 0.0);
        let curve = CatmullRom::new(vec![a, b], false).unwrap();
        let poly = TessellateCurve::new(3).execute(&curve).unwrap();
        assert_abs_diff_eq!(poly.points[0], a, epsilon = 1e-12);
        assert_abs_diff_eq!(poly.points[3], b, epsilon = 1e-12);
        assert_abs_diff_eq!(poly.length(), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn segments_have_equal_length() {
        let curve = BuildLoop::new(10.0, 5.0, 24).execute().unwrap();
        let poly = TessellateCurve::new(50).execute(&curve).unwrap();
        let lengths: Vec<f64> = poly.points.windows(2).map(|w| (w[1] - w[0]).norm()).collect();
        let mean = lengths.iter().sum::<f64>() / 50.0;
        for l in lengths {
            assert_abs_diff_eq!(l, mean, epsilon = mean * 0.02);
        }
    }

    #[test]
    fn zero_segments_is_rejected() {
        let curve = BuildLoop::new(4.0, 4.0, 12).execute().unwrap();
        assert!(TessellateCurve::new(0).execute(&curve).is_err());
    }
}
