use crate::error::{GeometryError, Result};
use crate::geometry::Curve;

/// Default number of chords used to approximate a curve length.
const DEFAULT_DIVISIONS: usize = 200;

/// Computes the length of a curve by summing chords.
///
/// The curve is walked evenly across its parameter domain. A closed curve
/// contributes its closing chord as the last step.
pub struct Length {
    divisions: usize,
}

impl Length {
    /// Creates a new `Length` query with the default chord count.
    #[must_use]
    pub fn new() -> Self {
        Self {
            divisions: DEFAULT_DIVISIONS,
        }
    }

    /// Overrides the chord count.
    #[must_use]
    pub fn with_divisions(mut self, divisions: usize) -> Self {
        self.divisions = divisions;
        self
    }

    /// Executes the query, returning the approximate curve length.
    ///
    /// # Errors
    ///
    /// Returns an error if `divisions` is zero or evaluation fails.
    pub fn execute<C: Curve + ?Sized>(&self, curve: &C) -> Result<f64> {
        if self.divisions == 0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "divisions",
                value: 0.0,
                min: 1.0,
                max: f64::INFINITY,
            }
            .into());
        }
        let domain = curve.domain();
        let mut previous = curve.evaluate(domain.t_min)?;
        let mut total = 0.0;
        for i in 1..=self.divisions {
            #[allow(clippy::cast_precision_loss)]
            let fraction = i as f64 / self.divisions as f64;
            // evaluate directly: point_at_fraction would wrap 1.0 back to the start
            let current = curve.evaluate(domain.lerp(fraction))?;
            total += (current - previous).norm();
            previous = current;
        }
        Ok(total)
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{CatmullRom, Ellipse};
    use crate::math::Point3;
    use std::f64::consts::TAU;

    #[test]
    fn straight_segment_length_3_4_5() {
        let curve = CatmullRom::new(
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0)],
            false,
        )
        .unwrap();
        let len = Length::new().execute(&curve).unwrap();
        assert!((len - 5.0).abs() < 1e-9);
    }

    #[test]
    fn circle_circumference() {
        let circle = Ellipse::horizontal(2.0, 2.0, 0.0).unwrap();
        let len = Length::new().with_divisions(2000).execute(&circle).unwrap();
        assert!((len - TAU * 2.0).abs() < 1e-4);
    }

    #[test]
    fn matches_spline_arc_length_table() {
        let curve = CatmullRom::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(3.0, 0.0, 2.0),
            ],
            false,
        )
        .unwrap();
        let len = Length::new().execute(&curve).unwrap();
        assert!((len - curve.length()).abs() < 1e-9);
    }

    #[test]
    fn zero_divisions_is_rejected() {
        let circle = Ellipse::horizontal(1.0, 1.0, 0.0).unwrap();
        assert!(Length::new().with_divisions(0).execute(&circle).is_err());
    }
}
