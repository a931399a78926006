use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{normalize_fraction, Curve, CurveDomain};

/// Number of chords used to build the arc-length lookup table.
const ARC_LENGTH_DIVISIONS: usize = 200;

/// Knot intervals shorter than this are treated as coincident points.
const MIN_KNOT_INTERVAL: f64 = 1e-4;

/// A centripetal Catmull-Rom spline through an ordered set of points.
///
/// The curve passes through every control point. Knot spacing follows
/// `|p_{i+1} - p_i|^0.5`, which avoids cusps and self-intersections on
/// tightly spaced points.
///
/// The parameter domain is `[0, 1]`, split evenly between segments. An
/// open spline has `n - 1` segments and extrapolates a phantom point past
/// each end; a closed spline has `n` segments and wraps its neighbourhood
/// around. [`Curve::point_at_fraction`] is overridden to sample by arc
/// length, so equal fraction steps cover equal distances along the curve.
#[derive(Debug, Clone)]
pub struct CatmullRom {
    points: Vec<Point3>,
    closed: bool,
    /// Cumulative chord length at `t = i / ARC_LENGTH_DIVISIONS`.
    arc_lengths: Vec<f64>,
}

impl CatmullRom {
    /// Creates a new spline.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two control points are given or a
    /// control point is not finite.
    pub fn new(points: Vec<Point3>, closed: bool) -> Result<Self> {
        if points.len() < 2 {
            return Err(GeometryError::Degenerate(
                "a spline needs at least two control points".into(),
            )
            .into());
        }
        if points.iter().any(|p| !p.coords.iter().all(|c| c.is_finite())) {
            return Err(
                GeometryError::Degenerate("control points must be finite".into()).into(),
            );
        }

        let mut curve = Self {
            points,
            closed,
            arc_lengths: Vec::new(),
        };
        curve.arc_lengths = curve.build_arc_lengths();
        Ok(curve)
    }

    /// Returns the control points.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the approximate arc length of the curve.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.arc_lengths.last().copied().unwrap_or(0.0)
    }

    /// Returns whether the curve has (approximately) zero length.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.length() < TOLERANCE
    }

    fn segment_count(&self) -> usize {
        if self.closed {
            self.points.len()
        } else {
            self.points.len() - 1
        }
    }

    /// Splits a parameter into a segment index and a local weight in `[0, 1]`.
    fn locate(&self, t: f64) -> (usize, f64) {
        let n = self.points.len();
        let t = normalize_fraction(t, self.closed);
        #[allow(clippy::cast_precision_loss)]
        let scaled = self.segment_count() as f64 * t;
        let floor = scaled.floor();
        let weight = scaled - floor;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = floor as usize;

        if self.closed {
            (index % n, weight)
        } else if index >= n - 1 {
            (n - 2, 1.0)
        } else {
            (index, weight)
        }
    }

    /// Returns the four points that shape segment `i`.
    fn neighbourhood(&self, i: usize) -> [Point3; 4] {
        let n = self.points.len();
        let p1 = self.points[i % n];
        let p2 = self.points[(i + 1) % n];
        let p0 = if self.closed || i > 0 {
            self.points[(i + n - 1) % n]
        } else {
            p1 + (p1 - p2)
        };
        let p3 = if self.closed || i + 2 < n {
            self.points[(i + 2) % n]
        } else {
            p2 + (p2 - p1)
        };
        [p0, p1, p2, p3]
    }

    fn segment(&self, i: usize) -> CubicSegment {
        let [p0, p1, p2, p3] = self.neighbourhood(i);
        CubicSegment::centripetal(&p0, &p1, &p2, &p3)
    }

    fn build_arc_lengths(&self) -> Vec<f64> {
        let mut lengths = Vec::with_capacity(ARC_LENGTH_DIVISIONS + 1);
        let mut previous = self.point_at_parameter(0.0);
        let mut total = 0.0;
        lengths.push(total);
        for j in 1..=ARC_LENGTH_DIVISIONS {
            #[allow(clippy::cast_precision_loss)]
            let current = self.point_at_parameter(j as f64 / ARC_LENGTH_DIVISIONS as f64);
            total += (current - previous).norm();
            lengths.push(total);
            previous = current;
        }
        lengths
    }

    fn point_at_parameter(&self, t: f64) -> Point3 {
        let (i, w) = self.locate(t);
        self.segment(i).point(w)
    }

    /// Maps an arc-length fraction to the curve parameter.
    fn fraction_to_parameter(&self, fraction: f64) -> f64 {
        let target = fraction * self.length();
        let last = self.arc_lengths.len() - 1;
        #[allow(clippy::cast_precision_loss)]
        let divisions = last as f64;
        let lower = match self
            .arc_lengths
            .binary_search_by(|probe| probe.total_cmp(&target))
        {
            #[allow(clippy::cast_precision_loss)]
            Ok(i) => return i as f64 / divisions,
            Err(i) => i.saturating_sub(1).min(last - 1),
        };
        let span = self.arc_lengths[lower + 1] - self.arc_lengths[lower];
        let local = if span < TOLERANCE {
            0.0
        } else {
            ((target - self.arc_lengths[lower]) / span).clamp(0.0, 1.0)
        };
        #[allow(clippy::cast_precision_loss)]
        let lower = lower as f64;
        (lower + local) / divisions
    }
}

impl Curve for CatmullRom {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        Ok(self.point_at_parameter(t))
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        let (i, w) = self.locate(t);
        let derivative = self.segment(i).derivative(w);
        let len = derivative.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(derivative / len)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        self.closed
    }

    fn point_at_fraction(&self, fraction: f64) -> Result<Point3> {
        let fraction = normalize_fraction(fraction, self.closed);
        if self.is_degenerate() {
            return self.evaluate(fraction);
        }
        self.evaluate(self.fraction_to_parameter(fraction))
    }
}

/// Cubic Hermite polynomial `c0 + c1 w + c2 w^2 + c3 w^3` for one segment.
#[derive(Debug, Clone, Copy)]
struct CubicSegment {
    c0: Vector3,
    c1: Vector3,
    c2: Vector3,
    c3: Vector3,
}

impl CubicSegment {
    /// Builds the segment between `p1` and `p2` with centripetal knots.
    fn centripetal(p0: &Point3, p1: &Point3, p2: &Point3, p3: &Point3) -> Self {
        // alpha = 0.5: knot interval is sqrt of chord length
        let mut dt0 = (p1 - p0).norm_squared().powf(0.25);
        let mut dt1 = (p2 - p1).norm_squared().powf(0.25);
        let mut dt2 = (p3 - p2).norm_squared().powf(0.25);

        if dt1 < MIN_KNOT_INTERVAL {
            dt1 = 1.0;
        }
        if dt0 < MIN_KNOT_INTERVAL {
            dt0 = dt1;
        }
        if dt2 < MIN_KNOT_INTERVAL {
            dt2 = dt1;
        }

        let (x0, x1, x2, x3) = (p0.coords, p1.coords, p2.coords, p3.coords);
        let m1 = ((x1 - x0) / dt0 - (x2 - x0) / (dt0 + dt1) + (x2 - x1) / dt1) * dt1;
        let m2 = ((x2 - x1) / dt1 - (x3 - x1) / (dt1 + dt2) + (x3 - x2) / dt2) * dt1;

        Self {
            c0: x1,
            c1: m1,
            c2: x1 * -3.0 + x2 * 3.0 - m1 * 2.0 - m2,
            c3: x1 * 2.0 - x2 * 2.0 + m1 + m2,
        }
    }

    fn point(&self, w: f64) -> Point3 {
        let w2 = w * w;
        Point3::from(self.c0 + self.c1 * w + self.c2 * w2 + self.c3 * (w2 * w))
    }

    fn derivative(&self, w: f64) -> Vector3 {
        self.c1 + self.c2 * (2.0 * w) + self.c3 * (3.0 * w * w)
    }
}
