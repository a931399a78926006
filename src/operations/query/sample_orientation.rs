use crate::geometry::{normalize_fraction, Curve};
use crate::math::{Point3, Vector3, TOLERANCE};

/// Default look-ahead distance as a fraction of the whole curve.
pub const DEFAULT_LOOKAHEAD: f64 = 0.01;

/// Result of sampling a curve for placement and heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrientationSample {
    /// A position on the curve and a point slightly further along it.
    Oriented {
        position: Point3,
        look_target: Point3,
    },
    /// The curve has no length at the sample, so no heading exists.
    Degenerate,
}

impl OrientationSample {
    /// Returns whether no orientation could be derived.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::Degenerate)
    }

    /// Unit heading from the position toward the look target.
    #[must_use]
    pub fn direction(&self) -> Option<Vector3> {
        match self {
            Self::Oriented {
                position,
                look_target,
            } => (look_target - position).try_normalize(TOLERANCE),
            Self::Degenerate => None,
        }
    }
}

/// Samples a position and a look-ahead target on a curve.
///
/// The heading is approximated by sampling a second point `lookahead`
/// further along the curve instead of differentiating it. Failures are
/// reported as [`OrientationSample::Degenerate`] so a per-frame caller can
/// skip the frame and carry on.
pub struct SampleOrientation {
    progress: f64,
    lookahead: f64,
}

impl SampleOrientation {
    /// Creates a new query at `progress` with the default look-ahead.
    #[must_use]
    pub fn new(progress: f64) -> Self {
        Self {
            progress,
            lookahead: DEFAULT_LOOKAHEAD,
        }
    }

    /// Overrides the look-ahead fraction.
    #[must_use]
    pub fn with_lookahead(mut self, lookahead: f64) -> Self {
        self.lookahead = lookahead;
        self
    }

    /// Executes the query.
    ///
    /// Progress wraps on closed curves and clamps on open ones. The target
    /// is taken at `min(progress + lookahead, 1)`. When that clamp lands on
    /// the position itself (the end of an open curve), the target is
    /// extrapolated from a point `lookahead` behind instead.
    pub fn execute<C: Curve + ?Sized>(&self, curve: &C) -> OrientationSample {
        let closed = curve.is_closed();
        let progress = normalize_fraction(self.progress, closed);

        let Ok(position) = curve.point_at_fraction(progress) else {
            return OrientationSample::Degenerate;
        };
        let Ok(mut look_target) = curve.point_at_fraction((progress + self.lookahead).min(1.0))
        else {
            return OrientationSample::Degenerate;
        };

        if !closed && (look_target - position).norm() < TOLERANCE {
            let Ok(behind) = curve.point_at_fraction((progress - self.lookahead).max(0.0)) else {
                return OrientationSample::Degenerate;
            };
            look_target = position + (position - behind);
        }

        if (look_target - position).norm() < TOLERANCE {
            return OrientationSample::Degenerate;
        }

        OrientationSample::Oriented {
            position,
            look_target,
        }
    }
}
