mod tessellate_curve;

pub use tessellate_curve::TessellateCurve;

use crate::math::Point3;

/// A polyline approximation of a curve.
///
/// The renderer sweeps its tube mesh along these points.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point3>,
}

impl Polyline {
    /// Sum of the segment lengths.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }
}
