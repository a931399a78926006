use std::f64::consts::PI;

use crate::error::{GeometryError, Result};
use crate::geometry::{CatmullRom, Globe};
use crate::math::{lerp, GeoPoint, Point3, TOLERANCE};

/// Endpoints closer than this (in cosine of the central angle) to
/// `-1` are treated as antipodal.
const ANTIPODAL_TOLERANCE: f64 = 1e-9;

/// Shape parameters shared by every flight arc on a globe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcParams {
    /// Radius of the base sphere.
    pub base_radius: f64,
    /// Number of chord subdivisions; the arc has `sample_count + 1` waypoints.
    pub sample_count: usize,
    /// Extra height at the arc midpoint.
    pub bulge_amplitude: f64,
}

impl ArcParams {
    /// Creates a new parameter set.
    #[must_use]
    pub fn new(base_radius: f64, sample_count: usize, bulge_amplitude: f64) -> Self {
        Self {
            base_radius,
            sample_count,
            bulge_amplitude,
        }
    }

    /// Checks the parameters and returns the base globe.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive, `sample_count` is
    /// zero, or the bulge amplitude is negative or not finite.
    pub fn validate(&self) -> Result<Globe> {
        let globe = Globe::new(self.base_radius)?;
        if self.sample_count < 1 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "sample_count",
                value: 0.0,
                min: 1.0,
                max: f64::INFINITY,
            }
            .into());
        }
        if self.bulge_amplitude < 0.0 || !self.bulge_amplitude.is_finite() {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "bulge_amplitude",
                value: self.bulge_amplitude,
                min: 0.0,
                max: f64::INFINITY,
            }
            .into());
        }
        Ok(globe)
    }
}

/// Builds a flight arc between two geographic points.
///
/// The chord between the projected endpoints is subdivided, every
/// subdivision point is pushed back out to the sphere and lifted by
/// `bulge_amplitude * sin(pi * i / n)`, and the resulting waypoints are
/// threaded with an open centripetal Catmull-Rom spline. The arc leaves
/// and lands on the surface and peaks halfway.
pub struct BuildArc {
    from: GeoPoint,
    to: GeoPoint,
    params: ArcParams,
}

impl BuildArc {
    /// Creates a new `BuildArc` operation.
    #[must_use]
    pub fn new(from: GeoPoint, to: GeoPoint, params: ArcParams) -> Self {
        Self { from, to, params }
    }

    /// Computes the `sample_count + 1` lifted waypoints.
    ///
    /// Coincident endpoints collapse to `sample_count + 1` copies of the
    /// projected point, so the resulting curve has zero length.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or the endpoints are
    /// antipodal, where the chord passes through the globe center and the
    /// arc direction is undefined.
    pub fn waypoints(&self) -> Result<Vec<Point3>> {
        let globe = self.params.validate()?;
        let start = globe.project(&self.from);
        let end = globe.project(&self.to);
        let n = self.params.sample_count;

        if (end - start).norm() < TOLERANCE * globe.radius() {
            return Ok(vec![start; n + 1]);
        }

        let r2 = globe.radius() * globe.radius();
        if start.coords.dot(&end.coords) / r2 <= -1.0 + ANTIPODAL_TOLERANCE {
            return Err(GeometryError::Degenerate(
                "arc endpoints are antipodal".into(),
            )
            .into());
        }

        (0..=n)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let fraction = i as f64 / n as f64;
                let chord = lerp(&start, &end, fraction).coords;
                let len = chord.norm();
                if len < TOLERANCE {
                    return Err(GeometryError::ZeroVector.into());
                }
                let radius = globe.radius() + self.params.bulge_amplitude * (PI * fraction).sin();
                Ok(Point3::from(chord / len * radius))
            })
            .collect()
    }

    /// Executes the operation, returning the arc curve.
    ///
    /// # Errors
    ///
    /// See [`BuildArc::waypoints`].
    pub fn execute(&self) -> Result<CatmullRom> {
        CatmullRom::new(self.waypoints()?, false)
    }
}
