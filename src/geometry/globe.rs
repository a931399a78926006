use crate::error::{GeometryError, Result};
use crate::math::{self, GeoPoint, Point3, Vector3, TOLERANCE};

/// The base sphere everything is projected onto.
///
/// Centered at the origin with its north pole on +Y. See
/// [`math::spherical`](crate::math::spherical) for the angle convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Globe {
    radius: f64,
}

impl Globe {
    /// Creates a new globe.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive or not finite.
    pub fn new(radius: f64) -> Result<Self> {
        if radius < TOLERANCE || !radius.is_finite() {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "radius",
                value: radius,
                min: TOLERANCE,
                max: f64::INFINITY,
            }
            .into());
        }
        Ok(Self { radius })
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Projects a geographic point onto the surface.
    #[must_use]
    pub fn project(&self, geo: &GeoPoint) -> Point3 {
        geo.project(self.radius)
    }

    /// Projects a geographic point `altitude` units above the surface.
    #[must_use]
    pub fn project_at_altitude(&self, geo: &GeoPoint, altitude: f64) -> Point3 {
        geo.project(self.radius + altitude)
    }

    /// Outward unit normal at a geographic point.
    #[must_use]
    pub fn normal(&self, geo: &GeoPoint) -> Vector3 {
        geo.project(1.0).coords
    }

    /// Recovers the geographic point under a Cartesian position.
    ///
    /// Returns `None` at the globe center.
    #[must_use]
    pub fn inverse(&self, point: &Point3) -> Option<GeoPoint> {
        math::unproject(point)
    }

    /// Height of a point above the surface (negative below it).
    #[must_use]
    pub fn altitude(&self, point: &Point3) -> f64 {
        point.coords.norm() - self.radius
    }
}
