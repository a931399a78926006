//! Latitude/longitude to Cartesian conversion on a simple sphere.
//!
//! Convention: `phi = 90 - latitude` is the polar angle measured from +Y,
//! `theta = 90 + longitude` is the azimuth measured in the XZ plane, and
//!
//! ```text
//! x = r * sin(phi) * sin(theta)
//! y = r * cos(phi)
//! z = r * sin(phi) * cos(theta)
//! ```
//!
//! No ellipsoidal correction is applied.

use serde::{Deserialize, Serialize};

use super::{Point3, TOLERANCE};

/// A position on the globe in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    /// Latitude in degrees, expected in `[-90, 90]`.
    pub latitude_deg: f64,
    /// Longitude in degrees, any value (wraps).
    pub longitude_deg: f64,
}

impl GeoPoint {
    /// Creates a new geographic point.
    #[must_use]
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Projects this point onto a sphere of the given radius.
    #[must_use]
    pub fn project(&self, radius: f64) -> Point3 {
        project(self.latitude_deg, self.longitude_deg, radius)
    }
}

/// Converts `(latitude, longitude, radius)` into a Cartesian point.
///
/// Latitude outside `[-90, 90]` is not validated; the result is
/// well-defined but has no geographic meaning.
#[must_use]
pub fn project(latitude_deg: f64, longitude_deg: f64, radius: f64) -> Point3 {
    let phi = (90.0 - latitude_deg).to_radians();
    let theta = (90.0 + longitude_deg).to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Point3::new(
        radius * sin_phi * sin_theta,
        radius * cos_phi,
        radius * sin_phi * cos_theta,
    )
}

/// Inverse of [`project`]: recovers latitude/longitude from a point.
///
/// Longitude is returned in `(-180, 180]`. Returns `None` for points at
/// the origin, where no direction is defined. At the poles longitude is 0.
#[must_use]
pub fn unproject(point: &Point3) -> Option<GeoPoint> {
    let r = point.coords.norm();
    if r < TOLERANCE {
        return None;
    }
    let latitude_deg = 90.0 - (point.y / r).clamp(-1.0, 1.0).acos().to_degrees();
    let horizontal = point.x.hypot(point.z);
    let longitude_deg = if horizontal < TOLERANCE {
        0.0
    } else {
        // theta = atan2(x, z), longitude = theta - 90
        normalize_longitude(point.x.atan2(point.z).to_degrees() - 90.0)
    };
    Some(GeoPoint::new(latitude_deg, longitude_deg))
}

/// Wraps a longitude into `(-180, 180]`.
#[must_use]
pub fn normalize_longitude(longitude_deg: f64) -> f64 {
    let wrapped = (longitude_deg + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn projected_points_lie_on_sphere() {
        for lat in (-90..=90).step_by(15) {
            for lon in (-180..=180).step_by(20) {
                for &r in &[0.5, 1.0, 8.0, 6371.0] {
                    let p = project(f64::from(lat), f64::from(lon), r);
                    assert_abs_diff_eq!(p.coords.norm(), r, epsilon = 1e-9 * r);
                }
            }
        }
    }

    #[test]
    fn equator_prime_meridian_maps_to_x_axis() {
        // theta = 90 deg puts the prime meridian on +X.
        let p = project(0.0, 0.0, 8.0);
        assert_abs_diff_eq!(p, Point3::new(8.0, 0.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn ninety_east_maps_to_negative_z() {
        let p = project(0.0, 90.0, 8.0);
        assert_abs_diff_eq!(p, Point3::new(0.0, 0.0, -8.0), epsilon = 1e-9);
    }

    #[test]
    fn poles_map_to_y_axis() {
        assert_abs_diff_eq!(project(90.0, 42.0, 2.0), Point3::new(0.0, 2.0, 0.0), epsilon = 1e-9);
        assert_abs_diff_eq!(project(-90.0, -7.0, 2.0), Point3::new(0.0, -2.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn longitude_wraps() {
        let a = project(12.0, 170.0, 3.0);
        let b = project(12.0, -190.0, 3.0);
        assert_abs_diff_eq!(a, b, epsilon = 1e-9);
    }

    #[test]
    fn unproject_recovers_coordinates() {
        let samples = [(51.5, -0.12), (40.7, -74.0), (-33.9, 151.2), (35.7, 139.7), (0.0, 180.0)];
        for (lat, lon) in samples {
            let geo = unproject(&project(lat, lon, 8.0)).unwrap();
            assert_abs_diff_eq!(geo.latitude_deg, lat, epsilon = 1e-9);
            assert_abs_diff_eq!(geo.longitude_deg, lon, epsilon = 1e-9);
        }
    }

    #[test]
    fn unproject_origin_is_none() {
        assert!(unproject(&Point3::origin()).is_none());
    }

    #[test]
    fn normalize_longitude_range() {
        assert_abs_diff_eq!(normalize_longitude(190.0), -170.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_longitude(-180.0), 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_longitude(540.0), 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(normalize_longitude(-45.0), -45.0, epsilon = 1e-12);
    }
}
