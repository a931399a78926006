pub mod spherical;

pub use spherical::{project, unproject, GeoPoint};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Unit quaternion used for object orientations.
pub type UnitQuaternion = nalgebra::UnitQuaternion<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Linearly interpolates between two points: `a * (1 - t) + b * t`.
///
/// Written in the weighted form so that `t = 0` returns exactly `a` and
/// `t = 1` returns exactly `b`.
#[must_use]
pub fn lerp(a: &Point3, b: &Point3, t: f64) -> Point3 {
    Point3::from(a.coords * (1.0 - t) + b.coords * t)
}
