use std::f64::consts::{FRAC_PI_2, PI};

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3};

/// Polar angles are kept this far from the poles.
const POLE_MARGIN: f64 = 1e-6;

/// A damped orbit camera around a fixed target.
///
/// User input accumulates into pending rotation and zoom; every frame
/// [`OrbitDamping::update`] applies `damping_factor` of what is pending and
/// keeps the rest, so motion eases out over several frames.
///
/// Angles follow the globe convention: `polar` is measured from +Y and
/// `azimuth` from +Z toward +X.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitDamping {
    pub target: Point3,
    pub azimuth: f64,
    pub polar: f64,
    pub distance: f64,
    min_distance: f64,
    max_distance: f64,
    damping_factor: f64,
    pending_azimuth: f64,
    pending_polar: f64,
    /// Pending zoom as a log-scale factor.
    pending_zoom: f64,
}

impl OrbitDamping {
    /// Creates a camera on the equator looking at the origin from +Z.
    #[must_use]
    pub fn new(distance: f64, damping_factor: f64) -> Self {
        Self {
            target: Point3::origin(),
            azimuth: 0.0,
            polar: FRAC_PI_2,
            distance,
            min_distance: 0.0,
            max_distance: f64::INFINITY,
            damping_factor,
            pending_azimuth: 0.0,
            pending_polar: 0.0,
            pending_zoom: 0.0,
        }
    }

    /// Returns the `(min, max)` zoom distance limits.
    #[must_use]
    pub fn distance_limits(&self) -> (f64, f64) {
        (self.min_distance, self.max_distance)
    }

    /// Sets the zoom distance limits. `max` may be infinite.
    ///
    /// # Errors
    ///
    /// Returns an error if `min` is negative or not finite, or `max` is NaN or
    /// below `min`. The previous limits are kept in that case.
    pub fn set_distance_limits(&mut self, min: f64, max: f64) -> Result<()> {
        if !min.is_finite() || min < 0.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "min_distance",
                value: min,
                min: 0.0,
                max: f64::MAX,
            }
            .into());
        }
        if max.is_nan() || max < min {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "max_distance",
                value: max,
                min,
                max: f64::INFINITY,
            }
            .into());
        }
        self.min_distance = min;
        self.max_distance = max;
        Ok(())
    }

    /// Queues a rotation by the given angle deltas in radians.
    pub fn rotate(&mut self, d_azimuth: f64, d_polar: f64) {
        self.pending_azimuth += d_azimuth;
        self.pending_polar += d_polar;
    }

    /// Queues a zoom; `factor < 1` moves closer.
    pub fn zoom(&mut self, factor: f64) {
        if factor > 0.0 && factor.is_finite() {
            self.pending_zoom += factor.ln();
        }
    }

    /// Whether there is pending motion left to apply.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        const REST: f64 = 1e-9;
        self.pending_azimuth.abs() > REST
            || self.pending_polar.abs() > REST
            || self.pending_zoom.abs() > REST
    }

    /// Applies one frame of damped motion.
    pub fn update(&mut self) {
        let k = self.damping_factor;
        self.azimuth += self.pending_azimuth * k;
        self.polar = (self.polar + self.pending_polar * k).clamp(POLE_MARGIN, PI - POLE_MARGIN);
        self.distance = (self.distance * (self.pending_zoom * k).exp())
            .clamp(self.min_distance, self.max_distance);

        self.pending_azimuth *= 1.0 - k;
        self.pending_polar *= 1.0 - k;
        self.pending_zoom *= 1.0 - k;
    }

    /// Camera position.
    #[must_use]
    pub fn eye(&self) -> Point3 {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        self.target
            + Vector3::new(
                self.distance * sin_polar * sin_az,
                self.distance * cos_polar,
                self.distance * sin_polar * cos_az,
            )
    }
}
