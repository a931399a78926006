use crate::error::{GeometryError, Result};
use crate::geometry::{CatmullRom, Ellipse};

/// Minimum number of control points for a closed loop.
const MIN_LOOP_SAMPLES: usize = 3;

/// Builds the closed patrol loop the vehicle follows.
///
/// Samples a horizontal ellipse at constant height and threads the
/// samples with a closed centripetal Catmull-Rom spline. The loop does not
/// depend on any named location.
pub struct BuildLoop {
    radius_x: f64,
    radius_z: f64,
    sample_count: usize,
    height: f64,
}

impl BuildLoop {
    /// Creates a new `BuildLoop` operation in the plane `y = 0`.
    #[must_use]
    pub fn new(radius_x: f64, radius_z: f64, sample_count: usize) -> Self {
        Self {
            radius_x,
            radius_z,
            sample_count,
            height: 0.0,
        }
    }

    /// Moves the loop to the plane `y = height`.
    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Executes the operation, returning the closed loop curve.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three samples are requested or a
    /// radius is non-positive.
    pub fn execute(&self) -> Result<CatmullRom> {
        if self.sample_count < MIN_LOOP_SAMPLES {
            #[allow(clippy::cast_precision_loss)]
            let (value, min) = (self.sample_count as f64, MIN_LOOP_SAMPLES as f64);
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "sample_count",
                value,
                min,
                max: f64::INFINITY,
            }
            .into());
        }
        let ellipse = Ellipse::horizontal(self.radius_x, self.radius_z, self.height)?;
        CatmullRom::new(ellipse.sample(self.sample_count), true)
    }
}
