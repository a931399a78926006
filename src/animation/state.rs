use super::camera::OrbitDamping;

/// Whether the patrolling object has arrived yet.
#[derive(Debug, Clone, PartialEq)]
pub enum VehiclePhase<V> {
    /// The asset is still loading; frames animate the globe only.
    Idle,
    /// The object is placed on the patrol loop every frame.
    Running(V),
}

impl<V> VehiclePhase<V> {
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running(_))
    }

    #[must_use]
    pub fn vehicle(&self) -> Option<&V> {
        match self {
            Self::Running(v) => Some(v),
            Self::Idle => None,
        }
    }
}

/// Progress around a loop of `duration` seconds after `elapsed` seconds.
///
/// Always in `[0, 1)`.
#[must_use]
pub fn loop_progress(elapsed: f64, duration: f64) -> f64 {
    let progress = elapsed.rem_euclid(duration) / duration;
    if progress.is_finite() && progress < 1.0 {
        progress
    } else {
        0.0
    }
}

/// Everything the frame loop mutates.
///
/// One instance lives for the whole session. Only the scheduler's frame
/// entry point changes it; everyone else reads.
#[derive(Debug)]
pub struct AnimationState<V> {
    elapsed: f64,
    angular_velocity: f64,
    globe_rotation_y: f64,
    cloud_rotation_y: Option<f64>,
    camera: OrbitDamping,
    phase: VehiclePhase<V>,
}

impl<V> AnimationState<V> {
    /// Creates the initial, idle state.
    #[must_use]
    pub fn new(angular_velocity: f64, cloud_layer: bool, camera: OrbitDamping) -> Self {
        Self {
            elapsed: 0.0,
            angular_velocity,
            globe_rotation_y: 0.0,
            cloud_rotation_y: cloud_layer.then_some(0.0),
            camera,
            phase: VehiclePhase::Idle,
        }
    }

    /// Seconds accumulated from frame deltas.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Globe spin in radians per second.
    #[must_use]
    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    /// Globe rotation about Y in radians.
    #[must_use]
    pub fn globe_rotation_y(&self) -> f64 {
        self.globe_rotation_y
    }

    /// Cloud rotation about Y in radians, if there is a cloud layer.
    #[must_use]
    pub fn cloud_rotation_y(&self) -> Option<f64> {
        self.cloud_rotation_y
    }

    #[must_use]
    pub fn camera(&self) -> &OrbitDamping {
        &self.camera
    }

    #[must_use]
    pub fn phase(&self) -> &VehiclePhase<V> {
        &self.phase
    }

    pub(crate) fn camera_mut(&mut self) -> &mut OrbitDamping {
        &mut self.camera
    }

    pub(crate) fn vehicle_mut(&mut self) -> Option<&mut V> {
        match &mut self.phase {
            VehiclePhase::Running(v) => Some(v),
            VehiclePhase::Idle => None,
        }
    }

    /// Moves from Idle to Running. Hands the object back if already running.
    pub(crate) fn start(&mut self, vehicle: V) -> Result<(), V> {
        if self.phase.is_running() {
            return Err(vehicle);
        }
        self.phase = VehiclePhase::Running(vehicle);
        Ok(())
    }

    /// Advances the timer and spins the globe and clouds by `dt` seconds.
    pub(crate) fn advance(&mut self, dt: f64, cloud_speed_factor: f64) {
        self.elapsed += dt;
        let turn = self.angular_velocity * dt;
        self.globe_rotation_y -= turn;
        if let Some(cloud) = self.cloud_rotation_y.as_mut() {
            *cloud += turn * cloud_speed_factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn state(cloud_layer: bool) -> AnimationState<()> {
        AnimationState::new(0.06, cloud_layer, OrbitDamping::new(20.0, 0.05))
    }

    #[test]
    fn progress_halfway_and_wrap() {
        assert_abs_diff_eq!(loop_progress(10.0, 20.0), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(loop_progress(20.0, 20.0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(loop_progress(45.0, 20.0), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn progress_stays_below_one() {
        assert!(loop_progress(-1e-18, 20.0) < 1.0);
        assert!(loop_progress(19.999_999_999, 20.0) < 1.0);
    }

    #[test]
    fn advance_spins_globe_and_clouds() {
        let mut s = state(true);
        s.advance(1.0, 0.25);
        assert_abs_diff_eq!(s.globe_rotation_y(), -0.06, epsilon = 1e-15);
        assert_abs_diff_eq!(s.cloud_rotation_y().unwrap_or_default(), 0.015, epsilon = 1e-15);
        assert_abs_diff_eq!(s.elapsed(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn no_cloud_layer_stays_none() {
        let mut s = state(false);
        s.advance(2.0, 0.25);
        assert!(s.cloud_rotation_y().is_none());
    }

    #[test]
    fn start_is_one_way() {
        let mut s = state(true);
        assert!(!s.phase().is_running());
        assert_eq!(s.start(()), Ok(()));
        assert!(s.phase().is_running());
        assert_eq!(s.start(()), Err(()));
    }
}
