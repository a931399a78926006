use crate::config::GlobeConfig;
use crate::error::Result;
use crate::geometry::CatmullRom;
use crate::math::{Point3, UnitQuaternion};
use crate::operations::creation::BuildLoop;
use crate::operations::query::{OrientationSample, SampleOrientation};

use super::asset::{AssetPoll, AssetSlot};
use super::camera::OrbitDamping;
use super::host::FrameCallback;
use super::state::{loop_progress, AnimationState};
use super::vehicle::MovingObject;

/// What the renderer reads to draw one frame.
#[derive(Debug)]
pub struct SceneFrame<'a, V> {
    /// Seconds since the scheduler started.
    pub elapsed: f64,
    /// Fraction of the current patrol lap, in `[0, 1)`.
    pub progress: f64,
    /// Globe rotation about Y in radians.
    pub globe_rotation_y: f64,
    /// Cloud rotation about Y in radians, if there is a cloud layer.
    pub cloud_rotation_y: Option<f64>,
    /// Camera position after damping.
    pub camera_eye: Point3,
    /// Point the camera looks at.
    pub camera_target: Point3,
    /// The patrolling object, once it has arrived.
    pub vehicle: Option<&'a V>,
}

/// Draws frames. Owned by the host application.
pub trait Renderer<V> {
    /// Draws the scene as described by `frame`.
    fn draw(&mut self, frame: &SceneFrame<'_, V>);
}

/// The per-frame update loop.
///
/// Each frame advances the timer, spins the globe and cloud layer,
/// settles the camera, places the vehicle on the patrol loop (once it has
/// arrived) and hands the result to the renderer. Nothing here fails or
/// blocks: a missing vehicle or a degenerate sample only skips placement.
pub struct Scheduler<V> {
    state: AnimationState<V>,
    loop_path: CatmullRom,
    loop_duration: f64,
    cloud_speed_factor: f64,
    lookahead: f64,
    vehicle_offset: UnitQuaternion,
    assets: Option<AssetSlot<V>>,
    degenerate: bool,
}

impl<V: MovingObject> Scheduler<V> {
    /// Builds the patrol loop and the idle initial state.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the loop cannot
    /// be built.
    pub fn new(config: &GlobeConfig) -> Result<Self> {
        config.validate()?;
        let loop_path = BuildLoop::new(
            config.loop_radius_x,
            config.loop_radius_z,
            config.loop_sample_count,
        )
        .with_height(config.loop_height)
        .execute()?;
        let [x, y, z] = config.vehicle_offset;
        let camera = OrbitDamping::new(config.camera_distance, config.damping_factor);

        Ok(Self {
            state: AnimationState::new(config.angular_velocity, config.cloud_layer, camera),
            loop_path,
            loop_duration: config.loop_duration_seconds,
            cloud_speed_factor: config.cloud_speed_factor,
            lookahead: config.lookahead,
            vehicle_offset: UnitQuaternion::from_euler_angles(x, y, z),
            assets: None,
            degenerate: false,
        })
    }

    /// Replaces the patrol loop with a prebuilt curve.
    #[must_use]
    pub fn with_loop_path(mut self, loop_path: CatmullRom) -> Self {
        self.loop_path = loop_path;
        self
    }

    /// Polls `slot` every frame until the vehicle arrives.
    #[must_use]
    pub fn with_asset_slot(mut self, slot: AssetSlot<V>) -> Self {
        self.assets = Some(slot);
        self
    }

    /// Switches to Running with `vehicle`.
    ///
    /// # Errors
    ///
    /// Hands the vehicle back if the scheduler is already running.
    pub fn attach(&mut self, vehicle: V) -> std::result::Result<(), V> {
        self.state.start(vehicle)?;
        self.assets = None;
        tracing::info!(elapsed = self.state.elapsed(), "moving object attached, scheduler running");
        Ok(())
    }

    /// Read-only view of the animation state.
    #[must_use]
    pub fn state(&self) -> &AnimationState<V> {
        &self.state
    }

    /// Mutable access to the camera rig for input handling.
    pub fn camera_mut(&mut self) -> &mut OrbitDamping {
        self.state.camera_mut()
    }

    /// The closed patrol loop the vehicle follows.
    #[must_use]
    pub fn loop_path(&self) -> &CatmullRom {
        &self.loop_path
    }

    /// Current fraction of the patrol lap in `[0, 1)`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        loop_progress(self.state.elapsed(), self.loop_duration)
    }

    /// Runs one frame of `delta_time` seconds.
    ///
    /// Negative or non-finite deltas count as zero.
    pub fn on_frame<R: Renderer<V>>(&mut self, delta_time: f64, renderer: &mut R) {
        let dt = if delta_time.is_finite() && delta_time >= 0.0 {
            delta_time
        } else {
            tracing::debug!(delta_time, "ignoring invalid frame delta");
            0.0
        };

        self.poll_assets();
        self.state.advance(dt, self.cloud_speed_factor);
        self.state.camera_mut().update();

        let progress = self.progress();
        self.place_vehicle(progress);

        let camera = self.state.camera();
        renderer.draw(&SceneFrame {
            elapsed: self.state.elapsed(),
            progress,
            globe_rotation_y: self.state.globe_rotation_y(),
            cloud_rotation_y: self.state.cloud_rotation_y(),
            camera_eye: camera.eye(),
            camera_target: camera.target,
            vehicle: self.state.phase().vehicle(),
        });
    }

    /// Wraps the scheduler and its renderer into a host frame callback.
    pub fn into_frame_callback<R>(mut self, mut renderer: R) -> FrameCallback
    where
        V: 'static,
        R: Renderer<V> + 'static,
    {
        Box::new(move |dt| self.on_frame(dt, &mut renderer))
    }

    fn poll_assets(&mut self) {
        let Some(slot) = &self.assets else {
            return;
        };
        match slot.poll() {
            AssetPoll::Pending => {}
            AssetPoll::Ready(vehicle) => {
                if self.attach(vehicle).is_err() {
                    tracing::warn!("moving object delivered while running, discarded");
                    self.assets = None;
                }
            }
            AssetPoll::Abandoned => {
                tracing::warn!("asset loader dropped without delivering a moving object");
                self.assets = None;
            }
        }
    }

    fn place_vehicle(&mut self, progress: f64) {
        let Some(vehicle) = self.state.vehicle_mut() else {
            return;
        };
        let sample = SampleOrientation::new(progress)
            .with_lookahead(self.lookahead)
            .execute(&self.loop_path);
        match sample {
            OrientationSample::Oriented {
                position,
                look_target,
            } => {
                vehicle.set_position(position);
                vehicle.look_at(&look_target);
                vehicle.rotate_local(&self.vehicle_offset);
                self.degenerate = false;
            }
            OrientationSample::Degenerate => {
                if !self.degenerate {
                    tracing::debug!(progress, "degenerate loop sample, vehicle left in place");
                }
                self.degenerate = true;
            }
        }
    }
}

impl<V> Scheduler<V> {
    /// Whether the vehicle has arrived.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.phase().is_running()
    }
}
