pub mod asset;
pub mod camera;
pub mod clock;
pub mod host;
pub mod scheduler;
pub mod state;
pub mod vehicle;

pub use asset::{asset_channel, AssetPoll, AssetSender, AssetSlot};
pub use camera::OrbitDamping;
pub use clock::Clock;
pub use host::{FixedStepHost, FrameCallback, FrameHost, RealtimeHost};
pub use scheduler::{Renderer, SceneFrame, Scheduler};
pub use state::{loop_progress, AnimationState, VehiclePhase};
pub use vehicle::{MovingObject, Transform};
