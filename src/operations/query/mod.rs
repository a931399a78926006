mod length;
mod sample_orientation;

pub use length::Length;
pub use sample_orientation::{OrientationSample, SampleOrientation, DEFAULT_LOOKAHEAD};
