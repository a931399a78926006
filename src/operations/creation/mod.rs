mod build_arc;
mod build_loop;

pub use build_arc::{ArcParams, BuildArc};
pub use build_loop::BuildLoop;
