pub mod curve;
pub mod globe;

pub use curve::{normalize_fraction, CatmullRom, Curve, CurveDomain, Ellipse};
pub use globe::Globe;
