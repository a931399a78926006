use crate::geometry::CatmullRom;
use crate::tessellation::Polyline;

use super::LocationId;

slotmap::new_key_type! {
    /// Unique identifier for a route in a [`RouteAtlas`](super::RouteAtlas).
    pub struct RouteId;
}

/// A flight path between two locations.
///
/// The renderer builds its tube mesh from `polyline`; the curve stays
/// available for sampling.
#[derive(Debug, Clone)]
pub struct PathSegment {
    pub from: LocationId,
    pub to: LocationId,
    pub curve: CatmullRom,
    pub polyline: Polyline,
    /// Arc length of `curve`.
    pub length: f64,
}
