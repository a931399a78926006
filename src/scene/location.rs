use crate::math::{GeoPoint, Point3};

slotmap::new_key_type! {
    /// Unique identifier for a location in a [`RouteAtlas`](super::RouteAtlas).
    pub struct LocationId;
}

/// A named place and its projection on the base sphere.
#[derive(Debug, Clone)]
pub struct LocationData {
    pub name: String,
    pub point: GeoPoint,
    /// Surface position at the atlas base radius.
    pub position: Point3,
}
