pub mod location;
pub mod route;

pub use location::{LocationData, LocationId};
pub use route::{PathSegment, RouteId};

use std::collections::HashMap;

use slotmap::SlotMap;

use crate::config::GlobeConfig;
use crate::error::{GeometryError, Result, SceneError};
use crate::geometry::Globe;
use crate::math::GeoPoint;
use crate::operations::creation::{ArcParams, BuildArc};
use crate::operations::query::Length;
use crate::tessellation::TessellateCurve;

/// Arena of named locations and the flight paths between them.
///
/// Entities reference each other via typed IDs (generational indices).
/// Every route is built once when it is added; the atlas is read-only
/// afterwards as far as the frame loop is concerned.
#[derive(Debug)]
pub struct RouteAtlas {
    globe: Globe,
    params: ArcParams,
    tube_segments: usize,
    locations: SlotMap<LocationId, LocationData>,
    routes: SlotMap<RouteId, PathSegment>,
    by_name: HashMap<String, LocationId>,
}

impl RouteAtlas {
    /// Creates an empty atlas.
    ///
    /// # Errors
    ///
    /// Returns an error if the arc parameters are invalid or
    /// `tube_segments` is zero.
    pub fn new(params: ArcParams, tube_segments: usize) -> Result<Self> {
        let globe = params.validate()?;
        if tube_segments == 0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "tube_segments",
                value: 0.0,
                min: 1.0,
                max: f64::INFINITY,
            }
            .into());
        }
        Ok(Self {
            globe,
            params,
            tube_segments,
            locations: SlotMap::with_key(),
            routes: SlotMap::with_key(),
            by_name: HashMap::new(),
        })
    }

    /// Builds the atlas described by a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, a location name
    /// repeats, a route names an unknown location, or a route cannot be
    /// built.
    pub fn from_config(config: &GlobeConfig) -> Result<Self> {
        config.validate()?;
        let mut atlas = Self::new(config.arc_params(), config.tube_segments)?;
        for location in &config.locations {
            atlas.add_location(&location.name, location.point)?;
        }
        for route in &config.routes {
            atlas.connect_by_name(&route.from, &route.to)?;
        }
        tracing::info!(
            locations = atlas.locations.len(),
            routes = atlas.routes.len(),
            "route atlas built"
        );
        Ok(atlas)
    }

    /// Returns the base globe.
    #[must_use]
    pub fn globe(&self) -> &Globe {
        &self.globe
    }

    // --- Location operations ---

    /// Inserts a named location and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is already taken.
    pub fn add_location(&mut self, name: &str, point: GeoPoint) -> Result<LocationId> {
        if self.by_name.contains_key(name) {
            return Err(SceneError::DuplicateLocation(name.into()).into());
        }
        let id = self.locations.insert(LocationData {
            name: name.into(),
            point,
            position: self.globe.project(&point),
        });
        self.by_name.insert(name.into(), id);
        Ok(id)
    }

    /// Returns a reference to the location data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the atlas.
    pub fn location(&self, id: LocationId) -> std::result::Result<&LocationData, SceneError> {
        self.locations
            .get(id)
            .ok_or_else(|| SceneError::EntityNotFound("location".into()))
    }

    /// Looks a location up by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<LocationId> {
        self.by_name.get(name).copied()
    }

    /// Iterates over all locations.
    pub fn locations(&self) -> impl Iterator<Item = (LocationId, &LocationData)> {
        self.locations.iter()
    }

    // --- Route operations ---

    /// Builds a flight path between two locations and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns an error if either location is missing or the arc cannot be
    /// built (for example, antipodal endpoints).
    pub fn connect(&mut self, from: LocationId, to: LocationId) -> Result<RouteId> {
        let a = self.location(from)?.point;
        let b = self.location(to)?.point;
        let curve = BuildArc::new(a, b, self.params).execute()?;
        let polyline = TessellateCurve::new(self.tube_segments).execute(&curve)?;
        let length = Length::new().execute(&curve)?;
        tracing::debug!(from = ?a, to = ?b, length, "route built");
        Ok(self.routes.insert(PathSegment {
            from,
            to,
            curve,
            polyline,
            length,
        }))
    }

    /// Builds a flight path between two locations given by name.
    ///
    /// # Errors
    ///
    /// Returns an error if either name is unknown or the arc cannot be built.
    pub fn connect_by_name(&mut self, from: &str, to: &str) -> Result<RouteId> {
        let a = self
            .find(from)
            .ok_or_else(|| SceneError::EntityNotFound(format!("location {from:?}")))?;
        let b = self
            .find(to)
            .ok_or_else(|| SceneError::EntityNotFound(format!("location {to:?}")))?;
        self.connect(a, b)
    }

    /// Returns a reference to the route, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the atlas.
    pub fn route(&self, id: RouteId) -> std::result::Result<&PathSegment, SceneError> {
        self.routes
            .get(id)
            .ok_or_else(|| SceneError::EntityNotFound("route".into()))
    }

    /// Removes a route, returning it if it existed.
    pub fn remove_route(&mut self, id: RouteId) -> Option<PathSegment> {
        self.routes.remove(id)
    }

    /// Iterates over all routes.
    pub fn routes(&self) -> impl Iterator<Item = (RouteId, &PathSegment)> {
        self.routes.iter()
    }

    /// Number of routes.
    #[must_use]
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }
}
