use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::math::GeoPoint;
use crate::operations::creation::ArcParams;

/// A location with a display name, as listed in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedLocation {
    pub name: String,
    #[serde(flatten)]
    pub point: GeoPoint,
}

impl NamedLocation {
    #[must_use]
    pub fn new(name: impl Into<String>, latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            name: name.into(),
            point: GeoPoint::new(latitude_deg, longitude_deg),
        }
    }
}

/// A flight path between two named locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub from: String,
    pub to: String,
}

impl RouteConfig {
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Globe scene configuration.
///
/// All fields are optional in JSON; missing ones take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobeConfig {
    /// Sphere radius.
    pub base_radius: f64,
    /// Extra height at the middle of each flight arc.
    pub bulge_amplitude: f64,
    /// Chord subdivisions per flight arc.
    pub sample_count: usize,
    /// Polyline segments handed to the renderer per flight arc.
    pub tube_segments: usize,
    /// Globe spin in radians per second.
    pub angular_velocity: f64,
    /// Seconds for one lap of the patrol loop.
    pub loop_duration_seconds: f64,
    /// Cloud spin relative to the globe spin.
    pub cloud_speed_factor: f64,
    /// Whether a separate cloud layer is animated.
    pub cloud_layer: bool,
    pub loop_radius_x: f64,
    pub loop_radius_z: f64,
    pub loop_height: f64,
    pub loop_sample_count: usize,
    /// Look-ahead fraction used to orient the vehicle.
    pub lookahead: f64,
    /// Corrective rotation applied after `look_at`, as angles in radians
    /// about the local X, Y and Z axes.
    pub vehicle_offset: [f64; 3],
    /// Fraction of pending camera motion applied per frame.
    pub damping_factor: f64,
    /// Initial camera distance from the globe center.
    pub camera_distance: f64,
    pub locations: Vec<NamedLocation>,
    pub routes: Vec<RouteConfig>,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            base_radius: 8.0,
            bulge_amplitude: 1.0,
            sample_count: 50,
            tube_segments: 64,
            angular_velocity: 0.06,       // rad/s (~105 s per turn)
            loop_duration_seconds: 20.0,  // seconds per lap
            cloud_speed_factor: 0.25,
            cloud_layer: true,
            loop_radius_x: 10.0,
            loop_radius_z: 10.0,
            loop_height: 0.0,
            loop_sample_count: 64,
            lookahead: 0.01,
            vehicle_offset: [0.0, FRAC_PI_2, 0.0],
            damping_factor: 0.05,
            camera_distance: 24.0,
            locations: vec![
                NamedLocation::new("New York", 40.71, -74.01),
                NamedLocation::new("London", 51.51, -0.13),
                NamedLocation::new("Tokyo", 35.68, 139.69),
                NamedLocation::new("Sydney", -33.87, 151.21),
                NamedLocation::new("Sao Paulo", -23.55, -46.63),
                NamedLocation::new("Cape Town", -33.92, 18.42),
            ],
            routes: vec![
                RouteConfig::new("New York", "London"),
                RouteConfig::new("London", "Tokyo"),
                RouteConfig::new("Tokyo", "Sydney"),
                RouteConfig::new("Sao Paulo", "Cape Town"),
                RouteConfig::new("New York", "Sao Paulo"),
            ],
        }
    }
}

impl GlobeConfig {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is out of range.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the configuration to pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self).map_err(ConfigError::from)?)
    }

    /// Shape parameters for the flight arcs.
    #[must_use]
    pub fn arc_params(&self) -> ArcParams {
        ArcParams::new(self.base_radius, self.sample_count, self.bulge_amplitude)
    }

    /// Checks every value against its allowed range.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range value found.
    pub fn validate(&self) -> Result<()> {
        positive("baseRadius", self.base_radius)?;
        non_negative("bulgeAmplitude", self.bulge_amplitude)?;
        at_least("sampleCount", self.sample_count, 1)?;
        at_least("tubeSegments", self.tube_segments, 1)?;
        finite("angularVelocity", self.angular_velocity)?;
        positive("loopDurationSeconds", self.loop_duration_seconds)?;
        finite("cloudSpeedFactor", self.cloud_speed_factor)?;
        positive("loopRadiusX", self.loop_radius_x)?;
        positive("loopRadiusZ", self.loop_radius_z)?;
        finite("loopHeight", self.loop_height)?;
        at_least("loopSampleCount", self.loop_sample_count, 3)?;
        if !(self.lookahead > 0.0 && self.lookahead < 1.0) {
            return Err(invalid(format!(
                "lookahead must be in (0, 1), got {}",
                self.lookahead
            )));
        }
        if !(self.damping_factor > 0.0 && self.damping_factor <= 1.0) {
            return Err(invalid(format!(
                "dampingFactor must be in (0, 1], got {}",
                self.damping_factor
            )));
        }
        positive("cameraDistance", self.camera_distance)?;
        for (axis, value) in ["x", "y", "z"].iter().zip(self.vehicle_offset) {
            if !value.is_finite() {
                return Err(invalid(format!("vehicleOffset.{axis} must be finite")));
            }
        }
        Ok(())
    }
}

fn invalid(message: String) -> crate::error::OrbisError {
    ConfigError::Invalid(message).into()
}

fn finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be finite, got {value}")))
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be positive, got {value}")))
    }
}

fn non_negative(name: &str, value: f64) -> Result<()> {
    finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must not be negative, got {value}")))
    }
}

fn at_least(name: &str, value: usize, min: usize) -> Result<()> {
    if value >= min {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be at least {min}, got {value}")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::OrbisError;

    #[test]
    fn default_is_valid() {
        GlobeConfig::default().validate().unwrap();
    }

    #[test]
    fn default_cloud_factor_is_a_quarter() {
        assert!((GlobeConfig::default().cloud_speed_factor - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = GlobeConfig::from_json(r#"{ "baseRadius": 5.0, "sampleCount": 12 }"#).unwrap();
        assert!((config.base_radius - 5.0).abs() < f64::EPSILON);
        assert_eq!(config.sample_count, 12);
        assert!((config.angular_velocity - 0.06).abs() < f64::EPSILON);
    }

    #[test]
    fn locations_use_flat_coordinates() {
        let json = r#"{
            "locations": [{ "name": "Oslo", "latitudeDeg": 59.91, "longitudeDeg": 10.75 }],
            "routes": []
        }"#;
        let config = GlobeConfig::from_json(json).unwrap();
        assert_eq!(config.locations[0], NamedLocation::new("Oslo", 59.91, 10.75));
    }

    #[test]
    fn json_round_trip_preserves_config() {
        let config = GlobeConfig::default();
        let back = GlobeConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn zero_sample_count_is_rejected() {
        let r = GlobeConfig::from_json(r#"{ "sampleCount": 0 }"#);
        assert!(matches!(r, Err(OrbisError::Config(ConfigError::Invalid(_)))));
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        let config = GlobeConfig {
            base_radius: 0.0,
            ..GlobeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_positive_loop_duration_is_rejected() {
        let config = GlobeConfig {
            loop_duration_seconds: -1.0,
            ..GlobeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn lookahead_out_of_range_is_rejected() {
        let config = GlobeConfig {
            lookahead: 0.0,
            ..GlobeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let r = GlobeConfig::from_json("{ not json");
        assert!(matches!(r, Err(OrbisError::Config(ConfigError::Parse(_)))));
    }
}
