//! Geographic locations and positions on a spherical globe.
//!
//! Cartesian coordinates follow the globe library convention: `+Y` points
//! at the north pole, `+Z` at (0°, 0°) and `+X` at (0°, 90°E).

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Equatorial radius of the globe in meters.
pub const GLOBE_RADIUS: f64 = 6_378_137.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
}

impl Location {
    /// Create a location from degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Unit vector from the globe center through this location.
    #[must_use]
    pub fn unit_normal(&self) -> DVec3 {
        let lat = self.latitude.to_radians();
        let lon = self.longitude.to_radians();
        DVec3::new(
            lon.sin() * lat.cos(),
            lat.sin(),
            lon.cos() * lat.cos(),
        )
    }

    /// Unit vector pointing north along the surface at this location.
    #[must_use]
    pub fn north_tangent(&self) -> DVec3 {
        let lat = self.latitude.to_radians();
        let lon = self.longitude.to_radians();
        DVec3::new(
            -lon.sin() * lat.sin(),
            lat.cos(),
            -lon.cos() * lat.sin(),
        )
    }
}

/// A location plus altitude in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Latitude in degrees, positive north.
    pub latitude: f64,
    /// Longitude in degrees, positive east.
    pub longitude: f64,
    /// Altitude in meters, interpreted per [`AltitudeMode`].
    pub altitude: f64,
}

impl Position {
    /// Create a position from degrees and meters.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    /// The latitude/longitude part of this position.
    #[must_use]
    pub const fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude)
    }

    /// Whether this position sits exactly on `location`.
    ///
    /// Exact comparison: sentinel positions are matched against the same
    /// literal values they were created from.
    #[must_use]
    pub fn is_at(&self, location: Location) -> bool {
        self.latitude == location.latitude
            && self.longitude == location.longitude
    }

    /// Cartesian point for this position on the globe.
    ///
    /// There is no terrain model, so ground elevation is zero and
    /// `RelativeToGround` behaves like `Absolute`.
    #[must_use]
    pub fn to_cartesian(&self, mode: AltitudeMode) -> DVec3 {
        let height = match mode {
            AltitudeMode::ClampToGround => 0.0,
            AltitudeMode::Absolute | AltitudeMode::RelativeToGround => {
                self.altitude
            }
        };
        self.location().unit_normal() * (GLOBE_RADIUS + height)
    }
}

/// How a position's altitude is interpreted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AltitudeMode {
    /// Altitude above the ellipsoid.
    #[default]
    Absolute,
    /// Altitude above the terrain.
    RelativeToGround,
    /// Altitude ignored; the point lies on the terrain.
    ClampToGround,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prime_meridian_equator_is_plus_z() {
        let p = Position::new(0.0, 0.0, 0.0)
            .to_cartesian(AltitudeMode::Absolute);
        assert!((p - DVec3::new(0.0, 0.0, GLOBE_RADIUS)).length() < 1e-6);
    }

    #[test]
    fn north_pole_is_plus_y() {
        let n = Location::new(90.0, 0.0).unit_normal();
        assert!((n - DVec3::Y).length() < 1e-9);
    }

    #[test]
    fn north_tangent_is_perpendicular_to_normal() {
        let loc = Location::new(41.4459, -74.4229);
        let dot = loc.unit_normal().dot(loc.north_tangent());
        assert!(dot.abs() < 1e-12);
        assert!((loc.north_tangent().length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn clamp_to_ground_ignores_altitude() {
        let pos = Position::new(10.0, 20.0, 5_000.0);
        let clamped = pos.to_cartesian(AltitudeMode::ClampToGround);
        let raised = pos.to_cartesian(AltitudeMode::RelativeToGround);
        assert!((clamped.length() - GLOBE_RADIUS).abs() < 1e-6);
        assert!((raised.length() - GLOBE_RADIUS - 5_000.0).abs() < 1e-6);
    }

    #[test]
    fn is_at_requires_exact_match() {
        let pos = Position::new(41.4459, -74.4229, 100.0);
        assert!(pos.is_at(Location::new(41.4459, -74.4229)));
        assert!(!pos.is_at(Location::new(41.4459, -74.423)));
    }
}
