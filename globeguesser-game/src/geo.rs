//! Geographic primitives: points, longitude normalization, and the
//! great-circle distance everything downstream is scored against.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees.
///
/// Latitude stays within `[-90, 90]`; longitude may hold any real value
/// and is normalized on demand via [`GeoPoint::normalized`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Copy of this point with the longitude mapped into `[-180, 180)`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            lat: self.lat,
            lng: normalize_lng(self.lng),
        }
    }
}

/// Map a longitude into `[-180, 180)`.
///
/// `%` truncates toward zero, so strongly negative inputs land below
/// -180 after the shift and need one extra wrap.
#[must_use]
pub fn normalize_lng(lng: f64) -> f64 {
    let mut normalized = ((lng + 180.0) % 360.0) - 180.0;
    if normalized < -180.0 {
        normalized += 360.0;
    }
    normalized
}

/// Great-circle distance between two points in kilometers (haversine).
///
/// Symmetric, non-negative, zero only for coincident points (modulo
/// longitude wrap), and bounded by half the Earth's circumference.
#[must_use]
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Axis-aligned latitude/longitude box spanning two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    /// Smallest box containing both points.
    #[must_use]
    pub fn spanning(a: GeoPoint, b: GeoPoint) -> Self {
        Self {
            south: a.lat.min(b.lat),
            west: a.lng.min(b.lng),
            north: a.lat.max(b.lat),
            east: a.lng.max(b.lng),
        }
    }

    /// Grow the box by `fraction` of its own extent on every side,
    /// mirroring Leaflet's `LatLngBounds.pad`.
    #[must_use]
    pub fn padded(self, fraction: f64) -> Self {
        let lat_pad = (self.north - self.south) * fraction;
        let lng_pad = (self.east - self.west) * fraction;
        Self {
            south: self.south - lat_pad,
            west: self.west - lng_pad,
            north: self.north + lat_pad,
            east: self.east + lng_pad,
        }
    }

    #[must_use]
    pub fn center(self) -> GeoPoint {
        GeoPoint::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    /// True when both corners coincide and there is no area to fit.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.north == self.south && self.east == self.west
    }
}
