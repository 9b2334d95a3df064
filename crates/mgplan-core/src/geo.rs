//! Geographic coordinate type and spatial utilities.
//!
//! Coordinates are WGS-84 latitude/longitude in degrees, stored as `f64`.
//! Distances are haversine great-circle kilometres, which is accurate to
//! ~0.5% against the geodesic — well within the fidelity of the cost model
//! built on top of it.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometres (IUGG).
const EARTH_RADIUS_KM: f64 = 6371.0088;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    ///
    /// Symmetric and non-negative; exactly zero for identical points.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Axis-aligned bounding box over geographic coordinates.
///
/// Candidate microgrid sites are sampled inside the bounding box of the
/// known power-plant locations.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl GeoBounds {
    /// Compute the bounding box of a set of points.
    ///
    /// Returns `None` for an empty slice.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a GeoPoint>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bounds = GeoBounds {
            lat_min: first.lat,
            lat_max: first.lat,
            lon_min: first.lon,
            lon_max: first.lon,
        };
        for p in iter {
            bounds.lat_min = bounds.lat_min.min(p.lat);
            bounds.lat_max = bounds.lat_max.max(p.lat);
            bounds.lon_min = bounds.lon_min.min(p.lon);
            bounds.lon_max = bounds.lon_max.max(p.lon);
        }
        Some(bounds)
    }

    /// True when either axis has zero extent, i.e. the box has no area and
    /// distinct in-box coordinates cannot be sampled on that axis.
    pub fn is_degenerate(&self) -> bool {
        self.lat_min >= self.lat_max || self.lon_min >= self.lon_max
    }

    /// True when the point lies inside the box (inclusive).
    pub fn contains(&self, p: GeoPoint) -> bool {
        p.lat >= self.lat_min
            && p.lat <= self.lat_max
            && p.lon >= self.lon_min
            && p.lon <= self.lon_max
    }
}
