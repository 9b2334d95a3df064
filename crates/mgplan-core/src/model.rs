//! Domain model: power plants and candidate microgrid sites.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// An existing solar power plant with a fixed location and a revenue
/// potential ("penetration") in currency units.
///
/// Plants are immutable once loaded; the siting pipeline only reads them.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PowerPlant {
    pub location: GeoPoint,
    /// Revenue potential offsetting deployment cost.
    pub revenue: f64,
}

impl PowerPlant {
    pub fn new(lat: f64, lon: f64, revenue: f64) -> Self {
        Self {
            location: GeoPoint::new(lat, lon),
            revenue,
        }
    }
}

/// A potential microgrid deployment location.
///
/// Sites carry no persistent identifier; the index 0..N-1 within the
/// generated list is the sole identity used by cost matrices, models and
/// selection vectors. Regenerating the site list invalidates anything
/// derived from the previous one.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandidateSite {
    pub location: GeoPoint,
}

impl CandidateSite {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            location: GeoPoint::new(lat, lon),
        }
    }
}
