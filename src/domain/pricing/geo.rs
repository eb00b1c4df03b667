//! Geographic value types shared by the distance pricer and the geo adapters.

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate, always latitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Builds a point from a GeoJSON `[lon, lat]` pair.
    ///
    /// Returns `None` for pairs with fewer than two elements.
    pub fn from_lon_lat(pair: &[f64]) -> Option<Self> {
        match pair {
            [lon, lat, ..] => Some(Self::new(*lat, *lon)),
            _ => None,
        }
    }
}

/// Driving route between two points.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    pub distance_meters: f64,
    pub points: Vec<GeoPoint>,
}
