//! OSRM router.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::domain::pricing::{GeoPoint, RoutePlan};
use crate::ports::{GeoError, RouteProvider};

use super::{map_reqwest_error, trim_base};

#[derive(Debug, Deserialize)]
struct RouteResponse {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Debug, Deserialize)]
struct Route {
    /// Meters.
    distance: f64,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    /// GeoJSON `[lon, lat]` pairs.
    #[serde(default)]
    coordinates: Vec<Vec<f64>>,
}

pub struct OsrmRouteProvider {
    client: Client,
    base_url: String,
}

impl OsrmRouteProvider {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl RouteProvider for OsrmRouteProvider {
    async fn route(&self, from: GeoPoint, to: GeoPoint) -> Result<RoutePlan, GeoError> {
        // OSRM takes lon,lat
        let url = format!(
            "{}/route/v1/driving/{},{};{},{}",
            trim_base(&self.base_url),
            from.lon,
            from.lat,
            to.lon,
            to.lat
        );

        let response = self
            .client
            .get(&url)
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        if response.status() != StatusCode::OK {
            tracing::warn!(status = %response.status(), "Router returned non-OK status");
            return Err(GeoError::Status(response.status().as_u16()));
        }

        let body: RouteResponse = response.json().await.map_err(map_reqwest_error)?;

        if let Some(code) = body.code.filter(|c| !c.is_empty() && c != "Ok") {
            return Err(GeoError::Code(code));
        }

        let route = body.routes.into_iter().next().ok_or(GeoError::NoRoutes)?;
        if !route.distance.is_finite() || route.distance < 0.0 {
            return Err(GeoError::Malformed(format!(
                "route distance {} is not a length",
                route.distance
            )));
        }
        let points = route
            .geometry
            .coordinates
            .iter()
            .filter_map(|pair| GeoPoint::from_lon_lat(pair))
            .collect();

        Ok(RoutePlan {
            distance_meters: route.distance,
            points,
        })
    }
}
