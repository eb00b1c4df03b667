//! RouteProvider port - Driving routes between points.

use async_trait::async_trait;

use crate::domain::pricing::{GeoPoint, RoutePlan};

use super::GeoError;

#[async_trait]
pub trait RouteProvider: Send + Sync {
    /// Driving route with full geometry, points in `{lat, lon}` order.
    async fn route(&self, from: GeoPoint, to: GeoPoint) -> Result<RoutePlan, GeoError>;
}
