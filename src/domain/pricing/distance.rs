//! Distance (delivery) pricing.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::foundation::ValidationError;
use crate::ports::{Geocoder, RouteProvider};

use super::layered::check_price;
use super::{GeoPoint, PricingError};

/// Tariff for delivery pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceConfig {
    #[serde(default)]
    pub base_price: f64,
    #[serde(default)]
    pub price_per_km: f64,
    #[serde(default)]
    pub loading_price: f64,
    #[serde(default)]
    pub unloading_price: f64,
    /// Vehicle class to per-km multiplier.
    #[serde(default)]
    pub vehicle_coefs: BTreeMap<String, f64>,
}

impl DistanceConfig {
    /// Multiplier for `vehicle`; unknown classes and non-positive values yield 1.0.
    pub fn coefficient(&self, vehicle: &str) -> f64 {
        self.vehicle_coefs
            .get(vehicle)
            .copied()
            .filter(|c| *c > 0.0)
            .unwrap_or(1.0)
    }

    /// Applies an update: prices are replaced, coefficients merged key by key.
    pub fn merge(&mut self, update: DistanceConfig) {
        self.base_price = update.base_price;
        self.price_per_km = update.price_per_km;
        self.loading_price = update.loading_price;
        self.unloading_price = update.unloading_price;
        self.vehicle_coefs.extend(update.vehicle_coefs);
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_price("basePrice", self.base_price)?;
        check_price("pricePerKm", self.price_per_km)?;
        check_price("loadingPrice", self.loading_price)?;
        check_price("unloadingPrice", self.unloading_price)?;
        for (vehicle, coef) in &self.vehicle_coefs {
            check_price(&format!("vehicleCoefs.{}", vehicle), *coef)?;
        }
        Ok(())
    }
}

impl Default for DistanceConfig {
    fn default() -> Self {
        Self {
            base_price: 1500.0,
            price_per_km: 45.0,
            loading_price: 0.0,
            unloading_price: 0.0,
            vehicle_coefs: BTreeMap::from([
                ("small".to_string(), 1.0),
                ("medium".to_string(), 1.2),
                ("large".to_string(), 1.5),
            ]),
        }
    }
}

/// Price breakdown, distances in kilometres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceQuote {
    pub distance_one_way_km: f64,
    pub distance_total_km: f64,
    pub price_base: f64,
    pub price_km: f64,
    pub price_load: f64,
    pub price_total: f64,
}

/// Pure arithmetic of distance pricing.
///
/// A round trip doubles the distance but loading and unloading are charged once.
pub fn price_distance(
    config: &DistanceConfig,
    one_way_km: f64,
    vehicle: &str,
    round_trip: bool,
) -> DistanceQuote {
    let distance_total_km = if round_trip { one_way_km * 2.0 } else { one_way_km };
    let price_km = distance_total_km * config.price_per_km * config.coefficient(vehicle);
    let price_load = config.loading_price + config.unloading_price;

    DistanceQuote {
        distance_one_way_km: one_way_km,
        distance_total_km,
        price_base: config.base_price,
        price_km,
        price_load,
        price_total: config.base_price + price_km + price_load,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistanceRequest {
    pub from: String,
    pub to: String,
    pub vehicle: String,
    pub round_trip: bool,
}

impl DistanceRequest {
    /// Both addresses must be non-blank once trimmed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.from.trim().is_empty() {
            return Err(ValidationError::empty_field("from"));
        }
        if self.to.trim().is_empty() {
            return Err(ValidationError::empty_field("to"));
        }
        Ok(())
    }
}

/// Quote plus the route geometry for map display.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceOutcome {
    pub quote: DistanceQuote,
    pub route: Vec<GeoPoint>,
}

/// Geocodes both addresses, routes between them and prices the result.
pub struct DistancePricer {
    geocoder: Arc<dyn Geocoder>,
    router: Arc<dyn RouteProvider>,
}

impl DistancePricer {
    pub fn new(geocoder: Arc<dyn Geocoder>, router: Arc<dyn RouteProvider>) -> Self {
        Self { geocoder, router }
    }

    /// Any geo failure aborts the computation; no partial price is produced.
    pub async fn price(
        &self,
        config: &DistanceConfig,
        request: &DistanceRequest,
    ) -> Result<DistanceOutcome, PricingError> {
        request.validate()?;
        let from = request.from.trim();
        let to = request.to.trim();

        let origin = self
            .geocoder
            .geocode(from)
            .await
            .map_err(|e| PricingError::geocode(from, e.to_string()))?;
        let destination = self
            .geocoder
            .geocode(to)
            .await
            .map_err(|e| PricingError::geocode(to, e.to_string()))?;

        let plan = self
            .router
            .route(origin, destination)
            .await
            .map_err(|e| PricingError::route(e.to_string()))?;

        tracing::debug!(
            distance_meters = plan.distance_meters,
            points = plan.points.len(),
            "Route resolved"
        );

        let quote = price_distance(
            config,
            plan.distance_meters / 1000.0,
            &request.vehicle,
            request.round_trip,
        );

        Ok(DistanceOutcome {
            quote,
            route: plan.points,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pricing::RoutePlan;
    use crate::ports::GeoError;
    use async_trait::async_trait;
    use proptest::prelude::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ════════════════════════════════════════════════════════════════════════════
    // Test doubles
    // ════════════════════════════════════════════════════════════════════════════

    struct MockGeocoder {
        known: HashMap<String, GeoPoint>,
        calls: AtomicUsize,
    }

    impl MockGeocoder {
        fn new(known: &[(&str, GeoPoint)]) -> Self {
            Self {
                known: known.iter().map(|(a, p)| (a.to_string(), *p)).collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Geocoder for MockGeocoder {
        async fn geocode(&self, address: &str) -> Result<GeoPoint, GeoError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.known.get(address).copied().ok_or(GeoError::NoResults)
        }
    }

    struct MockRouter {
        result: Result<RoutePlan, GeoError>,
        calls: AtomicUsize,
    }

    impl MockRouter {
        fn returning(meters: f64) -> Self {
            Self {
                result: Ok(RoutePlan {
                    distance_meters: meters,
                    points: vec![GeoPoint::new(55.0, 37.0), GeoPoint::new(55.1, 37.2)],
                }),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                result: Err(GeoError::NoRoutes),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl RouteProvider for MockRouter {
        async fn route(&self, _from: GeoPoint, _to: GeoPoint) -> Result<RoutePlan, GeoError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn request(from: &str, to: &str, vehicle: &str, round_trip: bool) -> DistanceRequest {
        DistanceRequest {
            from: from.to_string(),
            to: to.to_string(),
            vehicle: vehicle.to_string(),
            round_trip,
        }
    }

    fn known_places() -> Vec<(&'static str, GeoPoint)> {
        vec![
            ("Moscow", GeoPoint::new(55.75, 37.61)),
            ("Tver", GeoPoint::new(56.85, 35.9)),
        ]
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Arithmetic
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn round_trip_doubles_distance_but_not_loading() {
        let config = DistanceConfig {
            loading_price: 300.0,
            unloading_price: 200.0,
            ..Default::default()
        };
        let quote = price_distance(&config, 12.0, "small", true);

        assert_eq!(quote.distance_one_way_km, 12.0);
        assert_eq!(quote.distance_total_km, 24.0);
        assert_eq!(quote.price_km, 24.0 * 45.0);
        assert_eq!(quote.price_load, 500.0);
        assert_eq!(quote.price_total, 1500.0 + 1080.0 + 500.0);
    }

    #[test]
    fn vehicle_coefficient_scales_km_price() {
        let quote = price_distance(&DistanceConfig::default(), 10.0, "large", false);
        assert!((quote.price_km - 675.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_or_non_positive_coefficient_falls_back_to_one() {
        let mut config = DistanceConfig::default();
        config.vehicle_coefs.insert("broken".to_string(), 0.0);
        config.vehicle_coefs.insert("negative".to_string(), -2.0);

        assert_eq!(config.coefficient("truck"), 1.0);
        assert_eq!(config.coefficient(""), 1.0);
        assert_eq!(config.coefficient("broken"), 1.0);
        assert_eq!(config.coefficient("negative"), 1.0);
        assert_eq!(config.coefficient("medium"), 1.2);
    }

    #[test]
    fn merge_replaces_prices_and_merges_coefficients() {
        let mut config = DistanceConfig::default();
        config.merge(DistanceConfig {
            base_price: 2000.0,
            price_per_km: 50.0,
            loading_price: 100.0,
            unloading_price: 0.0,
            vehicle_coefs: BTreeMap::from([
                ("large".to_string(), 2.0),
                ("van".to_string(), 1.3),
            ]),
        });

        assert_eq!(config.base_price, 2000.0);
        assert_eq!(config.price_per_km, 50.0);
        assert_eq!(config.vehicle_coefs["small"], 1.0);
        assert_eq!(config.vehicle_coefs["large"], 2.0);
        assert_eq!(config.vehicle_coefs["van"], 1.3);
    }

    #[test]
    fn validate_rejects_negative_prices() {
        let config = DistanceConfig {
            price_per_km: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(DistanceConfig::default().validate().is_ok());
    }

    proptest! {
        #[test]
        fn round_trip_never_cheaper(
            km in 0.0f64..5_000.0,
            base in 0.0f64..10_000.0,
            per_km in 0.0f64..500.0,
            load in 0.0f64..5_000.0,
        ) {
            let config = DistanceConfig {
                base_price: base,
                price_per_km: per_km,
                loading_price: load,
                ..Default::default()
            };
            let one_way = price_distance(&config, km, "medium", false);
            let round = price_distance(&config, km, "medium", true);

            prop_assert_eq!(round.distance_total_km, 2.0 * one_way.distance_total_km);
            prop_assert_eq!(round.price_load, one_way.price_load);
            prop_assert!(round.price_total >= one_way.price_total);
        }

        #[test]
        fn unknown_vehicle_priced_like_unit_coefficient(km in 0.0f64..1_000.0) {
            let config = DistanceConfig::default();
            let unknown = price_distance(&config, km, "hovercraft", false);
            let small = price_distance(&config, km, "small", false);
            prop_assert_eq!(unknown.price_total, small.price_total);
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Orchestration
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn prices_resolved_route() {
        let geocoder = Arc::new(MockGeocoder::new(&known_places()));
        let router = Arc::new(MockRouter::returning(12_000.0));
        let pricer = DistancePricer::new(geocoder, router);

        let outcome = pricer
            .price(&DistanceConfig::default(), &request("Moscow", "Tver", "small", true))
            .await
            .unwrap();

        assert_eq!(outcome.quote.distance_one_way_km, 12.0);
        assert_eq!(outcome.quote.distance_total_km, 24.0);
        assert_eq!(outcome.quote.price_total, 2580.0);
        assert_eq!(outcome.route.len(), 2);
    }

    #[tokio::test]
    async fn blank_address_fails_before_any_external_call() {
        let geocoder = Arc::new(MockGeocoder::new(&known_places()));
        let router = Arc::new(MockRouter::returning(1000.0));
        let pricer = DistancePricer::new(geocoder.clone(), router.clone());

        let result = pricer
            .price(&DistanceConfig::default(), &request("   ", "Tver", "", false))
            .await;

        assert!(matches!(result, Err(PricingError::Validation(_))));
        assert_eq!(geocoder.calls.load(Ordering::SeqCst), 0);
        assert_eq!(router.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn origin_geocode_failure_skips_routing() {
        let geocoder = Arc::new(MockGeocoder::new(&known_places()));
        let router = Arc::new(MockRouter::returning(1000.0));
        let pricer = DistancePricer::new(geocoder, router.clone());

        let result = pricer
            .price(&DistanceConfig::default(), &request("Atlantis", "Tver", "", false))
            .await;

        match result {
            Err(PricingError::Geocode { address, .. }) => assert_eq!(address, "Atlantis"),
            other => panic!("Expected geocode error, got {:?}", other),
        }
        assert_eq!(router.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn destination_geocode_failure_skips_routing() {
        let geocoder = Arc::new(MockGeocoder::new(&known_places()));
        let router = Arc::new(MockRouter::returning(1000.0));
        let pricer = DistancePricer::new(geocoder.clone(), router.clone());

        let result = pricer
            .price(&DistanceConfig::default(), &request("Moscow", "Atlantis", "", false))
            .await;

        assert!(matches!(result, Err(PricingError::Geocode { .. })));
        assert_eq!(geocoder.calls.load(Ordering::SeqCst), 2);
        assert_eq!(router.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn route_failure_is_route_error() {
        let geocoder = Arc::new(MockGeocoder::new(&known_places()));
        let pricer = DistancePricer::new(geocoder, Arc::new(MockRouter::failing()));

        let result = pricer
            .price(&DistanceConfig::default(), &request("Moscow", "Tver", "", false))
            .await;

        assert!(matches!(result, Err(PricingError::Route(_))));
    }

    #[tokio::test]
    async fn addresses_are_trimmed_before_geocoding() {
        let geocoder = Arc::new(MockGeocoder::new(&known_places()));
        let pricer = DistancePricer::new(geocoder, Arc::new(MockRouter::returning(500.0)));

        let result = pricer
            .price(&DistanceConfig::default(), &request(" Moscow ", "Tver\n", "", false))
            .await;

        assert!(result.is_ok());
    }
}
