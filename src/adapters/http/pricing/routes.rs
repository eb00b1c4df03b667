//! Route configuration for pricing endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{calc_distance, calc_layered, calc_mortgage, PricingAppState};

/// Creates the pricing router.
///
/// Routes:
/// - `POST /api/layers/calc` - Price a layered selection
/// - `POST /api/distance/calc` - Price a delivery route
/// - `POST /api/mortgage/calc` - Price an annuity loan
pub fn pricing_router() -> Router<PricingAppState> {
    Router::new()
        .route("/api/layers/calc", post(calc_layered))
        .route("/api/distance/calc", post(calc_distance))
        .route("/api/mortgage/calc", post(calc_mortgage))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCalculatorRepository, InMemoryConfigStore};
    use crate::adapters::notification::DisabledNotifier;
    use crate::application::handlers::pricing::{
        ComputationRecorder, ComputeDistanceHandler, ComputeLayeredHandler, ComputeMortgageHandler,
    };
    use crate::domain::calculator::{Calculator, CalculatorType};
    use crate::domain::foundation::UserId;
    use crate::domain::pricing::{DistancePricer, GeoPoint, RoutePlan};
    use crate::ports::{CalculatorRepository, GeoError, Geocoder, RouteProvider};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    // ───────────────────────────────────────────────────────────────
    // Mock implementations
    // ───────────────────────────────────────────────────────────────

    struct StaticGeocoder;

    #[async_trait]
    impl Geocoder for StaticGeocoder {
        async fn geocode(&self, address: &str) -> Result<GeoPoint, GeoError> {
            match address {
                "Nowhere" => Err(GeoError::NoResults),
                _ => Ok(GeoPoint::new(55.0, 37.0)),
            }
        }
    }

    struct StaticRouter;

    #[async_trait]
    impl RouteProvider for StaticRouter {
        async fn route(&self, from: GeoPoint, to: GeoPoint) -> Result<RoutePlan, GeoError> {
            Ok(RoutePlan {
                distance_meters: 10_000.0,
                points: vec![from, to],
            })
        }
    }

    fn app(calculators: InMemoryCalculatorRepository) -> Router {
        let configs: Arc<InMemoryConfigStore> = Arc::new(InMemoryConfigStore::new());
        let recorder = ComputationRecorder::new(Arc::new(calculators), Arc::new(DisabledNotifier));
        let state = PricingAppState::new(
            Arc::new(ComputeLayeredHandler::new(configs.clone(), recorder.clone())),
            Arc::new(ComputeDistanceHandler::new(
                DistancePricer::new(Arc::new(StaticGeocoder), Arc::new(StaticRouter)),
                configs,
                recorder.clone(),
            )),
            Arc::new(ComputeMortgageHandler::new(recorder)),
            false,
        );
        pricing_router().with_state(state)
    }

    async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null))
    }

    // ───────────────────────────────────────────────────────────────
    // Tests
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn distance_calc_meters_the_calculator() {
        let calculators = InMemoryCalculatorRepository::new();
        let calc = Calculator::create("Delivery", CalculatorType::Distance, UserId::new("alice").unwrap())
            .unwrap();
        calculators.save(&calc).await.unwrap();

        let (status, body) = post_json(
            app(calculators.clone()),
            "/api/distance/calc",
            serde_json::json!({
                "from": "A", "to": "B", "vehicle": "small",
                "roundTrip": false, "calculatorId": calc.id.as_str()
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["distanceOneWayKm"], 10.0);
        assert_eq!(body["priceTotal"], 1500.0 + 450.0);
        assert_eq!(body["route"].as_array().unwrap().len(), 2);

        let stored = calculators.find_by_id(&calc.id).await.unwrap().unwrap();
        assert_eq!(stored.calc_count, 1);
    }

    #[tokio::test]
    async fn distance_calc_missing_to_is_400() {
        let (status, body) = post_json(
            app(InMemoryCalculatorRepository::new()),
            "/api/distance/calc",
            serde_json::json!({"from": "A"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_FAILED");
    }

    #[tokio::test]
    async fn geocode_failure_is_400() {
        let (status, body) = post_json(
            app(InMemoryCalculatorRepository::new()),
            "/api/distance/calc",
            serde_json::json!({"from": "Nowhere", "to": "B"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "GEOCODE_FAILED");
    }

    #[tokio::test]
    async fn mortgage_calc_returns_rounded_figures() {
        let (status, body) = post_json(
            app(InMemoryCalculatorRepository::new()),
            "/api/mortgage/calc",
            serde_json::json!({"amount": 1_000_000.0, "rate": 12.0, "years": 1}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["monthly"], 88_848.79);
        assert_eq!(body["overpayment"], 66_185.46);
    }

    #[tokio::test]
    async fn mortgage_zero_years_is_400() {
        let (status, _) = post_json(
            app(InMemoryCalculatorRepository::new()),
            "/api/mortgage/calc",
            serde_json::json!({"amount": 100.0, "rate": 5.0, "years": 0}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn layered_calc_reports_ignored_ids() {
        let (status, body) = post_json(
            app(InMemoryCalculatorRepository::new()),
            "/api/layers/calc",
            serde_json::json!({"selected": ["frame_tent", "ghost"]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 40000.0);
        assert_eq!(body["ignoredOptionIds"], serde_json::json!(["ghost"]));
    }

    #[tokio::test]
    async fn malformed_json_is_400() {
        let response = app(InMemoryCalculatorRepository::new())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/mortgage/calc")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
