//! Route configuration for configuration endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    get_distance_config, get_layered_config, put_distance_config, put_layered_config,
    ConfigsAppState,
};

/// Routes:
/// - `GET|PUT /api/layers/config/:id` - Layered configurator document
/// - `GET|PUT /api/distance/config/:id` - Delivery tariff
pub fn configs_router() -> Router<ConfigsAppState> {
    Router::new()
        .route(
            "/api/layers/config/:id",
            get(get_layered_config).put(put_layered_config),
        )
        .route(
            "/api/distance/config/:id",
            get(get_distance_config).put(put_distance_config),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockSessionValidator;
    use crate::adapters::http::middleware::{auth_middleware, AuthState};
    use crate::adapters::memory::{InMemoryCalculatorRepository, InMemoryConfigStore};
    use crate::application::handlers::config::{GetConfigHandler, UpdateConfigHandler};
    use crate::domain::calculator::{Calculator, CalculatorType};
    use crate::domain::foundation::UserId;
    use crate::ports::CalculatorRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct Fixture {
        app: Router,
        distance_id: String,
        layered_id: String,
    }

    async fn fixture() -> Fixture {
        let calculators = InMemoryCalculatorRepository::new();
        let configs = InMemoryConfigStore::new();
        let alice = UserId::new("alice").unwrap();
        let distance = Calculator::create("Delivery", CalculatorType::Distance, alice.clone()).unwrap();
        let layered = Calculator::create("Trailer", CalculatorType::Layered, alice).unwrap();
        calculators.save(&distance).await.unwrap();
        calculators.save(&layered).await.unwrap();

        let state = ConfigsAppState::new(
            Arc::new(GetConfigHandler::new(
                Arc::new(calculators.clone()),
                Arc::new(configs.clone()),
            )),
            Arc::new(UpdateConfigHandler::new(Arc::new(calculators), Arc::new(configs))),
            false,
        );
        let validator: AuthState = Arc::new(
            MockSessionValidator::new()
                .with_test_user("alice-token", "alice")
                .with_test_user("bob-token", "bob")
                .with_admin("admin-token", "root"),
        );
        Fixture {
            app: configs_router()
                .with_state(state)
                .layer(axum::middleware::from_fn_with_state(validator, auth_middleware)),
            distance_id: distance.id.to_string(),
            layered_id: layered.id.to_string(),
        }
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        token: &str,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("Authorization", format!("Bearer {}", token))
            .header("content-type", "application/json");
        let body = body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty);
        let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null))
    }

    #[tokio::test]
    async fn owner_reads_default_then_updated_tariff() {
        let f = fixture().await;
        let uri = format!("/api/distance/config/{}", f.distance_id);

        let (status, initial) = send(&f.app, "GET", &uri, "alice-token", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(initial["pricePerKm"], 45.0);

        let update = serde_json::json!({
            "basePrice": 2000.0, "pricePerKm": 50.0,
            "loadingPrice": 0.0, "unloadingPrice": 0.0,
            "vehicleCoefs": {"van": 1.3}
        });
        let (status, stored) = send(&f.app, "PUT", &uri, "alice-token", Some(update)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(stored["vehicleCoefs"]["van"], 1.3);
        assert_eq!(stored["vehicleCoefs"]["large"], 1.5);

        let (_, reread) = send(&f.app, "GET", &uri, "alice-token", None).await;
        assert_eq!(reread["basePrice"], 2000.0);
    }

    #[tokio::test]
    async fn other_tenant_is_forbidden() {
        let f = fixture().await;
        let uri = format!("/api/layers/config/{}", f.layered_id);
        let (status, body) = send(&f.app, "GET", &uri, "bob-token", None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["code"], "FORBIDDEN");
    }

    #[tokio::test]
    async fn admin_may_edit_any_calculator() {
        let f = fixture().await;
        let uri = format!("/api/layers/config/{}", f.layered_id);
        let (status, body) = send(
            &f.app,
            "PUT",
            &uri,
            "admin-token",
            Some(serde_json::json!({"basePrice": 150000.0, "options": []})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["basePrice"], 150000.0);
    }

    #[tokio::test]
    async fn wrong_type_endpoint_is_forbidden() {
        let f = fixture().await;
        let uri = format!("/api/layers/config/{}", f.distance_id);
        let (status, _) = send(&f.app, "GET", &uri, "alice-token", None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn unknown_calculator_is_404() {
        let f = fixture().await;
        let (status, _) = send(&f.app, "GET", "/api/distance/config/calc_missing", "alice-token", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn negative_price_is_400() {
        let f = fixture().await;
        let uri = format!("/api/distance/config/{}", f.distance_id);
        let (status, body) = send(
            &f.app,
            "PUT",
            &uri,
            "alice-token",
            Some(serde_json::json!({"basePrice": -1.0})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["field"], "basePrice");
    }
}
