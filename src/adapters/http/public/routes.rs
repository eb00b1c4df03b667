//! Route configuration for public widget links.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_public_calculator, PublicAppState};

/// Routes:
/// - `GET /api/public/:owner_id/:token` - Calculator summary and effective config
pub fn public_router() -> Router<PublicAppState> {
    Router::new().route("/api/public/:owner_id/:token", get(get_public_calculator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCalculatorRepository, InMemoryConfigStore};
    use crate::application::handlers::calculator::GetPublicCalculatorHandler;
    use crate::domain::calculator::{Calculator, CalculatorType};
    use crate::domain::foundation::UserId;
    use crate::ports::CalculatorRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn app_with(calc: &Calculator) -> Router {
        let calculators = InMemoryCalculatorRepository::new();
        calculators.save(calc).await.unwrap();
        let lookup = GetPublicCalculatorHandler::new(
            Arc::new(calculators),
            Arc::new(InMemoryConfigStore::new()),
        );
        public_router().with_state(PublicAppState::new(Arc::new(lookup), false))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null))
    }

    #[tokio::test]
    async fn public_link_returns_calculator_and_config() {
        let calc = Calculator::create("Trailer", CalculatorType::Layered, UserId::new("alice").unwrap())
            .unwrap();
        let app = app_with(&calc).await;

        let (status, body) = get(app, &format!("/api/public/alice/{}", calc.public_token)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["calculator"]["id"], calc.id.as_str());
        assert_eq!(body["config"]["options"][0]["id"], "frame_tent");
    }

    #[tokio::test]
    async fn unknown_token_is_404() {
        let calc = Calculator::create("Trailer", CalculatorType::Layered, UserId::new("alice").unwrap())
            .unwrap();
        let app = app_with(&calc).await;

        let (status, _) = get(app, "/api/public/alice/0000").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn mortgage_link_has_null_config() {
        let calc = Calculator::create("Loan", CalculatorType::Mortgage, UserId::new("bob").unwrap())
            .unwrap();
        let app = app_with(&calc).await;

        let (status, body) = get(app, &format!("/api/public/bob/{}", calc.public_token)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["config"].is_null());
    }
}
