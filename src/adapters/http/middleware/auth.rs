//! Bearer token middleware and the `RequireAuth` extractor.
//!
//! ```text
//! Authorization: Bearer <token>
//!        │
//!  auth_middleware ──SessionValidator──▶ AuthenticatedUser in extensions
//!        │                                       │
//!     handler ◀────────── RequireAuth ───────────┘
//! ```
//!
//! A request without a token passes through untouched; `RequireAuth`
//! turns that into a 401 on the routes that need a tenant. A token that is
//! present but does not validate is rejected before any handler runs.

use std::sync::Arc;

use axum::async_trait;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::{header, request::Parts, HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::adapters::http::error::ErrorResponse;
use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::SessionValidator;

pub type AuthState = Arc<dyn SessionValidator>;

pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(request.headers()).map(str::to_owned) else {
        return next.run(request).await;
    };

    match validator.validate(&token).await {
        Ok(user) => {
            tracing::trace!(user_id = %user.id, "Bearer token accepted");
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(err) => reject(err),
    }
}

/// Token after a case-insensitive `Bearer` scheme; blank tokens count as absent.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

fn reject(err: AuthError) -> Response {
    let status = match &err {
        AuthError::InvalidToken | AuthError::TokenExpired => StatusCode::UNAUTHORIZED,
        AuthError::ServiceUnavailable(cause) => {
            tracing::error!(error = %cause, "Session validation unavailable");
            StatusCode::SERVICE_UNAVAILABLE
        }
    };
    auth_error("AUTH_ERROR", err.to_string()).into_response_with(status)
}

fn auth_error(code: &str, message: impl Into<String>) -> ErrorResponse {
    ErrorResponse {
        code: code.to_string(),
        message: message.into(),
        details: None,
    }
}

/// The caller's identity; 401 when the middleware injected none.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(RequireAuth)
            .ok_or(AuthRejection::Unauthenticated)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Unauthenticated => auth_error(
                "UNAUTHENTICATED",
                "Authentication required",
            )
            .into_response_with(StatusCode::UNAUTHORIZED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockSessionValidator;
    use axum::body::Body;
    use axum::http::HeaderValue;
    use axum::routing::get;
    use axum::{Extension, Router};
    use tower::ServiceExt;

    async fn whoami(user: Option<Extension<AuthenticatedUser>>) -> String {
        user.map(|Extension(u)| u.id.to_string())
            .unwrap_or_else(|| "anonymous".to_string())
    }

    async fn me(RequireAuth(user): RequireAuth) -> String {
        format!("{}:{}", user.id, user.is_admin())
    }

    fn app(validator: MockSessionValidator) -> Router {
        let state: AuthState = Arc::new(validator);
        Router::new()
            .route("/whoami", get(whoami))
            .route("/me", get(me))
            .layer(axum::middleware::from_fn_with_state(state, auth_middleware))
    }

    async fn call(app: Router, uri: &str, authorization: Option<&str>) -> (StatusCode, String) {
        let mut builder = axum::http::Request::builder().uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let response = app
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Token extraction
    // ════════════════════════════════════════════════════════════════════════════

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn bearer_scheme_is_case_insensitive() {
        assert_eq!(bearer_token(&headers("Bearer abc")), Some("abc"));
        assert_eq!(bearer_token(&headers("bearer  abc ")), Some("abc"));
    }

    #[test]
    fn other_schemes_and_blank_tokens_are_ignored() {
        assert_eq!(bearer_token(&headers("Basic dXNlcjpwYXNz")), None);
        assert_eq!(bearer_token(&headers("Bearer ")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Middleware
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn valid_token_injects_user() {
        let validator = MockSessionValidator::new().with_test_user("good", "alice");
        let (status, body) = call(app(validator), "/whoami", Some("Bearer good")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "alice");
    }

    #[tokio::test]
    async fn missing_token_passes_through_as_anonymous() {
        let (status, body) = call(app(MockSessionValidator::new()), "/whoami", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "anonymous");
    }

    #[tokio::test]
    async fn invalid_token_is_rejected_before_the_handler() {
        let (status, body) =
            call(app(MockSessionValidator::new()), "/whoami", Some("Bearer nope")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["code"], "AUTH_ERROR");
    }

    #[tokio::test]
    async fn validator_outage_is_503() {
        let validator = MockSessionValidator::new()
            .with_test_user("good", "alice")
            .with_error(AuthError::service_unavailable("key store down"));
        let (status, _) = call(app(validator), "/whoami", Some("Bearer good")).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // RequireAuth
    // ════════════════════════════════════════════════════════════════════════════

    #[tokio::test]
    async fn require_auth_sees_role() {
        let validator = MockSessionValidator::new().with_admin("root", "ops");
        let (status, body) = call(app(validator), "/me", Some("Bearer root")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ops:true");
    }

    #[tokio::test]
    async fn require_auth_without_token_is_401() {
        let (status, body) = call(app(MockSessionValidator::new()), "/me", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["code"], "UNAUTHENTICATED");
        assert_eq!(body["message"], "Authentication required");
    }
}
