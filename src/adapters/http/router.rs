//! Application router.
//!
//! Pricing, public lookups, plans and health are anonymous. Everything else
//! requires a Bearer token validated by the auth middleware.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::handlers::account::{
    ChangePlanHandler, GetOverviewHandler, ListPlansHandler, SetTelegramChatHandler,
    UsageReporter,
};
use crate::application::handlers::calculator::{
    CreateCalculatorHandler, DeleteCalculatorHandler, GetPublicCalculatorHandler,
    ListCalculatorsHandler,
};
use crate::application::handlers::config::{GetConfigHandler, UpdateConfigHandler};
use crate::application::handlers::pricing::{
    ComputationRecorder, ComputeDistanceHandler, ComputeLayeredHandler, ComputeMortgageHandler,
};
use crate::config::ServerConfig;
use crate::domain::pricing::DistancePricer;
use crate::ports::{
    CalculatorRepository, ComputationNotifier, ConfigStore, Geocoder, LeadCounter, PlanRepository,
    RouteProvider, SessionValidator, TenantDirectory, UsageMeter,
};

use super::account::{account_router, AccountAppState};
use super::calculators::{calculators_router, CalculatorsAppState};
use super::configs::{configs_router, ConfigsAppState};
use super::middleware::{auth_middleware, AuthState};
use super::pricing::{pricing_router, PricingAppState};
use super::public::{public_router, PublicAppState};

/// Port implementations the API is wired from.
#[derive(Clone)]
pub struct ApiPorts {
    pub calculators: Arc<dyn CalculatorRepository>,
    pub configs: Arc<dyn ConfigStore>,
    pub tenants: Arc<dyn TenantDirectory>,
    pub plans: Arc<dyn PlanRepository>,
    pub meter: Arc<dyn UsageMeter>,
    pub leads: Arc<dyn LeadCounter>,
    pub geocoder: Arc<dyn Geocoder>,
    pub router: Arc<dyn RouteProvider>,
    pub notifier: Arc<dyn ComputationNotifier>,
    pub sessions: Arc<dyn SessionValidator>,
}

/// Per-module handler state.
#[derive(Clone)]
pub struct ApiState {
    pub pricing: PricingAppState,
    pub calculators: CalculatorsAppState,
    pub configs: ConfigsAppState,
    pub account: AccountAppState,
    pub public: PublicAppState,
    pub sessions: AuthState,
}

impl ApiState {
    pub fn from_ports(ports: ApiPorts, verbose_errors: bool) -> Self {
        let recorder = ComputationRecorder::new(ports.meter.clone(), ports.notifier.clone());
        let pricer = DistancePricer::new(ports.geocoder.clone(), ports.router.clone());

        let pricing = PricingAppState::new(
            Arc::new(ComputeLayeredHandler::new(ports.configs.clone(), recorder.clone())),
            Arc::new(ComputeDistanceHandler::new(
                pricer,
                ports.configs.clone(),
                recorder.clone(),
            )),
            Arc::new(ComputeMortgageHandler::new(recorder)),
            verbose_errors,
        );

        let calculators = CalculatorsAppState::new(
            Arc::new(CreateCalculatorHandler::new(
                ports.calculators.clone(),
                ports.tenants.clone(),
                ports.plans.clone(),
            )),
            Arc::new(ListCalculatorsHandler::new(ports.calculators.clone())),
            Arc::new(DeleteCalculatorHandler::new(ports.calculators.clone())),
            verbose_errors,
        );

        let configs = ConfigsAppState::new(
            Arc::new(GetConfigHandler::new(
                ports.calculators.clone(),
                ports.configs.clone(),
            )),
            Arc::new(UpdateConfigHandler::new(
                ports.calculators.clone(),
                ports.configs.clone(),
            )),
            verbose_errors,
        );

        let plans = Arc::new(ListPlansHandler::new(ports.plans.clone()));
        let overview = Arc::new(GetOverviewHandler::new(
            ports.tenants.clone(),
            plans.clone(),
            UsageReporter::new(ports.meter.clone(), ports.leads.clone()),
        ));
        let telegram = Arc::new(SetTelegramChatHandler::new(
            ports.tenants.clone(),
            overview.clone(),
        ));
        let plan_change = Arc::new(ChangePlanHandler::new(
            ports.tenants.clone(),
            plans.clone(),
            overview.clone(),
        ));
        let account =
            AccountAppState::new(overview, plans, telegram, plan_change, verbose_errors);

        let public = PublicAppState::new(
            Arc::new(GetPublicCalculatorHandler::new(
                ports.calculators,
                ports.configs,
            )),
            verbose_errors,
        );

        Self {
            pricing,
            calculators,
            configs,
            account,
            public,
            sessions: ports.sessions,
        }
    }
}

/// GET /health
async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}

/// Builds the full router with tracing, CORS, timeout and request ids.
pub fn api_router(state: ApiState, server: &ServerConfig) -> Router {
    let authenticated = Router::new()
        .merge(calculators_router().with_state(state.calculators))
        .merge(configs_router().with_state(state.configs))
        .merge(account_router().with_state(state.account))
        .layer(axum::middleware::from_fn_with_state(
            state.sessions,
            auth_middleware,
        ));

    let anonymous = Router::new()
        .merge(pricing_router().with_state(state.pricing))
        .merge(public_router().with_state(state.public))
        .route("/health", get(health));

    Router::new()
        .merge(authenticated)
        .merge(anonymous)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Configured origins, or any origin when none are set.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        base.allow_origin(Any)
    } else {
        base.allow_origin(AllowOrigin::list(origins))
    }
}
