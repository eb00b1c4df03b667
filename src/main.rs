//! saas-calc server binary.
//!
//! Loads `SAAS_CALC__*` configuration, connects PostgreSQL, wires the port
//! adapters into the HTTP router and serves until Ctrl+C or SIGTERM.

use std::sync::Arc;

use saas_calc::adapters::auth::JwtSessionValidator;
use saas_calc::adapters::geo::{self, NominatimGeocoder, OsrmRouteProvider};
use saas_calc::adapters::http::{api_router, ApiPorts, ApiState};
use saas_calc::adapters::notification::{
    self, spawn_dispatcher, DisabledNotifier, DispatcherHandle, DispatcherSettings,
    TelegramSender,
};
use saas_calc::adapters::postgres::{
    PostgresCalculatorRepository, PostgresConfigStore, PostgresLeadCounter,
    PostgresPlanRepository, PostgresTenantDirectory,
};
use saas_calc::config::{AppConfig, ConfigError, ValidationError};
use saas_calc::domain::foundation::DomainError;
use saas_calc::domain::plan::default_plans;
use saas_calc::ports::{ComputationNotifier, PlanRepository, TenantDirectory};
use secrecy::Secret;
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Plan seeding failed: {0}")]
    Seed(#[from] DomainError),

    #[error("HTTP client setup failed: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);
    info!(
        environment = ?config.server.environment,
        "Starting saas-calc"
    );

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database migrations applied");
    }

    let calculators = Arc::new(PostgresCalculatorRepository::new(pool.clone()));
    let plans = Arc::new(PostgresPlanRepository::new(pool.clone()));
    let tenants: Arc<dyn TenantDirectory> = Arc::new(PostgresTenantDirectory::new(pool.clone()));

    let seeded = plans.seed_if_empty(&default_plans()).await?;
    if seeded > 0 {
        info!(plans = seeded, "Seeded default plan catalog");
    }

    let geo_client = geo::build_client(&config.geo)?;
    let (notifier, dispatcher) = build_notifier(&config, tenants.clone())?;

    let ports = ApiPorts {
        calculators: calculators.clone(),
        configs: Arc::new(PostgresConfigStore::new(pool.clone())),
        tenants,
        plans,
        meter: calculators,
        leads: Arc::new(PostgresLeadCounter::new(pool)),
        geocoder: Arc::new(NominatimGeocoder::new(
            geo_client.clone(),
            config.geo.geocoder_base_url.clone(),
        )),
        router: Arc::new(OsrmRouteProvider::new(
            geo_client,
            config.geo.router_base_url.clone(),
        )),
        notifier,
        sessions: Arc::new(JwtSessionValidator::new(&config.auth)),
    };

    let app = api_router(
        ApiState::from_ports(ports, config.features.verbose_errors),
        &config.server,
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = dispatcher {
        handle.shutdown().await;
    }
    info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let json = config.features.json_logs;

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .init();
}

type NotifierParts = (Arc<dyn ComputationNotifier>, Option<DispatcherHandle>);

fn build_notifier(
    config: &AppConfig,
    tenants: Arc<dyn TenantDirectory>,
) -> Result<NotifierParts, StartupError> {
    let token = match config.notification.bot_token() {
        Some(token) if config.features.enable_notifications => token.to_string(),
        Some(_) => {
            info!("Notifications disabled by feature flag");
            return Ok((Arc::new(DisabledNotifier), None));
        }
        None => {
            if config.features.enable_notifications {
                warn!("Notifications enabled without a bot token, disabling");
            }
            return Ok((Arc::new(DisabledNotifier), None));
        }
    };

    let sender = TelegramSender::new(
        notification::build_client(&config.notification)?,
        config.notification.telegram_api_base_url.clone(),
        Secret::new(token),
    );
    let (dispatcher, handle) = spawn_dispatcher(
        tenants,
        Arc::new(sender),
        DispatcherSettings {
            queue_capacity: config.notification.queue_capacity,
            max_concurrent: config.notification.max_concurrent,
        },
    );
    info!(
        queue_capacity = config.notification.queue_capacity,
        "Notification dispatcher started"
    );
    Ok((Arc::new(dispatcher), Some(handle)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => warn!("Failed to install Ctrl+C handler: {}", e),
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                info!("Received SIGTERM, shutting down");
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
