//! Club Sphere backend entrypoint.
//!
//! Loads configuration, connects to Postgres, wires the adapters into
//! the shared application state, and serves the REST API.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use club_sphere::adapters::auth::{FirebaseConfig, FirebaseTokenVerifier};
use club_sphere::adapters::http::{api_router, AppState};
use club_sphere::adapters::postgres::{
    PostgresClubRepository, PostgresEventRepository, PostgresMembershipRepository,
    PostgresPaymentRepository, PostgresRegistrationRepository, PostgresSummaryReader,
    PostgresUserRepository,
};
use club_sphere::adapters::stripe::{StripeCheckoutAdapter, StripeCheckoutConfig};
use club_sphere::config::AppConfig;
use club_sphere::domain::payment::PaymentWebhookVerifier;

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone()));

    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!(%error, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => tracing::error!(%error, "failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config);

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .max_lifetime(config.database.max_lifetime())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let project_id = config.auth.project_id()?;
    let token_verifier = FirebaseTokenVerifier::new(
        FirebaseConfig::new(project_id).with_cache_duration(config.auth.jwks_cache_ttl()),
    )?;

    let checkout_provider = StripeCheckoutAdapter::new(StripeCheckoutConfig::new(
        config.payment.secret_key.clone(),
    ));
    // An absent webhook secret never verifies, so deliveries are rejected
    // until one is configured.
    let webhook_verifier =
        PaymentWebhookVerifier::new(config.payment.webhook_secret.clone().unwrap_or_default());

    let state = AppState {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        clubs: Arc::new(PostgresClubRepository::new(pool.clone())),
        memberships: Arc::new(PostgresMembershipRepository::new(pool.clone())),
        events: Arc::new(PostgresEventRepository::new(pool.clone())),
        registrations: Arc::new(PostgresRegistrationRepository::new(pool.clone())),
        payments: Arc::new(PostgresPaymentRepository::new(pool.clone())),
        summaries: Arc::new(PostgresSummaryReader::new(pool)),
        token_verifier: Arc::new(token_verifier),
        checkout_provider: Arc::new(checkout_provider),
        webhook_verifier,
        client_origin: config.server.client_origin.clone(),
    };

    let app = api_router(state, config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
