//! FitPro Backend
//!
//! Coaching programs and per-student weekly plans over HTTP.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! - Routes: HTTP request handling and routing
//! - Services: Business logic on top of the `fitpro_shared` coaching core
//! - Repositories: Program and student plan stores (in-memory or PostgreSQL)

use anyhow::Result;
use fitpro_backend::config::{self, AppConfig, StorageBackend};
use fitpro_backend::repositories::{
    InMemoryProgramStore, InMemoryStudentPlanStore, PgProgramStore, PgStudentPlanStore,
    ProgramStore, StudentPlanStore,
};
use fitpro_backend::{db, routes, seed, state::AppState};
use fitpro_shared::{Clock, SystemClock};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let config = AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if AppConfig::is_production() { "production" } else { "development" },
        storage = ?config.storage.backend,
        "Starting FitPro Backend"
    );

    if AppConfig::is_production() {
        validate_production_config(&config)?;
    }

    let (programs, students) = create_stores(&config).await?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    if config.storage.seed_demo_data {
        seed::seed_demo_data(programs.as_ref(), students.as_ref(), clock.now()).await?;
    }

    let metrics = PrometheusBuilder::new().install_recorder()?;

    let state = AppState::new(programs, students, clock, config.clone()).with_metrics(metrics);

    let app = routes::create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    info!(address = %addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Build the configured program and student plan stores
async fn create_stores(
    config: &AppConfig,
) -> Result<(Arc<dyn ProgramStore>, Arc<dyn StudentPlanStore>)> {
    match config.storage.backend {
        StorageBackend::Memory => Ok((
            Arc::new(InMemoryProgramStore::new()),
            Arc::new(InMemoryStudentPlanStore::new()),
        )),
        StorageBackend::Postgres => {
            info!("Connecting to database...");
            let pool = db::create_pool(&config.storage).await?;

            // Production runs migrations as a separate job
            if !AppConfig::is_production() {
                db::run_migrations(&pool).await?;
            }

            Ok((
                Arc::new(PgProgramStore::new(pool.clone())),
                Arc::new(PgStudentPlanStore::new(pool)),
            ))
        }
    }
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if config::AppConfig::is_production() {
            "fitpro_backend=info,tower_http=info".into()
        } else {
            "fitpro_backend=debug,tower_http=debug,sqlx=warn".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config::AppConfig::is_production() {
        // JSON logging for log aggregation
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

/// Validate configuration for production deployment
fn validate_production_config(config: &AppConfig) -> Result<()> {
    let mut errors = Vec::new();

    if config.storage.backend == StorageBackend::Memory {
        errors.push("In-memory storage loses all programs on restart; use postgres");
    }

    if config.storage.seed_demo_data {
        errors.push("Demo data must not be seeded in production");
    }

    if config.storage.database_url.contains("localhost")
        || config.storage.database_url.contains("127.0.0.1")
    {
        warn!("Database URL contains localhost - ensure this is intentional for production");
    }

    if !errors.is_empty() {
        for err in &errors {
            error!("Configuration error: {}", err);
        }
        anyhow::bail!("Invalid production configuration");
    }

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
