//! MBudget API Server
//!
//! Hosts budget editing sessions backed by PostgreSQL.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mbudget_api::{AppState, SessionStore, create_router};
use mbudget_db::{
    BudgetDefaultsRepository, MarketingBudgetRepository, ProjectRepository, connect_with_pool,
};
use mbudget_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mbudget=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let db = connect_with_pool(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await
    .context("Failed to connect to database")?;
    info!("Connected to database");

    let state = AppState {
        sessions: Arc::new(SessionStore::new(&config.session)),
        defaults: Arc::new(BudgetDefaultsRepository::new(db.clone())),
        costs: Arc::new(ProjectRepository::new(db.clone())),
        persister: Arc::new(MarketingBudgetRepository::new(db)),
        session_config: config.session,
    };
    info!(
        initial_year_count = config.session.initial_year_count,
        max_year_count = config.session.max_year_count,
        idle_timeout_secs = config.session.idle_timeout_secs,
        max_open_sessions = config.session.max_open_sessions,
        "Budget sessions configured"
    );

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
