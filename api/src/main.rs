//! BioDAO API Server
//!
//! Level progression for launchpad projects, driven by their Discord activity.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use sea_orm::{Database, DatabaseConnection};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{NotifierImpl, PostgresDiscordRepository, PostgresProjectRepository};
use app::{DiscordBotConfig, DiscordService, LevelService};
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub level_service: Arc<LevelService<PostgresProjectRepository, NotifierImpl>>,
    pub discord_service:
        Arc<DiscordService<PostgresProjectRepository, PostgresDiscordRepository>>,
    pub project_repo: Arc<PostgresProjectRepository>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: Arc<DatabaseConnection>, config: &Config) -> Self {
        // Create adapters
        let project_repo = Arc::new(PostgresProjectRepository::new(db.clone()));
        let discord_repo = Arc::new(PostgresDiscordRepository::new(db));
        let notifier = Arc::new(NotifierImpl::from_config(config));

        // Create application services
        let level_service = Arc::new(LevelService::new(project_repo.clone(), notifier));
        let discord_service = Arc::new(DiscordService::new(
            project_repo.clone(),
            discord_repo,
            DiscordBotConfig::new(config.discord_client_id.clone()),
        ));

        Self {
            level_service,
            discord_service,
            project_repo,
            config: Arc::new(config.clone()),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: String,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Routes without rate limiting
fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Projects
        .route("/projects/:id", get(handlers::get_project))
        .route("/projects/:id/level-check", post(handlers::check_level))
        .route(
            "/projects/:id/discord/installation",
            get(handlers::check_installation),
        )
        // Levels
        .route("/levels/check", post(handlers::check_snapshot))
        .route(
            "/levels/:level/requirements",
            get(handlers::get_requirements),
        )
        // Discord helpers
        .route(
            "/discord/installation-url",
            get(handlers::installation_url),
        )
        .route("/discord/extract", post(handlers::extract_reference))
}

fn with_middleware(router: Router<AppState>, state: AppState) -> Router {
    router
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the full router
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    // Rate limiting config: 2 req/sec sustained, burst of 5
    // Uses PeerIpKeyExtractor to get client IP from socket connection
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .context("Failed to build governor config")?,
    );

    // Rate-limited routes (server linking writes to the database)
    let rate_limited_routes = Router::new()
        .route("/projects/:id/discord", post(handlers::link_server))
        .layer(GovernorLayer {
            config: governor_config,
        });

    Ok(with_middleware(
        api_routes().merge(rate_limited_routes),
        state,
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,biodao_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting BioDAO API...");

    // Load configuration
    let config = Config::from_env()?;
    if config.notify_webhook_url.is_none() {
        tracing::warn!("NOTIFY_WEBHOOK_URL not set, level-up notices will only be logged");
    }
    if config.ingest_webhook_secret.is_none() {
        tracing::warn!("INGEST_WEBHOOK_SECRET not set, snapshot checks will be rejected");
    }

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    let state = AppState::new(Arc::new(db), &config);
    let app = build_router(state)?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
