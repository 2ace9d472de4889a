use std::{net::SocketAddr, sync::Arc};

use axum::http::{header, HeaderValue, Method};
use configs::{AppConfig, AuthConfig, CorsConfig};
use migration::MigratorTrait;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

use service::auth::{AccessGuard, ListPolicy, SigningKeys, TokenIssuer};
use service::booking::{BookingRepository, BookingService, SeaOrmBookingRepository};
use service::catalog::{SeaOrmServiceCatalogRepository, ServiceCatalogRepository};

use crate::cookies::CookiePolicy;
use crate::errors::StartupError;
use crate::routes::{self, ServerState};

/// Assemble the router state from the auth section and injected storage.
/// Fails when the signing secret is blank.
pub fn build_state(
    auth: &AuthConfig,
    catalog: Arc<dyn ServiceCatalogRepository>,
    bookings: Arc<dyn BookingRepository>,
) -> Result<ServerState, StartupError> {
    let keys = Arc::new(SigningKeys::from_secret(auth.jwt_secret.as_bytes())?);
    let policy = ListPolicy::with_admins(auth.admin_emails.iter().cloned());
    Ok(ServerState {
        issuer: Arc::new(TokenIssuer::new(keys.clone(), auth.token_ttl_secs)),
        guard: Arc::new(AccessGuard::new(keys)),
        cookies: CookiePolicy::for_environment(auth.environment),
        catalog,
        bookings: Arc::new(BookingService::new(bookings, policy)),
    })
}

/// Credentialed CORS for the configured SPA origins.
pub fn build_cors(cfg: &CorsConfig) -> Result<CorsLayer, StartupError> {
    let origins = cfg
        .allowed_origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .map_err(|e| StartupError::InvalidConfig(format!("cors origin `{o}`: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if origins.is_empty() {
        warn!(event = "cors_no_origins", "no allowed origins configured; browsers will be refused");
    }
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl_c");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
}

/// Public entry: load configuration, connect storage, and serve until Ctrl+C.
pub async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(format!("{e:#}")))?;
    info!(event = "config_loaded", environment = ?cfg.auth.environment, ttl = cfg.auth.token_ttl_secs, "configuration ready");

    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None).await?;
        info!(event = "migrations_applied", "database schema up to date");
    }

    let state = build_state(
        &cfg.auth,
        Arc::new(SeaOrmServiceCatalogRepository { db: db.clone() }),
        Arc::new(SeaOrmBookingRepository { db }),
    )?;
    let app = routes::build_router(state, build_cors(&cfg.cors)?);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, event = "listening", "car doctors server started");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}
