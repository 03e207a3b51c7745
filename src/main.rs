mod config;
mod db;
mod errors;
mod metrics;
mod models;
mod routes;

use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::db::create_pool;
use crate::db::repository::SongRepository;
use sqlx::PgPool;

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    pub pool: PgPool,
    pub songs: SongRepository,
    pub start_time: Instant,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "songs_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    // Load configuration
    let config = Config::from_env();

    tracing::info!("Starting Songs API v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.node_env);

    // Initialize PostgreSQL connection pool
    let pool = create_pool(&config).await?;
    tracing::info!("PostgreSQL connected");

    let songs = SongRepository::new(pool.clone());

    // Build application state
    let state = Arc::new(AppState {
        config,
        pool: pool.clone(),
        songs,
        start_time: Instant::now(),
    });

    // Start server
    let listener = bind_listener(&state.config).await?;
    let app = routes::router(state);

    tracing::info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Release database connections
    pool.close().await;
    tracing::info!("PostgreSQL pool closed");

    Ok(())
}

/// Bind the HTTP listener, resolving `HOST` when it is a hostname
async fn bind_listener(config: &Config) -> std::io::Result<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_host(host: &str) -> Config {
        Config {
            host: host.to_string(),
            port: 0,
            node_env: "test".to_string(),
            database_url: "postgres://localhost/songs_api_test".to_string(),
            db_max_connections: 1,
        }
    }

    #[tokio::test]
    async fn test_bind_listener_resolves_hostname() {
        let listener = bind_listener(&config_with_host("localhost")).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn test_bind_listener_accepts_ip_literal() {
        let listener = bind_listener(&config_with_host("127.0.0.1")).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }
}
