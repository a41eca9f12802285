mod app;
mod cache;
mod config;
mod handlers;
mod state;
mod weather;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    app::create_app,
    cache::{CacheGateway, RedisCache},
    config::Config,
    state::AppState,
    weather::OpenMeteoFetcher,
};

/// weathercache - Current temperature behind a fail-open Redis cache
#[derive(Parser, Debug)]
#[command(name = "weathercache")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "SERVER_HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "SERVER_PORT")]
    port: u16,

    /// Instance identifier shown on the page and used in the cache key
    #[arg(long, short = 'n', default_value = "1", env = "SERVER_NUMBER")]
    server_number: String,

    /// Upstream weather API URL
    #[arg(long, env = "WEATHER_API_URL")]
    weather_api_url: String,

    /// Redis host
    #[arg(long, default_value = "localhost", env = "REDIS_HOST")]
    redis_host: String,

    /// Redis port
    #[arg(long, default_value = "6379", env = "REDIS_PORT")]
    redis_port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weathercache=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    // A missing Redis leaves the gateway disabled; startup continues.
    let redis_url = RedisCache::url(&cli.redis_host, cli.redis_port);
    let gateway = Arc::new(CacheGateway::connect(RedisCache::new(&redis_url)).await);

    let upstream = Arc::new(OpenMeteoFetcher::new(
        cli.weather_api_url,
        config.upstream_timeout(),
    )?);

    tracing::info!(
        server_number = %cli.server_number,
        weather_api = %upstream.url(),
        cache_enabled = gateway.is_available(),
        cache_ttl_seconds = config.cache_ttl_seconds,
        "Starting weathercache"
    );

    let state = AppState::build(&cli.server_number, upstream, gateway, &config);
    let app = create_app(state.clone(), config.request_timeout());

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on http://{}", listener.local_addr()?);

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(state))
        .await?;

    tracing::info!("HTTP server closed");
    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM), then release the cache
/// connection before the listener closes.
async fn shutdown_signal(state: AppState) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down gracefully...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    state.gateway.disconnect().await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from([
            "weathercache",
            "--weather-api-url",
            "https://api.open-meteo.com/v1/forecast",
        ])
        .unwrap();

        assert_eq!(cli.host, "0.0.0.0");
        assert_eq!(cli.port, 3000);
        assert_eq!(cli.server_number, "1");
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "weathercache",
            "--weather-api-url",
            "http://weather.internal/v1/forecast",
            "-n",
            "2",
            "-p",
            "8080",
            "--redis-host",
            "cache",
            "--redis-port",
            "6380",
        ])
        .unwrap();

        assert_eq!(cli.server_number, "2");
        assert_eq!(cli.port, 8080);
        assert_eq!(cli.weather_api_url, "http://weather.internal/v1/forecast");
        assert_eq!(RedisCache::url(&cli.redis_host, cli.redis_port), "redis://cache:6380");
    }
}
