// exporter/src/main.rs

//! Cosmos exporter binary.
//!
//! Serves a small HTTP surface on top of the `cosmos-collector` crate:
//!
//! - `GET /`
//! - `GET /metrics` (configurable)
//! - `GET /health`
//!
//! Every request to the telemetry path scrapes the configured node once;
//! there is no background polling and nothing is cached between scrapes.

mod config;
mod routes;
mod state;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;

use config::{ApiConfig, Args};
use cosmos_collector::{CollectorConfig, MetricsRegistry};
use state::{AppState, SharedState};

fn main() -> ExitCode {
    // Variables already present in the environment win over `.env`.
    let dotenv = dotenvy::dotenv();

    // Basic tracing setup.
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| {
            "cosmos_exporter=info,cosmos_collector=info".to_string()
        }))
        .init();

    match dotenv {
        Ok(path) => tracing::info!(path = %path.display(), "loaded .env file"),
        Err(e) if e.not_found() => {
            tracing::info!("no .env file found, assuming environment variables are set")
        }
        Err(e) => tracing::warn!("failed to load .env file: {e}"),
    }

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("fatal error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(args: Args) -> Result<(), String> {
    let (api_cfg, collector_cfg) = args.into_configs();

    // ---------------------------
    // Collector + metrics registry
    // ---------------------------

    // The node RPC client is blocking, so it is built before the async
    // runtime starts and only ever used from the blocking pool.
    let metrics = build_registry(&collector_cfg)?;

    tracing::info!(
        endpoint = %collector_cfg.rpc.endpoint,
        timeout_secs = collector_cfg.rpc.timeout.as_secs(),
        node = %collector_cfg.node_label,
        scrape_peers = collector_cfg.scrape_peers,
        "scraping node on every request"
    );

    // ---------------------------
    // HTTP server
    // ---------------------------

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start async runtime: {e}"))?;

    runtime.block_on(serve(api_cfg, metrics))
}

fn build_registry(cfg: &CollectorConfig) -> Result<MetricsRegistry, String> {
    let exporter = cosmos_collector::build_exporter(cfg)?;

    let metrics = MetricsRegistry::new();
    metrics
        .register(exporter)
        .map_err(|e| format!("failed to register node exporter: {e}"))?;
    Ok(metrics)
}

async fn serve(cfg: ApiConfig, metrics: MetricsRegistry) -> Result<(), String> {
    let state: SharedState = Arc::new(AppState {
        metrics,
        telemetry_path: cfg.telemetry_path.clone(),
    });

    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(cfg.listen_addr)
        .await
        .map_err(|e| format!("failed to bind {}: {e}", cfg.listen_addr))?;

    tracing::info!(
        "exporter listening on http://{}{}",
        cfg.listen_addr,
        cfg.telemetry_path
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("exporter server error: {e}"))?;

    Ok(())
}

/// Waits for Ctrl-C and returns, used for graceful shutdown.
async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
