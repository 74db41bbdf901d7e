//! HTTP routes of the exporter.

pub mod health;
pub mod index;
pub mod metrics;

use axum::{Router, routing::get};

use crate::config::HEALTH_PATH;
use crate::state::SharedState;

/// Builds the exporter's router.
///
/// - `GET /`: landing page linking to the telemetry path,
/// - `GET {telemetry_path}`: Prometheus text exposition,
/// - `GET /health`: liveness of the exporter process itself.
pub fn router(state: SharedState) -> Router {
    let telemetry_path = state.telemetry_path.clone();

    Router::new()
        .route("/", get(index::index))
        .route(&telemetry_path, get(metrics::metrics))
        .route(HEALTH_PATH, get(health::health))
        .with_state(state)
}
