use axum::{Json, http::StatusCode};
use serde::Serialize;

/// Liveness of the exporter process.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /health`
///
/// Reports that the exporter itself is serving. Says nothing about the
/// node; that is what the `up` gauge is for.
pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}
