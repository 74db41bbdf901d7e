//! Shared application state.

use std::sync::Arc;

use cosmos_collector::MetricsRegistry;

/// Shared state held by the HTTP handlers.
///
/// Holds no per-scrape data: every request to the telemetry path triggers
/// a fresh collection through the registry.
pub struct AppState {
    /// Registry with the node exporter registered.
    pub metrics: MetricsRegistry,
    /// Path under which metrics are exposed; linked from the index page.
    pub telemetry_path: String,
}

/// Thread-safe alias for `AppState`.
pub type SharedState = Arc<AppState>;
