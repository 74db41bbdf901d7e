//! Collector library crate.
//!
//! This crate provides the building blocks of a Prometheus exporter for a
//! Cosmos / CometBFT node:
//!
//! - typed records for the node's RPC responses (`types`),
//! - a node RPC client behind a trait (`rpc`),
//! - the scrape-time collector deriving metric values (`collector`),
//! - the metric emitter and registry (`metrics`),
//! - and a top-level configuration (`config`).
//!
//! Binaries compose these into an HTTP exporter; nothing here listens on a
//! socket.

pub mod collector;
pub mod config;
pub mod metrics;
pub mod rpc;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export top-level configuration types.
pub use config::{CollectorConfig, RpcConfig};

// Re-export the collector and its per-cycle reading.
pub use collector::{NodeCollector, Reading};

// Re-export the RPC interface and the HTTP client.
pub use rpc::{HttpNodeRpc, NodeRpc, RpcError};

// Re-export the metric emitter and registry.
pub use metrics::{ExporterMetrics, MetricsRegistry, NodeExporter};

// Re-export wire types at the crate root for convenience.
pub use types::{NetInfo, NodeStatus};

/// Exporter stack used by the binary: an HTTP-backed node collector.
pub type DefaultNodeExporter = NodeExporter<HttpNodeRpc>;

/// Builds the default exporter stack from configuration.
///
/// Must not be called from within an async context: the HTTP client is
/// blocking.
pub fn build_exporter(cfg: &CollectorConfig) -> Result<DefaultNodeExporter, String> {
    let metrics = ExporterMetrics::new(&cfg.namespace)
        .map_err(|e| format!("invalid metric namespace {:?}: {e}", cfg.namespace))?;

    let rpc = HttpNodeRpc::new(cfg.rpc.endpoint.clone(), cfg.rpc.timeout)
        .map_err(|e| format!("failed to create node RPC client: {e}"))?;

    let collector = NodeCollector::new(rpc, cfg.scrape_peers);
    Ok(NodeExporter::new(collector, metrics, cfg.node_label.clone()))
}
