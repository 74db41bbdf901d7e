//! Configuration for the collector side of the exporter.
//!
//! This module aggregates configuration for:
//!
//! - the node RPC client (endpoint URL + timeout),
//! - the emitted metrics (namespace + `node` label value),
//! - whether the peer count is scraped at all.
//!
//! Binaries construct a [`CollectorConfig`] from defaults, flags, or
//! environment variables as needed.

use std::time::Duration;

/// Default RPC listener of a locally running node.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:26657";
/// Default metric name prefix.
pub const DEFAULT_NAMESPACE: &str = "cosmos";
/// Default value of the `node` label.
pub const DEFAULT_NODE_LABEL: &str = "localhost";
/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for the node RPC client.
#[derive(Clone, Debug)]
pub struct RpcConfig {
    /// Base URL of the node's RPC listener, e.g. `"http://127.0.0.1:26657"`.
    pub endpoint: String,
    /// Timeout applied to each RPC request.
    pub timeout: Duration,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Top-level collector configuration.
#[derive(Clone, Debug)]
pub struct CollectorConfig {
    pub rpc: RpcConfig,
    /// Prefix of every metric name, e.g. `cosmos` for `cosmos_up`.
    pub namespace: String,
    /// Value of the `node` label on the per-node gauges.
    pub node_label: String,
    /// Query `/net_info` for the peer count. When `false` the exporter runs
    /// in status-only mode and never emits `peers_num`.
    pub scrape_peers: bool,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            rpc: RpcConfig::default(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            node_label: DEFAULT_NODE_LABEL.to_string(),
            scrape_peers: true,
        }
    }
}
