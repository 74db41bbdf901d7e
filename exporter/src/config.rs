//! Exporter configuration.
//!
//! Every setting is a command-line flag with an environment variable
//! fallback. `main` loads an optional `.env` file into the environment
//! before parsing, without overriding variables that are already set, so
//! the effective precedence is flag > environment > `.env` > default.

use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use clap::Parser;
use cosmos_collector::config::{DEFAULT_ENDPOINT, DEFAULT_NAMESPACE, DEFAULT_NODE_LABEL};
use cosmos_collector::{CollectorConfig, RpcConfig};

/// Path of the exporter's own liveness route.
pub const HEALTH_PATH: &str = "/health";

/// Configuration for the exporter HTTP server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP server to.
    pub listen_addr: SocketAddr,
    /// Path under which metrics are exposed.
    pub telemetry_path: String,
}

/// Command-line interface of the exporter.
#[derive(Debug, Parser)]
#[command(
    name = "cosmos-exporter",
    version,
    about = "Prometheus exporter for Cosmos / CometBFT node RPC status"
)]
pub struct Args {
    /// Address to listen on for telemetry. `:PORT` binds all interfaces.
    #[arg(
        long = "web.listen-address",
        env = "COSMOS_EXPORTER_LISTEN_ADDRESS",
        default_value = ":9141",
        value_parser = parse_listen_addr
    )]
    pub listen_addr: SocketAddr,

    /// Path under which to expose metrics.
    #[arg(
        long = "web.telemetry-path",
        env = "COSMOS_EXPORTER_TELEMETRY_PATH",
        default_value = "/metrics",
        value_parser = parse_telemetry_path
    )]
    pub telemetry_path: String,

    /// Base URL of the node's RPC listener.
    #[arg(long = "cosmos.endpoint", env = "COSMOS_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Timeout for each RPC request, in seconds.
    #[arg(
        long = "cosmos.timeout-secs",
        env = "COSMOS_TIMEOUT_SECS",
        default_value_t = 5,
        value_parser = clap::value_parser!(u64).range(1..=60)
    )]
    pub timeout_secs: u64,

    /// Value of the `node` label on per-node gauges.
    #[arg(long = "cosmos.node-label", env = "COSMOS_NODE_LABEL", default_value = DEFAULT_NODE_LABEL)]
    pub node_label: String,

    /// Prefix of every metric name.
    #[arg(long = "cosmos.namespace", env = "COSMOS_NAMESPACE", default_value = DEFAULT_NAMESPACE)]
    pub namespace: String,

    /// Query `/net_info` for the peer count. Set to `false` to scrape
    /// `/status` only.
    #[arg(
        long = "cosmos.scrape-peers",
        env = "COSMOS_SCRAPE_PEERS",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub scrape_peers: bool,
}

impl Args {
    /// Splits the parsed arguments into server and collector configuration.
    pub fn into_configs(self) -> (ApiConfig, CollectorConfig) {
        let api = ApiConfig {
            listen_addr: self.listen_addr,
            telemetry_path: self.telemetry_path,
        };
        let collector = CollectorConfig {
            rpc: RpcConfig {
                endpoint: self.endpoint,
                timeout: Duration::from_secs(self.timeout_secs),
            },
            namespace: self.namespace,
            node_label: self.node_label,
            scrape_peers: self.scrape_peers,
        };
        (api, collector)
    }
}

/// Parses a listen address, accepting the `:PORT` shorthand for all
/// interfaces and resolving host names.
pub fn parse_listen_addr(value: &str) -> Result<SocketAddr, String> {
    let value = match value.strip_prefix(':') {
        Some(port) => format!("0.0.0.0:{port}"),
        None => value.to_string(),
    };

    if let Ok(addr) = value.parse::<SocketAddr>() {
        return Ok(addr);
    }

    value
        .to_socket_addrs()
        .map_err(|e| format!("invalid listen address {value:?}: {e}"))?
        .next()
        .ok_or_else(|| format!("listen address {value:?} did not resolve"))
}

/// Validates the telemetry path: absolute, not the index page, not the
/// health route, a literal route (no captures or wildcards), and safe to
/// embed in the index page's link.
pub fn parse_telemetry_path(value: &str) -> Result<String, String> {
    if !value.starts_with('/') {
        return Err(format!("telemetry path {value:?} must start with '/'"));
    }
    if value == "/" || value == HEALTH_PATH {
        return Err(format!("telemetry path {value:?} is reserved"));
    }
    if value
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '{' | '}' | '?' | '#'))
    {
        return Err(format!("telemetry path {value:?} contains invalid characters"));
    }
    // The router reads these as captures and wildcards.
    if value.split('/').any(|s| s.starts_with(':') || s.starts_with('*')) {
        return Err(format!(
            "telemetry path {value:?} has a segment starting with ':' or '*'"
        ));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listen_address_shorthand_binds_all_interfaces() {
        assert_eq!(
            parse_listen_addr(":9141"),
            Ok("0.0.0.0:9141".parse().expect("addr"))
        );
        assert_eq!(
            parse_listen_addr("127.0.0.1:9300"),
            Ok("127.0.0.1:9300".parse().expect("addr"))
        );
        assert!(parse_listen_addr("not an address").is_err());
    }

    #[test]
    fn telemetry_path_is_validated() {
        assert_eq!(parse_telemetry_path("/metrics"), Ok("/metrics".to_string()));
        assert_eq!(
            parse_telemetry_path("/cosmos/metrics"),
            Ok("/cosmos/metrics".to_string())
        );
        assert!(parse_telemetry_path("metrics").is_err());
        assert!(parse_telemetry_path("/").is_err());
        assert!(parse_telemetry_path("/health").is_err());
        assert!(parse_telemetry_path("/metrics'><script>").is_err());
        assert!(parse_telemetry_path("/{name}").is_err());
        assert!(parse_telemetry_path("/:metrics").is_err());
        assert!(parse_telemetry_path("/*rest").is_err());
        assert!(parse_telemetry_path("/metrics/*x").is_err());
        assert_eq!(
            parse_telemetry_path("/metrics:v1/node*"),
            Ok("/metrics:v1/node*".to_string())
        );
    }

    #[test]
    fn flags_map_onto_configs() {
        let args = Args::try_parse_from([
            "cosmos-exporter",
            "--web.listen-address",
            ":9300",
            "--web.telemetry-path",
            "/node-metrics",
            "--cosmos.endpoint",
            "http://10.0.0.5:26657",
            "--cosmos.timeout-secs",
            "8",
            "--cosmos.node-label",
            "validator-1",
            "--cosmos.namespace",
            "gaia",
            "--cosmos.scrape-peers",
            "false",
        ])
        .expect("args should parse");

        let (api, collector) = args.into_configs();
        assert_eq!(api.listen_addr, "0.0.0.0:9300".parse().expect("addr"));
        assert_eq!(api.telemetry_path, "/node-metrics");
        assert_eq!(collector.rpc.endpoint, "http://10.0.0.5:26657");
        assert_eq!(collector.rpc.timeout, Duration::from_secs(8));
        assert_eq!(collector.node_label, "validator-1");
        assert_eq!(collector.namespace, "gaia");
        assert!(!collector.scrape_peers);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let res = Args::try_parse_from(["cosmos-exporter", "--cosmos.timeout-secs", "0"]);
        assert!(res.is_err());
    }
}
