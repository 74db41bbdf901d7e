//! HTTP-based node RPC client.
//!
//! Talks to the node's Tendermint-style RPC listener, typically on port
//! 26657:
//!
//! ```text
//! GET {endpoint}/status    -> { "jsonrpc": "2.0", "id": -1, "result": { "sync_info": { ... }, ... } }
//! GET {endpoint}/net_info  -> { "jsonrpc": "2.0", "id": -1, "result": { "n_peers": "7", ... } }
//! ```
//!
//! Each request is bounded by a single timeout and never retried; the
//! scrape interval of the monitoring system is the retry cadence.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use super::{NodeRpc, RpcError, decode_result};
use crate::types::{NetInfo, NodeStatus};

const STATUS_PATH: &str = "/status";
const NET_INFO_PATH: &str = "/net_info";

/// HTTP node RPC client.
///
/// This client is thread-safe (`Send + Sync`) and holds no per-request
/// state, so concurrent scrapes share only the connection pool. It uses the
/// blocking `reqwest` client internally; callers inside a Tokio runtime must
/// run it on the blocking pool (`spawn_blocking`).
pub struct HttpNodeRpc {
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl HttpNodeRpc {
    /// Constructs a new client pointing at `base_url`.
    ///
    /// `base_url` is the root of the node's RPC listener, e.g.
    /// `"http://127.0.0.1:26657"`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, RpcError> {
        let base_url = base_url.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RpcError::Transport {
                url: base_url.clone(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            base_url,
            client,
            timeout,
        })
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn endpoint(&self, path: &str) -> String {
        // Avoid accidental double slashes.
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RpcError> {
        let url = self.endpoint(path);

        let resp = self.client.get(&url).send().map_err(|e| {
            if e.is_timeout() {
                RpcError::Timeout { url: url.clone() }
            } else {
                RpcError::Transport {
                    url: url.clone(),
                    reason: e.to_string(),
                }
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RpcError::Status {
                url,
                status: status.as_u16(),
            });
        }

        // A timeout can also hit while the body is still streaming in.
        let body = resp.bytes().map_err(|e| {
            if e.is_timeout() {
                RpcError::Timeout { url: url.clone() }
            } else {
                RpcError::Transport {
                    url: url.clone(),
                    reason: format!("failed to read body: {e}"),
                }
            }
        })?;

        tracing::trace!(%url, bytes = body.len(), "node RPC response received");
        decode_result(&body)
    }
}

impl NodeRpc for HttpNodeRpc {
    fn status(&self) -> Result<NodeStatus, RpcError> {
        self.get(STATUS_PATH)
    }

    fn net_info(&self) -> Result<NetInfo, RpcError> {
        self.get(NET_INFO_PATH)
    }
}
