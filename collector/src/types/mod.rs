//! Wire types for the node's JSON-RPC endpoints.
//!
//! These mirror the Tendermint / CometBFT RPC schema for `/status` and
//! `/net_info`. The node is treated as an untrusted data source whose schema
//! drifts between versions, so every field except the envelope's `result`
//! falls back to an empty value when missing. Numeric quantities stay as
//! the decimal strings the node sends; turning them into metric values is
//! the collector's job.

pub mod net_info;
pub mod status;

use serde::Deserialize;

pub use net_info::{ChannelStatus, ConnectionStatus, FlowMonitor, NetInfo, Peer};
pub use status::{NodeInfo, NodeStatus, Other, ProtocolVersion, PubKey, SyncInfo, ValidatorInfo};

/// JSON-RPC 2.0 response envelope.
#[derive(Clone, Debug, Deserialize)]
pub struct RpcResponse<T> {
    #[serde(default)]
    pub jsonrpc: String,
    /// Request id. CometBFT echoes whatever the caller sent; for plain GET
    /// requests this is `-1` or `""` depending on the version.
    #[serde(default)]
    pub id: serde_json::Value,
    pub result: Option<T>,
    pub error: Option<RpcErrorBody>,
}

/// Error object of a JSON-RPC 2.0 response.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RpcErrorBody {
    pub code: i64,
    pub message: String,
    pub data: String,
}

impl std::fmt::Display for RpcErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.data.is_empty() {
            write!(f, "{} (code {})", self.message, self.code)
        } else {
            write!(f, "{}: {} (code {})", self.message, self.data, self.code)
        }
    }
}
