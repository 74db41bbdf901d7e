//! Access to the monitored node's RPC endpoints.
//!
//! [`NodeRpc`] abstracts over how `/status` and `/net_info` are obtained so
//! the collector can be exercised against canned responses. The production
//! implementation is [`HttpNodeRpc`].

pub mod http;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::types::{NetInfo, NodeStatus, RpcResponse};

pub use http::HttpNodeRpc;

/// Errors that can occur while querying the node.
///
/// Every variant means "no usable answer for this cycle"; the collector
/// treats them alike and the distinction only shows up in logs.
#[derive(Clone, Debug, Error)]
pub enum RpcError {
    /// The request did not complete within the configured timeout.
    #[error("request to {url} timed out")]
    Timeout { url: String },
    /// Connection-level failure (refused, reset, DNS, TLS, ...).
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
    /// The node answered with a non-success HTTP status.
    #[error("{url} returned HTTP status {status}")]
    Status { url: String, status: u16 },
    /// The body was not a JSON-RPC response of the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// The node answered with a JSON-RPC error, or without a result.
    #[error("node returned an error: {0}")]
    Node(String),
}

/// Source of node status and peer information.
pub trait NodeRpc: Send + Sync {
    /// Fetches the result of `GET /status`.
    fn status(&self) -> Result<NodeStatus, RpcError>;

    /// Fetches the result of `GET /net_info`.
    fn net_info(&self) -> Result<NetInfo, RpcError>;
}

/// Decodes a JSON-RPC response body and unwraps its `result`.
pub fn decode_result<T: DeserializeOwned>(body: &[u8]) -> Result<T, RpcError> {
    let resp: RpcResponse<T> =
        serde_json::from_slice(body).map_err(|e| RpcError::Decode(e.to_string()))?;

    if let Some(err) = resp.error {
        return Err(RpcError::Node(err.to_string()));
    }

    resp.result
        .ok_or_else(|| RpcError::Node("response carries no result".to_string()))
}
