//! Canned node responses shared by the unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};

use crate::rpc::{NodeRpc, RpcError, decode_result};
use crate::types::{NetInfo, NodeStatus};

pub(crate) const STATUS_BODY: &str = r#"{"result":{"sync_info":{"latest_block_height":"12345","latest_block_time":"2024-01-01T00:00:00Z"}}}"#;
pub(crate) const PEERS_BODY: &str = r#"{"result":{"n_peers":"7"}}"#;

/// Node with fixed response bodies. A `None` body behaves like a refused
/// connection.
pub(crate) struct FakeRpc {
    pub status: Option<&'static str>,
    pub net_info: Option<&'static str>,
    pub net_info_calls: AtomicUsize,
}

impl FakeRpc {
    pub fn new(status: Option<&'static str>, net_info: Option<&'static str>) -> Self {
        Self {
            status,
            net_info,
            net_info_calls: AtomicUsize::new(0),
        }
    }
}

fn refused(path: &str) -> RpcError {
    RpcError::Transport {
        url: format!("http://127.0.0.1:26657{path}"),
        reason: "connection refused".to_string(),
    }
}

impl NodeRpc for FakeRpc {
    fn status(&self) -> Result<NodeStatus, RpcError> {
        let body = self.status.ok_or_else(|| refused("/status"))?;
        decode_result(body.as_bytes())
    }

    fn net_info(&self) -> Result<NetInfo, RpcError> {
        self.net_info_calls.fetch_add(1, Ordering::SeqCst);
        let body = self.net_info.ok_or_else(|| refused("/net_info"))?;
        decode_result(body.as_bytes())
    }
}

pub(crate) fn at(ts: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(ts)
        .expect("valid timestamp")
        .with_timezone(&Utc)
}
