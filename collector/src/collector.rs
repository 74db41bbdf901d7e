//! The scrape-time collector.
//!
//! [`NodeCollector::pull`] performs one scrape cycle: it queries the node's
//! status and peer endpoints and derives a [`Reading`]. The collector keeps
//! no state between cycles, so concurrent pulls are fully independent.
//!
//! Partial failure policy:
//!
//! - status query fails: the node is reported down and nothing else is
//!   derived,
//! - an individual field cannot be parsed: only that value is omitted,
//! - peer query fails: only the peer count is omitted.

use chrono::{DateTime, Utc};

use crate::rpc::NodeRpc;

/// Values derived from one scrape cycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Reading {
    /// Whether the status query succeeded.
    pub up: bool,
    /// `sync_info.latest_block_height`.
    pub latest_block_height: Option<f64>,
    /// Seconds between the local clock and `sync_info.latest_block_time`.
    pub time_diff: Option<f64>,
    /// `n_peers` from `/net_info`.
    pub peers_num: Option<f64>,
}

impl Reading {
    /// Reading for a cycle whose status query failed.
    pub fn down() -> Self {
        Self::default()
    }
}

/// Collector for a single node.
pub struct NodeCollector<R> {
    rpc: R,
    scrape_peers: bool,
}

impl<R> NodeCollector<R> {
    /// Constructs a collector over `rpc`. With `scrape_peers == false` the
    /// `/net_info` endpoint is never queried.
    pub fn new(rpc: R, scrape_peers: bool) -> Self {
        Self { rpc, scrape_peers }
    }

    pub fn rpc(&self) -> &R {
        &self.rpc
    }
}

impl<R: NodeRpc> NodeCollector<R> {
    /// Runs one scrape cycle against the current wall-clock time.
    pub fn pull(&self) -> Reading {
        self.pull_at(Utc::now())
    }

    /// Runs one scrape cycle, computing the time difference against `now`.
    pub fn pull_at(&self, now: DateTime<Utc>) -> Reading {
        let status = match self.rpc.status() {
            Ok(status) => status,
            Err(e) => {
                tracing::warn!(error = %e, "status query failed, reporting node as down");
                return Reading::down();
            }
        };

        let sync = &status.sync_info;

        let latest_block_height = parse_decimal(&sync.latest_block_height);
        if latest_block_height.is_none() {
            tracing::warn!(
                value = %sync.latest_block_height,
                "unparsable latest_block_height, omitting gauge"
            );
        }

        let time_diff = match block_time_diff(now, &sync.latest_block_time) {
            Ok(diff) => Some(diff),
            Err(e) => {
                tracing::warn!(
                    value = %sync.latest_block_time,
                    error = %e,
                    "unparsable latest_block_time, omitting gauge"
                );
                None
            }
        };

        let peers_num = if self.scrape_peers {
            self.pull_peers()
        } else {
            None
        };

        tracing::info!(
            moniker = %status.node_info.moniker,
            height = ?latest_block_height,
            time_diff = ?time_diff,
            peers = ?peers_num,
            "endpoints scraped"
        );

        Reading {
            up: true,
            latest_block_height,
            time_diff,
            peers_num,
        }
    }

    fn pull_peers(&self) -> Option<f64> {
        let info = match self.rpc.net_info() {
            Ok(info) => info,
            Err(e) => {
                tracing::warn!(error = %e, "net_info query failed, omitting peer count");
                return None;
            }
        };

        let peers = parse_decimal(&info.n_peers);
        if peers.is_none() {
            tracing::warn!(value = %info.n_peers, "unparsable n_peers, omitting gauge");
        }
        peers
    }
}

/// Parses a decimal string as sent by the node (`"12345"`).
///
/// Returns `None` for anything that is not a finite number.
pub fn parse_decimal(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Whole seconds between `now` and the RFC3339 timestamp `block_time`.
///
/// Both instants are truncated to their Unix second before subtracting, so
/// sub-second parts never produce fractional results.
pub fn block_time_diff(
    now: DateTime<Utc>,
    block_time: &str,
) -> Result<f64, chrono::ParseError> {
    let block_time = DateTime::parse_from_rfc3339(block_time.trim())?;
    Ok((now.timestamp() - block_time.timestamp()) as f64)
}
