//! Schema of the `/status` result.

use serde::Deserialize;

/// Result object of `GET /status`.
///
/// Only `sync_info` feeds metrics; node and validator info are parsed so
/// the full response is available to log lines and future gauges.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct NodeStatus {
    pub node_info: NodeInfo,
    pub sync_info: SyncInfo,
    pub validator_info: ValidatorInfo,
}

/// Node identity and version information.
///
/// Shared by `/status` and each peer entry of `/net_info`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct NodeInfo {
    pub protocol_version: ProtocolVersion,
    pub id: String,
    pub listen_addr: String,
    pub network: String,
    pub version: String,
    pub channels: String,
    pub moniker: String,
    pub other: Other,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProtocolVersion {
    pub p2p: String,
    pub block: String,
    pub app: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Other {
    pub tx_index: String,
    pub rpc_address: String,
}

/// Sync progress of the node.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SyncInfo {
    pub latest_block_hash: String,
    pub latest_app_hash: String,
    /// Decimal string, e.g. `"12345"`.
    pub latest_block_height: String,
    /// RFC3339 timestamp with up to nanosecond precision.
    pub latest_block_time: String,
    // Tendermint 0.33 and older spell these `earlest_*`.
    #[serde(alias = "earlest_block_hash")]
    pub earliest_block_hash: String,
    #[serde(alias = "earlest_app_hash")]
    pub earliest_app_hash: String,
    #[serde(alias = "earlest_block_height")]
    pub earliest_block_height: String,
    #[serde(alias = "earlest_block_time")]
    pub earliest_block_time: String,
    pub catching_up: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ValidatorInfo {
    pub address: String,
    pub pub_key: PubKey,
    pub voting_power: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PubKey {
    #[serde(rename = "type")]
    pub key_type: String,
    pub value: String,
}
