//! Schema of the `/net_info` result.

use serde::Deserialize;

use super::status::NodeInfo;

/// Result object of `GET /net_info`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct NetInfo {
    pub listening: bool,
    pub listeners: Vec<String>,
    /// Decimal string with the number of connected peers.
    pub n_peers: String,
    pub peers: Vec<Peer>,
}

/// A single peer connection.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Peer {
    pub node_info: NodeInfo,
    pub is_outbound: bool,
    pub connection_status: ConnectionStatus,
    pub remote_ip: String,
}

/// Connection statistics as reported by the p2p layer.
///
/// CometBFT serializes these with Go field names, hence the PascalCase
/// renames.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ConnectionStatus {
    pub duration: String,
    pub send_monitor: FlowMonitor,
    pub recv_monitor: FlowMonitor,
    pub channels: Vec<ChannelStatus>,
}

/// Transfer-rate monitor for one direction of a connection.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FlowMonitor {
    pub start: String,
    pub bytes: String,
    pub samples: String,
    pub inst_rate: String,
    pub cur_rate: String,
    pub avg_rate: String,
    pub peak_rate: String,
    pub bytes_rem: String,
    pub duration: String,
    pub idle: String,
    pub time_rem: String,
    pub progress: i64,
    pub active: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChannelStatus {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "SendQueueCapacity")]
    pub send_queue_capacity: String,
    #[serde(rename = "SendQueueSize")]
    pub send_queue_size: String,
    #[serde(rename = "Priority")]
    pub priority: String,
    #[serde(rename = "RecentlySent")]
    pub recently_sent: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn net_info_with_peers_can_be_deserialized() {
        let json = r#"
        {
          "listening": true,
          "listeners": ["Listener(@)"],
          "n_peers": "1",
          "peers": [
            {
              "node_info": { "id": "abcd", "moniker": "sentry-0", "network": "cosmoshub-4" },
              "is_outbound": true,
              "connection_status": {
                "Duration": "3600000000000",
                "SendMonitor": {
                  "Start": "2024-03-05T09:00:00Z",
                  "Bytes": "1024",
                  "Progress": 0,
                  "Active": true
                },
                "RecvMonitor": { "Bytes": "2048", "Active": true },
                "Channels": [
                  { "ID": 32, "SendQueueCapacity": "1", "SendQueueSize": "0", "Priority": "5", "RecentlySent": "0" }
                ]
              },
              "remote_ip": "10.0.0.7"
            }
          ]
        }
        "#;

        let info: NetInfo = serde_json::from_str(json).expect("NetInfo should parse");
        assert!(info.listening);
        assert_eq!(info.n_peers, "1");
        assert_eq!(info.peers.len(), 1);

        let peer = &info.peers[0];
        assert_eq!(peer.node_info.moniker, "sentry-0");
        assert_eq!(peer.connection_status.send_monitor.bytes, "1024");
        assert!(peer.connection_status.recv_monitor.active);
        assert_eq!(peer.connection_status.channels[0].id, 32);
        assert_eq!(peer.remote_ip, "10.0.0.7");
    }
}
