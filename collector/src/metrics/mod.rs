//! Metric emission for the exporter.
//!
//! This module turns a collector [`crate::collector::Reading`] into
//! Prometheus gauges and owns the registry that renders them in the text
//! exposition format.
//!
//! Typical usage in a binary:
//!
//! ```ignore
//! use std::time::Duration;
//! use cosmos_collector::{ExporterMetrics, HttpNodeRpc, MetricsRegistry, NodeCollector, NodeExporter};
//!
//! let metrics = ExporterMetrics::new("cosmos")?;
//! let rpc = HttpNodeRpc::new("http://127.0.0.1:26657", Duration::from_secs(5))?;
//! let exporter = NodeExporter::new(NodeCollector::new(rpc, true), metrics, "localhost");
//!
//! let registry = MetricsRegistry::new();
//! registry.register(exporter)?;
//!
//! // On every scrape (from a blocking context):
//! let body = registry.gather_text();
//! ```

pub mod prometheus;

pub use self::prometheus::{ExporterMetrics, GaugeDesc, MetricsRegistry, NODE_LABEL, NodeExporter, emit};
