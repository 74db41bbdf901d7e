//! Prometheus-backed metric emitter and registry.
//!
//! [`ExporterMetrics`] bundles the metric descriptors and is built once at
//! startup. [`NodeExporter`] is a custom [`Collector`]: every gather runs a
//! fresh scrape and builds brand-new gauges from it, so nothing from an
//! earlier cycle can leak into the current one. [`MetricsRegistry`] wraps
//! the Prometheus registry and renders the text exposition format.

use std::collections::HashMap;

use prometheus::{
    self, Encoder, Gauge, GaugeVec, Opts, Registry, TextEncoder,
    core::{Collector, Desc},
    proto::MetricFamily,
};

use crate::collector::{NodeCollector, Reading};
use crate::rpc::NodeRpc;

/// Label carrying the monitored node's name on per-node gauges.
pub const NODE_LABEL: &str = "node";

/// Descriptor of one gauge the exporter may emit.
#[derive(Clone, Debug)]
pub struct GaugeDesc {
    opts: Opts,
    labeled: bool,
    desc: Desc,
}

impl GaugeDesc {
    fn new(
        namespace: &str,
        name: &str,
        help: &str,
        labeled: bool,
    ) -> Result<Self, prometheus::Error> {
        let opts = Opts::new(name, help).namespace(namespace);
        let variable_labels = if labeled {
            vec![NODE_LABEL.to_string()]
        } else {
            Vec::new()
        };
        let desc = Desc::new(
            opts.fq_name(),
            opts.help.clone(),
            variable_labels,
            HashMap::new(),
        )?;

        Ok(Self {
            opts,
            labeled,
            desc,
        })
    }

    /// Fully-qualified metric name, e.g. `cosmos_up`.
    pub fn fq_name(&self) -> &str {
        &self.desc.fq_name
    }

    /// Builds a single-sample family holding `value`.
    fn family(&self, node: &str, value: f64) -> Result<Vec<MetricFamily>, prometheus::Error> {
        if self.labeled {
            let gauges = GaugeVec::new(self.opts.clone(), &[NODE_LABEL])?;
            gauges.with_label_values(&[node]).set(value);
            Ok(gauges.collect())
        } else {
            let gauge = Gauge::with_opts(self.opts.clone())?;
            gauge.set(value);
            Ok(gauge.collect())
        }
    }
}

/// The exporter's metric descriptors.
///
/// Constructed once and handed to [`NodeExporter`]; separate instances are
/// fully independent, which keeps tests isolated from each other.
#[derive(Clone, Debug)]
pub struct ExporterMetrics {
    /// `{namespace}_up`: 1 if the last status query succeeded. Unlabeled.
    pub up: GaugeDesc,
    /// `{namespace}_latest_block_height{node}`.
    pub latest_block_height: GaugeDesc,
    /// `{namespace}_time_diff{node}`: local clock minus latest block time,
    /// in seconds.
    pub time_diff: GaugeDesc,
    /// `{namespace}_peers_num{node}`.
    pub peers_num: GaugeDesc,
}

impl ExporterMetrics {
    /// Builds the descriptors under `namespace`.
    ///
    /// Fails if the namespace yields invalid metric names.
    pub fn new(namespace: &str) -> Result<Self, prometheus::Error> {
        Ok(Self {
            up: GaugeDesc::new(namespace, "up", "Was the last query of the node successful.", false)?,
            latest_block_height: GaugeDesc::new(
                namespace,
                "latest_block_height",
                "Latest block height",
                true,
            )?,
            time_diff: GaugeDesc::new(namespace, "time_diff", "Time difference", true)?,
            peers_num: GaugeDesc::new(namespace, "peers_num", "Peers number", true)?,
        })
    }

    fn descs(&self) -> Vec<&Desc> {
        vec![
            &self.up.desc,
            &self.latest_block_height.desc,
            &self.time_diff.desc,
            &self.peers_num.desc,
        ]
    }
}

/// Packages a reading as gauge families.
///
/// `up` is always present; every other gauge only when the reading carries
/// its value. A gauge that cannot be built is logged and skipped, never
/// failing the whole exposition.
pub fn emit(metrics: &ExporterMetrics, node: &str, reading: &Reading) -> Vec<MetricFamily> {
    let up = if reading.up { 1.0 } else { 0.0 };
    let samples = [
        (&metrics.up, Some(up)),
        (&metrics.latest_block_height, reading.latest_block_height),
        (&metrics.time_diff, reading.time_diff),
        (&metrics.peers_num, reading.peers_num),
    ];

    let mut families = Vec::with_capacity(samples.len());
    for (gauge, value) in samples {
        let Some(value) = value else { continue };
        match gauge.family(node, value) {
            Ok(family) => families.extend(family),
            Err(e) => {
                tracing::error!(metric = gauge.fq_name(), error = %e, "failed to build gauge");
            }
        }
    }
    families
}

/// Prometheus collector that scrapes the node on every gather.
pub struct NodeExporter<R> {
    collector: NodeCollector<R>,
    metrics: ExporterMetrics,
    node_label: String,
}

impl<R> NodeExporter<R> {
    pub fn new(
        collector: NodeCollector<R>,
        metrics: ExporterMetrics,
        node_label: impl Into<String>,
    ) -> Self {
        Self {
            collector,
            metrics,
            node_label: node_label.into(),
        }
    }
}

impl<R> Collector for NodeExporter<R>
where
    R: NodeRpc + 'static,
{
    fn desc(&self) -> Vec<&Desc> {
        self.metrics.descs()
    }

    fn collect(&self) -> Vec<MetricFamily> {
        let reading = self.collector.pull();
        emit(&self.metrics, &self.node_label, &reading)
    }
}

/// Wrapper around a Prometheus registry.
///
/// This is the handle the HTTP layer holds. It is cheap to clone and can be
/// shared across threads; gathering runs every registered collector, which
/// for [`NodeExporter`] means blocking network I/O.
#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Registry,
}

impl MetricsRegistry {
    /// Creates a registry with nothing registered.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Registers a collector, e.g. a [`NodeExporter`].
    pub fn register<C>(&self, collector: C) -> Result<(), prometheus::Error>
    where
        C: Collector + 'static,
    {
        self.registry.register(Box::new(collector))
    }

    /// Gathers all collectors and encodes them in the Prometheus text format.
    pub fn gather_text(&self) -> String {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        let encoder = TextEncoder::new();
        if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
            tracing::error!(error = %e, "failed to encode Prometheus metrics");
            return String::new();
        }
        String::from_utf8(buffer).unwrap_or_default()
    }
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}
