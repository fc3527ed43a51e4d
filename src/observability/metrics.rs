//! Node telemetry metrics.
//!
//! # Metrics
//! - `relay_node_active_connections` (gauge): active connections per node
//! - `relay_node_latency_seconds` (gauge): last measured latency per node
//! - `relay_node_failures` (gauge): current failure streak per node

use crate::chain::NodeSnapshot;

pub fn record_node(snapshot: &NodeSnapshot) {
    let node = snapshot.name.clone();
    metrics::gauge!("relay_node_active_connections", "node" => node.clone())
        .set(snapshot.active_connections as f64);
    metrics::gauge!("relay_node_latency_seconds", "node" => node.clone())
        .set(snapshot.latency_ms / 1000.0);
    metrics::gauge!("relay_node_failures", "node" => node).set(snapshot.failures as f64);
}
