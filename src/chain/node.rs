//! Node abstraction.
//!
//! # Responsibilities
//! - Represent a single hop in a relay chain (name + dial address)
//! - Own the frozen configuration snapshot built from node options
//! - Track runtime telemetry (active connections, latency, failures)
//!   without locks
//!
//! # Design Decisions
//! - Options and runtime state each live behind an `Arc`; copies of a node
//!   share both, so telemetry written through any handle is visible to all
//! - The connection counter is signed and never clamped; an unbalanced
//!   decrement is logged, not corrected

use std::fmt;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::chain::options::{NodeBuilder, NodeOption, NodeOptions};
use crate::metadata::{Metadata, Metadatable};
use crate::selector::{FailMarker, Markable, Marker};

/// Mutable per-node state shared by a node and all of its copies.
#[derive(Debug)]
struct RuntimeState {
    marker: Arc<dyn Marker>,
    active_conns: AtomicI64,
    /// Last measured latency in nanoseconds.
    latency: AtomicU64,
}

impl RuntimeState {
    fn new() -> Self {
        Self {
            marker: Arc::new(FailMarker::new()),
            active_conns: AtomicI64::new(0),
            latency: AtomicU64::new(0),
        }
    }

    fn dec(&self, node: &str) {
        let prev = self.active_conns.fetch_sub(1, Ordering::Relaxed);
        if prev <= 0 {
            tracing::warn!(
                node = %node,
                active_connections = prev - 1,
                "Unbalanced active connection decrement"
            );
        }
    }
}

/// A single hop in a relay chain.
#[derive(Clone)]
pub struct Node {
    name: String,
    addr: String,
    options: Arc<NodeOptions>,
    runtime: Arc<RuntimeState>,
}

impl Node {
    /// Create a node, applying `opts` in order. `None` entries are skipped.
    pub fn new<I>(name: impl Into<String>, addr: impl Into<String>, opts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<NodeOption>>,
    {
        let name = name.into();
        let addr = addr.into();
        let options = NodeOptions::from_options(opts);

        tracing::debug!(
            node = %name,
            addr = %addr,
            network = %options.network,
            priority = options.priority,
            "Node created"
        );

        Self {
            name,
            addr,
            options: Arc::new(options),
            runtime: Arc::new(RuntimeState::new()),
        }
    }

    /// Start a chained-setter builder.
    pub fn builder(name: impl Into<String>, addr: impl Into<String>) -> NodeBuilder {
        NodeBuilder::new(name, addr)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dial target of this node.
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Read-only view of the frozen configuration.
    pub fn options(&self) -> &NodeOptions {
        &self.options
    }

    /// A new handle with the same identity, options and runtime state.
    ///
    /// Counters, latency and the failure marker are shared, not reset.
    pub fn copy(&self) -> Node {
        self.clone()
    }

    /// Replace the dial address, keeping options and runtime state shared.
    pub fn with_addr(mut self, addr: impl Into<String>) -> Self {
        self.addr = addr.into();
        self
    }

    /// Whether `other` shares this node's runtime state.
    pub fn shares_state_with(&self, other: &Node) -> bool {
        Arc::ptr_eq(&self.runtime, &other.runtime)
    }

    pub fn active_conns(&self) -> i64 {
        self.runtime.active_conns.load(Ordering::Relaxed)
    }

    pub fn inc_active_conns(&self) {
        self.runtime.active_conns.fetch_add(1, Ordering::Relaxed);
    }

    /// Callers must pair each decrement with a prior increment.
    pub fn dec_active_conns(&self) {
        self.runtime.dec(&self.name);
    }

    /// Count a connection for as long as the returned guard is alive.
    pub fn track(&self) -> ConnectionGuard {
        self.inc_active_conns();
        ConnectionGuard {
            node: self.name.clone(),
            runtime: self.runtime.clone(),
        }
    }

    /// Most recently measured latency.
    pub fn latency(&self) -> Duration {
        Duration::from_nanos(self.runtime.latency.load(Ordering::Relaxed))
    }

    /// Store a measured latency; the last writer wins.
    pub fn set_latency(&self, d: Duration) {
        let nanos = d.as_nanos().min(u64::MAX as u128) as u64;
        self.runtime.latency.store(nanos, Ordering::Relaxed);
    }

    /// Point-in-time view of identity, key options and telemetry.
    pub fn snapshot(&self) -> NodeSnapshot {
        let marker = &self.runtime.marker;
        NodeSnapshot {
            name: self.name.clone(),
            addr: self.addr.clone(),
            network: self.options.network.clone(),
            priority: self.options.priority,
            active_connections: self.active_conns(),
            latency_ms: self.latency().as_secs_f64() * 1000.0,
            failures: marker.count(),
            last_failure_unix_ms: marker.time().and_then(unix_millis),
        }
    }
}

/// Milliseconds since the epoch, saturating at `u64::MAX`.
fn unix_millis(t: SystemTime) -> Option<u64> {
    t.duration_since(UNIX_EPOCH)
        .ok()
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

impl Markable for Node {
    fn marker(&self) -> &Arc<dyn Marker> {
        &self.runtime.marker
    }
}

impl Metadatable for Node {
    fn metadata(&self) -> Option<&dyn Metadata> {
        self.options.metadata.as_deref()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("addr", &self.addr)
            .field("network", &self.options.network)
            .field("priority", &self.options.priority)
            .field("active_conns", &self.active_conns())
            .field("latency", &self.latency())
            .field("failures", &self.runtime.marker.count())
            .finish()
    }
}

/// RAII guard returned by [`Node::track`].
///
/// Decrements the node's active connection count exactly once on drop.
#[derive(Debug)]
pub struct ConnectionGuard {
    node: String,
    runtime: Arc<RuntimeState>,
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.runtime.dec(&self.node);
    }
}

/// Serializable telemetry view of a node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSnapshot {
    pub name: String,
    pub addr: String,
    pub network: String,
    pub priority: i32,
    pub active_connections: i64,
    pub latency_ms: f64,
    pub failures: u64,
    pub last_failure_unix_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::settings::TlsNodeSettings;
    use crate::metadata::MapMetadata;
    use serde_json::json;

    fn tls(server_name: &str, min_version: &str) -> TlsNodeSettings {
        let mut tls = TlsNodeSettings {
            server_name: server_name.into(),
            ..Default::default()
        };
        tls.options.min_version = min_version.into();
        tls
    }

    #[test]
    fn priority_and_tls_options() {
        let node = Node::new(
            "n1",
            "10.0.0.1:1080",
            [NodeOption::priority(5), NodeOption::tls(tls("example.com", "1.2"))],
        );

        assert_eq!(node.name(), "n1");
        assert_eq!(node.addr(), "10.0.0.1:1080");
        assert_eq!(node.options().priority, 5);
        let tls = node.options().tls.as_ref().unwrap();
        assert_eq!(tls.server_name, "example.com");
        assert_eq!(tls.options.min_version, "1.2");
    }

    #[test]
    fn nil_option_is_noop() {
        let with_nil = Node::new("n1", "a:1", [None, Some(NodeOption::priority(2)), None]);
        let without = Node::new("n1", "a:1", [NodeOption::priority(2)]);
        assert_eq!(with_nil.options().priority, without.options().priority);
        assert_eq!(with_nil.options().network, without.options().network);
        assert!(with_nil.options().tls.is_none());

        let only_nil = Node::new("n1", "a:1", [None::<NodeOption>]);
        assert_eq!(only_nil.options().priority, 0);
    }

    #[test]
    fn fresh_node_telemetry() {
        let node = Node::new("n1", "a:1", Vec::<NodeOption>::new());
        assert_eq!(node.active_conns(), 0);
        assert_eq!(node.latency(), Duration::ZERO);
        assert_eq!(node.marker().count(), 0);
        assert!(node.metadata().is_none());
    }

    #[test]
    fn three_increments_one_decrement() {
        let node = Node::new("n1", "a:1", Vec::<NodeOption>::new());
        node.inc_active_conns();
        node.inc_active_conns();
        node.inc_active_conns();
        node.dec_active_conns();
        assert_eq!(node.active_conns(), 2);
    }

    #[test]
    fn unbalanced_decrement_goes_negative() {
        let node = Node::new("n1", "a:1", Vec::<NodeOption>::new());
        node.dec_active_conns();
        assert_eq!(node.active_conns(), -1);
        node.inc_active_conns();
        assert_eq!(node.active_conns(), 0);
    }

    #[test]
    fn latency_last_write_wins() {
        let node = Node::new("n1", "a:1", Vec::<NodeOption>::new());
        node.set_latency(Duration::from_millis(50));
        node.set_latency(Duration::from_millis(30));
        assert_eq!(node.latency(), Duration::from_millis(30));

        node.set_latency(Duration::ZERO);
        assert_eq!(node.latency(), Duration::ZERO);
    }

    #[test]
    fn huge_latency_saturates() {
        let node = Node::new("n1", "a:1", Vec::<NodeOption>::new());
        node.set_latency(Duration::MAX);
        assert_eq!(node.latency(), Duration::from_nanos(u64::MAX));
    }

    #[test]
    fn copy_shares_runtime_state() {
        let node = Node::new("n1", "10.0.0.1:1080", [NodeOption::priority(7)]);
        node.inc_active_conns();
        node.set_latency(Duration::from_millis(12));

        let copy = node.copy();
        assert_eq!(copy.name(), node.name());
        assert_eq!(copy.addr(), node.addr());
        assert_eq!(copy.options().priority, 7);
        assert_eq!(copy.active_conns(), 1);
        assert_eq!(copy.latency(), Duration::from_millis(12));
        assert!(copy.shares_state_with(&node));
        assert!(Arc::ptr_eq(copy.marker(), node.marker()));

        copy.marker().mark();
        assert_eq!(node.marker().count(), 1);
        node.marker().reset();
        assert_eq!(copy.marker().count(), 0);

        copy.inc_active_conns();
        assert_eq!(node.active_conns(), 2);
        node.set_latency(Duration::from_millis(3));
        assert_eq!(copy.latency(), Duration::from_millis(3));
    }

    #[test]
    fn with_addr_keeps_shared_state() {
        let node = Node::new("n1", "relay.example:443", [NodeOption::network("tcp")]);
        let resolved = node.copy().with_addr("192.0.2.10:443");

        assert_eq!(resolved.name(), "n1");
        assert_eq!(resolved.addr(), "192.0.2.10:443");
        assert_eq!(node.addr(), "relay.example:443");
        assert_eq!(resolved.options().network, "tcp");
        assert!(resolved.shares_state_with(&node));
    }

    #[test]
    fn separate_nodes_do_not_share_state() {
        let a = Node::new("a", "a:1", Vec::<NodeOption>::new());
        let b = Node::new("a", "a:1", Vec::<NodeOption>::new());
        a.inc_active_conns();
        assert_eq!(b.active_conns(), 0);
        assert!(!a.shares_state_with(&b));
    }

    #[test]
    fn guard_pairs_increment_and_decrement() {
        let node = Node::new("n1", "a:1", Vec::<NodeOption>::new());

        let g1 = node.track();
        assert_eq!(node.active_conns(), 1);
        let g2 = node.copy().track();
        assert_eq!(node.active_conns(), 2);

        drop(g1);
        assert_eq!(node.active_conns(), 1);
        drop(g2);
        assert_eq!(node.active_conns(), 0);
    }

    #[test]
    fn guard_outlives_node_handle() {
        let node = Node::new("n1", "a:1", Vec::<NodeOption>::new());
        let copy = node.copy();
        let guard = node.track();
        drop(node);
        assert_eq!(copy.active_conns(), 1);
        drop(guard);
        assert_eq!(copy.active_conns(), 0);
    }

    #[test]
    fn metadata_accessor() {
        let md: MapMetadata = [("ttl", json!("10s"))].into_iter().collect();
        let node = Node::new("n1", "a:1", [NodeOption::metadata(Arc::new(md))]);
        let md = node.metadata().unwrap();
        assert_eq!(md.get("TTL"), Some(&json!("10s")));
    }

    #[test]
    fn snapshot_reflects_telemetry() {
        let node = Node::new(
            "n1",
            "10.0.0.1:1080",
            [NodeOption::network("tcp"), NodeOption::priority(3)],
        );
        node.inc_active_conns();
        node.set_latency(Duration::from_millis(25));
        node.marker().mark();

        let snap = node.snapshot();
        assert_eq!(snap.name, "n1");
        assert_eq!(snap.addr, "10.0.0.1:1080");
        assert_eq!(snap.network, "tcp");
        assert_eq!(snap.priority, 3);
        assert_eq!(snap.active_connections, 1);
        assert!((snap.latency_ms - 25.0).abs() < 1e-9);
        assert_eq!(snap.failures, 1);
        assert!(snap.last_failure_unix_ms.is_some());

        let value = serde_json::to_value(&snap).unwrap();
        assert_eq!(value["name"], "n1");
        assert_eq!(value["active_connections"], 1);
    }

    #[test]
    fn failure_time_millis_saturate() {
        assert_eq!(unix_millis(UNIX_EPOCH + Duration::from_millis(1500)), Some(1500));
        assert_eq!(unix_millis(UNIX_EPOCH - Duration::from_secs(1)), None);

        // Far enough out that the millisecond count no longer fits in a u64.
        if let Some(far) = UNIX_EPOCH.checked_add(Duration::from_secs(1 << 60)) {
            assert_eq!(unix_millis(far), Some(u64::MAX));
        }
    }

    #[test]
    fn node_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Node>();
        assert_send_sync::<ConnectionGuard>();
    }
}
