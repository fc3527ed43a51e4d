//! Node options and the option builder.
//!
//! # Responsibilities
//! - Hold the frozen configuration snapshot of a node (`NodeOptions`)
//! - Provide one composable mutator per configurable field (`NodeOption`)
//! - Offer a chained-setter form of the same options (`NodeBuilder`)
//!
//! Options are applied once, in order, over `NodeOptions::default()`.
//! A later option targeting the same field replaces the earlier value.

use std::fmt;
use std::sync::Arc;

use crate::capability::{Bypass, HostMapper, Matcher, Resolver, Transporter};
use crate::chain::node::Node;
use crate::chain::settings::{HttpNodeSettings, NodeFilterSettings, TlsNodeSettings};
use crate::metadata::Metadata;

/// Frozen configuration of a node.
///
/// Absent optional settings mean "not configured"; no field is validated here.
#[derive(Debug, Clone, Default)]
pub struct NodeOptions {
    /// Network kind label, e.g. `tcp` or `udp`.
    pub network: String,
    pub transport: Option<Arc<dyn Transporter>>,
    pub bypass: Option<Arc<dyn Bypass>>,
    pub resolver: Option<Arc<dyn Resolver>>,
    pub host_mapper: Option<Arc<dyn HostMapper>>,
    pub filter: Option<NodeFilterSettings>,
    pub http: Option<HttpNodeSettings>,
    pub tls: Option<TlsNodeSettings>,
    pub metadata: Option<Arc<dyn Metadata>>,
    pub matcher: Option<Arc<dyn Matcher>>,
    /// Ordering/weighting hint for the selector.
    pub priority: i32,
}

type ApplyFn = Box<dyn FnOnce(&mut NodeOptions) + Send>;

/// A single configuration mutator applied at node construction.
pub struct NodeOption(ApplyFn);

impl NodeOption {
    /// Wrap an arbitrary mutation.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(&mut NodeOptions) + Send + 'static,
    {
        Self(Box::new(f))
    }

    pub(crate) fn apply(self, options: &mut NodeOptions) {
        (self.0)(options)
    }

    pub fn transport(transport: Arc<dyn Transporter>) -> Self {
        Self::new(move |o| o.transport = Some(transport))
    }

    pub fn bypass(bypass: Arc<dyn Bypass>) -> Self {
        Self::new(move |o| o.bypass = Some(bypass))
    }

    pub fn resolver(resolver: Arc<dyn Resolver>) -> Self {
        Self::new(move |o| o.resolver = Some(resolver))
    }

    pub fn host_mapper(mapper: Arc<dyn HostMapper>) -> Self {
        Self::new(move |o| o.host_mapper = Some(mapper))
    }

    pub fn network(network: impl Into<String>) -> Self {
        let network: String = network.into();
        Self::new(move |o| o.network = network)
    }

    /// Passing `None` clears a previously set filter.
    pub fn filter(filter: impl Into<Option<NodeFilterSettings>>) -> Self {
        let filter: Option<NodeFilterSettings> = filter.into();
        Self::new(move |o| o.filter = filter)
    }

    pub fn http(http: impl Into<Option<HttpNodeSettings>>) -> Self {
        let http: Option<HttpNodeSettings> = http.into();
        Self::new(move |o| o.http = http)
    }

    pub fn tls(tls: impl Into<Option<TlsNodeSettings>>) -> Self {
        let tls: Option<TlsNodeSettings> = tls.into();
        Self::new(move |o| o.tls = tls)
    }

    pub fn metadata(metadata: Arc<dyn Metadata>) -> Self {
        Self::new(move |o| o.metadata = Some(metadata))
    }

    pub fn matcher(matcher: Arc<dyn Matcher>) -> Self {
        Self::new(move |o| o.matcher = Some(matcher))
    }

    pub fn priority(priority: i32) -> Self {
        Self::new(move |o| o.priority = priority)
    }
}

impl fmt::Debug for NodeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NodeOption(..)")
    }
}

impl NodeOptions {
    /// Apply options in order, skipping absent ones.
    pub fn from_options<I>(opts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<NodeOption>>,
    {
        let mut options = NodeOptions::default();
        for opt in opts {
            let opt: Option<NodeOption> = opt.into();
            if let Some(opt) = opt {
                opt.apply(&mut options);
            }
        }
        options
    }
}

/// Chained-setter form of the option builder.
///
/// ```
/// use relay_node::chain::{Node, TlsNodeSettings};
///
/// let node = Node::builder("n1", "10.0.0.1:1080")
///     .priority(5)
///     .tls(TlsNodeSettings { server_name: "example.com".into(), ..Default::default() })
///     .build();
/// assert_eq!(node.options().priority, 5);
/// ```
#[derive(Debug)]
pub struct NodeBuilder {
    name: String,
    addr: String,
    opts: Vec<NodeOption>,
}

impl NodeBuilder {
    pub fn new(name: impl Into<String>, addr: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            addr: addr.into(),
            opts: Vec::new(),
        }
    }

    /// Append an option; `None` is ignored.
    pub fn option(mut self, opt: impl Into<Option<NodeOption>>) -> Self {
        let opt: Option<NodeOption> = opt.into();
        self.opts.extend(opt);
        self
    }

    pub fn transport(self, transport: Arc<dyn Transporter>) -> Self {
        self.option(NodeOption::transport(transport))
    }

    pub fn bypass(self, bypass: Arc<dyn Bypass>) -> Self {
        self.option(NodeOption::bypass(bypass))
    }

    pub fn resolver(self, resolver: Arc<dyn Resolver>) -> Self {
        self.option(NodeOption::resolver(resolver))
    }

    pub fn host_mapper(self, mapper: Arc<dyn HostMapper>) -> Self {
        self.option(NodeOption::host_mapper(mapper))
    }

    pub fn network(self, network: impl Into<String>) -> Self {
        self.option(NodeOption::network(network))
    }

    pub fn filter(self, filter: impl Into<Option<NodeFilterSettings>>) -> Self {
        self.option(NodeOption::filter(filter))
    }

    pub fn http(self, http: impl Into<Option<HttpNodeSettings>>) -> Self {
        self.option(NodeOption::http(http))
    }

    pub fn tls(self, tls: impl Into<Option<TlsNodeSettings>>) -> Self {
        self.option(NodeOption::tls(tls))
    }

    pub fn metadata(self, metadata: Arc<dyn Metadata>) -> Self {
        self.option(NodeOption::metadata(metadata))
    }

    pub fn matcher(self, matcher: Arc<dyn Matcher>) -> Self {
        self.option(NodeOption::matcher(matcher))
    }

    pub fn priority(self, priority: i32) -> Self {
        self.option(NodeOption::priority(priority))
    }

    pub fn build(self) -> Node {
        Node::new(self.name, self.addr, self.opts)
    }
}
