//! Route matching contract.
//!
//! # Design Decisions
//! - `Request` is a plain snapshot of the routing-relevant parts of a
//!   request so matchers do not depend on any HTTP stack
//! - Header names are compared case-insensitively

use std::collections::HashMap;
use std::fmt::Debug;
use std::net::IpAddr;

/// Routing view of an incoming request.
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub client_ip: Option<IpAddr>,
    pub protocol: String,
    pub host: String,
    pub method: String,
    pub path: String,
    pub query: String,
    pub headers: HashMap<String, String>,
}

impl Request {
    /// Look up a header value by name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Trait for matching requests against a node's routing conditions.
pub trait Matcher: Send + Sync + Debug {
    /// Returns true if the request may be routed through the node.
    fn matches(&self, req: &Request) -> bool;
}
