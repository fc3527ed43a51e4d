//! Static host mapping contract.

use std::fmt::Debug;
use std::net::IpAddr;

/// Static host-to-address overrides consulted before name resolution.
pub trait HostMapper: Send + Sync + Debug {
    /// Returns the mapped addresses for `host`, or `None` when no mapping exists.
    fn lookup(&self, network: &str, host: &str) -> Option<Vec<IpAddr>>;
}
