//! Bypass (allow/deny) rule contract.

use std::fmt::Debug;

/// Decides whether a destination should skip this node.
pub trait Bypass: Send + Sync + Debug {
    /// Returns true if `addr` on `network` is covered by the rule set.
    fn contains(&self, network: &str, addr: &str) -> bool;
}
