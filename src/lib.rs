//! Relay chain node library.
//!
//! A node is one hop in a multi-hop relay chain: a name, a dial address,
//! a frozen set of options (transport, filtering, HTTP and TLS settings)
//! and lock-free runtime telemetry consumed by an external selector.

pub mod capability;
pub mod chain;
pub mod config;
pub mod metadata;
pub mod observability;
pub mod selector;

pub use chain::{Node, NodeBuilder, NodeOption, NodeOptions, NodeSnapshot};
pub use config::RelayConfig;
