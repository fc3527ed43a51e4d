//! Relay chain nodes.
//!
//! # Data Flow
//! ```text
//! Construction (once):
//!     name + addr + [NodeOption...]
//!     → options.rs (apply in order, last write wins, None skipped)
//!     → NodeOptions (frozen, shared via Arc)
//!     → node.rs (Node = identity + options + runtime state)
//!
//! Runtime (concurrent):
//!     connection handlers → inc/dec active conns, set latency, mark failures
//!     external selector   → reads counters, latency and marker
//! ```
//!
//! # Design Decisions
//! - Configuration is immutable after construction; reads need no locks
//! - Runtime telemetry uses atomics only
//! - Settings are declarative; transports and HTTP layers interpret them

pub mod node;
pub mod options;
pub mod settings;

pub use node::{ConnectionGuard, Node, NodeSnapshot};
pub use options::{NodeBuilder, NodeOption, NodeOptions};
pub use settings::{
    HttpBodyRewriteSetting, HttpNodeSettings, HttpUrlRewriteSetting, NodeFilterSettings,
    TlsNodeSettings, TlsOptions,
};
