//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (node telemetry gauges via `metrics`)
//!
//! Consumers:
//!     → Log output (stdout)
//!     → Whatever metrics recorder the embedding binary installs
//! ```
//!
//! # Design Decisions
//! - Structured fields (node, addr) on every event
//! - The library never installs a metrics recorder itself
//! - Node hot paths do not touch metrics; snapshots are published on demand

pub mod logging;
pub mod metrics;
