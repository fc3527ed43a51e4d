//! Node selection support.
//!
//! # Data Flow
//! ```text
//! Connection attempt through a node:
//!     failure → marker.mark()   (failure streak +1, timestamp)
//!     success → marker.reset()  (failure streak cleared)
//!
//! External selector:
//!     → reads marker.count() / marker.time()
//!     → filters or ranks candidate nodes
//! ```
//!
//! # Design Decisions
//! - The selection algorithm itself lives outside this crate
//! - Markers are shared between a node and all of its copies
//! - Lock-free: every update is a single atomic operation

pub mod marker;

pub use marker::{FailMarker, Markable, Marker};
