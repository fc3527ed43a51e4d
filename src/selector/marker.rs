//! Failure marker.
//!
//! # Responsibilities
//! - Track the consecutive failure and success streaks of a node
//! - Remember when the node last failed

use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Health marker consulted by the selector.
///
/// Implementations must be safe for concurrent `mark`/`reset` calls.
pub trait Marker: Send + Sync + Debug {
    /// Record a failure.
    fn mark(&self);

    /// Record a success, clearing the failure streak.
    fn reset(&self);

    /// Consecutive failures since the last success.
    fn count(&self) -> u64;

    /// Consecutive successes since the last failure.
    fn successes(&self) -> u64;

    /// Time of the most recent failure, if any.
    fn time(&self) -> Option<SystemTime>;
}

/// Implemented by anything carrying a health marker.
pub trait Markable {
    fn marker(&self) -> &Arc<dyn Marker>;
}

/// Default marker backed by atomics.
#[derive(Debug, Default)]
pub struct FailMarker {
    failures: AtomicU64,
    successes: AtomicU64,
    /// Unix time of the last failure in milliseconds (0 = never).
    failed_at_ms: AtomicU64,
}

impl FailMarker {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Marker for FailMarker {
    fn mark(&self) {
        self.successes.store(0, Ordering::Relaxed);
        let failures = self.failures.fetch_add(1, Ordering::Relaxed) + 1;
        self.failed_at_ms.store(unix_millis(SystemTime::now()), Ordering::Relaxed);
        tracing::trace!(failures, "Failure marked");
    }

    fn reset(&self) {
        self.failures.store(0, Ordering::Relaxed);
        self.successes.fetch_add(1, Ordering::Relaxed);
    }

    fn count(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    fn successes(&self) -> u64 {
        self.successes.load(Ordering::Relaxed)
    }

    fn time(&self) -> Option<SystemTime> {
        match self.failed_at_ms.load(Ordering::Relaxed) {
            0 => None,
            ms => Some(UNIX_EPOCH + Duration::from_millis(ms)),
        }
    }
}

fn unix_millis(t: SystemTime) -> u64 {
    // A clock before the epoch still counts as "failed", so never store 0.
    t.duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis().min(u64::MAX as u128) as u64)
        .unwrap_or(0)
        .max(1)
}
