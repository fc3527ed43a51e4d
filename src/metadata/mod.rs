//! Opaque key-value configuration bag.
//!
//! # Data Flow
//! ```text
//! config file [nodes.metadata] table
//!     → MapMetadata (keys lower-cased)
//!     → NodeOption::metadata
//!     → read by transport-specific code via util.rs helpers
//! ```
//!
//! # Design Decisions
//! - Values are kept as `serde_json::Value`; this crate never interprets them
//! - Key lookup is case-insensitive
//! - Bags are immutable once attached to a node

pub mod util;

use std::collections::HashMap;
use std::fmt::Debug;

use serde_json::Value;

/// Read-only metadata contract.
pub trait Metadata: Send + Sync + Debug {
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    fn get(&self, key: &str) -> Option<&Value>;

    fn keys(&self) -> Vec<&str>;
}

/// Implemented by anything that carries a metadata bag.
pub trait Metadatable {
    fn metadata(&self) -> Option<&dyn Metadata>;
}

/// `HashMap`-backed metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapMetadata {
    values: HashMap<String, Value>,
}

impl MapMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for MapMetadata {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let values = iter
            .into_iter()
            .map(|(k, v)| (k.into().to_lowercase(), v))
            .collect();
        Self { values }
    }
}

impl Metadata for MapMetadata {
    fn get(&self, key: &str) -> Option<&Value> {
        // Fast path for keys already in lower case.
        self.values
            .get(key)
            .or_else(|| self.values.get(&key.to_lowercase()))
    }

    fn keys(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }
}
