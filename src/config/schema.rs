//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::chain::{NodeFilterSettings, TlsNodeSettings};

/// Root configuration: a set of nodes plus ambient settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Node definitions.
    pub nodes: Vec<NodeConfig>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// A single relay node.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NodeConfig {
    /// Node name, unique within a config file.
    pub name: String,

    /// Dial address (host:port).
    pub addr: String,

    /// Network kind label (e.g. "tcp", "udp").
    #[serde(default)]
    pub network: Option<String>,

    /// Selection priority.
    #[serde(default)]
    pub priority: i32,

    #[serde(default)]
    pub filter: Option<NodeFilterSettings>,

    #[serde(default)]
    pub http: Option<HttpConfig>,

    #[serde(default)]
    pub tls: Option<TlsNodeSettings>,

    /// Transport-specific options, passed through untouched.
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

/// HTTP settings as written in the config file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct HttpConfig {
    pub host: String,
    pub request_header: HashMap<String, String>,
    pub response_header: HashMap<String, String>,
    /// URL rewrite rules, applied in order.
    pub rewrite_url: Vec<UrlRewriteConfig>,
    /// Response body rewrite rules, applied in order.
    pub rewrite_body: Vec<BodyRewriteConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UrlRewriteConfig {
    #[serde(rename = "match")]
    pub pattern: String,
    #[serde(default)]
    pub replacement: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BodyRewriteConfig {
    /// Content type the rule applies to.
    #[serde(rename = "type", default)]
    pub content_type: String,
    #[serde(rename = "match")]
    pub pattern: String,
    #[serde(default)]
    pub replacement: String,
}
