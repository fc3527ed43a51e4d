//! Declarative per-node settings.
//!
//! Plain data attached to a node through its options. Nothing here is
//! executed by the node itself: TLS handshakes, header overrides and
//! rewrites are applied by the transport and HTTP layers that read them.

use std::collections::HashMap;
use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::capability::Authenticator;

/// Restricts which requests may be routed through a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeFilterSettings {
    pub protocol: String,
    pub host: String,
    pub path: String,
}

/// A URL rewrite rule. Rules are applied in declaration order.
#[derive(Debug, Clone)]
pub struct HttpUrlRewriteSetting {
    pub pattern: Regex,
    pub replacement: String,
}

/// A response body rewrite rule, scoped to one content type.
#[derive(Debug, Clone)]
pub struct HttpBodyRewriteSetting {
    pub content_type: String,
    pub pattern: Regex,
    pub replacement: Vec<u8>,
}

/// HTTP-level settings for nodes that speak HTTP.
#[derive(Debug, Clone, Default)]
pub struct HttpNodeSettings {
    /// Host header override.
    pub host: String,
    pub request_header: HashMap<String, String>,
    pub response_header: HashMap<String, String>,
    pub authenticator: Option<Arc<dyn Authenticator>>,
    pub rewrite_url: Vec<HttpUrlRewriteSetting>,
    pub rewrite_body: Vec<HttpBodyRewriteSetting>,
}

/// TLS client settings used when dialing a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TlsNodeSettings {
    pub server_name: String,
    /// Verify the peer certificate.
    pub secure: bool,
    pub options: TlsOptions,
}

/// Protocol parameters grouped under a TLS setting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TlsOptions {
    pub min_version: String,
    pub max_version: String,
    pub cipher_suites: Vec<String>,
    pub alpn: Vec<String>,
}
