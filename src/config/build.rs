//! Node construction from configuration.

use std::sync::Arc;

use regex::Regex;

use crate::chain::{
    HttpBodyRewriteSetting, HttpNodeSettings, HttpUrlRewriteSetting, Node, NodeOption,
};
use crate::config::loader::ConfigError;
use crate::config::schema::{HttpConfig, NodeConfig, RelayConfig};
use crate::metadata::{MapMetadata, Metadata};

impl RelayConfig {
    /// Build every configured node, in file order.
    pub fn build_nodes(&self) -> Result<Vec<Node>, ConfigError> {
        self.nodes.iter().map(NodeConfig::build).collect()
    }
}

impl NodeConfig {
    /// Build a node through the option builder.
    pub fn build(&self) -> Result<Node, ConfigError> {
        let http = self
            .http
            .as_ref()
            .map(|http| http.to_settings(&self.name))
            .transpose()?;

        let metadata = (!self.metadata.is_empty()).then(|| {
            let md: MapMetadata = self.metadata.clone().into_iter().collect();
            Arc::new(md) as Arc<dyn Metadata>
        });

        Ok(Node::new(
            &self.name,
            &self.addr,
            [
                self.network.clone().map(NodeOption::network),
                Some(NodeOption::priority(self.priority)),
                self.filter.clone().map(NodeOption::filter),
                http.map(NodeOption::http),
                self.tls.clone().map(NodeOption::tls),
                metadata.map(NodeOption::metadata),
            ],
        ))
    }
}

impl HttpConfig {
    fn to_settings(&self, node: &str) -> Result<HttpNodeSettings, ConfigError> {
        let rewrite_url = self
            .rewrite_url
            .iter()
            .map(|rule| -> Result<_, ConfigError> {
                Ok(HttpUrlRewriteSetting {
                    pattern: compile(node, &rule.pattern)?,
                    replacement: rule.replacement.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let rewrite_body = self
            .rewrite_body
            .iter()
            .map(|rule| -> Result<_, ConfigError> {
                Ok(HttpBodyRewriteSetting {
                    content_type: rule.content_type.clone(),
                    pattern: compile(node, &rule.pattern)?,
                    replacement: rule.replacement.clone().into_bytes(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(HttpNodeSettings {
            host: self.host.clone(),
            request_header: self.request_header.clone(),
            response_header: self.response_header.clone(),
            authenticator: None,
            rewrite_url,
            rewrite_body,
        })
    }
}

fn compile(node: &str, pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::Pattern {
        node: node.to_string(),
        pattern: pattern.to_string(),
        source,
    })
}
