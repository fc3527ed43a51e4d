//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Require a name and an address on every node
//! - Reject duplicate node names
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Node settings themselves are not interpreted here

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::RelayConfig;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("node #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("node '{node}' has an empty address")]
    EmptyAddress { node: String },

    #[error("duplicate node name '{node}'")]
    DuplicateName { node: String },
}

pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, node) in config.nodes.iter().enumerate() {
        if node.name.trim().is_empty() {
            errors.push(ValidationError::EmptyName { index });
        } else if !seen.insert(node.name.as_str()) {
            errors.push(ValidationError::DuplicateName {
                node: node.name.clone(),
            });
        }

        if node.addr.trim().is_empty() {
            errors.push(ValidationError::EmptyAddress {
                node: node.name.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
