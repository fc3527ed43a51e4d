//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//!     → build.rs (NodeConfig → NodeOption list → Node)
//! ```
//!
//! # Design Decisions
//! - All sections have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - Rewrite patterns are compiled when nodes are built, not when parsed

pub mod build;
pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    BodyRewriteConfig, HttpConfig, NodeConfig, ObservabilityConfig, RelayConfig, UrlRewriteConfig,
};
pub use validation::{validate_config, ValidationError};
