//! External capability contracts.
//!
//! # Data Flow
//! ```text
//! Surrounding system builds concrete implementations
//!     → Arc<dyn Capability> handed to a NodeOption
//!     → stored in the frozen NodeOptions
//!     → read back by transport / selector / router code
//! ```
//!
//! # Design Decisions
//! - Node core stores these references but never invokes them
//! - Every contract is `Send + Sync + Debug` so options can be shared
//!   across connection handlers and printed in diagnostics
//! - Async operations return boxed futures to keep the traits object-safe

pub mod auth;
pub mod bypass;
pub mod hosts;
pub mod resolver;
pub mod routing;
pub mod transport;

pub use auth::Authenticator;
pub use bypass::Bypass;
pub use hosts::HostMapper;
pub use resolver::Resolver;
pub use routing::{Matcher, Request};
pub use transport::{Conn, Transporter};
