//! Credential verification contract.

use std::fmt::Debug;

/// Verifies client credentials for HTTP-level node access.
pub trait Authenticator: Send + Sync + Debug {
    /// Returns the client identifier when the credentials are accepted.
    fn authenticate(&self, user: &str, password: &str) -> Option<String>;
}
