//! Name resolution contract.

use std::fmt::Debug;
use std::io;
use std::net::IpAddr;

use futures_util::future::BoxFuture;

/// Resolves host names to addresses for a node's outbound dials.
pub trait Resolver: Send + Sync + Debug {
    fn resolve<'a>(
        &'a self,
        network: &'a str,
        host: &'a str,
    ) -> BoxFuture<'a, io::Result<Vec<IpAddr>>>;
}
