//! Transport contract used to reach a node.

use std::fmt::Debug;
use std::io;

use futures_util::future::BoxFuture;
use tokio::io::{AsyncRead, AsyncWrite};

/// A bidirectional byte stream produced by a transport.
pub trait Conn: AsyncRead + AsyncWrite + Unpin + Send {}

impl<T> Conn for T where T: AsyncRead + AsyncWrite + Unpin + Send {}

/// Dials and carries traffic to a node address.
pub trait Transporter: Send + Sync + Debug {
    /// Open a connection to `addr`.
    fn dial<'a>(&'a self, addr: &'a str) -> BoxFuture<'a, io::Result<Box<dyn Conn>>>;

    /// Whether connections produced by this transport carry multiplexed streams.
    fn multiplex(&self) -> bool {
        false
    }
}
