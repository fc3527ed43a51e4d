//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::io;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use tokio::io::AsyncWriteExt;

use relay_node::capability::{
    Authenticator, Bypass, Conn, HostMapper, Matcher, Request, Resolver, Transporter,
};

/// Transport that answers every dial with an in-memory stream greeting the caller.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    pub dials: AtomicUsize,
}

impl Transporter for MemoryTransport {
    fn dial<'a>(&'a self, addr: &'a str) -> BoxFuture<'a, io::Result<Box<dyn Conn>>> {
        async move {
            self.dials.fetch_add(1, Ordering::SeqCst);
            let (client, mut server) = tokio::io::duplex(64);
            server.write_all(addr.as_bytes()).await?;
            drop(server);
            Ok::<_, io::Error>(Box::new(client) as Box<dyn Conn>)
        }
        .boxed()
    }
}

#[derive(Debug)]
pub struct StaticResolver(pub IpAddr);

impl Resolver for StaticResolver {
    fn resolve<'a>(
        &'a self,
        _network: &'a str,
        _host: &'a str,
    ) -> BoxFuture<'a, io::Result<Vec<IpAddr>>> {
        let ip = self.0;
        async move { Ok::<_, io::Error>(vec![ip]) }.boxed()
    }
}

#[derive(Debug)]
pub struct SuffixBypass(pub &'static str);

impl Bypass for SuffixBypass {
    fn contains(&self, _network: &str, addr: &str) -> bool {
        addr.ends_with(self.0)
    }
}

#[derive(Debug)]
pub struct LocalHosts;

impl HostMapper for LocalHosts {
    fn lookup(&self, _network: &str, host: &str) -> Option<Vec<IpAddr>> {
        (host == "localhost").then(|| vec![IpAddr::V4(Ipv4Addr::LOCALHOST)])
    }
}

#[derive(Debug)]
pub struct HostMatcher(pub &'static str);

impl Matcher for HostMatcher {
    fn matches(&self, req: &Request) -> bool {
        req.host.eq_ignore_ascii_case(self.0)
    }
}

#[derive(Debug)]
pub struct SingleUser;

impl Authenticator for SingleUser {
    fn authenticate(&self, user: &str, password: &str) -> Option<String> {
        (user == "admin" && password == "secret").then(|| "client-1".to_string())
    }
}

/// Write `content` to a unique file under the system temp directory.
pub fn write_temp_config(tag: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("relay-node-{}-{}.toml", tag, std::process::id()));
    std::fs::write(&path, content).unwrap();
    path
}
