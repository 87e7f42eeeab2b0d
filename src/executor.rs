use std::net::{IpAddr, SocketAddr};

use async_trait::async_trait;
use hickory_resolver::config::{NameServerConfig, ResolverConfig};
use hickory_resolver::name_server::{GenericConnector, TokioConnectionProvider};
use hickory_resolver::proto::runtime::TokioRuntimeProvider;
use hickory_resolver::Resolver;
use tokio::net::lookup_host;
use tracing::debug;

use crate::error::StressError;

/// One DNS round trip collapsed to a boolean outcome. Every failure kind
/// (timeout, NXDOMAIN, server error, network error, content mismatch) maps
/// to `false`; nothing propagates past this boundary.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, query: &str) -> bool;
}

/// Executor backed by an async stub resolver pinned to a single nameserver.
pub struct DnsQueryExecutor {
    resolver: Resolver<GenericConnector<TokioRuntimeProvider>>,
    expect_content: Option<String>,
}

impl DnsQueryExecutor {
    /// Builds an executor bound to `server:port`. The server may be given
    /// as an IP literal or as a hostname resolved through the system
    /// resolver.
    pub async fn connect(
        server: &str,
        port: u16,
        expect_content: Option<String>,
    ) -> Result<Self, StressError> {
        let socket_addr = server_addr(server, port).await?;
        let name_server = NameServerConfig {
            socket_addr,
            protocol: Default::default(),
            tls_dns_name: None,
            http_endpoint: None,
            trust_negative_responses: false,
            bind_addr: None,
        };
        let config = ResolverConfig::from_parts(None, vec![], vec![name_server]);
        let mut builder =
            Resolver::builder_with_config(config, TokioConnectionProvider::default());
        // Every request must reach the server; a cache would short-circuit
        // repeated lookups of the same name.
        builder.options_mut().cache_size = 0;
        let resolver = builder.build();
        Ok(Self {
            resolver,
            expect_content,
        })
    }
}

async fn server_addr(server: &str, port: u16) -> Result<SocketAddr, StressError> {
    if let Ok(ip) = server.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, port));
    }
    lookup_host((server, port))
        .await
        .ok()
        .and_then(|mut addrs| addrs.next())
        .ok_or_else(|| StressError::ServerAddress(format!("{server}:{port}")))
}

#[async_trait]
impl QueryExecutor for DnsQueryExecutor {
    async fn execute(&self, query: &str) -> bool {
        match self.resolver.lookup_ip(query).await {
            Ok(lookup) => match &self.expect_content {
                Some(expected) => lookup
                    .iter()
                    .next()
                    .is_some_and(|ip| ip.to_string() == *expected),
                None => true,
            },
            Err(error) => {
                debug!("query '{query}' failed: {error}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ip_literal_server_address() {
        let addr = server_addr("127.0.0.1", 5353).await.unwrap();
        assert_eq!(addr, "127.0.0.1:5353".parse().unwrap());
        let addr = server_addr("::1", 53).await.unwrap();
        assert_eq!(addr.port(), 53);
        assert!(addr.is_ipv6());
    }

    #[tokio::test]
    async fn hostname_server_address_resolves() {
        let addr = server_addr("localhost", 53).await.unwrap();
        assert_eq!(addr.port(), 53);
        assert!(addr.ip().is_loopback());
    }
}
