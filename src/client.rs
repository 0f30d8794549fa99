// ConsulClient - facade owning the shared transport and sub-clients

use tracing::debug;

use crate::{
    config::ConsulConfig, error::Result, health::HealthClient, http::Transport, kv::KvClient,
    service::ServiceClient,
};

/// Async client for the Consul agent HTTP API (v1).
///
/// Owns one shared connection pool and exposes the service, KV and health
/// sub-clients over it. Constructed fully or not at all; there is no
/// half-open state.
pub struct ConsulClient {
    datacenter: String,
    service: ServiceClient,
    kv: KvClient,
    health: HealthClient,
}

impl ConsulClient {
    /// Create a new client against the configured agent.
    ///
    /// Opens the shared HTTP transport and derives the `/v1` base URL from
    /// the configured address.
    pub async fn new(config: ConsulConfig) -> Result<Self> {
        let transport = Transport::new(&config.address)?;
        debug!("Consul client connected to {}", config.address);

        Ok(Self {
            datacenter: config.datacenter,
            service: ServiceClient::new(transport.clone()),
            kv: KvClient::new(transport.clone()),
            health: HealthClient::new(transport),
        })
    }

    /// Service registration sub-client
    pub fn service(&self) -> &ServiceClient {
        &self.service
    }

    /// Key-value sub-client
    pub fn kv(&self) -> &KvClient {
        &self.kv
    }

    /// Health query sub-client
    pub fn health(&self) -> &HealthClient {
        &self.health
    }

    /// Datacenter the client was configured for
    pub fn datacenter(&self) -> &str {
        &self.datacenter
    }

    /// Close the client, releasing the transport's pooled connections.
    ///
    /// Consumes the facade, so calls after close are rejected at compile
    /// time rather than failing at the socket.
    pub async fn close(self) {
        debug!("Closing Consul client");
        drop(self);
    }
}
