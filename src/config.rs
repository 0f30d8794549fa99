//! Connection configuration for the Consul client

/// Configuration for connecting to a Consul agent
#[derive(Clone, Debug)]
pub struct ConsulConfig {
    /// Base address of the agent, e.g. "http://127.0.0.1:8500"
    pub address: String,
    /// Datacenter name
    pub datacenter: String,
}

impl Default for ConsulConfig {
    fn default() -> Self {
        Self {
            address: "http://127.0.0.1:8500".to_string(),
            datacenter: "dc1".to_string(),
        }
    }
}

impl ConsulConfig {
    /// Create a new config pointing at the given agent address
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            ..Default::default()
        }
    }

    /// Set the datacenter name
    pub fn with_datacenter(mut self, datacenter: &str) -> Self {
        self.datacenter = datacenter.to_string();
        self
    }
}
