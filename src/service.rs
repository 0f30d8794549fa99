//! Service registration operations against the local Consul agent

use std::time::Duration;

use tracing::debug;

use crate::{
    duration,
    error::Result,
    http::{Transport, expect_ok},
    model::{ServiceCheck, ServiceRegistration},
};

/// Sub-client for /v1/agent service and check endpoints
#[derive(Clone, Debug)]
pub struct ServiceClient {
    transport: Transport,
}

impl ServiceClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Register a service instance with a TTL health check.
    ///
    /// Registering an existing `service_id` overwrites the prior
    /// registration (Consul's upsert semantics). No retry is performed;
    /// retries, if desired, are the caller's responsibility.
    #[allow(clippy::too_many_arguments)]
    pub async fn register(
        &self,
        service_id: &str,
        cluster_name: &str,
        tags: Vec<String>,
        address: &str,
        port: u16,
        deregister_critical: Duration,
        service_ttl: Duration,
    ) -> Result<()> {
        let registration = ServiceRegistration {
            id: service_id.to_string(),
            name: cluster_name.to_string(),
            tags,
            address: address.to_string(),
            port,
            check: ServiceCheck {
                deregister_critical_service_after: duration::encode(deregister_critical),
                ttl: duration::encode(service_ttl),
            },
        };

        let url = self.transport.url("agent/service/register");
        debug!("Registering service {} as {}", service_id, cluster_name);

        let response = self
            .transport
            .client()
            .put(&url)
            .json(&registration)
            .send()
            .await?;
        expect_ok(response).await?;
        Ok(())
    }

    /// Deregister a service instance by ID
    pub async fn deregister(&self, service_id: &str) -> Result<()> {
        let url = self
            .transport
            .url(&format!("agent/service/deregister/{}", service_id));
        debug!("Deregistering service {}", service_id);

        let response = self.transport.client().put(&url).send().await?;
        expect_ok(response).await?;
        Ok(())
    }

    /// Report a TTL check as passing before its window expires
    pub async fn pass_ttl(&self, check_id: &str) -> Result<()> {
        let url = self.transport.url(&format!("agent/check/pass/{}", check_id));
        debug!("Passing TTL check {}", check_id);

        let response = self.transport.client().put(&url).send().await?;
        expect_ok(response).await?;
        Ok(())
    }
}
