//! Blocking health-check queries

use std::time::Duration;

use tracing::debug;

use crate::{
    duration,
    error::{ConsulError, Result},
    http::{Transport, expect_ok},
    model::{HealthCheck, QueryResult, ServiceEntry},
};

const CONSUL_INDEX_HEADER: &str = "X-Consul-Index";

/// Sub-client for the /v1/health endpoints
#[derive(Clone, Debug)]
pub struct HealthClient {
    transport: Transport,
}

impl HealthClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Query the health checks of a service as a Consul blocking query.
    ///
    /// `index` is the last known consistency index (0 for an initial,
    /// non-blocking call); `wait` bounds how long the agent may hold the
    /// request open before answering with the unchanged state. Callers
    /// watch for changes by looping and feeding
    /// [`QueryResult::last_index`] back in as `index`.
    ///
    /// `wait` is a hint to the server, not a client-side timeout; a caller
    /// wanting bounded latency against a hung connection must wrap the
    /// call externally.
    pub async fn service(
        &self,
        cluster_name: &str,
        index: u64,
        blocking_wait_time: Duration,
    ) -> Result<QueryResult> {
        let url = self
            .transport
            .url(&format!("health/checks/{}", cluster_name));
        debug!("Polling health of {} from index {}", cluster_name, index);

        let response = self
            .transport
            .client()
            .get(&url)
            .query(&[
                ("index", index.to_string()),
                ("wait", duration::encode(blocking_wait_time)),
            ])
            .send()
            .await?;
        let response = expect_ok(response).await?;

        let last_index = parse_consul_index(&response)?;
        let checks: Vec<HealthCheck> = response.json().await?;

        let entries = checks
            .into_iter()
            .map(|check| ServiceEntry::from_service_id(&check.service_id, check.service_tags))
            .collect::<Result<Vec<_>>>()?;

        Ok(QueryResult {
            last_index,
            response: entries,
        })
    }
}

/// Extract the consistency index from the X-Consul-Index response header
fn parse_consul_index(response: &reqwest::Response) -> Result<u64> {
    let value = response
        .headers()
        .get(CONSUL_INDEX_HEADER)
        .ok_or_else(|| {
            ConsulError::MalformedResponse(format!("missing {} header", CONSUL_INDEX_HEADER))
        })?;

    value
        .to_str()
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .ok_or_else(|| {
            ConsulError::MalformedResponse(format!(
                "unparseable {} header: {:?}",
                CONSUL_INDEX_HEADER, value
            ))
        })
}
