// Shared HTTP transport for the sub-clients

use reqwest::{Client, Response, StatusCode};

use crate::error::{ConsulError, Result};

/// Handle to the one shared connection pool plus the agent's base URL.
///
/// Clones share the underlying pool, so the facade hands each sub-client
/// its own copy while remaining the logical owner of the transport.
#[derive(Clone, Debug)]
pub(crate) struct Transport {
    client: Client,
    base_url: String,
}

impl Transport {
    pub(crate) fn new(address: &str) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: format!("{}/v1", address.trim_end_matches('/')),
        })
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// Build a full URL under the agent's /v1 API root
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

/// Enforce the Consul contract that only an exact 200 is success.
/// Every other status becomes an error carrying the status and body.
pub(crate) async fn expect_ok(response: Response) -> Result<Response> {
    if response.status() == StatusCode::OK {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(ConsulError::UnexpectedStatus { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_under_v1() {
        let transport = Transport::new("http://localhost:8500").unwrap();
        assert_eq!(
            transport.url("agent/service/register"),
            "http://localhost:8500/v1/agent/service/register"
        );
    }

    #[test]
    fn test_url_tolerates_trailing_slash() {
        let transport = Transport::new("http://localhost:8500/").unwrap();
        assert_eq!(transport.url("kv/app"), "http://localhost:8500/v1/kv/app");
    }
}
