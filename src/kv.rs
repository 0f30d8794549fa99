//! Key-value store operations

use tracing::debug;

use crate::{
    error::Result,
    http::{Transport, expect_ok},
    model::KvPair,
};

/// Sub-client for the /v1/kv endpoints
#[derive(Clone, Debug)]
pub struct KvClient {
    transport: Transport,
}

impl KvClient {
    pub(crate) fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Write raw bytes under the given key, creating or overwriting it
    pub async fn create_or_update(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let url = self.transport.url(&format!("kv/{}", key));
        debug!("Writing {} bytes to key {}", value.len(), key);

        let response = self.transport.client().put(&url).body(value).send().await?;
        expect_ok(response).await?;
        Ok(())
    }

    /// Read a key, or with `recurse` every key under the given prefix.
    ///
    /// The `Value` field of each pair stays base64 encoded as Consul
    /// returns it; see [`KvPair::decoded_value`] for opt-in decoding.
    pub async fn read(&self, key: &str, recurse: bool) -> Result<Vec<KvPair>> {
        let url = self.transport.url(&format!("kv/{}", key));
        debug!("Reading key {} (recurse: {})", key, recurse);

        let mut request = self.transport.client().get(&url);
        if recurse {
            // Consul convention: key-present flag with an empty value
            request = request.query(&[("recurse", "")]);
        }

        let response = expect_ok(request.send().await?).await?;
        Ok(response.json().await?)
    }

    /// Delete a KV entry
    pub async fn delete(&self, key: &str) -> Result<()> {
        let url = self.transport.url(&format!("kv/{}", key));
        debug!("Deleting key {}", key);

        let response = self.transport.client().delete(&url).send().await?;
        expect_ok(response).await?;
        Ok(())
    }
}
