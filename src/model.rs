// Consul API data models
// These models match the Consul agent API wire format

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};

use crate::error::{ConsulError, Result};

/// Service registration request body
/// PUT /v1/agent/service/register
#[derive(Debug, Clone, Serialize)]
pub struct ServiceRegistration {
    /// Service instance ID, unique per agent
    #[serde(rename = "ID")]
    pub id: String,

    /// Logical service name; many instances may share one
    #[serde(rename = "Name")]
    pub name: String,

    /// Service tags for filtering
    #[serde(rename = "Tags")]
    pub tags: Vec<String>,

    /// Address the instance is reachable at
    #[serde(rename = "Address")]
    pub address: String,

    /// Port the instance listens on
    #[serde(rename = "Port")]
    pub port: u16,

    /// TTL health check attached to the registration
    #[serde(rename = "Check")]
    pub check: ServiceCheck,
}

/// TTL health check definition embedded in a registration
#[derive(Debug, Clone, Serialize)]
pub struct ServiceCheck {
    /// How long the service may stay critical before Consul
    /// deregisters it, as a Go-style duration string
    #[serde(rename = "DeregisterCriticalServiceAfter")]
    pub deregister_critical_service_after: String,

    /// TTL window within which the check must be passed
    #[serde(rename = "TTL")]
    pub ttl: String,
}

/// One element of the /v1/health/checks/{service} response
#[derive(Debug, Clone, Deserialize)]
pub struct HealthCheck {
    /// Encoded as "<name>@<address>:<port>"
    #[serde(rename = "ServiceID")]
    pub service_id: String,

    #[serde(rename = "ServiceTags", default)]
    pub service_tags: Vec<String>,

    /// Check status reported by the agent ("passing", "critical", ...)
    #[serde(rename = "Status", default)]
    pub status: Option<String>,
}

/// One registered service instance, extracted from a health query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEntry {
    pub address: String,
    /// Kept as a string: it is sliced out of the ServiceID, never
    /// interpreted numerically
    pub port: String,
    pub tags: Vec<String>,
}

impl ServiceEntry {
    /// Split a "name@address:port" service ID into an entry.
    /// The address is everything between '@' and the first ':' after it.
    pub(crate) fn from_service_id(service_id: &str, tags: Vec<String>) -> Result<Self> {
        let (_, rest) = service_id.split_once('@').ok_or_else(|| {
            ConsulError::MalformedResponse(format!("ServiceID without '@': {}", service_id))
        })?;
        let (address, port) = rest.split_once(':').ok_or_else(|| {
            ConsulError::MalformedResponse(format!("ServiceID without ':': {}", service_id))
        })?;

        Ok(Self {
            address: address.to_string(),
            port: port.to_string(),
            tags,
        })
    }
}

/// Outcome of one blocking health query
#[derive(Debug, Clone)]
pub struct QueryResult {
    /// Value of the X-Consul-Index response header. Feed it back as the
    /// `index` of the next call to keep watching for changes.
    pub last_index: u64,
    pub response: Vec<ServiceEntry>,
}

/// Consul KV pair as returned by GET /v1/kv/{key}
#[derive(Debug, Clone, Deserialize)]
pub struct KvPair {
    #[serde(rename = "Key")]
    pub key: String,

    #[serde(rename = "CreateIndex")]
    pub create_index: u64,

    #[serde(rename = "ModifyIndex")]
    pub modify_index: u64,

    #[serde(rename = "LockIndex")]
    pub lock_index: u64,

    #[serde(rename = "Flags")]
    pub flags: u64,

    /// Base64 encoded; null for directory placeholders
    #[serde(rename = "Value")]
    pub value: Option<String>,

    #[serde(rename = "Session", default)]
    pub session: Option<String>,
}

impl KvPair {
    /// Decode the base64 value to a string
    pub fn decoded_value(&self) -> Option<String> {
        self.value.as_ref().and_then(|v| {
            BASE64
                .decode(v)
                .ok()
                .and_then(|bytes| String::from_utf8(bytes).ok())
        })
    }

    /// Get raw bytes of the value
    pub fn raw_value(&self) -> Option<Vec<u8>> {
        self.value.as_ref().and_then(|v| BASE64.decode(v).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_wire_format() {
        let registration = ServiceRegistration {
            id: "svc1".to_string(),
            name: "my-cluster".to_string(),
            tags: vec!["v1".to_string()],
            address: "127.0.0.1".to_string(),
            port: 9000,
            check: ServiceCheck {
                deregister_critical_service_after: "30s".to_string(),
                ttl: "10s".to_string(),
            },
        };

        let json = serde_json::to_value(&registration).unwrap();
        assert_eq!(json["ID"], "svc1");
        assert_eq!(json["Name"], "my-cluster");
        assert_eq!(json["Tags"], serde_json::json!(["v1"]));
        assert_eq!(json["Address"], "127.0.0.1");
        assert_eq!(json["Port"], 9000);
        assert_eq!(json["Check"]["DeregisterCriticalServiceAfter"], "30s");
        assert_eq!(json["Check"]["TTL"], "10s");
    }

    #[test]
    fn test_service_entry_from_service_id() {
        let entry =
            ServiceEntry::from_service_id("web1@10.0.0.5:8080", vec!["v1".to_string()]).unwrap();
        assert_eq!(entry.address, "10.0.0.5");
        assert_eq!(entry.port, "8080");
        assert_eq!(entry.tags, vec!["v1".to_string()]);
    }

    #[test]
    fn test_service_entry_malformed_id() {
        let err = ServiceEntry::from_service_id("web1-10.0.0.5-8080", vec![]).unwrap_err();
        assert!(matches!(err, ConsulError::MalformedResponse(_)));

        let err = ServiceEntry::from_service_id("web1@10.0.0.5", vec![]).unwrap_err();
        assert!(matches!(err, ConsulError::MalformedResponse(_)));
    }

    #[test]
    fn test_kv_pair_decoded_value() {
        let pair: KvPair = serde_json::from_value(serde_json::json!({
            "Key": "app/config",
            "CreateIndex": 10,
            "ModifyIndex": 12,
            "LockIndex": 0,
            "Flags": 0,
            "Value": "aGVsbG8="
        }))
        .unwrap();

        assert_eq!(pair.decoded_value().as_deref(), Some("hello"));
        assert_eq!(pair.raw_value().as_deref(), Some(b"hello".as_slice()));
        assert!(pair.session.is_none());
    }

    #[test]
    fn test_kv_pair_null_value() {
        let pair: KvPair = serde_json::from_value(serde_json::json!({
            "Key": "app/",
            "CreateIndex": 10,
            "ModifyIndex": 10,
            "LockIndex": 0,
            "Flags": 0,
            "Value": null
        }))
        .unwrap();

        assert!(pair.decoded_value().is_none());
        assert!(pair.raw_value().is_none());
    }
}
