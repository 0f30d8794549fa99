//! Async HTTP client SDK for the Consul agent API
//!
//! One [`ConsulClient`] owns a shared connection pool and exposes three
//! sub-clients over it:
//! - `service`: register/deregister services, pass TTL health checks
//! - `kv`: create/read/delete key-value entries
//! - `health`: poll service health with Consul's blocking-query protocol
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use consul_client::{ConsulClient, ConsulConfig};
//!
//! # async fn run() -> consul_client::Result<()> {
//! let client = ConsulClient::new(ConsulConfig::new("http://localhost:8500")).await?;
//!
//! client
//!     .service()
//!     .register(
//!         "web1",
//!         "web",
//!         vec!["v1".to_string()],
//!         "10.0.0.5",
//!         8080,
//!         Duration::from_secs(30),
//!         Duration::from_secs(10),
//!     )
//!     .await?;
//!
//! // Watch the service's health checks with a long poll.
//! let mut index = 0;
//! loop {
//!     let result = client
//!         .health()
//!         .service("web", index, Duration::from_secs(30))
//!         .await?;
//!     index = result.last_index;
//! }
//! # }
//! ```

pub mod client;
pub mod config;
pub mod duration;
pub mod error;
pub mod health;
pub mod kv;
pub mod model;
pub mod service;

mod http;

pub use client::ConsulClient;
pub use config::ConsulConfig;
pub use error::{ConsulError, Result};
pub use health::HealthClient;
pub use kv::KvClient;
pub use model::{KvPair, QueryResult, ServiceCheck, ServiceEntry, ServiceRegistration};
pub use service::ServiceClient;
