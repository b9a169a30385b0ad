//! Counter stores.
//!
//! The service only needs one capability from its backing store: an atomic
//! "increment and return the new value". Ordering and uniqueness of returned
//! values are whatever the store's INCR guarantees; nothing here does a
//! read-modify-write.

pub mod credentials;
pub mod memory;
pub mod upstash;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use visitor_core::Result;

use crate::config::{StoreBackend, StoreSection};

pub use credentials::{CredentialSource, EnvCredentials, FixedCredentials, StoreCredentials};
pub use memory::MemoryStore;
pub use upstash::UpstashStore;

/// Atomic increment capability.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Backend name, used as a metrics label.
    fn backend(&self) -> &'static str;

    /// Atomically increment `key` and return the post-increment value.
    /// A missing key starts at 0.
    async fn incr(&self, key: &str) -> Result<u64>;
}

/// Build the store selected by config.
pub fn build_store(cfg: &StoreSection) -> Result<Arc<dyn CounterStore>> {
    match cfg.backend {
        StoreBackend::Upstash => {
            let creds = Arc::new(EnvCredentials::new(&cfg.url_env, &cfg.token_env));
            let store = UpstashStore::new(creds, Duration::from_millis(cfg.timeout_ms))?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("memory store selected, counts are lost on restart");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
