//! Counter service: one store increment per call, timed and logged.

use std::sync::Arc;
use std::time::Instant;

use visitor_core::error::{Result, VisitorError};

use crate::obs::VisitorMetrics;
use crate::store::CounterStore;

/// "Increment and report" over one named counter.
///
/// Holds no per-request state. Each call maps to exactly one store
/// increment, which is never retried and never rolled back.
pub struct CounterService {
    store: Arc<dyn CounterStore>,
    key: String,
    metrics: Arc<VisitorMetrics>,
}

impl CounterService {
    pub fn new(store: Arc<dyn CounterStore>, key: String, metrics: Arc<VisitorMetrics>) -> Self {
        Self { store, key, metrics }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub async fn increment(&self) -> Result<u64> {
        let started = Instant::now();
        let res = self.store.incr(&self.key).await;

        // Config errors never reach the store.
        if !matches!(res, Err(VisitorError::ConfigMissing)) {
            self.metrics
                .store_duration
                .observe(&[("backend", self.store.backend())], started.elapsed());
        }

        match &res {
            Ok(count) => {
                tracing::info!(key = %self.key, count = *count, "visitor count incremented");
            }
            Err(VisitorError::ConfigMissing) => {
                tracing::error!("missing store credentials");
            }
            Err(VisitorError::Upstream { status, body }) => {
                tracing::error!(key = %self.key, status = *status, body = %body, "store error");
            }
            Err(e) => {
                tracing::error!(key = %self.key, code = e.client_code().as_str(), error = %e, "visitor increment failed");
            }
        }

        res
    }
}
