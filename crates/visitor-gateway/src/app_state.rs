//! Shared application state for the visitor gateway.
//!
//! Cheap to clone: everything lives behind one `Arc`. Startup errors are
//! returned, not panicked.

use std::sync::Arc;

use visitor_core::error::Result;

use crate::config::GatewayConfig;
use crate::obs::VisitorMetrics;
use crate::services::CounterService;
use crate::store::{self, CounterStore};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    counter: CounterService,
    metrics: Arc<VisitorMetrics>,
}

impl AppState {
    /// Build state with the store selected by `cfg.store`.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let store = store::build_store(&cfg.store)?;
        Ok(Self::with_store(cfg, store))
    }

    /// Build state around an already constructed store.
    pub fn with_store(cfg: GatewayConfig, store: Arc<dyn CounterStore>) -> Self {
        let metrics = Arc::new(VisitorMetrics::default());
        tracing::info!(
            backend = store.backend(),
            key = %cfg.counter.key,
            route = %cfg.gateway.route,
            "counter service configured"
        );
        let counter = CounterService::new(store, cfg.counter.key.clone(), Arc::clone(&metrics));

        Self {
            inner: Arc::new(AppStateInner { cfg, counter, metrics }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn counter(&self) -> &CounterService {
        &self.inner.counter
    }

    pub fn metrics(&self) -> &VisitorMetrics {
        &self.inner.metrics
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }

    pub fn set_draining(&self) {
        self.inner.metrics.set_draining();
    }
}
