//! In-process counter store: one `AtomicU64` per key.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use visitor_core::error::{Result, VisitorError};

use super::CounterStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    counters: DashMap<String, AtomicU64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a key at `value` (the next increment returns `value + 1`).
    pub fn seed(&self, key: &str, value: u64) {
        self.counters.insert(key.to_string(), AtomicU64::new(value));
    }

    /// Current value without incrementing.
    pub fn peek(&self, key: &str) -> u64 {
        self.counters
            .get(key)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }
}

#[async_trait]
impl CounterStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn incr(&self, key: &str) -> Result<u64> {
        if let Some(c) = self.counters.get(key) {
            return bump(key, &c);
        }
        let c = self.counters.entry(key.to_string()).or_default();
        bump(key, &c)
    }
}

/// Add one, refusing to wrap at `u64::MAX`.
fn bump(key: &str, c: &AtomicU64) -> Result<u64> {
    c.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |v| v.checked_add(1))
        .map(|prev| prev + 1)
        .map_err(|_| VisitorError::Internal(format!("counter overflow: {key}")))
}
