//! Per-session "already counted" marker.

use std::sync::atomic::{AtomicBool, Ordering};

/// Ephemeral flag scoped to one browsing session. Never persisted.
#[derive(Debug, Default)]
pub struct SessionFlag {
    claimed: AtomicBool,
}

impl SessionFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag. Returns `true` only for the first caller.
    pub fn try_claim(&self) -> bool {
        !self.claimed.swap(true, Ordering::SeqCst)
    }

    pub fn is_set(&self) -> bool {
        self.claimed.load(Ordering::SeqCst)
    }
}
