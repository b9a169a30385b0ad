//! Counter service response body.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VisitorError};

/// `{ "count": n }` on success, `{ "error": "..." }` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CounterResponse {
    Count { count: u64 },
    Error { error: String },
}

impl CounterResponse {
    pub fn count(count: u64) -> Self {
        CounterResponse::Count { count }
    }

    pub fn error(msg: impl Into<String>) -> Self {
        CounterResponse::Error { error: msg.into() }
    }

    /// Decode a counter service body.
    pub fn parse(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|e| VisitorError::Decode(format!("invalid counter reply: {e}")))
    }

    /// The count, if this is a success body.
    pub fn as_count(&self) -> Option<u64> {
        match self {
            CounterResponse::Count { count } => Some(*count),
            CounterResponse::Error { .. } => None,
        }
    }
}
