//! Key-value store REST reply (Upstash style).
//!
//! Commands answer `{"result": <value>}` on success and `{"error": "..."}`
//! on failure. INCR yields an integer result.

use serde::Deserialize;

use crate::error::{Result, VisitorError};

/// Raw reply envelope.
#[derive(Debug, Deserialize)]
pub struct IncrReply {
    #[serde(default)]
    pub result: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Decode the body of a successful INCR call into the new counter value.
pub fn decode_incr_reply(body: &str) -> Result<u64> {
    let reply: IncrReply = serde_json::from_str(body)
        .map_err(|e| VisitorError::Decode(format!("invalid store reply: {e}")))?;

    match (reply.result, reply.error) {
        (Some(n), _) => Ok(n),
        (None, Some(err)) => Err(VisitorError::Decode(format!("store error: {err}"))),
        (None, None) => Err(VisitorError::Decode("store reply missing result".into())),
    }
}
