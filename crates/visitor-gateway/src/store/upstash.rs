//! Upstash Redis REST store.
//!
//! `POST {base}/incr/{key}` with `Authorization: Bearer {token}`; the reply
//! is `{"result": n}`. One attempt per call: a failed store call is a failed
//! service call.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use visitor_core::error::{Result, VisitorError};
use visitor_core::protocol::decode_incr_reply;

use super::{CounterStore, CredentialSource};

pub struct UpstashStore {
    client: reqwest::Client,
    credentials: Arc<dyn CredentialSource>,
}

impl fmt::Debug for UpstashStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpstashStore").field("client", &self.client).finish()
    }
}

impl UpstashStore {
    /// `timeout` bounds the whole store round trip, body included.
    pub fn new(credentials: Arc<dyn CredentialSource>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| VisitorError::Internal(format!("http client init failed: {e}")))?;
        Ok(Self { client, credentials })
    }

    /// `{base}/incr/{key}`, with `key` percent-encoded as one path segment.
    pub fn incr_url(base_url: &str, key: &str) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(base_url)
            .map_err(|e| VisitorError::Transport(format!("invalid store url: {e}")))?;
        url.path_segments_mut()
            .map_err(|_| VisitorError::Transport(format!("invalid store url: {base_url}")))?
            .pop_if_empty()
            .push("incr")
            .push(key);
        Ok(url)
    }
}

fn map_send_error(e: reqwest::Error) -> VisitorError {
    if e.is_timeout() {
        VisitorError::Timeout
    } else {
        VisitorError::Transport(e.to_string())
    }
}

#[async_trait]
impl CounterStore for UpstashStore {
    fn backend(&self) -> &'static str {
        "upstash"
    }

    async fn incr(&self, key: &str) -> Result<u64> {
        let creds = self.credentials.resolve().ok_or(VisitorError::ConfigMissing)?;

        let url = Self::incr_url(&creds.base_url, key)?;
        tracing::debug!(%url, "calling store");

        let response = self
            .client
            .post(url)
            .bearer_auth(&creds.token)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "could not read error body".to_string());
            return Err(VisitorError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(map_send_error)?;
        decode_incr_reply(&body)
    }
}
