//! One-shot caller for the counter endpoint.

use std::time::Duration;

use visitor_core::protocol::CounterResponse;

use crate::error::ClientError;
use crate::session::SessionFlag;
use crate::toast::Toast;

/// Default bound on one counter call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Result of a page view, from the page's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitOutcome {
    /// First view this session and the service answered.
    Shown(Toast),
    /// First view this session but the count could not be fetched.
    Unavailable,
    /// Already counted this session; the service was not called.
    Suppressed,
}

/// Caller for the counter service endpoint.
#[derive(Debug, Clone)]
pub struct VisitorClient {
    http: reqwest::Client,
    endpoint: String,
}

impl VisitorClient {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT)
    }

    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Init(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One increment call, no payload.
    ///
    /// # Errors
    /// Network failure, non-2xx status, or a body without `count`.
    pub async fn fetch_count(&self) -> Result<u64, ClientError> {
        let response = self.http.post(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed =
            CounterResponse::parse(&body).map_err(|e| ClientError::NoCount(e.to_string()))?;
        parsed.as_count().ok_or(ClientError::NoCount(body))
    }

    /// Count this page view unless the session already did.
    ///
    /// The flag is claimed before the call goes out, so a failed call also
    /// suppresses later attempts in the same session.
    pub async fn visit(&self, session: &SessionFlag) -> VisitOutcome {
        if !session.try_claim() {
            return VisitOutcome::Suppressed;
        }

        match self.fetch_count().await {
            Ok(count) => VisitOutcome::Shown(Toast::new(count)),
            Err(e) => {
                tracing::debug!(error = %e, "visitor count unavailable");
                VisitOutcome::Unavailable
            }
        }
    }
}

