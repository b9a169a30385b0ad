//! Store credential sources.
//!
//! Credentials are resolved on every call, not cached at startup, so a
//! missing variable surfaces as a per-request configuration error.

use std::fmt;

use visitor_core::env::normalize;

/// REST base URL plus bearer token, both quote-stripped and non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct StoreCredentials {
    pub base_url: String,
    pub token: String,
}

impl fmt::Debug for StoreCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreCredentials")
            .field("base_url", &self.base_url)
            .field("token", &"***")
            .finish()
    }
}

impl StoreCredentials {
    /// Normalize raw values. `None` when either is missing or blank.
    pub fn from_raw(url: Option<&str>, token: Option<&str>) -> Option<Self> {
        Some(Self {
            base_url: normalize(url)?,
            token: normalize(token)?,
        })
    }
}

pub trait CredentialSource: Send + Sync {
    fn resolve(&self) -> Option<StoreCredentials>;
}

/// Reads two named environment variables.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    url_var: String,
    token_var: String,
}

impl EnvCredentials {
    pub fn new(url_var: &str, token_var: &str) -> Self {
        Self {
            url_var: url_var.to_string(),
            token_var: token_var.to_string(),
        }
    }
}

impl CredentialSource for EnvCredentials {
    fn resolve(&self) -> Option<StoreCredentials> {
        let url = std::env::var(&self.url_var).ok();
        let token = std::env::var(&self.token_var).ok();
        StoreCredentials::from_raw(url.as_deref(), token.as_deref())
    }
}

/// Values supplied up front, normalized the same way as env values.
#[derive(Debug, Clone, Default)]
pub struct FixedCredentials {
    url: Option<String>,
    token: Option<String>,
}

impl FixedCredentials {
    pub fn new(url: Option<&str>, token: Option<&str>) -> Self {
        Self {
            url: url.map(str::to_string),
            token: token.map(str::to_string),
        }
    }
}

impl CredentialSource for FixedCredentials {
    fn resolve(&self) -> Option<StoreCredentials> {
        StoreCredentials::from_raw(self.url.as_deref(), self.token.as_deref())
    }
}
