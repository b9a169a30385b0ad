use serde::Deserialize;
use visitor_core::error::{Result, VisitorError};
use visitor_core::DEFAULT_COUNTER_KEY;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub store: StoreSection,

    #[serde(default)]
    pub counter: CounterSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            store: StoreSection::default(),
            counter: CounterSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(VisitorError::UnsupportedVersion);
        }

        self.gateway.validate()?;
        self.store.validate()?;
        self.counter.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Path the counter endpoint is mounted on.
    #[serde(default = "default_route")]
    pub route: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            route: default_route(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        if !self.route.starts_with('/') {
            return Err(VisitorError::BadRequest(
                "gateway.route must start with '/'".into(),
            ));
        }
        // The counter route is a fixed path: no captures, wildcards or query.
        if self.route.contains([':', '*', '?', '#']) {
            return Err(VisitorError::BadRequest(format!(
                "gateway.route must be a fixed path without ':', '*', '?' or '#': {}",
                self.route
            )));
        }
        if matches!(self.route.as_str(), "/healthz" | "/readyz" | "/metrics") {
            return Err(VisitorError::BadRequest(format!(
                "gateway.route collides with ops endpoint: {}",
                self.route
            )));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_route() -> String {
    "/".into()
}

/// Which counter store backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    /// Upstash Redis REST API.
    #[default]
    Upstash,
    /// In-process atomics. Lost on restart.
    Memory,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Environment variable holding the REST base URL.
    #[serde(default = "default_url_env")]
    pub url_env: String,

    /// Environment variable holding the bearer token.
    #[serde(default = "default_token_env")]
    pub token_env: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            url_env: default_url_env(),
            token_env: default_token_env(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl StoreSection {
    pub fn validate(&self) -> Result<()> {
        if !(100..=60000).contains(&self.timeout_ms) {
            return Err(VisitorError::BadRequest(
                "store.timeout_ms must be between 100 and 60000".into(),
            ));
        }
        if self.url_env.trim().is_empty() || self.token_env.trim().is_empty() {
            return Err(VisitorError::BadRequest(
                "store.url_env and store.token_env must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_url_env() -> String {
    "UPSTASH_REDIS_REST_URL".into()
}
fn default_token_env() -> String {
    "UPSTASH_REDIS_REST_TOKEN".into()
}
fn default_timeout_ms() -> u64 {
    5000
}

/// Which methods trigger an increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MethodMode {
    /// Every non-OPTIONS method increments.
    #[default]
    Any,
    /// Only POST increments; others get 405.
    Post,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CounterSection {
    #[serde(default = "default_key")]
    pub key: String,

    #[serde(default)]
    pub methods: MethodMode,
}

impl Default for CounterSection {
    fn default() -> Self {
        Self {
            key: default_key(),
            methods: MethodMode::default(),
        }
    }
}

impl CounterSection {
    pub fn validate(&self) -> Result<()> {
        if self.key.is_empty() {
            return Err(VisitorError::BadRequest("counter.key must not be empty".into()));
        }
        if self.key.contains('/') || self.key.chars().any(char::is_whitespace) {
            return Err(VisitorError::BadRequest(
                "counter.key must not contain '/' or whitespace".into(),
            ));
        }
        Ok(())
    }
}

fn default_key() -> String {
    DEFAULT_COUNTER_KEY.into()
}
