//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use visitor_core::error::{Result, VisitorError};

pub use schema::{
    CounterSection, GatewayConfig, GatewaySection, MethodMode, StoreBackend, StoreSection,
};

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "VISITOR_CONFIG";
/// Config file used when `VISITOR_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "visitor.yaml";

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| VisitorError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| VisitorError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load the file named by `VISITOR_CONFIG` (or `visitor.yaml`).
/// A missing default file yields the built-in defaults; a missing file that
/// was named explicitly is an error.
pub fn load_default() -> Result<GatewayConfig> {
    let (path, explicit) = match std::env::var(CONFIG_PATH_ENV) {
        Ok(p) => (p, true),
        Err(_) => (DEFAULT_CONFIG_PATH.to_string(), false),
    };

    if !explicit && !Path::new(&path).exists() {
        tracing::info!(%path, "no config file, using defaults");
        return Ok(GatewayConfig::default());
    }
    load_from_file(&path)
}
