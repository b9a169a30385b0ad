//! Typed error enum for the client crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("client initialization failed: {0}")]
    Init(String),
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("counter service returned HTTP {0}")]
    Status(u16),
    #[error("counter service reply has no count: {0}")]
    NoCount(String),
}
