//! Visitor counter core: transport-agnostic wire types, error surface and
//! configuration value normalization.
//!
//! This crate is shared by the gateway (the counter service) and the client
//! (the session-gated caller). It carries no transport or runtime
//! dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. All fallible paths
//! surface as `VisitorError`/`Result` so a malformed store reply can never
//! take the service down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod env;
pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{ClientCode, Result, VisitorError};

/// Counter key used when configuration does not override it.
pub const DEFAULT_COUNTER_KEY: &str = "portfolio:visits";
