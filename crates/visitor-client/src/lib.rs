//! Visitor counter client.
//!
//! The page-side half of the counter contract: ask the counter service for
//! the visit count at most once per session and turn the answer into a
//! transient toast. Every failure is soft; the caller gets
//! `VisitOutcome::Unavailable` and the page carries on.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod client;
pub mod error;
pub mod session;
pub mod toast;

pub use client::{VisitOutcome, VisitorClient, DEFAULT_TIMEOUT};
pub use error::ClientError;
pub use session::SessionFlag;
pub use toast::Toast;
