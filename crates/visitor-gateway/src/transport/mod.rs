//! Transport layer (HTTP).
//!
//! The counter endpoint handler and the CORS headers it attaches to every
//! response.

pub mod cors;
pub mod http;
