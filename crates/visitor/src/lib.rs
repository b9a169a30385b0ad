//! Top-level facade crate for the visitor counter.
//!
//! Re-exports core types, the gateway library and the client so users can
//! depend on a single crate.

pub mod core {
    pub use visitor_core::*;
}

pub mod gateway {
    pub use visitor_gateway::*;
}

pub mod client {
    pub use visitor_client::*;
}
