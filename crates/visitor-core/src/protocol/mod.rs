//! Wire formats.
//!
//! - `counter`: the JSON body the counter service answers with.
//! - `store`: the REST reply of the key-value store's INCR command.
//!
//! Decoders are panic-free: malformed input is reported as `VisitorError`.

pub mod counter;
pub mod store;

pub use counter::CounterResponse;
pub use store::{decode_incr_reply, IncrReply};
