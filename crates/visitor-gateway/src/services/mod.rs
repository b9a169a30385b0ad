//! Request-independent service logic.

pub mod counter;

pub use counter::CounterService;
