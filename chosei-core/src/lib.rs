//! Core types for the chosei ecosystem.
//!
//! This crate provides everything the chosei surfaces share:
//! - `Event`, `Participant` and `AvailabilityMark` for the scheduling model
//! - `candidate` for the `"YYYY/MM/DD <label>"` candidate codec
//! - `tally` for per-candidate availability aggregation
//! - `store` for event persistence behind an injected key-value backing

pub mod candidate;
pub mod config;
pub mod error;
pub mod event;
pub mod store;
pub mod tally;

// Re-export the model and error types at crate root for convenience
pub use error::{ChoseiError, ChoseiResult};
pub use event::{AvailabilityMark, Event, Participant};
