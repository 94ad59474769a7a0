//! Small helpers shared across the crate: hex rendering for logs and UIDs,
//! and the wall-clock deadline used by the ready-poll loop.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
