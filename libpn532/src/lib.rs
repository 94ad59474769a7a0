// libpn532/src/lib.rs

//! libpn532
//!
//! Pure Rust driver for the PN532 NFC controller over a bit-banged SPI bus.
//! The transport toggles four GPIO lines; the protocol layer frames
//! commands, polls for readiness, checks the ACK and validates responses.

pub mod constants;
pub mod device;
pub mod error;
pub mod gpio;
pub mod prelude;
pub mod protocol;
pub mod scanner;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
