// libpn532/src/error.rs

use thiserror::Error;

/// Common error type. Every variant is fatal for the call that raised it;
/// a peripheral that simply does not answer in time is reported as
/// `Ok(None)` by the operations that allow it, never as an `Error`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid SPI mode {0}: must be 0, 1, 2 or 3")]
    InvalidMode(u8),

    #[error("invalid bit order '{0}': must be MSBFIRST or LSBFIRST")]
    InvalidBitOrder(String),

    #[error("gpio error: {0}")]
    Gpio(String),

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("response frame does not start with {expected:#04x}, got {actual:#04x}")]
    BadFrameStart { expected: u8, actual: u8 },

    #[error("response frame preamble does not contain 0x00FF, found {actual:#04x}")]
    MissingStartCode { actual: u8 },

    #[error("response frame preamble runs past the end of the buffer")]
    TruncatedPreamble,

    #[error("response length checksum did not match length: len={len:#04x}, lcs={lcs:#04x}")]
    LengthChecksumMismatch { len: u8, lcs: u8 },

    #[error("payload checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("did not receive expected ACK from PN532, got {actual:02x?}")]
    AckMismatch { actual: Vec<u8> },

    #[error("unexpected frame direction: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedDirection { expected: u8, actual: u8 },

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error(
        "failed to detect the PN532: check power supply, wiring and solder joints on the headers"
    )]
    DeviceNotDetected,

    #[error("more than one card detected (target count {count})")]
    MultipleTargets { count: u8 },

    #[error("found card with unexpectedly long UID ({len} bytes)")]
    UidTooLong { len: u8 },
}

pub type Result<T> = std::result::Result<T, Error>;
