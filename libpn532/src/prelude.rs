// libpn532/src/prelude.rs

pub use crate::device::{Device, DeviceBuilder, Pn532Config};
pub use crate::device::{Initialized, Uninitialized};
pub use crate::gpio::{GpioProvider, SpiPins};
pub use crate::protocol::{Command, Frame};
pub use crate::scanner::TagScanner;
pub use crate::transport::{BitBangSpi, Spi, SpiConfig};
pub use crate::{
    BitOrder, CardBaud, ClockConfig, Error, FirmwareVersion, Level, Result, SpiMode, Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_timeout, ms};
