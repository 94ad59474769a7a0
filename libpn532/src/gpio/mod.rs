// libpn532/src/gpio/mod.rs

pub mod hal;
pub mod mock;
#[cfg(feature = "rpi")]
pub mod rpi;
pub mod traits;

pub use hal::{HalInput, HalOutput};
pub use mock::MockGpio;
#[cfg(feature = "rpi")]
pub use rpi::RppalGpio;
pub use traits::{GpioProvider, InputLine, OutputLine, PinId, SpiPins};
