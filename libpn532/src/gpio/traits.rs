// libpn532/src/gpio/traits.rs

use crate::Result;
use crate::types::Level;

/// Pin number in the provider's numbering scheme (BCM on a Raspberry Pi).
pub type PinId = u8;

/// A provisioned digital output. Setting a level cannot fail once the
/// line exists.
pub trait OutputLine {
    fn set_level(&mut self, level: Level);

    fn set_high(&mut self) {
        self.set_level(Level::High);
    }

    fn set_low(&mut self) {
        self.set_level(Level::Low);
    }
}

/// A provisioned digital input.
pub trait InputLine {
    fn level(&mut self) -> Level;

    fn is_high(&mut self) -> bool {
        self.level().is_high()
    }
}

/// Digital I/O capability the SPI transport is built on. Provisioning is
/// the only fallible step.
pub trait GpioProvider {
    type Output: OutputLine;
    type Input: InputLine;

    /// Configure `pin` as an output driven to `initial`.
    fn output(&mut self, pin: PinId, initial: Level) -> Result<Self::Output>;

    /// Configure `pin` as an input.
    fn input(&mut self, pin: PinId) -> Result<Self::Input>;
}

/// Lines of a 4-wire software SPI bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpiPins {
    pub sclk: PinId,
    pub mosi: PinId,
    pub miso: PinId,
    pub cs: PinId,
}

impl Default for SpiPins {
    /// Reference wiring of a PN532 breakout on a Raspberry Pi (BCM numbers).
    fn default() -> Self {
        Self {
            sclk: 27,
            mosi: 4,
            miso: 17,
            cs: 22,
        }
    }
}
