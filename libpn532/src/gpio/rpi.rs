// libpn532/src/gpio/rpi.rs

//! Raspberry Pi GPIO provider backed by rppal.

use log::debug;
use rppal::gpio;

use crate::gpio::traits::{GpioProvider, InputLine, OutputLine, PinId};
use crate::types::Level;
use crate::{Error, Result};

/// Converts a `gpio::Error` into the crate error with a readable message.
fn gpio_error(e: gpio::Error) -> Error {
    match e {
        gpio::Error::PermissionDenied(path) => {
            Error::Gpio(format!("cannot open {}: permission denied", path))
        }
        gpio::Error::PinNotAvailable(pin) => Error::Gpio(format!("unknown pin number {}", pin)),
        e => Error::Gpio(e.to_string()),
    }
}

fn to_rppal(level: Level) -> gpio::Level {
    match level {
        Level::High => gpio::Level::High,
        Level::Low => gpio::Level::Low,
    }
}

/// GPIO provider for the Raspberry Pi header using the rppal library.
pub struct RppalGpio {
    chip: gpio::Gpio,
}

impl RppalGpio {
    /// Open the default GPIO chip.
    pub fn new() -> Result<Self> {
        let chip = gpio::Gpio::new().map_err(gpio_error)?;
        Ok(Self { chip })
    }
}

impl GpioProvider for RppalGpio {
    type Output = gpio::OutputPin;
    type Input = gpio::InputPin;

    fn output(&mut self, pin: PinId, initial: Level) -> Result<Self::Output> {
        let p = self.chip.get(pin).map_err(gpio_error)?;
        debug!("gpio {} -> output ({})", pin, initial);
        Ok(match initial {
            Level::High => p.into_output_high(),
            Level::Low => p.into_output_low(),
        })
    }

    fn input(&mut self, pin: PinId) -> Result<Self::Input> {
        let p = self.chip.get(pin).map_err(gpio_error)?;
        debug!("gpio {} -> input", pin);
        Ok(p.into_input())
    }
}

impl OutputLine for gpio::OutputPin {
    fn set_level(&mut self, level: Level) {
        self.write(to_rppal(level));
    }
}

impl InputLine for gpio::InputPin {
    fn level(&mut self) -> Level {
        match self.read() {
            gpio::Level::High => Level::High,
            gpio::Level::Low => Level::Low,
        }
    }
}
