// libpn532/src/gpio/hal.rs

//! Adapters for `embedded-hal` 1.0 pins.
//!
//! Only pins whose error type is `Infallible` are accepted: the bit-banged
//! transport has no way to report a failed edge halfway through a byte.

use core::convert::Infallible;

use embedded_hal::digital::{InputPin, OutputPin};

use crate::gpio::traits::{InputLine, OutputLine};
use crate::types::Level;

/// An `embedded-hal` output pin used as a transport line.
#[derive(Debug)]
pub struct HalOutput<P>(pub P);

/// An `embedded-hal` input pin used as a transport line.
#[derive(Debug)]
pub struct HalInput<P>(pub P);

impl<P> HalOutput<P> {
    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P> HalInput<P> {
    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P: OutputPin<Error = Infallible>> OutputLine for HalOutput<P> {
    fn set_level(&mut self, level: Level) {
        let res = match level {
            Level::High => self.0.set_high(),
            Level::Low => self.0.set_low(),
        };
        match res {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
}

impl<P: InputPin<Error = Infallible>> InputLine for HalInput<P> {
    fn level(&mut self) -> Level {
        match self.0.is_high() {
            Ok(high) => Level::from(high),
            Err(never) => match never {},
        }
    }
}
