// libpn532/src/transport/bitbang.rs

//! Software SPI master built from four GPIO lines.
//!
//! Every bit is one full clock pulse: the clock leaves its idle level and
//! returns to it. Data-out is driven before the pulse and held across it;
//! data-in is sampled exactly once per bit, right after the leading edge
//! (modes 0/2) or right after the trailing edge (modes 1/3).

use log::debug;

use crate::Result;
use crate::gpio::{GpioProvider, InputLine, OutputLine, SpiPins};
use crate::transport::traits::Spi;
use crate::types::{BitOrder, ClockConfig, Level, SpiMode};

/// Mode and bit order a `BitBangSpi` starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpiConfig {
    pub mode: SpiMode,
    pub bit_order: BitOrder,
}

/// Bit-banged SPI over an output clock, output data, input data and an
/// active-low chip select.
pub struct BitBangSpi<O, I> {
    sclk: O,
    mosi: O,
    miso: I,
    cs: O,
    mode: SpiMode,
    clock: ClockConfig,
    order: BitOrder,
}

impl<O: OutputLine, I: InputLine> BitBangSpi<O, I> {
    /// Provision the four lines from `gpio`: clock at its idle level, data
    /// out low, data in as input and chip select released (high).
    pub fn start<G>(gpio: &mut G, pins: SpiPins, config: SpiConfig) -> Result<Self>
    where
        G: GpioProvider<Output = O, Input = I>,
    {
        let clock = config.mode.clock_config();
        let sclk = gpio.output(pins.sclk, clock.idle_level)?;
        let mosi = gpio.output(pins.mosi, Level::Low)?;
        let miso = gpio.input(pins.miso)?;
        let cs = gpio.output(pins.cs, Level::High)?;
        debug!(
            "bit-bang spi started on sclk={} mosi={} miso={} cs={} ({}, {})",
            pins.sclk, pins.mosi, pins.miso, pins.cs, config.mode, config.bit_order
        );
        Ok(Self {
            sclk,
            mosi,
            miso,
            cs,
            mode: config.mode,
            clock,
            order: config.bit_order,
        })
    }

    /// Build from lines that are already provisioned, e.g. `embedded-hal`
    /// pins wrapped in `gpio::HalOutput` / `gpio::HalInput`.
    pub fn from_lines(sclk: O, mosi: O, miso: I, cs: O, config: SpiConfig) -> Self {
        let mut spi = Self {
            sclk,
            mosi,
            miso,
            cs,
            mode: config.mode,
            clock: config.mode.clock_config(),
            order: config.bit_order,
        };
        spi.sclk.set_level(spi.clock.idle_level);
        spi.cs.set_high();
        spi
    }

    /// Change mode from a raw selector; anything outside 0..=3 is rejected
    /// and leaves the current mode in place.
    pub fn set_mode(&mut self, mode: u8) -> Result<()> {
        let mode = SpiMode::try_from(mode)?;
        self.configure(mode);
        Ok(())
    }

    /// Change bit order from its name (`"msb"`, `"LSBFIRST"`, ...).
    pub fn set_bit_order(&mut self, order: &str) -> Result<()> {
        let order = order.parse::<BitOrder>()?;
        self.configure_bit_order(order);
        Ok(())
    }

    pub fn mode(&self) -> SpiMode {
        self.mode
    }

    pub fn clock_config(&self) -> ClockConfig {
        self.clock
    }

    pub fn bit_order(&self) -> BitOrder {
        self.order
    }

    /// Give the lines back as `(sclk, mosi, miso, cs)`.
    pub fn release(self) -> (O, O, I, O) {
        (self.sclk, self.mosi, self.miso, self.cs)
    }

    /// One bit-cell. Drives `out` first when given and returns the level
    /// sampled on the edge the mode dictates.
    fn clock_bit(&mut self, out: Option<bool>) -> Level {
        if let Some(bit) = out {
            self.mosi.set_level(Level::from(bit));
        }
        let idle = self.clock.idle_level;

        self.sclk.set_level(!idle);
        let mut sampled = Level::Low;
        if self.clock.sample_on_leading_edge {
            sampled = self.miso.level();
        }

        self.sclk.set_level(idle);
        if !self.clock.sample_on_leading_edge {
            sampled = self.miso.level();
        }
        sampled
    }

    fn read_byte(&mut self, out: Option<u8>) -> u8 {
        let mut byte = 0u8;
        for step in 0..8 {
            let bit = out.map(|b| self.order.bit(b, step));
            if self.clock_bit(bit).is_high() {
                byte |= self.order.mask(step);
            }
        }
        byte
    }
}

impl<O: OutputLine, I: InputLine> Spi for BitBangSpi<O, I> {
    fn configure(&mut self, mode: SpiMode) {
        self.mode = mode;
        self.clock = mode.clock_config();
        self.sclk.set_level(self.clock.idle_level);
        debug!("spi clock set to {}", mode);
    }

    fn configure_bit_order(&mut self, order: BitOrder) {
        self.order = order;
        debug!("spi bit order set to {}", order);
    }

    fn select(&mut self) {
        self.cs.set_low();
    }

    fn deselect(&mut self) {
        self.cs.set_high();
    }

    fn write(&mut self, data: &[u8], select_before: bool, deselect_after: bool) {
        if select_before {
            self.select();
        }
        let idle = self.clock.idle_level;
        for &byte in data {
            for step in 0..8 {
                self.mosi.set_level(Level::from(self.order.bit(byte, step)));
                self.sclk.set_level(!idle);
                self.sclk.set_level(idle);
            }
        }
        if deselect_after {
            self.deselect();
        }
    }

    fn read(&mut self, len: usize, select_before: bool, deselect_after: bool) -> Vec<u8> {
        if select_before {
            self.select();
        }
        let out: Vec<u8> = (0..len).map(|_| self.read_byte(None)).collect();
        if deselect_after {
            self.deselect();
        }
        out
    }

    fn transfer(&mut self, data: &[u8], select_before: bool, deselect_after: bool) -> Vec<u8> {
        if select_before {
            self.select();
        }
        let out: Vec<u8> = data.iter().map(|&b| self.read_byte(Some(b))).collect();
        if deselect_after {
            self.deselect();
        }
        out
    }
}
