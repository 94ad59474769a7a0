// libpn532/src/transport/traits.rs

use crate::types::{BitOrder, SpiMode};

/// Byte-level SPI master abstracted away from the PN532 protocol logic.
///
/// Once the bus is configured every operation is infallible: a silent or
/// absent peripheral reads back as whatever the data-in line floats to.
/// The `select_before` / `deselect_after` flags let a caller frame several
/// calls into one chip-select window.
pub trait Spi {
    /// Set clock polarity/phase and drive the clock to its idle level.
    fn configure(&mut self, mode: SpiMode);

    fn configure_bit_order(&mut self, order: BitOrder);

    /// Assert chip select (drive it low).
    fn select(&mut self);

    /// Release chip select (drive it high).
    fn deselect(&mut self);

    /// Clock out every byte of `data`, discarding data-in.
    fn write(&mut self, data: &[u8], select_before: bool, deselect_after: bool);

    /// Clock in `len` bytes while data-out is left untouched.
    fn read(&mut self, len: usize, select_before: bool, deselect_after: bool) -> Vec<u8>;

    /// Full duplex: clock out `data` and return the bytes sampled meanwhile.
    fn transfer(&mut self, data: &[u8], select_before: bool, deselect_after: bool) -> Vec<u8>;
}

impl<T: Spi + ?Sized> Spi for &mut T {
    fn configure(&mut self, mode: SpiMode) {
        (**self).configure(mode)
    }

    fn configure_bit_order(&mut self, order: BitOrder) {
        (**self).configure_bit_order(order)
    }

    fn select(&mut self) {
        (**self).select()
    }

    fn deselect(&mut self) {
        (**self).deselect()
    }

    fn write(&mut self, data: &[u8], select_before: bool, deselect_after: bool) {
        (**self).write(data, select_before, deselect_after)
    }

    fn read(&mut self, len: usize, select_before: bool, deselect_after: bool) -> Vec<u8> {
        (**self).read(len, select_before, deselect_after)
    }

    fn transfer(&mut self, data: &[u8], select_before: bool, deselect_after: bool) -> Vec<u8> {
        (**self).transfer(data, select_before, deselect_after)
    }
}

impl<T: Spi + ?Sized> Spi for Box<T> {
    fn configure(&mut self, mode: SpiMode) {
        (**self).configure(mode)
    }

    fn configure_bit_order(&mut self, order: BitOrder) {
        (**self).configure_bit_order(order)
    }

    fn select(&mut self) {
        (**self).select()
    }

    fn deselect(&mut self) {
        (**self).deselect()
    }

    fn write(&mut self, data: &[u8], select_before: bool, deselect_after: bool) {
        (**self).write(data, select_before, deselect_after)
    }

    fn read(&mut self, len: usize, select_before: bool, deselect_after: bool) -> Vec<u8> {
        (**self).read(len, select_before, deselect_after)
    }

    fn transfer(&mut self, data: &[u8], select_before: bool, deselect_after: bool) -> Vec<u8> {
        (**self).transfer(data, select_before, deselect_after)
    }
}
