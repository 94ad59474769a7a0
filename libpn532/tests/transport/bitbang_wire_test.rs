#[path = "../common/mod.rs"]
mod common;

use std::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use libpn532::gpio::mock::{InputSource, MockGpio, MockInput, MockOutput};
use libpn532::gpio::{HalInput, HalOutput, SpiPins};
use libpn532::transport::{BitBangSpi, Spi, SpiConfig};
use libpn532::{BitOrder, Device, Error, Level, SpiMode};

fn pins() -> SpiPins {
    SpiPins::default()
}

fn start(gpio: &mut MockGpio, bit_order: BitOrder) -> BitBangSpi<MockOutput, MockInput> {
    let config = SpiConfig {
        mode: SpiMode::Mode0,
        bit_order,
    };
    BitBangSpi::start(gpio, pins(), config).unwrap()
}

fn wire(gpio: &MockGpio) -> Vec<u8> {
    gpio.wire_bits(pins().mosi, pins().sclk, Level::Low)
        .into_iter()
        .map(|l| l.is_high() as u8)
        .collect()
}

/// Rebuild bytes from the wire, eight bits per byte in the given order.
fn bytes_from_wire(bits: &[u8], order: BitOrder) -> Vec<u8> {
    bits.chunks(8)
        .map(|cell| {
            cell.iter()
                .enumerate()
                .filter(|(_, b)| **b == 1)
                .fold(0u8, |acc, (step, _)| acc | order.mask(step))
        })
        .collect()
}

#[test]
fn msb_and_lsb_are_mirrored_on_the_wire() {
    let mut msb_gpio = MockGpio::new();
    let mut msb = start(&mut msb_gpio, BitOrder::MostSignificantFirst);
    msb_gpio.clear_events();
    msb.write(&[0b1011_0000], true, true);

    let mut lsb_gpio = MockGpio::new();
    let mut lsb = start(&mut lsb_gpio, BitOrder::LeastSignificantFirst);
    lsb_gpio.clear_events();
    lsb.write(&[0b1011_0000], true, true);

    let msb_bits = wire(&msb_gpio);
    let mut lsb_bits = wire(&lsb_gpio);
    assert_eq!(msb_bits, vec![1, 0, 1, 1, 0, 0, 0, 0]);
    lsb_bits.reverse();
    assert_eq!(msb_bits, lsb_bits);
}

#[test]
fn loopback_recovers_byte_in_both_orders() {
    for order in [BitOrder::MostSignificantFirst, BitOrder::LeastSignificantFirst] {
        let mut gpio = MockGpio::new();
        gpio.set_input_source(pins().miso, InputSource::Loopback(pins().mosi));
        let mut spi = start(&mut gpio, order);
        assert_eq!(spi.transfer(&[0b1011_0000], true, true), vec![0b1011_0000]);
    }
}

#[test]
fn frame_write_decodes_lsb_first() {
    let mut gpio = MockGpio::new();
    let mut spi = start(&mut gpio, BitOrder::LeastSignificantFirst);
    gpio.clear_events();
    let frame = common::fixtures::firmware_frame();
    spi.write(&frame, true, true);
    let bits = wire(&gpio);
    assert_eq!(bits.len(), frame.len() * 8);
    assert_eq!(bytes_from_wire(&bits, BitOrder::LeastSignificantFirst), frame);
}

#[test]
fn every_mode_samples_once_per_bit() {
    for mode in 0u8..4 {
        let mut gpio = MockGpio::new();
        gpio.set_input_source(pins().miso, InputSource::Constant(Level::High));
        let mut spi = start(&mut gpio, BitOrder::MostSignificantFirst);
        spi.set_mode(mode).unwrap();
        gpio.clear_events();
        assert_eq!(spi.read(3, false, false), vec![0xFF; 3]);
        assert_eq!(gpio.samples(pins().miso), 24, "mode {}", mode);
    }
}

#[test]
fn silent_bus_fails_bring_up() {
    common::helpers::init_logging();
    let mut gpio = MockGpio::new();
    let spi = start(&mut gpio, BitOrder::MostSignificantFirst);
    let device = Device::with_config(Box::new(spi), common::helpers::fast_config());
    assert!(matches!(device.initialize(), Err(Error::DeviceNotDetected)));

    // the firmware query went out LSB first even though the bus started MSB
    let bits = wire(&gpio);
    let bytes = bytes_from_wire(&bits, BitOrder::LeastSignificantFirst);
    let expected = hex::decode("010000ff02fed4022a00").unwrap();
    assert_eq!(&bytes[..expected.len()], &expected[..]);
    assert_eq!(gpio.level(pins().cs), Some(Level::High));
}

#[derive(Default)]
struct SharedPin {
    high: std::rc::Rc<std::cell::Cell<bool>>,
}

impl ErrorType for SharedPin {
    type Error = Infallible;
}

impl OutputPin for SharedPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.high.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.high.set(true);
        Ok(())
    }
}

impl InputPin for SharedPin {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.high.get())
    }
}

#[test]
fn embedded_hal_pins_loop_back() {
    let line = std::rc::Rc::new(std::cell::Cell::new(false));
    let mosi = SharedPin { high: line.clone() };
    let miso = SharedPin { high: line };
    let cs = SharedPin::default();
    let cs_level = cs.high.clone();

    let mut spi = BitBangSpi::from_lines(
        HalOutput(SharedPin::default()),
        HalOutput(mosi),
        HalInput(miso),
        HalOutput(cs),
        SpiConfig::default(),
    );
    assert!(cs_level.get());
    assert_eq!(spi.transfer(&[0xA5, 0x0F], true, false), vec![0xA5, 0x0F]);
    assert!(!cs_level.get());
    spi.deselect();
    assert!(cs_level.get());
}
