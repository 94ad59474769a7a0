#![cfg(feature = "rpi")]

//! Scan for ISO14443A cards on a PN532 wired to a Raspberry Pi header.
//!
//! Usage:
//!   cargo run -p libpn532 --example rpi_scan --features rpi --release
//!
//! Wiring (BCM): SCLK 27, MOSI 4, MISO 17, CS 22.

use std::thread;
use std::time::Duration;

use anyhow::Context;
use libpn532::gpio::{RppalGpio, SpiPins};
use libpn532::transport::{BitBangSpi, SpiConfig};
use libpn532::{Device, TagScanner};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut gpio = RppalGpio::new().context("opening GPIO")?;
    let spi = BitBangSpi::start(&mut gpio, SpiPins::default(), SpiConfig::default())
        .context("provisioning SPI lines")?;

    let mut device = Device::new_with_transport(Box::new(spi))
        .initialize()
        .context("bringing up the PN532")?;
    let firmware = device.get_firmware_version()?;
    println!("Found {}", firmware);
    device.use_sam_configuration()?;

    let mut scanner = TagScanner::new(device);
    println!("Waiting for cards, Ctrl-C to stop");
    loop {
        match scanner.scan() {
            Ok(Some(uid)) => println!("card {}", uid.to_hex()),
            Ok(None) => {}
            Err(e) => eprintln!("read failed: {}", e),
        }
        thread::sleep(Duration::from_millis(100));
    }
}
