//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockSpi setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::device::{Device, Initialized, Pn532Config, Uninitialized};
use crate::protocol::Command;
use crate::transport::MockSpi;
use crate::Result;

/// Firmware reply of a PN532 v1.6 supporting ISO14443A/B and FeliCa
#[doc(hidden)]
pub const FIRMWARE_BYTES: [u8; 4] = [0x32, 0x01, 0x06, 0x07];

/// Timing with every delay set to zero, so mocked exchanges run instantly.
#[doc(hidden)]
pub fn fast_config() -> Pn532Config {
    Pn532Config {
        wakeup_delay_ms: 0,
        select_settle_ms: 0,
        poll_interval_ms: 0,
        default_timeout_ms: 0,
    }
}

/// InListPassiveTarget response data for one ISO14443A target.
#[doc(hidden)]
pub fn passive_target_data(uid: &[u8]) -> Vec<u8> {
    let mut data = vec![0x01, 0x01, 0x00, 0x04, 0x08, uid.len() as u8];
    data.extend_from_slice(uid);
    data
}

/// Queue the ACK and firmware reply the bring-up sequence expects.
#[doc(hidden)]
pub fn seed_firmware(mock: &MockSpi) -> Result<()> {
    mock.push_ack();
    mock.push_response(Command::GetFirmwareVersion, &FIRMWARE_BYTES)
}

/// A device on a fresh MockSpi with zero delays, plus a handle to the mock.
#[doc(hidden)]
pub fn mock_device() -> (MockSpi, Device<Uninitialized>) {
    let mock = MockSpi::new();
    let device = Device::with_config(Box::new(mock.clone()), fast_config());
    (mock, device)
}

/// Convenience: create and initialize a Device<Initialized> backed by a
/// MockSpi that answered the firmware query.
#[doc(hidden)]
pub fn initialized_mock_device() -> Result<(MockSpi, Device<Initialized>)> {
    let (mock, device) = mock_device();
    seed_firmware(&mock)?;
    let initialized = device.initialize()?;
    Ok((mock, initialized))
}
