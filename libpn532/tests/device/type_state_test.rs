#[path = "../common/mod.rs"]
mod common;

use libpn532::device::{Device, DeviceBuilder, Initialized};
use libpn532::transport::MockSpi;

#[test]
fn initialize_transitions_state() {
    let mock = MockSpi::new();
    common::helpers::seed_firmware(&mock).unwrap();

    let device = DeviceBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .with_config(common::helpers::fast_config())
        .build_uninitialized()
        .unwrap();

    let initialized: Device<Initialized> = device.initialize().unwrap();
    assert_eq!(mock.written_frames().len(), 1);
    assert_eq!(mock.pending_replies(), 0);

    // the bus can be taken back after use
    let _spi = initialized.release();
}

#[test]
fn firmware_is_queryable_after_initialize() {
    let (mock, mut dev) = common::helpers::initialized_mock_device().unwrap();
    common::helpers::seed_firmware(&mock).unwrap();
    let fw = dev.get_firmware_version().unwrap();
    assert_eq!(fw.as_bytes(), &common::fixtures::firmware_bytes());
}
