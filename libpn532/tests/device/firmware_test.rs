#[path = "../common/mod.rs"]
mod common;

use libpn532::Error;

#[test]
fn firmware_version_against_simulated_chip() {
    common::helpers::init_logging();
    let (mock, mut dev) = common::helpers::mock_device();
    mock.push_ack();
    mock.push_reply(common::fixtures::firmware_frame());

    let fw = dev.get_firmware_version().unwrap();
    assert_eq!(fw.as_bytes(), &[0x32, 0x01, 0x06, 0x07]);
    assert_eq!(fw.ic(), 0x32);
    assert!(!mock.is_selected());
}

#[test]
fn permuted_ack_is_fatal() {
    let (mock, mut dev) = common::helpers::mock_device();
    mock.push_reply(common::fixtures::permuted_ack());
    mock.push_reply(common::fixtures::firmware_frame());

    match dev.get_firmware_version() {
        Err(Error::AckMismatch { actual }) => {
            assert_eq!(actual, common::fixtures::permuted_ack());
        }
        other => panic!("expected AckMismatch, got {:?}", other),
    }
    // the response frame was never read
    assert_eq!(mock.pending_replies(), 1);
}

#[test]
fn silent_chip_is_not_detected() {
    let (mock, mut dev) = common::helpers::mock_device();
    mock.set_never_ready(true);
    assert!(matches!(
        dev.get_firmware_version(),
        Err(Error::DeviceNotDetected)
    ));
}

#[test]
fn ack_then_silence_is_not_detected() {
    let (mock, dev) = common::helpers::mock_device();
    mock.push_ack();
    assert!(matches!(dev.initialize(), Err(Error::DeviceNotDetected)));
}

#[test]
fn short_firmware_reply_is_rejected() {
    let (mock, mut dev) = common::helpers::mock_device();
    mock.push_ack();
    mock.push_response(libpn532::Command::GetFirmwareVersion, &[0x32, 0x01])
        .unwrap();
    assert!(matches!(
        dev.get_firmware_version(),
        Err(Error::InvalidLength { .. })
    ));
}
