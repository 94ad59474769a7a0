#[path = "../common/mod.rs"]
mod common;

use libpn532::Error;
use libpn532::protocol::Frame;
use libpn532::protocol::codec::decode_response_frame;
use libpn532::protocol::Command;

#[test]
fn firmware_fixture_decodes() {
    let raw = common::fixtures::firmware_frame();
    let data = decode_response_frame(Command::GetFirmwareVersion, &raw).unwrap();
    assert_eq!(data, common::fixtures::firmware_bytes().to_vec());
}

#[test]
fn over_read_buffer_from_the_wire() {
    // a 14-byte read for a 4-byte reply: frame plus trailing idle bytes
    let mut raw = common::fixtures::firmware_frame();
    raw.resize(Frame::read_len(4 + 2), 0x00);
    assert_eq!(raw.len(), 14);
    let data = decode_response_frame(Command::GetFirmwareVersion, &raw).unwrap();
    assert_eq!(data.len(), 4);
}

#[test]
fn several_stray_zeros_before_start_code() {
    let frame = common::fixtures::firmware_frame();
    let mut padded = vec![0x01, 0x00, 0x00, 0x00];
    padded.extend_from_slice(&frame[2..]);
    assert_eq!(
        Frame::decode(&padded).unwrap(),
        Frame::decode(&frame).unwrap()
    );
}

#[test]
fn only_zeros_after_echo() {
    let mut raw = vec![0x00u8; 14];
    raw[0] = 0x01;
    assert!(matches!(Frame::decode(&raw), Err(Error::TruncatedPreamble)));
}

#[test]
fn corrupted_payload_is_never_returned() {
    let mut raw = common::fixtures::firmware_frame();
    raw[7] ^= 0x10;
    match decode_response_frame(Command::GetFirmwareVersion, &raw) {
        Err(Error::ChecksumMismatch { .. }) => {}
        other => panic!("expected checksum mismatch, got {:?}", other),
    }
}
