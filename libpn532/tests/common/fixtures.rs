// fixtures.rs: payloads and frames shared by the integration tests

use libpn532::protocol::Frame;

pub fn sample_uid_bytes() -> [u8; 4] {
    [0x04, 0xA2, 0x3B, 0x7F]
}

pub fn sample_long_uid_bytes() -> [u8; 7] {
    [0x04, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66]
}

pub fn firmware_bytes() -> [u8; 4] {
    [0x32, 0x01, 0x06, 0x07]
}

/// GetFirmwareVersion reply frame as clocked in, echo byte first
pub fn firmware_frame() -> Vec<u8> {
    let mut payload = vec![0xD5u8, 0x03];
    payload.extend_from_slice(&firmware_bytes());
    Frame::encode(&payload).unwrap()
}

/// ACK with its two start-code bytes swapped
pub fn permuted_ack() -> Vec<u8> {
    hex::decode("0100ff0000ff00").unwrap()
}

/// InListPassiveTarget data reporting `count` targets with one UID
pub fn passive_target_payload(count: u8, uid: &[u8]) -> Vec<u8> {
    let mut data = vec![count, 0x01, 0x00, 0x04, 0x08, uid.len() as u8];
    data.extend_from_slice(uid);
    data
}
