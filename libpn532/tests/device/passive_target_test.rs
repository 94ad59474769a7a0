#[path = "../common/mod.rs"]
mod common;

use std::time::Instant;

use libpn532::device::{Device, Initialized};
use libpn532::transport::MockSpi;
use libpn532::{CardBaud, Command, Error, ms};
use serial_test::serial;

fn card_reply(mock: &MockSpi, count: u8, uid: &[u8]) {
    mock.push_ack();
    mock.push_response(
        Command::InListPassiveTarget,
        &common::fixtures::passive_target_payload(count, uid),
    )
    .unwrap();
}

fn ready_device() -> (MockSpi, Device<Initialized>) {
    common::helpers::initialized_mock_device().unwrap()
}

#[test]
fn reads_uid() {
    let (mock, mut dev) = ready_device();
    card_reply(&mock, 1, &common::fixtures::sample_uid_bytes());
    let uid = dev
        .read_passive_target(CardBaud::Iso14443A, ms(0))
        .unwrap()
        .unwrap();
    assert_eq!(uid.as_bytes(), &common::fixtures::sample_uid_bytes());
    assert_eq!(uid.to_hex(), "04a23b7f");
}

#[test]
fn two_cards_is_fatal() {
    let (mock, mut dev) = ready_device();
    card_reply(&mock, 2, &common::fixtures::sample_uid_bytes());
    assert!(matches!(
        dev.read_passive_target(CardBaud::Iso14443A, ms(0)),
        Err(Error::MultipleTargets { count: 2 })
    ));
}

#[test]
fn long_uid_is_fatal() {
    let (mock, mut dev) = ready_device();
    mock.push_ack();
    mock.push_response(
        Command::InListPassiveTarget,
        &[0x01, 0x01, 0x00, 0x04, 0x08, 0x08, 1, 2, 3, 4, 5, 6, 7, 8],
    )
    .unwrap();
    assert!(matches!(
        dev.read_passive_target(CardBaud::Iso14443A, ms(0)),
        Err(Error::UidTooLong { len: 8 })
    ));
}

#[test]
#[serial]
fn no_card_returns_none_after_timeout() {
    common::helpers::init_logging();
    let mock = MockSpi::new();
    common::helpers::seed_firmware(&mock).unwrap();
    let config = libpn532::Pn532Config {
        poll_interval_ms: 10,
        ..common::helpers::fast_config()
    };
    let mut dev = Device::with_config(Box::new(mock.clone()), config)
        .initialize()
        .unwrap();

    mock.set_never_ready(true);
    let started = Instant::now();
    let r = dev.read_passive_target(CardBaud::Iso14443A, ms(100)).unwrap();
    let elapsed = started.elapsed();

    assert!(r.is_none());
    assert!(elapsed >= ms(100), "returned early after {:?}", elapsed);
    assert!(elapsed < ms(400), "returned late after {:?}", elapsed);
    assert!(mock.status_polls() > 1);
}
