use libpn532::protocol::Command;
use libpn532::transport::{MockSpi, Spi};

fn status(m: &mut MockSpi) -> bool {
    m.transfer(&[0x02, 0x00], true, true)[1] == 0x01
}

fn data_read(m: &mut MockSpi, len: usize) -> Vec<u8> {
    let mut req = vec![0u8; len];
    req[0] = 0x03;
    m.transfer(&req, true, true)
}

#[test]
fn command_exchange_shape() {
    let mut m = MockSpi::new();
    m.push_ack();
    m.push_response(Command::GetFirmwareVersion, &[0x32, 0x01, 0x06, 0x07])
        .unwrap();

    assert!(status(&mut m));
    assert_eq!(data_read(&mut m, 7), hex::decode("010000ff00ff00").unwrap());
    assert!(status(&mut m));
    let raw = data_read(&mut m, 14);
    assert_eq!(&raw[..8], &hex::decode("010000ff06fad503").unwrap()[..]);
    assert!(!status(&mut m));
    assert_eq!(m.selects(), 5);
}

#[test]
fn clones_share_state() {
    let a = MockSpi::new();
    let mut b = a.clone();
    b.write(&[0x01, 0x00], false, false);
    assert_eq!(a.written_frames(), vec![vec![0x01, 0x00]]);
}
