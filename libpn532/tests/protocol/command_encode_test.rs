use libpn532::CardBaud;
use libpn532::protocol::codec::encode_command_frame;
use libpn532::protocol::{
    Command, SAM_TIMEOUT_1S, SamMode, in_list_passive_target_params, sam_configuration_params,
};

#[test]
fn firmware_version_frame() {
    let frame = encode_command_frame(Command::GetFirmwareVersion, &[]).unwrap();
    assert_eq!(hex::encode(&frame), "010000ff02fed4022a00");
}

#[test]
fn sam_configuration_frame() {
    let params = sam_configuration_params(SamMode::Normal, SAM_TIMEOUT_1S, true);
    assert_eq!(params, [0x01, 0x14, 0x01]);
    let frame = encode_command_frame(Command::SamConfiguration, &params).unwrap();
    assert_eq!(hex::encode(&frame), "010000ff05fbd4140114010200");
}

#[test]
fn passive_target_frame_per_baud() {
    for (baud, code) in [
        (CardBaud::Iso14443A, 0x00u8),
        (CardBaud::Felica212, 0x01),
        (CardBaud::Felica424, 0x02),
        (CardBaud::Iso14443B, 0x03),
        (CardBaud::Jewel, 0x04),
    ] {
        let params = in_list_passive_target_params(1, baud);
        assert_eq!(params, [0x01, code]);
        let frame = encode_command_frame(Command::InListPassiveTarget, &params).unwrap();
        assert_eq!(frame[9], code);
        assert_eq!(frame.len(), 4 + 8);
    }
}

#[test]
fn oversized_params_rejected() {
    let params = vec![0u8; 254];
    assert!(encode_command_frame(Command::InDataExchange, &params).is_err());
}
