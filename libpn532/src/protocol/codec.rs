// libpn532/src/protocol/codec.rs

use crate::Result;
use crate::protocol::commands::{Command, encode_command};
use crate::protocol::frame::Frame;
use crate::protocol::parser::{expect_direction, expect_response_code};

/// Encode a command and its parameters into a full outbound frame.
pub fn encode_command_frame(cmd: Command, params: &[u8]) -> Result<Vec<u8>> {
    Frame::encode(&encode_command(cmd, params))
}

/// Decode a raw inbound buffer, check it answers `cmd` and return the
/// response data after the `D5 <opcode+1>` header.
pub fn decode_response_frame(cmd: Command, raw: &[u8]) -> Result<Vec<u8>> {
    let data = Frame::decode(raw)?;
    expect_direction(&data)?;
    expect_response_code(&data, 1, cmd.response_code())?;
    Ok(data[2..].to_vec())
}
