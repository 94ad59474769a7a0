// libpn532/src/protocol/commands.rs

//! Encoders for the host->PN532 command data (TFI + opcode + parameters)
//! and for the parameter blocks of the commands the driver issues.

pub use crate::constants::Command;
use crate::constants::PN532_HOST_TO_PN532;
use crate::types::CardBaud;

/// Encode `D4 <opcode> <params..>`, the data portion of a command frame.
pub fn encode_command(cmd: Command, params: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(2 + params.len());
    buf.push(PN532_HOST_TO_PN532);
    buf.push(cmd.code());
    buf.extend_from_slice(params);
    buf
}

/// SAM (security access module) operating mode for SAMConfiguration
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamMode {
    /// The SAM is not used
    #[default]
    Normal = 0x01,
    /// PN532 and SAM are seen as one contactless card from outside
    VirtualCard = 0x02,
    /// The host reaches the SAM with the standard PCD commands
    WiredCard = 0x03,
    /// PN532 and SAM are visible as two separate targets
    DualCard = 0x04,
}

/// Timeout used by the virtual card mode, in units of 50 ms (0x14 = 1 s).
pub const SAM_TIMEOUT_1S: u8 = 0x14;

/// SAMConfiguration parameters: mode, timeout (x50 ms) and IRQ pin use.
pub fn sam_configuration_params(mode: SamMode, timeout: u8, use_irq_pin: bool) -> [u8; 3] {
    [mode as u8, timeout, use_irq_pin as u8]
}

/// InListPassiveTarget parameters: max targets and baud/modulation.
pub fn in_list_passive_target_params(max_targets: u8, baud: CardBaud) -> [u8; 2] {
    [max_targets, baud.code()]
}
