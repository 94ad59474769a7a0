// libpn532/src/protocol/responses.rs

//! Decoders for response data, i.e. the bytes after `D5 <opcode+1>`.

use crate::protocol::parser::{byte_at, ensure_len, slice_at};
use crate::types::{FirmwareVersion, Uid};
use crate::{Error, Result};

/// Decode a GetFirmwareVersion reply (IC, Ver, Rev, Support).
pub fn decode_firmware_version(data: &[u8]) -> Result<FirmwareVersion> {
    ensure_len(data, 4)?;
    FirmwareVersion::try_from(&data[..4])
}

/// Decode an InListPassiveTarget reply for a single ISO14443A target:
/// `[NbTg] [Tg] [SENS_RES(2)] [SEL_RES] [NFCIDLength] [NFCID1..]`
pub fn decode_passive_target(data: &[u8]) -> Result<Uid> {
    let count = byte_at(data, 0)?;
    if count != 1 {
        return Err(Error::MultipleTargets { count });
    }

    let uid_len = byte_at(data, 5)?;
    if uid_len as usize > crate::constants::PN532_MAX_UID_LEN {
        return Err(Error::UidTooLong { len: uid_len });
    }

    Uid::try_from(slice_at(data, 6, uid_len as usize)?)
}
