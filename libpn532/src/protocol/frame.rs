// libpn532/src/protocol/frame.rs

use crate::constants::{
    PN532_FRAME_OVERHEAD, PN532_MAX_PAYLOAD_LEN, PN532_POSTAMBLE, PN532_PREAMBLE,
    PN532_SPI_DATAWRITE, PN532_SPI_READ_ECHO, PN532_START_CODE,
};
use crate::protocol::checksum::{dcs, lcs, verify};
use crate::protocol::parser::{byte_at, slice_at};
use crate::{Error, Result};

/// PN532 normal information frame as it travels over SPI.
///
/// Outbound (host -> PN532):
/// `[0x01 DW] [0x00 preamble] [0x00 0xFF] [LEN] [LCS] [data..] [DCS] [0x00]`
///
/// Inbound (PN532 -> host), read back after a `0x03` data-read marker:
/// `[0x01 echo] [0x00..] [0xFF] [LEN] [LCS] [data..] [DCS] [postamble]`
///
/// `data` is the TFI byte (D4/D5) followed by the command or response bytes.
pub struct Frame;

impl Frame {
    /// Encode TFI + command data into a complete outbound frame.
    pub fn encode(data: &[u8]) -> Result<Vec<u8>> {
        if data.is_empty() || data.len() > PN532_MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: PN532_MAX_PAYLOAD_LEN,
                actual: data.len(),
            });
        }

        let len = data.len() as u8;
        let mut out = Vec::with_capacity(data.len() + PN532_FRAME_OVERHEAD);
        out.push(PN532_SPI_DATAWRITE);
        out.push(PN532_PREAMBLE);
        out.extend_from_slice(&PN532_START_CODE);
        out.push(len);
        out.push(lcs(len));
        out.extend_from_slice(data);
        out.push(dcs(data));
        out.push(PN532_POSTAMBLE);
        Ok(out)
    }

    /// Number of raw bytes to clock in for a frame carrying up to
    /// `data_len` bytes of TFI + response data.
    pub fn read_len(data_len: usize) -> usize {
        data_len + PN532_FRAME_OVERHEAD
    }

    /// Validate a raw inbound buffer and return the `LEN` data bytes.
    ///
    /// Any run of zeros may precede the 0xFF start byte. Bytes after the
    /// DCS are ignored because a fixed-size read usually over-reads.
    pub fn decode(raw: &[u8]) -> Result<Vec<u8>> {
        let first = byte_at(raw, 0)?;
        if first != PN532_SPI_READ_ECHO {
            return Err(Error::BadFrameStart {
                expected: PN532_SPI_READ_ECHO,
                actual: first,
            });
        }

        // Swallow every 0x00 that precedes the 0xFF of the start code.
        let mut offset = 1usize;
        loop {
            match raw.get(offset) {
                None => return Err(Error::TruncatedPreamble),
                Some(&0x00) => offset += 1,
                Some(&0xFF) => break,
                Some(&actual) => return Err(Error::MissingStartCode { actual }),
            }
        }
        offset += 1;

        let len = byte_at(raw, offset)?;
        let lcs_actual = byte_at(raw, offset + 1)?;
        if len.wrapping_add(lcs_actual) != 0 {
            return Err(Error::LengthChecksumMismatch {
                len,
                lcs: lcs_actual,
            });
        }

        let start = offset + 2;
        let window = slice_at(raw, start, len as usize + 1)?;
        let (data, dcs_actual) = window.split_at(len as usize);
        let dcs_actual = dcs_actual[0];
        if !verify(data, dcs_actual) {
            return Err(Error::ChecksumMismatch {
                expected: dcs(data),
                actual: dcs_actual,
            });
        }

        Ok(data.to_vec())
    }
}
