// libpn532/src/protocol/parser.rs

use crate::{Error, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::InvalidLength {
            expected: min,
            actual: data.len(),
        });
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Ensure the frame direction byte at index 0 is PN532->host.
pub fn expect_direction(data: &[u8]) -> Result<()> {
    let expected = crate::constants::PN532_PN532_TO_HOST;
    let actual = byte_at(data, 0)?;
    if actual != expected {
        return Err(Error::UnexpectedDirection { expected, actual });
    }
    Ok(())
}

/// Ensure the byte at `idx` equals the expected response code.
pub fn expect_response_code(data: &[u8], idx: usize, expected: u8) -> Result<()> {
    let actual = byte_at(data, idx)?;
    if actual != expected {
        return Err(Error::UnexpectedResponse { expected, actual });
    }
    Ok(())
}
