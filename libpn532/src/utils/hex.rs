//! Hexadecimal rendering for log lines and UIDs.

use std::fmt::Write;

/// Lowercase hex without separators: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        // writing to a String cannot fail
        let _ = write!(s, "{:02x}", b);
        s
    })
}

/// Lowercase hex with one space between bytes: `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(s, "{:02x}", b);
    }
    s
}
