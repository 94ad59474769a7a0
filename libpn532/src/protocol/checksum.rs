// libpn532/src/protocol/checksum.rs

/// Length checksum (LCS): `(len + lcs) mod 256 == 0`
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Data checksum (DCS) over TFI + payload: `(sum(data) + dcs) mod 256 == 0`
pub fn dcs(data: &[u8]) -> u8 {
    0u8.wrapping_sub(sum(data))
}

/// Byte sum mod 256.
pub fn sum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}

/// Whether `data` followed by the trailing `checksum` byte sums to zero.
pub fn verify(data: &[u8], checksum: u8) -> bool {
    sum(data).wrapping_add(checksum) == 0
}
