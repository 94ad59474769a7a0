// libpn532/src/types.rs

use crate::Error;
use std::convert::TryFrom;
use std::str::FromStr;

/// Electrical level of a digital line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Level {
    #[display(fmt = "low")]
    Low,
    #[display(fmt = "high")]
    High,
}

impl Level {
    pub fn is_high(self) -> bool {
        self == Level::High
    }
}

impl std::ops::Not for Level {
    type Output = Level;

    fn not(self) -> Level {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

/// SPI clock polarity/phase mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpiMode {
    #[default]
    #[display(fmt = "mode 0")]
    Mode0,
    #[display(fmt = "mode 1")]
    Mode1,
    #[display(fmt = "mode 2")]
    Mode2,
    #[display(fmt = "mode 3")]
    Mode3,
}

impl SpiMode {
    /// Clock level between transactions: low for modes 0/1, high for 2/3.
    pub fn idle_level(self) -> Level {
        match self {
            SpiMode::Mode0 | SpiMode::Mode1 => Level::Low,
            SpiMode::Mode2 | SpiMode::Mode3 => Level::High,
        }
    }

    /// Whether data is sampled as the clock leaves idle (modes 0/2) or as
    /// it returns to idle (modes 1/3).
    pub fn sample_on_leading_edge(self) -> bool {
        matches!(self, SpiMode::Mode0 | SpiMode::Mode2)
    }

    pub fn clock_config(self) -> ClockConfig {
        ClockConfig {
            idle_level: self.idle_level(),
            sample_on_leading_edge: self.sample_on_leading_edge(),
        }
    }
}

impl TryFrom<u8> for SpiMode {
    type Error = Error;

    fn try_from(mode: u8) -> Result<Self, Self::Error> {
        match mode {
            0 => Ok(SpiMode::Mode0),
            1 => Ok(SpiMode::Mode1),
            2 => Ok(SpiMode::Mode2),
            3 => Ok(SpiMode::Mode3),
            other => Err(Error::InvalidMode(other)),
        }
    }
}

/// Resolved clock behaviour of a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    pub idle_level: Level,
    pub sample_on_leading_edge: bool,
}

/// Bit transmission order on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BitOrder {
    #[default]
    #[display(fmt = "MSBFIRST")]
    MostSignificantFirst,
    #[display(fmt = "LSBFIRST")]
    LeastSignificantFirst,
}

impl BitOrder {
    /// Byte bit position that travels in bit-cell `step` (0..8).
    pub fn bit_position(self, step: usize) -> u32 {
        debug_assert!(step < 8);
        match self {
            BitOrder::MostSignificantFirst => 7 - step as u32,
            BitOrder::LeastSignificantFirst => step as u32,
        }
    }

    /// Level of the output bit sent in bit-cell `step`.
    pub fn bit(self, value: u8, step: usize) -> bool {
        value & (1 << self.bit_position(step)) != 0
    }

    /// Mask selecting the received bit stored from bit-cell `step`.
    pub fn mask(self, step: usize) -> u8 {
        1 << self.bit_position(step)
    }
}

impl FromStr for BitOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "msb" | "msbfirst" | "msb_first" => Ok(BitOrder::MostSignificantFirst),
            "lsb" | "lsbfirst" | "lsb_first" => Ok(BitOrder::LeastSignificantFirst),
            _ => Err(Error::InvalidBitOrder(s.to_string())),
        }
    }
}

/// Baud rate / modulation selector for InListPassiveTarget
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardBaud {
    /// 106 kbps type A (ISO/IEC14443 Type A, MIFARE)
    #[default]
    Iso14443A = 0x00,
    /// 212 kbps FeliCa polling
    Felica212 = 0x01,
    /// 424 kbps FeliCa polling
    Felica424 = 0x02,
    /// 106 kbps type B (ISO/IEC14443-3B)
    Iso14443B = 0x03,
    /// 106 kbps Innovision Jewel tag
    Jewel = 0x04,
}

impl CardBaud {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// UID of a passive target, 0 to 7 bytes
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::AsRef)]
pub struct Uid(Vec<u8>);

impl Uid {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() > crate::constants::PN532_MAX_UID_LEN {
            return Err(Error::UidTooLong {
                len: bytes.len() as u8,
            });
        }
        Ok(Self(bytes.to_vec()))
    }
}

/// GetFirmwareVersion reply: IC, Ver, Rev, Support
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::AsRef)]
pub struct FirmwareVersion([u8; 4]);

impl FirmwareVersion {
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Chip version, 0x32 for a PN532
    pub fn ic(&self) -> u8 {
        self.0[0]
    }

    pub fn ver(&self) -> u8 {
        self.0[1]
    }

    pub fn rev(&self) -> u8 {
        self.0[2]
    }

    /// Bitmask of supported card families
    pub fn support(&self) -> u8 {
        self.0[3]
    }
}

impl TryFrom<&[u8]> for FirmwareVersion {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 4 {
            return Err(Error::InvalidLength {
                expected: 4,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 4];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

impl std::fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PN5{:02x} firmware {}.{} (support {:#04x})",
            self.ic(),
            self.ver(),
            self.rev(),
            self.support()
        )
    }
}
