// libpn532/src/device/config.rs

use std::time::Duration;

use crate::utils::{DEFAULT_TIMEOUT_MS, ms};

/// Delay after selecting the chip during bring-up
pub const WAKEUP_DELAY_MS: u64 = 1000;
/// Delay between chip select and the first clock of a frame
pub const SELECT_SETTLE_MS: u64 = 2;
/// Interval between two status polls
pub const POLL_INTERVAL_MS: u64 = 10;

/// Timing parameters of the PN532 link. The defaults are what the chip
/// needs on real hardware; tests shrink them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Pn532Config {
    pub wakeup_delay_ms: u64,
    pub select_settle_ms: u64,
    pub poll_interval_ms: u64,
    /// Ready-poll timeout used by `get_firmware_version` and the default
    /// passive-target read
    pub default_timeout_ms: u64,
}

impl Default for Pn532Config {
    fn default() -> Self {
        Self {
            wakeup_delay_ms: WAKEUP_DELAY_MS,
            select_settle_ms: SELECT_SETTLE_MS,
            poll_interval_ms: POLL_INTERVAL_MS,
            default_timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl Pn532Config {
    pub fn wakeup_delay(&self) -> Duration {
        ms(self.wakeup_delay_ms)
    }

    pub fn select_settle(&self) -> Duration {
        ms(self.select_settle_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        ms(self.poll_interval_ms)
    }

    pub fn default_timeout(&self) -> Duration {
        ms(self.default_timeout_ms)
    }
}
