// libpn532/src/scanner.rs

//! One step of a card scanning loop. Scheduling the loop is left to the
//! caller; `TagScanner::scan` only decides whether a read is news.

use std::time::Duration;

use log::info;

use crate::Result;
use crate::device::{Device, Initialized};
use crate::types::{CardBaud, Uid};

/// Reports each card once while it stays in the field.
pub struct TagScanner {
    device: Device<Initialized>,
    last: Option<Uid>,
    baud: CardBaud,
    timeout: Duration,
}

impl TagScanner {
    /// Scan for ISO14443A cards with the device's default timeout.
    pub fn new(device: Device<Initialized>) -> Self {
        let timeout = device.config().default_timeout();
        Self::with_params(device, CardBaud::Iso14443A, timeout)
    }

    pub fn with_params(device: Device<Initialized>, baud: CardBaud, timeout: Duration) -> Self {
        Self {
            device,
            last: None,
            baud,
            timeout,
        }
    }

    /// Read once. Returns the UID only when it differs from the last card
    /// seen; an empty read forgets that card so it is reported again when
    /// it comes back.
    pub fn scan(&mut self) -> Result<Option<Uid>> {
        match self.device.read_passive_target(self.baud, self.timeout)? {
            None => {
                self.last = None;
                Ok(None)
            }
            Some(uid) if self.last.as_ref() == Some(&uid) => Ok(None),
            Some(uid) => {
                info!("new card {}", uid.to_hex());
                self.last = Some(uid.clone());
                Ok(Some(uid))
            }
        }
    }

    pub fn last_uid(&self) -> Option<&Uid> {
        self.last.as_ref()
    }

    pub fn device_mut(&mut self) -> &mut Device<Initialized> {
        &mut self.device
    }

    pub fn into_device(self) -> Device<Initialized> {
        self.device
    }
}
