// libpn532/src/device/handle.rs

use std::marker::PhantomData;
use std::time::Duration;

use log::{debug, info, trace, warn};

use crate::constants::{PN532_ACK, PN532_SPI_DATAREAD, PN532_SPI_READY, PN532_SPI_STATREAD};
use crate::device::config::Pn532Config;
use crate::protocol::codec;
use crate::protocol::{
    Command, Frame, SAM_TIMEOUT_1S, SamMode, decode_firmware_version,
    decode_passive_target, in_list_passive_target_params, sam_configuration_params,
};
use crate::transport::Spi;
use crate::types::{BitOrder, CardBaud, FirmwareVersion, SpiMode, Uid};
use crate::utils::{Deadline, busy_wait, bytes_to_hex_spaced};
use crate::{Error, Result};

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Longest InListPassiveTarget reply for one target with a 7-byte UID
const PASSIVE_TARGET_RESPONSE_LEN: usize = 17;
const FIRMWARE_VERSION_RESPONSE_LEN: usize = 4;

/// PN532 handle that enforces initialization state at compile time.
///
/// Only one call is ever in flight: every method takes `&mut self` and
/// blocks until the transaction has finished or its ready poll gave up.
pub struct Device<State = Uninitialized> {
    spi: Box<dyn Spi>,
    config: Pn532Config,
    _state: PhantomData<State>,
}

impl Device<Uninitialized> {
    /// Wrap an already-started transport with the default timing.
    pub fn new_with_transport(spi: Box<dyn Spi>) -> Self {
        Self::with_config(spi, Pn532Config::default())
    }

    pub fn with_config(spi: Box<dyn Spi>, config: Pn532Config) -> Self {
        Self {
            spi,
            config,
            _state: PhantomData,
        }
    }

    /// Bring the PN532 up: switch the bus to mode 0 / LSB first (the only
    /// combination its SPI port speaks), hold chip select for the wake-up
    /// delay and confirm the chip answers a firmware query.
    pub fn initialize(mut self) -> Result<Device<Initialized>> {
        self.spi.configure(SpiMode::Mode0);
        self.spi.configure_bit_order(BitOrder::LeastSignificantFirst);

        self.spi.select();
        busy_wait(self.config.wakeup_delay());
        let firmware = self.get_firmware_version();
        self.spi.deselect();
        let firmware = firmware?;
        info!("{} detected", firmware);

        Ok(Device {
            spi: self.spi,
            config: self.config,
            _state: PhantomData,
        })
    }
}

impl<State> Device<State> {
    pub fn config(&self) -> &Pn532Config {
        &self.config
    }

    pub fn transport_mut(&mut self) -> &mut dyn Spi {
        self.spi.as_mut()
    }

    /// Give the transport back, e.g. to release its lines.
    pub fn release(self) -> Box<dyn Spi> {
        self.spi
    }

    fn write_frame(&mut self, frame: &[u8]) {
        trace!("> {}", bytes_to_hex_spaced(frame));
        self.spi.select();
        busy_wait(self.config.select_settle());
        self.spi.write(frame, false, false);
        self.spi.deselect();
    }

    /// Clock in `len` bytes after the data-read marker. Byte 0 of the
    /// result is the marker echo.
    fn read_data(&mut self, len: usize) -> Vec<u8> {
        let mut request = vec![0u8; len];
        if let Some(first) = request.first_mut() {
            *first = PN532_SPI_DATAREAD;
        }
        self.spi.select();
        busy_wait(self.config.select_settle());
        let response = self.spi.transfer(&request, false, false);
        self.spi.deselect();
        trace!("< {}", bytes_to_hex_spaced(&response));
        response
    }

    fn read_status(&mut self) -> bool {
        self.spi.select();
        busy_wait(self.config.select_settle());
        let status = self.spi.transfer(&[PN532_SPI_STATREAD, 0x00], false, false);
        self.spi.deselect();
        status.get(1) == Some(&PN532_SPI_READY)
    }

    /// Poll the status byte until the PN532 reports ready. Returns `false`
    /// once `timeout` of wall-clock time has elapsed without it.
    pub fn wait_ready(&mut self, timeout: Duration) -> bool {
        let deadline = Deadline::after(timeout);
        loop {
            if self.read_status() {
                return true;
            }
            if deadline.expired() {
                debug!("pn532 not ready after {:?}", deadline.elapsed());
                return false;
            }
            busy_wait(self.config.poll_interval());
        }
    }

    /// Run one command exchange and return the response data after the
    /// `D5 <opcode+1>` header.
    ///
    /// `Ok(None)` means the PN532 did not become ready within `timeout`,
    /// either before the ACK or before the response. `response_len` is the
    /// largest amount of response data expected; less may come back.
    pub fn send_command(
        &mut self,
        cmd: Command,
        params: &[u8],
        response_len: usize,
        timeout: Duration,
    ) -> Result<Option<Vec<u8>>> {
        let frame = codec::encode_command_frame(cmd, params)?;
        self.write_frame(&frame);
        debug!("{:?}: frame sent, waiting for ack", cmd);

        if !self.wait_ready(timeout) {
            debug!("{:?}: no ack", cmd);
            return Ok(None);
        }

        let ack = self.read_data(PN532_ACK.len());
        if ack != PN532_ACK {
            warn!("{:?}: bad ack {}", cmd, bytes_to_hex_spaced(&ack));
            return Err(Error::AckMismatch { actual: ack });
        }
        debug!("{:?}: ack verified, waiting for response", cmd);

        if !self.wait_ready(timeout) {
            debug!("{:?}: no response", cmd);
            return Ok(None);
        }

        let raw = self.read_data(Frame::read_len(response_len + 2));
        match codec::decode_response_frame(cmd, &raw) {
            Ok(data) => {
                debug!("{:?}: response parsed ({} bytes)", cmd, data.len());
                Ok(Some(data))
            }
            Err(e) => {
                warn!("{:?}: {}", cmd, e);
                Err(e)
            }
        }
    }

    /// Query IC, version, revision and support flags. A silent chip is a
    /// hard error here since this doubles as the presence check.
    pub fn get_firmware_version(&mut self) -> Result<FirmwareVersion> {
        let timeout = self.config.default_timeout();
        match self.send_command(
            Command::GetFirmwareVersion,
            &[],
            FIRMWARE_VERSION_RESPONSE_LEN,
            timeout,
        )? {
            Some(data) if !data.is_empty() => decode_firmware_version(&data),
            _ => {
                warn!("no answer to GetFirmwareVersion");
                Err(Error::DeviceNotDetected)
            }
        }
    }
}

impl Device<Initialized> {
    /// Configure the SAM for normal mode with a 1 s timeout and the IRQ
    /// line in use. The response carries no data.
    pub fn use_sam_configuration(&mut self) -> Result<()> {
        let params = sam_configuration_params(SamMode::Normal, SAM_TIMEOUT_1S, true);
        let timeout = self.config.default_timeout();
        self.send_command(Command::SamConfiguration, &params, 0, timeout)?;
        Ok(())
    }

    /// Look for one passive target and return its UID. `Ok(None)` means no
    /// card answered within `timeout`.
    pub fn read_passive_target(&mut self, baud: CardBaud, timeout: Duration) -> Result<Option<Uid>> {
        let params = in_list_passive_target_params(1, baud);
        let response = self.send_command(
            Command::InListPassiveTarget,
            &params,
            PASSIVE_TARGET_RESPONSE_LEN,
            timeout,
        )?;
        let Some(data) = response else {
            return Ok(None);
        };
        match decode_passive_target(&data) {
            Ok(uid) => {
                debug!("card {}", uid.to_hex());
                Ok(Some(uid))
            }
            Err(e) => {
                warn!("InListPassiveTarget: {}", e);
                Err(e)
            }
        }
    }

    /// `read_passive_target` for ISO14443A cards with the default timeout.
    pub fn read_passive_target_default(&mut self) -> Result<Option<Uid>> {
        let timeout = self.config.default_timeout();
        self.read_passive_target(CardBaud::Iso14443A, timeout)
    }
}
