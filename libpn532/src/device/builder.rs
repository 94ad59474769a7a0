// libpn532/src/device/builder.rs

use crate::device::config::Pn532Config;
use crate::device::handle::{Device, Uninitialized};
use crate::transport::Spi;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Box<dyn Spi>>,
    config: Pn532Config,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-started transport (e.g. `BitBangSpi` or `MockSpi`)
    pub fn with_transport(mut self, transport: Box<dyn Spi>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_config(mut self, config: Pn532Config) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder and return an uninitialized Device.
    /// Requires a transport; otherwise returns DeviceNotDetected.
    pub fn build_uninitialized(self) -> Result<Device<Uninitialized>> {
        match self.transport {
            Some(t) => Ok(Device::with_config(t, self.config)),
            None => Err(Error::DeviceNotDetected),
        }
    }
}
