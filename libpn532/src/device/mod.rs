// libpn532/src/device/mod.rs

pub mod builder;
pub mod config;
pub mod handle;

pub use builder::DeviceBuilder;
pub use config::Pn532Config;
pub use handle::{Device, Initialized, Uninitialized};
