// libpn532/src/transport/mod.rs

pub mod bitbang;
pub mod mock;
pub mod traits;

pub use bitbang::{BitBangSpi, SpiConfig};
pub use mock::MockSpi;
pub use traits::Spi;
