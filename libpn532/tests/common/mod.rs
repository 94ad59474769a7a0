// Shared helpers for integration tests. Each test crate pulls this in with
// `#[path = "../common/mod.rs"] mod common;`, so not every item is used
// everywhere.
#![allow(dead_code)]

pub mod fixtures;

pub mod helpers {
    pub use libpn532::test_support::{
        fast_config, initialized_mock_device, mock_device, passive_target_data, seed_firmware,
    };

    /// Route `log` output through env_logger once per test binary.
    pub fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }
}
