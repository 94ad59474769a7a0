//! Timing helpers.
//!
//! The PN532 bring-up and ready polling are bounded by wall-clock time, so
//! every wait in the crate goes through `ms` and `Deadline`.

use std::time::{Duration, Instant};

/// Default ready-poll timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Default timeout as Duration.
pub fn default_timeout() -> Duration {
    ms(DEFAULT_TIMEOUT_MS)
}

/// Block the calling thread. A zero duration returns immediately.
pub fn busy_wait(d: Duration) {
    if !d.is_zero() {
        std::thread::sleep(d);
    }
}

/// Wall-clock deadline measured from the moment it was created.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    timeout: Duration,
}

impl Deadline {
    pub fn after(timeout: Duration) -> Self {
        Self {
            start: Instant::now(),
            timeout,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// True once the elapsed time has reached the timeout.
    pub fn expired(&self) -> bool {
        self.elapsed() >= self.timeout
    }
}
