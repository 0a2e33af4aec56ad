//! Stop control for the monitor loop.
//!
//! The loop owns no signal handling itself: whoever drives it (the CLI's
//! Ctrl-C listener, a test) holds a clone of the `StopToken` and flips it.
//! The loop only looks at the token between iterations and while sleeping,
//! so an in-flight scrape always runs to completion.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Upper bound on how long `sleep_unless_stopped` goes without rechecking.
const STOP_CHECK_SLICE: Duration = Duration::from_millis(100);

/// Shared stop flag. Cloning yields a handle to the same flag.
#[derive(Debug, Clone, Default)]
pub struct StopToken {
    stopped: Arc<AtomicBool>,
}

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the loop to stop after the current iteration.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Sleep for `duration`, waking early if a stop is requested.
    /// Returns true if the token was stopped.
    pub fn sleep_unless_stopped(&self, duration: Duration) -> bool {
        let deadline = Instant::now() + duration;
        loop {
            if self.is_stopped() {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            thread::sleep((deadline - now).min(STOP_CHECK_SLICE));
        }
    }
}
