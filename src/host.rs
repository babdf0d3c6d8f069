//! Host boundary for machine-code regeneration
//!
//! Before a resolution pass the host may still be regenerating its
//! machine-code output in the background. The host exposes that as a
//! "still computing" signal which is polled until it clears. The wait
//! is bounded: callers pass an explicit timeout instead of polling
//! forever.

use crate::{CamsimError, Result};
use std::thread;
use std::time::{Duration, Instant};

/// The host's view of its background machine-code regeneration
pub trait RegenSignal {
    /// Whether regeneration is still running
    fn is_busy(&self) -> bool;
}

impl<F: Fn() -> bool> RegenSignal for F {
    fn is_busy(&self) -> bool {
        self()
    }
}

/// Block until the host finishes regenerating, polling at
/// `poll_interval`, or fail with [`CamsimError::RegenTimeout`] once
/// `timeout` elapses.
pub fn wait_for_regen(
    signal: &dyn RegenSignal,
    poll_interval: Duration,
    timeout: Duration,
) -> Result<()> {
    let start = Instant::now();
    while signal.is_busy() {
        if start.elapsed() >= timeout {
            return Err(CamsimError::RegenTimeout {
                waited_ms: timeout.as_millis() as u64,
            });
        }
        thread::sleep(poll_interval);
    }
    Ok(())
}
