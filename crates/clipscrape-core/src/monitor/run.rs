//! The polling loop.

use super::{ClipboardSource, Monitor, MonitorEvent};
use crate::control::StopToken;
use crate::scrape::ScrapeBackend;
use std::time::Duration;

/// Runs `monitor` until `stop` is triggered, sleeping `interval` after every
/// iteration. Per-iteration errors are reported and the loop continues.
///
/// Returns the number of iterations run.
pub fn run_monitor<C, B>(
    monitor: &mut Monitor<C, B>,
    stop: &StopToken,
    interval: Duration,
    mut on_event: impl FnMut(MonitorEvent),
) -> u64
where
    C: ClipboardSource,
    B: ScrapeBackend,
{
    tracing::info!(interval_ms = interval.as_millis() as u64, "monitor started");
    on_event(MonitorEvent::Started);

    let mut iterations = 0u64;
    while !stop.is_stopped() {
        iterations += 1;
        if let Err(e) = monitor.tick(&mut on_event) {
            tracing::warn!(iteration = iterations, "iteration failed: {}", e);
            on_event(MonitorEvent::IterationFailed(e));
        }
        if stop.sleep_unless_stopped(interval) {
            break;
        }
    }

    tracing::info!(iterations, "monitor stopped");
    on_event(MonitorEvent::Stopped);
    iterations
}
