//! `clipscrape watch` – poll the clipboard until Ctrl-C.
//!
//! The monitor runs on one blocking thread. A tokio task listens for Ctrl-C:
//! the first one stops the loop after the current iteration, a second one
//! exits at once (e.g. while stuck behind a hung extraction tool).

use super::report::print_event;
use anyhow::{Context, Result};
use clipscrape_core::config::ClipscrapeConfig;
use clipscrape_core::control::StopToken;
use clipscrape_core::monitor::{run_monitor, Monitor, MonitorEvent, SystemClipboard};
use clipscrape_core::output::ArticleWriter;
use clipscrape_core::scrape::{ReadabilityCli, Scraper};

/// Exit status for a forced second interrupt (128 + SIGINT).
const FORCED_EXIT_CODE: i32 = 130;

fn spawn_interrupt_listener(stop: StopToken) {
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("cannot listen for Ctrl-C: {}", e);
            return;
        }
        tracing::info!("interrupt received; stopping after current iteration");
        stop.stop();

        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("second interrupt; exiting immediately");
            print_event(MonitorEvent::Stopped);
            std::process::exit(FORCED_EXIT_CODE);
        }
    });
}

pub async fn run_watch(cfg: ClipscrapeConfig) -> Result<()> {
    let output_dir = cfg.resolve_output_dir()?;
    tracing::debug!(
        output_dir = %output_dir.display(),
        scraper = %cfg.scraper_program,
        "starting watch"
    );

    let stop = StopToken::new();
    spawn_interrupt_listener(stop.clone());

    let iterations = tokio::task::spawn_blocking(move || -> Result<u64> {
        let clipboard = SystemClipboard::new().context("open system clipboard")?;
        let scraper = Scraper::new(
            ReadabilityCli::new(cfg.scraper_program.as_str()),
            ArticleWriter::new(output_dir),
        );
        let mut monitor = Monitor::new(clipboard, scraper);
        Ok(run_monitor(&mut monitor, &stop, cfg.poll_interval(), print_event))
    })
    .await
    .context("monitor thread panicked")??;

    tracing::info!("watch finished after {} iteration(s)", iterations);
    Ok(())
}
