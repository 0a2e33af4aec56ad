//! Console lines for monitor events.

use clipscrape_core::monitor::MonitorEvent;
use clipscrape_core::scrape::ScrapeError;

/// Operator-facing description of a failed scrape.
pub fn describe_failure(error: &ScrapeError) -> String {
    match error {
        ScrapeError::ToolMissing { .. } => format!("Error: {error}."),
        ScrapeError::ToolFailed {
            program, stderr, ..
        } => format!("Error running {program}:\n{stderr}"),
        ScrapeError::MalformedResponse { program, raw, .. } => {
            format!("Failed to parse JSON from {program}.\n{raw}")
        }
        other => format!("Error: {other}"),
    }
}

pub fn event_lines(event: &MonitorEvent) -> Vec<String> {
    match event {
        MonitorEvent::Started => vec!["Monitoring clipboard for URLs...".to_string()],
        MonitorEvent::NewUrls(urls) => {
            let mut lines = vec![format!("Found {} new URL(s):", urls.len())];
            lines.extend(urls.iter().map(|u| format!(" - {u}")));
            lines
        }
        MonitorEvent::Scraping(url) => vec![format!("Scraping: {url}")],
        MonitorEvent::Saved { path, .. } => {
            let name = path.file_name().unwrap_or(path.as_os_str());
            vec![format!("Saved: {}", name.to_string_lossy())]
        }
        MonitorEvent::ScrapeFailed { error, .. } => vec![describe_failure(error)],
        MonitorEvent::IterationFailed(e) => vec![format!("Unexpected error: {e}")],
        MonitorEvent::Stopped => vec!["Stopped.".to_string()],
    }
}

pub fn print_event(event: MonitorEvent) {
    for line in event_lines(&event) {
        println!("{line}");
    }
}
