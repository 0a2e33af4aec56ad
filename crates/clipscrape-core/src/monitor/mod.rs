//! Clipboard monitor: polls the clipboard, queues new URLs, and scrapes them
//! one per iteration.
//!
//! All loop state (last clipboard text, seen set, queue) lives in [`Monitor`].
//! Status is reported as [`MonitorEvent`]s to a caller-supplied sink; the core
//! never prints.

mod clipboard;
mod run;

pub use clipboard::{ClipboardError, ClipboardSource, SystemClipboard};
pub use run::run_monitor;

use crate::scrape::{ScrapeBackend, ScrapeError, Scraper};
use crate::url_model::extract_urls;
use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;
use thiserror::Error;

/// Recoverable failure of one loop iteration. The loop logs it and goes on.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

/// Status updates emitted while the monitor runs.
#[derive(Debug)]
pub enum MonitorEvent {
    Started,
    /// URLs queued by this poll, in clipboard order.
    NewUrls(Vec<String>),
    /// About to run the scrape for this URL.
    Scraping(String),
    Saved { url: String, path: PathBuf },
    ScrapeFailed { url: String, error: ScrapeError },
    /// An iteration failed before finishing; the loop continues.
    IterationFailed(MonitorError),
    Stopped,
}

/// Outcome of one scrape attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeAttempt {
    pub url: String,
    /// Written file, or None when the scrape failed.
    pub saved: Option<PathBuf>,
}

/// What one successful iteration did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tick {
    pub new_urls: Vec<String>,
    pub scraped: Option<ScrapeAttempt>,
}

pub struct Monitor<C, B> {
    clipboard: C,
    scraper: Scraper<B>,
    last_clip: String,
    seen: HashSet<String>,
    queue: VecDeque<String>,
}

impl<C: ClipboardSource, B: ScrapeBackend> Monitor<C, B> {
    pub fn new(clipboard: C, scraper: Scraper<B>) -> Self {
        Self {
            clipboard,
            scraper,
            last_clip: String::new(),
            seen: HashSet::new(),
            queue: VecDeque::new(),
        }
    }

    /// URLs waiting to be scraped, front first.
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.queue.iter().map(String::as_str)
    }

    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    /// Records clipboard `text` (already trimmed). If it differs from the last
    /// text seen, queues every URL in it not seen before and returns those.
    pub fn observe(&mut self, text: &str) -> Vec<String> {
        if text == self.last_clip {
            return Vec::new();
        }
        self.last_clip = text.to_string();

        let mut new_urls = Vec::new();
        for url in extract_urls(text) {
            if self.seen.insert(url.clone()) {
                self.queue.push_back(url.clone());
                new_urls.push(url);
            }
        }
        new_urls
    }

    /// Reads the clipboard and queues any new URLs.
    pub fn poll(&mut self) -> Result<Vec<String>, MonitorError> {
        let text = self.clipboard.read_text()?;
        Ok(self.observe(text.trim()))
    }

    /// Pops the oldest queued URL and scrapes it. `Scraping` is only emitted
    /// once the backend actually starts. Failed URLs stay seen and are not
    /// queued again.
    pub fn scrape_next(&mut self, on_event: &mut impl FnMut(MonitorEvent)) -> Option<ScrapeAttempt> {
        let url = self.queue.pop_front()?;

        let result = self
            .scraper
            .scrape_with_start(&url, &mut || on_event(MonitorEvent::Scraping(url.clone())));
        let saved = match result {
            Ok(path) => {
                tracing::info!(url = %url, path = %path.display(), "article saved");
                on_event(MonitorEvent::Saved {
                    url: url.clone(),
                    path: path.clone(),
                });
                Some(path)
            }
            Err(error) => {
                tracing::warn!(url = %url, "scrape failed: {}", error);
                on_event(MonitorEvent::ScrapeFailed {
                    url: url.clone(),
                    error,
                });
                None
            }
        };
        Some(ScrapeAttempt { url, saved })
    }

    /// One loop iteration: poll, then scrape at most one queued URL.
    pub fn tick(&mut self, on_event: &mut impl FnMut(MonitorEvent)) -> Result<Tick, MonitorError> {
        let new_urls = self.poll()?;
        if !new_urls.is_empty() {
            tracing::debug!(count = new_urls.len(), queued = self.queue.len(), "new urls");
            on_event(MonitorEvent::NewUrls(new_urls.clone()));
        }
        let scraped = self.scrape_next(on_event);
        Ok(Tick { new_urls, scraped })
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{RecordingBackend, ScriptedClipboard};
    use super::*;
    use crate::output::ArticleWriter;
    use tempfile::{tempdir, TempDir};

    fn monitor<'a>(
        clipboard: ScriptedClipboard,
        backend: &'a RecordingBackend,
        dir: &TempDir,
    ) -> Monitor<ScriptedClipboard, &'a RecordingBackend> {
        Monitor::new(clipboard, Scraper::new(backend, ArticleWriter::new(dir.path())))
    }

    fn ignore(_: MonitorEvent) {}

    #[test]
    fn observe_queues_in_text_order() {
        let dir = tempdir().unwrap();
        let backend = RecordingBackend::default();
        let mut m = monitor(ScriptedClipboard::texts(&[]), &backend, &dir);
        let new = m.observe("check this out https://example.com/a and https://example.com/b");
        assert_eq!(new, vec!["https://example.com/a", "https://example.com/b"]);
        assert_eq!(
            m.pending().collect::<Vec<_>>(),
            vec!["https://example.com/a", "https://example.com/b"]
        );
    }

    #[test]
    fn url_in_consecutive_snapshots_queued_once() {
        let dir = tempdir().unwrap();
        let backend = RecordingBackend::default();
        let mut m = monitor(ScriptedClipboard::texts(&[]), &backend, &dir);
        assert_eq!(m.observe("first https://x.test/1").len(), 1);
        assert_eq!(m.observe("second https://x.test/1").len(), 0);
        assert_eq!(m.observe("https://x.test/1 https://x.test/2"), vec!["https://x.test/2"]);
        assert_eq!(m.pending().count(), 2);
        assert_eq!(m.seen_count(), 2);
    }

    #[test]
    fn duplicate_within_one_snapshot_queued_once() {
        let dir = tempdir().unwrap();
        let backend = RecordingBackend::default();
        let mut m = monitor(ScriptedClipboard::texts(&[]), &backend, &dir);
        assert_eq!(m.observe("https://x.test https://x.test"), vec!["https://x.test"]);
    }

    #[test]
    fn unchanged_text_is_ignored() {
        let dir = tempdir().unwrap();
        let backend = RecordingBackend::default();
        let mut m = monitor(ScriptedClipboard::texts(&[]), &backend, &dir);
        assert_eq!(m.observe("https://x.test/a").len(), 1);
        assert!(m.observe("https://x.test/a").is_empty());
    }

    #[test]
    fn poll_trims_clipboard_text() {
        let dir = tempdir().unwrap();
        let backend = RecordingBackend::default();
        let clip = ScriptedClipboard::texts(&["  https://x.test/a\n", "https://x.test/a"]);
        let mut m = monitor(clip, &backend, &dir);
        assert_eq!(m.poll().unwrap(), vec!["https://x.test/a"]);
        // Same text once trimmed: no change detected.
        assert!(m.poll().unwrap().is_empty());
    }

    #[test]
    fn tick_scrapes_one_url_fifo() {
        let dir = tempdir().unwrap();
        let backend = RecordingBackend::default();
        let clip = ScriptedClipboard::texts(&["https://x.test/a https://x.test/b https://x.test/c"]);
        let mut m = monitor(clip, &backend, &dir);

        let first = m.tick(&mut ignore).unwrap();
        assert_eq!(first.new_urls.len(), 3);
        assert_eq!(first.scraped.as_ref().unwrap().url, "https://x.test/a");
        assert_eq!(*backend.calls.borrow(), vec!["https://x.test/a"]);

        let second = m.tick(&mut ignore).unwrap();
        assert!(second.new_urls.is_empty());
        assert_eq!(second.scraped.unwrap().url, "https://x.test/b");

        m.tick(&mut ignore).unwrap();
        let idle = m.tick(&mut ignore).unwrap();
        assert_eq!(idle, Tick::default());
        assert_eq!(
            *backend.calls.borrow(),
            vec!["https://x.test/a", "https://x.test/b", "https://x.test/c"]
        );
    }

    #[test]
    fn later_snapshot_queues_behind_earlier() {
        let dir = tempdir().unwrap();
        let backend = RecordingBackend::default();
        let clip = ScriptedClipboard::texts(&[
            "https://x.test/a https://x.test/b",
            "now https://x.test/c",
        ]);
        let mut m = monitor(clip, &backend, &dir);
        for _ in 0..4 {
            m.tick(&mut ignore).unwrap();
        }
        assert_eq!(
            *backend.calls.borrow(),
            vec!["https://x.test/a", "https://x.test/b", "https://x.test/c"]
        );
    }

    #[test]
    fn failed_scrape_is_not_requeued() {
        let dir = tempdir().unwrap();
        let mut backend = RecordingBackend::default();
        backend
            .failing
            .insert("https://x.test/bad".to_string(), "not json".to_string());
        let clip = ScriptedClipboard::texts(&[
            "https://x.test/bad https://x.test/good",
            "again https://x.test/bad",
        ]);
        let mut m = monitor(clip, &backend, &dir);

        let mut events = Vec::new();
        let mut sink = |e: MonitorEvent| events.push(e);
        let first = m.tick(&mut sink).unwrap();
        assert_eq!(first.scraped.unwrap().saved, None);
        let second = m.tick(&mut sink).unwrap();
        assert!(second.new_urls.is_empty());
        assert_eq!(
            second.scraped.unwrap().saved,
            Some(dir.path().join("good.html"))
        );
        assert!(m.tick(&mut sink).unwrap().scraped.is_none());

        assert_eq!(
            *backend.calls.borrow(),
            vec!["https://x.test/bad", "https://x.test/good"]
        );
        assert!(events.iter().any(|e| matches!(
            e,
            MonitorEvent::ScrapeFailed { url, error: ScrapeError::MalformedResponse { raw, .. } }
                if url == "https://x.test/bad" && raw == "not json"
        )));
    }

    #[test]
    fn events_in_order() {
        let dir = tempdir().unwrap();
        let backend = RecordingBackend::default();
        let clip = ScriptedClipboard::texts(&["https://x.test/a"]);
        let mut m = monitor(clip, &backend, &dir);
        let mut events = Vec::new();
        m.tick(&mut |e| events.push(e)).unwrap();
        assert_eq!(events.len(), 3);
        assert!(matches!(&events[0], MonitorEvent::NewUrls(urls) if urls == &["https://x.test/a"]));
        assert!(matches!(&events[1], MonitorEvent::Scraping(url) if url == "https://x.test/a"));
        assert!(matches!(&events[2], MonitorEvent::Saved { path, .. } if path.ends_with("a.html")));
    }

    #[test]
    fn missing_tool_reports_failure_without_scraping_event() {
        let dir = tempdir().unwrap();
        let backend = RecordingBackend {
            tool_missing: true,
            ..Default::default()
        };
        let clip = ScriptedClipboard::texts(&["https://x.test/a"]);
        let mut m = monitor(clip, &backend, &dir);
        let mut events = Vec::new();
        m.tick(&mut |e| events.push(e)).unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], MonitorEvent::NewUrls(_)));
        assert!(matches!(
            &events[1],
            MonitorEvent::ScrapeFailed { error: ScrapeError::ToolMissing { .. }, .. }
        ));
    }

    #[test]
    fn clipboard_error_fails_tick_but_keeps_state() {
        let dir = tempdir().unwrap();
        let backend = RecordingBackend::default();
        let clip = ScriptedClipboard::new(vec![
            Ok("https://x.test/a https://x.test/b".to_string()),
            Err(ClipboardError::Read("busy".to_string())),
        ]);
        let mut m = monitor(clip, &backend, &dir);
        m.tick(&mut ignore).unwrap();
        let err = m.tick(&mut ignore).unwrap_err();
        assert_eq!(err.to_string(), "clipboard read failed: busy");
        // Queue survives; next good read drains it.
        assert_eq!(m.pending().collect::<Vec<_>>(), vec!["https://x.test/b"]);
        let next = m.tick(&mut ignore).unwrap();
        assert_eq!(next.scraped.unwrap().url, "https://x.test/b");
    }
}
