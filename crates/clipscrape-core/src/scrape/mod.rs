//! Scraping: turn one URL into a saved HTML article.
//!
//! A [`ScrapeBackend`] produces an [`Article`] for a URL (the real one shells
//! out to `readability-scrape`); [`Scraper`] pairs a backend with an
//! [`ArticleWriter`] and is what the monitor calls once per dequeued URL.
//! Every failure is final for that URL: nothing here retries.

mod locate;
mod parse;
mod readability;

pub use locate::{find_executable, is_explicit_path};
pub use parse::{parse_article, Article, FALLBACK_TITLE};
pub use readability::ReadabilityCli;

use crate::output::ArticleWriter;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Why a single URL produced no article file.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The extraction tool is not on the search path, or the explicit path
    /// given for it is not an executable file.
    #[error("'{program}' {}", missing_reason(.program))]
    ToolMissing { program: String },
    /// The tool was found but could not be started.
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// The tool exited non-zero; `stderr` is its lossily decoded diagnostics.
    #[error("{program} failed ({status}):\n{stderr}")]
    ToolFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
    /// The tool exited zero but stdout was not a JSON object.
    #[error("failed to parse JSON from {program}: {reason}\n{raw}")]
    MalformedResponse {
        program: String,
        reason: String,
        raw: String,
    },
    /// The rendered page could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn missing_reason(program: &str) -> &'static str {
    if is_explicit_path(program) {
        "is not an executable file"
    } else {
        "not found in PATH"
    }
}

/// Source of scraped articles.
pub trait ScrapeBackend {
    /// Fetches the article for `url`. `on_start` runs once the backend is
    /// ready to do the (possibly slow) work; failures found before that, such
    /// as a missing tool, return without calling it.
    fn fetch_with_start(
        &self,
        url: &str,
        on_start: &mut dyn FnMut(),
    ) -> Result<Article, ScrapeError>;

    fn fetch(&self, url: &str) -> Result<Article, ScrapeError> {
        self.fetch_with_start(url, &mut || {})
    }
}

impl<B: ScrapeBackend + ?Sized> ScrapeBackend for &B {
    fn fetch_with_start(
        &self,
        url: &str,
        on_start: &mut dyn FnMut(),
    ) -> Result<Article, ScrapeError> {
        (**self).fetch_with_start(url, on_start)
    }
}

/// Fetches an article and writes it out.
#[derive(Debug)]
pub struct Scraper<B> {
    backend: B,
    writer: ArticleWriter,
}

impl<B: ScrapeBackend> Scraper<B> {
    pub fn new(backend: B, writer: ArticleWriter) -> Self {
        Self { backend, writer }
    }

    pub fn writer(&self) -> &ArticleWriter {
        &self.writer
    }

    /// Scrapes `url` and returns the path of the written page.
    pub fn scrape(&self, url: &str) -> Result<PathBuf, ScrapeError> {
        self.scrape_with_start(url, &mut || {})
    }

    /// Like [`Scraper::scrape`], calling `on_start` once the backend starts work.
    pub fn scrape_with_start(
        &self,
        url: &str,
        on_start: &mut dyn FnMut(),
    ) -> Result<PathBuf, ScrapeError> {
        let article = self.backend.fetch_with_start(url, on_start)?;
        tracing::debug!(url, title = %article.title, "article fetched");
        self.writer.save(&article)
    }
}
