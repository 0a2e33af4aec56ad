//! Article output: filename derivation, page rendering, and writing to disk.

mod render;
mod sanitize;

pub use render::render_article;
pub use sanitize::{sanitize_filename, MAX_STEM_CHARS};

use crate::scrape::{Article, ScrapeError};
use std::fs;
use std::path::{Path, PathBuf};

/// Stem used when a title sanitizes to nothing.
pub const FALLBACK_STEM: &str = "article";

/// Derives the output filename for an article title.
///
/// # Examples
///
/// - `article_filename("Hello World")` → `"Hello World.html"`
/// - `article_filename("???")` → `"article.html"`
pub fn article_filename(title: &str) -> String {
    let stem = sanitize_filename(title);
    if stem.is_empty() {
        format!("{FALLBACK_STEM}.html")
    } else {
        format!("{stem}.html")
    }
}

/// Writes rendered articles into one directory, overwriting same-named files.
#[derive(Debug, Clone)]
pub struct ArticleWriter {
    dir: PathBuf,
}

impl ArticleWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Renders and writes `article`; returns the path written.
    pub fn save(&self, article: &Article) -> Result<PathBuf, ScrapeError> {
        let path = self.dir.join(article_filename(&article.title));
        let html = render_article(article);
        fs::write(&path, html).map_err(|source| ScrapeError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = article.content.len(), "article written");
        Ok(path)
    }
}
