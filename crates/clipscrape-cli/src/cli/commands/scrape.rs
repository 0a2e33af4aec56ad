//! `clipscrape scrape <url>` – scrape one URL without watching the clipboard.

use super::report::describe_failure;
use anyhow::{bail, Result};
use clipscrape_core::config::ClipscrapeConfig;
use clipscrape_core::output::ArticleWriter;
use clipscrape_core::scrape::{ReadabilityCli, Scraper};
use clipscrape_core::url_model::is_url;

pub fn run_scrape(cfg: &ClipscrapeConfig, url: &str) -> Result<()> {
    if !is_url(url) {
        bail!("not an http(s) URL: {url}");
    }
    let url = url.trim();

    let scraper = Scraper::new(
        ReadabilityCli::new(cfg.scraper_program.as_str()),
        ArticleWriter::new(cfg.resolve_output_dir()?),
    );
    match scraper.scrape_with_start(url, &mut || println!("Scraping: {url}")) {
        Ok(path) => {
            tracing::info!(url, path = %path.display(), "article saved");
            println!("Saved: {}", path.display());
            Ok(())
        }
        Err(e) => {
            tracing::warn!(url, "scrape failed: {}", e);
            println!("{}", describe_failure(&e));
            bail!("scrape of {url} failed");
        }
    }
}
