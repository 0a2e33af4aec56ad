//! `clipscrape urls <TEXT>...` – print URLs found in text.

use clipscrape_core::url_model::{extract_urls, is_url};

/// URLs in `text`: embedded matches of the joined text, or with `strict`
/// only the arguments that are whole URLs.
pub fn find_urls(text: &[String], strict: bool) -> Vec<String> {
    if strict {
        text.iter()
            .filter(|t| is_url(t))
            .map(|t| t.trim().to_string())
            .collect()
    } else {
        extract_urls(&text.join(" "))
    }
}

pub fn run_urls(text: &[String], strict: bool) {
    for url in find_urls(text, strict) {
        println!("{url}");
    }
}
