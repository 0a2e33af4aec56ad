//! URL detection for clipboard text.
//!
//! `extract_urls` drives the monitor; `is_url` is a whole-string check used by
//! the CLI's `urls --strict`.

mod extract;

pub use extract::{extract_urls, is_url};
