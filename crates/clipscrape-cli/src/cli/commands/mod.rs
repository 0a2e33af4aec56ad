//! CLI command handlers, one file per command.

mod report;
mod scrape;
mod urls;
mod watch;

pub use scrape::run_scrape;
pub use urls::run_urls;
pub use watch::run_watch;
