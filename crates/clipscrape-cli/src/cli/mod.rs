//! CLI for clipscrape.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clipscrape_core::config::{self, ClipscrapeConfig};
use std::path::PathBuf;

use commands::{run_scrape, run_urls, run_watch};

/// Top-level CLI. With no subcommand, runs `watch`.
#[derive(Debug, Parser)]
#[command(name = "clipscrape")]
#[command(about = "Watch the clipboard for URLs and save each as a readable HTML article", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Per-run overrides for the scrape settings in config.toml.
#[derive(Debug, Default, Args)]
pub struct ScrapeArgs {
    /// Directory to write articles into (default: current directory).
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Extraction program to run as `<PROGRAM> --json <URL>`.
    #[arg(long, value_name = "PROGRAM")]
    pub scraper: Option<String>,
}

impl ScrapeArgs {
    fn apply(self, cfg: &mut ClipscrapeConfig) {
        if let Some(dir) = self.output_dir {
            cfg.output_dir = Some(dir);
        }
        if let Some(program) = self.scraper {
            cfg.scraper_program = program;
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Poll the clipboard and scrape every new URL until Ctrl-C.
    Watch {
        /// Delay between clipboard polls, in milliseconds.
        #[arg(long, value_name = "MS")]
        interval_ms: Option<u64>,

        #[command(flatten)]
        scrape: ScrapeArgs,
    },

    /// Scrape a single URL and save it.
    Scrape {
        /// HTTP/HTTPS URL of the article.
        url: String,

        #[command(flatten)]
        scrape: ScrapeArgs,
    },

    /// Print the URLs found in the given text.
    Urls {
        /// Text to scan; multiple arguments are joined with spaces.
        #[arg(required = true)]
        text: Vec<String>,

        /// Only print arguments that are each exactly one URL.
        #[arg(long)]
        strict: bool,
    },
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let command = cli.command.unwrap_or(CliCommand::Watch {
            interval_ms: None,
            scrape: ScrapeArgs::default(),
        });
        dispatch(command, config::load_or_init).await
    }
}

/// Runs `command`. Only commands that scrape call `load_config`, so `urls`
/// works without (or despite a broken) config.toml.
async fn dispatch(
    command: CliCommand,
    load_config: impl FnOnce() -> Result<ClipscrapeConfig>,
) -> Result<()> {
    match command {
        CliCommand::Watch {
            interval_ms,
            scrape,
        } => {
            let mut cfg = load_config()?;
            tracing::debug!("loaded config: {:?}", cfg);
            if let Some(ms) = interval_ms {
                cfg.poll_interval_ms = ms;
            }
            scrape.apply(&mut cfg);
            run_watch(cfg).await?;
        }
        CliCommand::Scrape { url, scrape } => {
            let mut cfg = load_config()?;
            tracing::debug!("loaded config: {:?}", cfg);
            scrape.apply(&mut cfg);
            run_scrape(&cfg, &url)?;
        }
        CliCommand::Urls { text, strict } => run_urls(&text, strict),
    }

    Ok(())
}

#[cfg(test)]
mod tests;
