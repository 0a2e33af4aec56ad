use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default external extraction tool, looked up on `PATH`.
pub const DEFAULT_SCRAPER_PROGRAM: &str = "readability-scrape";

/// Global configuration loaded from `~/.config/clipscrape/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipscrapeConfig {
    /// Delay between clipboard polls, in milliseconds.
    pub poll_interval_ms: u64,
    /// Name (or path) of the article-extraction executable.
    pub scraper_program: String,
    /// Directory for saved articles (None = current working directory).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl Default for ClipscrapeConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
            scraper_program: DEFAULT_SCRAPER_PROGRAM.to_string(),
            output_dir: None,
        }
    }
}

impl ClipscrapeConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Output directory, falling back to the process working directory.
    pub fn resolve_output_dir(&self) -> Result<PathBuf> {
        match &self.output_dir {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("current directory"),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("clipscrape")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ClipscrapeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ClipscrapeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ClipscrapeConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
