//! `readability-scrape` subprocess backend.

use super::locate::find_executable;
use super::parse::parse_article;
use super::{Article, ScrapeBackend, ScrapeError};
use std::ffi::OsString;
use std::process::{Command, Stdio};

/// Runs `<program> --json <url>` and decodes its stdout.
///
/// The call blocks until the child exits; there is no timeout.
#[derive(Debug, Clone)]
pub struct ReadabilityCli {
    program: String,
    search_path: Option<OsString>,
}

impl ReadabilityCli {
    /// Backend resolving `program` on `$PATH` at every scrape.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            search_path: None,
        }
    }

    /// Resolve the program against `search_path` instead of `$PATH`.
    pub fn with_search_path(mut self, search_path: impl Into<OsString>) -> Self {
        self.search_path = Some(search_path.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl ScrapeBackend for ReadabilityCli {
    fn fetch_with_start(
        &self,
        url: &str,
        on_start: &mut dyn FnMut(),
    ) -> Result<Article, ScrapeError> {
        let exe = find_executable(&self.program, self.search_path.as_deref()).ok_or_else(|| {
            ScrapeError::ToolMissing {
                program: self.program.clone(),
            }
        })?;

        on_start();
        tracing::debug!(exe = %exe.display(), url, "running extraction tool");
        let output = Command::new(&exe)
            .arg("--json")
            .arg(url)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ScrapeError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ScrapeError::ToolFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_article(&stdout).map_err(|reason| ScrapeError::MalformedResponse {
            program: self.program.clone(),
            reason,
            raw: stdout.into_owned(),
        })
    }
}
