//! Fake `readability-scrape` for integration tests.
//!
//! Writes a `/bin/sh` script into a temp dir that answers per-URL with canned
//! stdout, stderr and exit code, and appends every URL it is called with to a
//! call log next to it.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TOOL_NAME: &str = "readability-scrape";

/// Canned reply for one URL.
#[derive(Debug, Clone)]
pub struct Reply {
    pub stdout: Vec<u8>,
    pub stderr: String,
    pub exit_code: i32,
}

impl Reply {
    pub fn json(body: &str) -> Self {
        Self::bytes(body.as_bytes())
    }

    /// Raw stdout bytes, exit 0.
    pub fn bytes(stdout: &[u8]) -> Self {
        Self {
            stdout: stdout.to_vec(),
            stderr: String::new(),
            exit_code: 0,
        }
    }

    pub fn fail(stderr: &str, exit_code: i32) -> Self {
        Self {
            stdout: Vec::new(),
            stderr: stderr.to_string(),
            exit_code,
        }
    }
}

pub struct FakeTool {
    dir: TempDir,
}

impl FakeTool {
    /// Installs the script; URLs not in `replies` get `{}` and exit 0.
    pub fn install(replies: &[(&str, Reply)]) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let log = dir.path().join("calls.log");

        let mut script = String::from("#!/bin/sh\n");
        script.push_str(&format!("printf '%s\\n' \"$*\" >> '{}'\n", log.display()));
        script.push_str("case \"$2\" in\n");
        for (i, (url, reply)) in replies.iter().enumerate() {
            let out = dir.path().join(format!("reply{i}.out"));
            let err = dir.path().join(format!("reply{i}.err"));
            fs::write(&out, &reply.stdout).expect("write stdout");
            fs::write(&err, &reply.stderr).expect("write stderr");
            script.push_str(&format!(
                "  '{url}') cat '{}'; cat '{}' >&2; exit {} ;;\n",
                out.display(),
                err.display(),
                reply.exit_code
            ));
        }
        script.push_str("  *) printf '{}'; exit 0 ;;\nesac\n");

        let path = dir.path().join(TOOL_NAME);
        fs::write(&path, script).expect("write script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod");
        Self { dir }
    }

    /// Directory to use as the search path.
    pub fn bin_dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join(TOOL_NAME)
    }

    /// Argument lines the tool was invoked with, in call order.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("calls.log"))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
