//! Executable lookup on the search path.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(windows)]
fn candidates(dir: &Path, program: &str) -> Vec<PathBuf> {
    vec![dir.join(program), dir.join(format!("{program}.exe"))]
}

#[cfg(not(windows))]
fn candidates(dir: &Path, program: &str) -> Vec<PathBuf> {
    vec![dir.join(program)]
}

/// True when `program` names a path (has a separator) rather than a bare
/// command to look up on the search path.
pub fn is_explicit_path(program: &str) -> bool {
    Path::new(program).components().count() > 1
}

/// Finds `program` the way a shell would.
///
/// A program containing a path separator is checked as-is. Otherwise each
/// entry of `search_path` (or `$PATH` when `None`) is tried in order and the
/// first executable match wins.
pub fn find_executable(program: &str, search_path: Option<&OsStr>) -> Option<PathBuf> {
    if is_explicit_path(program) {
        let as_path = Path::new(program);
        return is_executable(as_path).then(|| as_path.to_path_buf());
    }

    let path_var = match search_path {
        Some(p) => p.to_os_string(),
        None => env::var_os("PATH")?,
    };
    env::split_paths(&path_var)
        .filter(|dir| !dir.as_os_str().is_empty())
        .flat_map(|dir| candidates(&dir, program))
        .find(|candidate| is_executable(candidate))
}
