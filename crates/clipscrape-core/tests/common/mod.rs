pub mod clipboard;
pub mod fake_tool;

use std::sync::{Mutex, MutexGuard};

static EXEC_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that write and then exec a script, so no concurrent fork
/// holds the script open for writing (ETXTBSY).
pub fn serial() -> MutexGuard<'static, ()> {
    EXEC_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
