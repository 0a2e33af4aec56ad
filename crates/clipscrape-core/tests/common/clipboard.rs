//! Clipboard stand-in fed from a list of snapshots.

use clipscrape_core::monitor::{ClipboardError, ClipboardSource};
use std::collections::VecDeque;

/// Returns each snapshot once, then keeps returning the last one.
pub struct Snapshots {
    pending: VecDeque<String>,
    current: String,
}

impl Snapshots {
    pub fn new(snapshots: &[&str]) -> Self {
        Self {
            pending: snapshots.iter().map(|s| s.to_string()).collect(),
            current: String::new(),
        }
    }
}

impl ClipboardSource for Snapshots {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        if let Some(next) = self.pending.pop_front() {
            self.current = next;
        }
        Ok(self.current.clone())
    }
}
