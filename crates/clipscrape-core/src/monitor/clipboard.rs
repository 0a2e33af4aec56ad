//! Clipboard access: a small trait so the monitor can be driven without a
//! display server, and the `arboard`-backed system implementation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard could be opened (e.g. no display server).
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    /// The clipboard exists but reading text from it failed.
    #[error("clipboard read failed: {0}")]
    Read(String),
}

/// Plain-text clipboard source.
pub trait ClipboardSource {
    /// Current clipboard text; empty when the clipboard holds no text.
    fn read_text(&mut self) -> Result<String, ClipboardError>;
}

/// The OS clipboard via `arboard`.
pub struct SystemClipboard {
    clipboard: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { clipboard })
    }
}

impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        match self.clipboard.get_text() {
            Ok(text) => Ok(text),
            // Empty clipboard or non-text content (an image, files).
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(ClipboardError::Read(e.to_string())),
        }
    }
}
