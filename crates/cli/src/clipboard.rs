//! Clipboard access
//!
//! Copies go to the system clipboard through `arboard`. When that is not
//! available (headless session, SSH) and stdout is a terminal, the OSC 52
//! escape sequence asks the terminal to take the text instead.

use std::io::{IsTerminal, Write};
use thiserror::Error;

/// How a copy reached the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// System clipboard via arboard
    System,
    /// OSC 52 terminal escape sequence
    Osc52,
}

/// Clipboard operation errors
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// System clipboard operation failed
    #[error("System clipboard failed: {0}")]
    System(String),

    /// OSC 52 write failed
    #[error("OSC 52 clipboard failed: {0}")]
    Osc52(String),

    /// No transport could take the text
    #[error("No clipboard available ({0}); stdout is not a terminal")]
    Unavailable(String),
}

impl From<ClipboardError> for apkforge_core::Error {
    fn from(err: ClipboardError) -> Self {
        apkforge_core::Error::clipboard(err.to_string()).with_source(err)
    }
}

/// Clipboard interface with a terminal fallback
pub struct Clipboard;

impl Clipboard {
    /// Copy text, trying the system clipboard first and OSC 52 second
    pub fn copy(text: &str) -> Result<Transport, ClipboardError> {
        match Self::copy_system(text) {
            Ok(()) => Ok(Transport::System),
            Err(ClipboardError::System(reason)) if !std::io::stdout().is_terminal() => {
                Err(ClipboardError::Unavailable(reason))
            }
            Err(err) => {
                tracing::debug!(error = %err, "Falling back to OSC 52");
                Self::copy_osc52(text).map(|()| Transport::Osc52)
            }
        }
    }

    fn copy_system(text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::System(e.to_string()))?;

        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::System(e.to_string()))?;

        Ok(())
    }

    fn copy_osc52(text: &str) -> Result<(), ClipboardError> {
        let mut stdout = std::io::stdout();
        stdout
            .write_all(osc52_sequence(text).as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| ClipboardError::Osc52(e.to_string()))
    }
}

/// OSC 52 sequence setting the system selection to `text`
///
/// Format: `ESC ] 52 ; c ; <base64> ESC \`
pub fn osc52_sequence(text: &str) -> String {
    use base64::Engine;

    let encoded = base64::engine::general_purpose::STANDARD.encode(text);
    format!("\x1b]52;c;{encoded}\x1b\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x1b\\");
    }

    #[test]
    fn test_osc52_encodes_multiline_text() {
        let seq = osc52_sequence("a\n    \nb");
        assert!(!seq[1..].contains('\n'));
        assert!(seq.starts_with("\x1b]52;c;"));
    }

    #[test]
    fn test_error_converts_to_clipboard_code() {
        let err: apkforge_core::Error = ClipboardError::Unavailable("no display".into()).into();
        assert_eq!(err.code, apkforge_core::ErrorCode::ClipboardError);
        assert!(err.message.contains("no display"));
    }
}
