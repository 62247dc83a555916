//! Cross-platform clipboard access for copying exhibit code.
//!
//! # Platform-Specific Behavior
//!
//! On Linux the manager tries `wl-copy`, `xclip` and then `xsel` before
//! falling back to the `arboard` crate, because text copied through an
//! external tool survives the application exiting. Elsewhere it uses
//! `arboard` directly.
//!
//! The app talks to the clipboard through the [`Clipboard`] trait so that
//! tests can record copies instead of touching the system clipboard.

use std::fmt;

use thiserror::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for clipboard operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    /// Clipboard is not available on this system.
    #[error("Clipboard not available")]
    NotAvailable,
    /// Failed to copy text to clipboard.
    #[error("Failed to copy: {0}")]
    CopyFailed(String),
}

/// Result type for clipboard operations.
pub type ClipboardResult<T> = Result<T, ClipboardError>;

// ============================================================================
// Clipboard Trait
// ============================================================================

/// Something text can be copied to.
pub trait Clipboard: fmt::Debug + Send {
    /// Copies `text`, replacing the current clipboard content.
    ///
    /// # Errors
    ///
    /// Returns an error if no clipboard is reachable or the copy fails.
    fn copy_text(&self, text: &str) -> ClipboardResult<()>;
}

// ============================================================================
// Clipboard Manager
// ============================================================================

/// System clipboard.
#[derive(Debug)]
pub struct ClipboardManager {
    /// Whether to prefer external tools on Linux.
    prefer_external_tools: bool,
}

impl Default for ClipboardManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardManager {
    /// Creates a clipboard manager that prefers external tools on Linux.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefer_external_tools: true,
        }
    }

    fn copy_with_arboard(&self, text: &str) -> ClipboardResult<()> {
        let mut clipboard = arboard::Clipboard::new().map_err(|_| ClipboardError::NotAvailable)?;

        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::CopyFailed(e.to_string()))
    }

    #[cfg(target_os = "linux")]
    fn copy_with_external_tool(&self, text: &str) -> ClipboardResult<()> {
        const TOOLS: [(&str, &[&str]); 3] = [
            ("wl-copy", &[]),
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
        ];

        TOOLS
            .iter()
            .find(|(tool, args)| Self::try_tool(tool, args, text))
            .map(|(tool, _)| tracing::debug!(tool, "copied with external tool"))
            .ok_or(ClipboardError::NotAvailable)
    }

    /// Pipes `text` into `tool`; `true` if it exited successfully.
    #[cfg(target_os = "linux")]
    fn try_tool(tool: &str, args: &[&str], text: &str) -> bool {
        use std::io::Write;
        use std::process::{Command, Stdio};

        let child = Command::new(tool)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let Ok(mut child) = child else {
            return false;
        };

        let Some(mut stdin) = child.stdin.take() else {
            return false;
        };

        if stdin.write_all(text.as_bytes()).is_err() {
            return false;
        }

        drop(stdin);

        child.wait().map(|s| s.success()).unwrap_or(false)
    }
}

impl Clipboard for ClipboardManager {
    fn copy_text(&self, text: &str) -> ClipboardResult<()> {
        #[cfg(target_os = "linux")]
        if self.prefer_external_tools && self.copy_with_external_tool(text).is_ok() {
            return Ok(());
        }

        self.copy_with_arboard(text)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_manager_creation() {
        assert!(ClipboardManager::new().prefer_external_tools);
        assert!(ClipboardManager::default().prefer_external_tools);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ClipboardError::NotAvailable.to_string(),
            "Clipboard not available"
        );
        assert_eq!(
            ClipboardError::CopyFailed("test".to_string()).to_string(),
            "Failed to copy: test"
        );
    }

    // Copying for real needs a display server, so only check it returns.
    #[test]
    fn test_copy_text_returns_result() {
        let manager = ClipboardManager {
            prefer_external_tools: false,
        };
        let _ = manager.copy_text("test").is_ok();
    }
}
