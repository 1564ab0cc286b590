//! Linux Wayland wl-clipboard tool.

use crate::clipboard::tool::{ClipboardTool, ToolError, ToolKind};
use std::process::Command;

/// Linux Wayland clipboard tool pair.
///
/// Reads with `wl-paste --no-newline` (wl-paste appends a newline by
/// default) and writes by piping to `wl-copy`.
pub struct WlClipboard;

impl WlClipboard {
    /// Create a new WlClipboard tool.
    pub fn new() -> Self {
        Self
    }

    /// Check if the wl-clipboard pair is installed.
    fn tool_exists() -> bool {
        Command::new("which")
            .arg("wl-paste")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl ClipboardTool for WlClipboard {
    fn kind(&self) -> ToolKind {
        ToolKind::WlClipboard
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && Self::tool_exists()
    }

    fn read_text(&self) -> Result<Option<String>, ToolError> {
        let output = Command::new("wl-paste")
            .arg("--no-newline")
            .output()
            .map_err(ToolError::from_io)?;

        if !output.status.success() {
            return Ok(None);
        }

        match String::from_utf8(output.stdout) {
            Ok(text) => Ok(Some(text)),
            Err(_) => Ok(None),
        }
    }

    fn write_text(&self, text: &str) -> Result<(), ToolError> {
        super::run_with_stdin(Command::new("wl-copy"), text)
    }
}

impl Default for WlClipboard {
    fn default() -> Self {
        Self::new()
    }
}
