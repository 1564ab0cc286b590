//! macOS pasteboard clipboard tool.

use crate::clipboard::tool::{ClipboardTool, ToolError, ToolKind};
use std::process::Command;

/// macOS pasteboard tool pair.
///
/// Uses `pbpaste` to read and `pbcopy` to write the general pasteboard.
pub struct Pasteboard;

impl Pasteboard {
    /// Create a new Pasteboard tool.
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardTool for Pasteboard {
    fn kind(&self) -> ToolKind {
        ToolKind::Pasteboard
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "macos")
    }

    fn read_text(&self) -> Result<Option<String>, ToolError> {
        let output = Command::new("pbpaste")
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
        super::run_with_stdin(Command::new("pbcopy"), text)
    }
}

impl Default for Pasteboard {
    fn default() -> Self {
        Self::new()
    }
}
