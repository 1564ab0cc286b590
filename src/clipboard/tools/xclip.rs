//! Linux xclip clipboard tool.

use crate::clipboard::tool::{ClipboardTool, ToolError, ToolKind};
use std::process::Command;

/// Linux X11 clipboard tool using xclip.
///
/// Reads with `xclip -selection clipboard -o` and writes by piping to
/// `xclip -selection clipboard`. xclip exits nonzero when the selection
/// is empty, which maps to "no text content".
pub struct Xclip;

impl Xclip {
    /// Create a new Xclip tool.
    pub fn new() -> Self {
        Self
    }

    /// Check if xclip is installed.
    fn tool_exists() -> bool {
        Command::new("which")
            .arg("xclip")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl ClipboardTool for Xclip {
    fn kind(&self) -> ToolKind {
        ToolKind::Xclip
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && Self::tool_exists()
    }

    fn read_text(&self) -> Result<Option<String>, ToolError> {
        let output = Command::new("xclip")
            .args(["-selection", "clipboard", "-o"])
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
        let mut command = Command::new("xclip");
        command.args(["-selection", "clipboard"]);
        super::run_with_stdin(command, text)
    }
}

impl Default for Xclip {
    fn default() -> Self {
        Self::new()
    }
}
