//! Linux xsel clipboard tool.

use crate::clipboard::tool::{ClipboardTool, ToolError, ToolKind};
use std::process::Command;

/// Linux X11 clipboard tool using xsel.
///
/// Reads with `xsel --clipboard --output` and writes by piping to
/// `xsel --clipboard --input`.
pub struct Xsel;

impl Xsel {
    /// Create a new Xsel tool.
    pub fn new() -> Self {
        Self
    }

    /// Check if xsel is installed.
    fn tool_exists() -> bool {
        Command::new("which")
            .arg("xsel")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }
}

impl ClipboardTool for Xsel {
    fn kind(&self) -> ToolKind {
        ToolKind::Xsel
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && Self::tool_exists()
    }

    fn read_text(&self) -> Result<Option<String>, ToolError> {
        let output = Command::new("xsel")
            .args(["--clipboard", "--output"])
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
        let mut command = Command::new("xsel");
        command.args(["--clipboard", "--input"]);
        super::run_with_stdin(command, text)
    }
}

impl Default for Xsel {
    fn default() -> Self {
        Self::new()
    }
}
