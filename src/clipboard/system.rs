//! Orchestrator for clipboard reads and writes.

use super::error::ClipboardError;
use super::tool::{ClipboardTool, ToolError, ToolKind};
use super::tools::platform_tools;

/// Orchestrates clipboard access using available tools.
///
/// Tools are tried in priority order; one that errors is skipped and the
/// next gets a chance. The first tool that answers a read is authoritative,
/// so `Ok(None)` from a working tool does not fall through.
pub struct SystemClipboard {
    tools: Vec<Box<dyn ClipboardTool>>,
}

impl SystemClipboard {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self {
            tools: platform_tools(),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn ClipboardTool>>) -> Self {
        Self { tools }
    }

    /// Get a reference to the tools list.
    pub fn tools(&self) -> &[Box<dyn ClipboardTool>] {
        &self.tools
    }

    /// Read the current clipboard text.
    ///
    /// `Ok(None)` means the clipboard holds no text content right now.
    pub fn read(&self) -> Result<Option<String>, ClipboardError> {
        if self.tools.is_empty() {
            return Err(ClipboardError::UnsupportedPlatform);
        }

        let mut last_failure = None;
        for tool in &self.tools {
            if !tool.is_available() {
                continue;
            }
            match tool.read_text() {
                Ok(content) => return Ok(content),
                Err(ToolError::NotFound) => continue,
                Err(ToolError::Failed(message)) => {
                    tracing::debug!(tool = tool.name(), %message, "clipboard read failed");
                    last_failure = Some((tool.name(), message));
                }
            }
        }

        match last_failure {
            Some((tool, message)) => Err(ClipboardError::ToolFailed { tool, message }),
            None => Err(ClipboardError::NoToolAvailable),
        }
    }

    /// Replace the clipboard content, returning the tool that took it.
    pub fn write(&self, text: &str) -> Result<ToolKind, ClipboardError> {
        if self.tools.is_empty() {
            return Err(ClipboardError::UnsupportedPlatform);
        }

        let mut last_failure = None;
        for tool in &self.tools {
            if !tool.is_available() {
                continue;
            }
            match tool.write_text(text) {
                Ok(()) => return Ok(tool.kind()),
                Err(ToolError::NotFound) => continue,
                Err(ToolError::Failed(message)) => {
                    tracing::debug!(tool = tool.name(), %message, "clipboard write failed");
                    last_failure = Some((tool.name(), message));
                }
            }
        }

        match last_failure {
            Some((tool, message)) => Err(ClipboardError::ToolFailed { tool, message }),
            None => Err(ClipboardError::NoToolAvailable),
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}
