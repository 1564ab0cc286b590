//! ClipboardTool trait and related error types.

use std::io::ErrorKind;

/// A tool pair that can read from and write to the system clipboard.
///
/// Each implementation wraps a specific pair of OS commands (pbpaste and
/// pbcopy, xclip in both directions, etc.) and knows how to invoke them
/// correctly.
pub trait ClipboardTool: Send + Sync {
    /// The kind identifier for this tool.
    fn kind(&self) -> ToolKind;

    /// Human-readable name for error messages.
    fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Check if this tool is available on the system.
    ///
    /// Should be fast - typically checks if the binary exists.
    fn is_available(&self) -> bool;

    /// Read the current clipboard text.
    ///
    /// Returns `Ok(None)` when the clipboard holds no text content (empty
    /// selection or non-text data). Errors are reserved for failures to run
    /// the tool at all.
    fn read_text(&self) -> Result<Option<String>, ToolError>;

    /// Replace the clipboard content with `text`.
    fn write_text(&self, text: &str) -> Result<(), ToolError>;
}

/// Error from a specific tool operation.
#[derive(Debug, Clone)]
pub enum ToolError {
    /// Tool execution failed
    Failed(String),
    /// Tool not found on system
    NotFound,
}

impl ToolError {
    /// Map a spawn/IO error, keeping "binary missing" distinct so the
    /// orchestrator can move on to the next tool quietly.
    pub(crate) fn from_io(err: std::io::Error) -> Self {
        if err.kind() == ErrorKind::NotFound {
            Self::NotFound
        } else {
            Self::Failed(err.to_string())
        }
    }
}

/// Which tool pair performed the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    /// macOS pasteboard (pbpaste/pbcopy)
    Pasteboard,
    /// Linux X11
    Xclip,
    /// Linux X11 alternative
    Xsel,
    /// Linux Wayland (wl-paste/wl-copy)
    WlClipboard,
}

impl ToolKind {
    /// Tool name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pasteboard => "pasteboard",
            Self::Xclip => "xclip",
            Self::Xsel => "xsel",
            Self::WlClipboard => "wl-clipboard",
        }
    }
}
