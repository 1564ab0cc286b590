//! Platform-specific clipboard tools.

mod pasteboard;
mod wl_clipboard;
mod xclip;
mod xsel;

pub use pasteboard::Pasteboard;
pub use wl_clipboard::WlClipboard;
pub use xclip::Xclip;
pub use xsel::Xsel;

use super::tool::{ClipboardTool, ToolError};
use std::io::Write;
use std::process::{Command, Stdio};

/// Get the platform-appropriate tools in priority order.
pub fn platform_tools() -> Vec<Box<dyn ClipboardTool>> {
    #[cfg(target_os = "macos")]
    {
        vec![Box::new(Pasteboard::new())]
    }

    #[cfg(target_os = "linux")]
    {
        vec![
            Box::new(Xclip::new()),
            Box::new(Xsel::new()),
            Box::new(WlClipboard::new()),
        ]
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    {
        vec![]
    }
}

/// Run a tool, feeding `text` on its stdin, and wait for it to exit.
///
/// The child is reaped on every path: a failed pipe write still kills and
/// waits before surfacing the error, so no zombie is left behind.
pub(crate) fn run_with_stdin(mut command: Command, text: &str) -> Result<(), ToolError> {
    let mut child = command
        .stdin(Stdio::piped())
        .spawn()
        .map_err(ToolError::from_io)?;

    // stdin must drop (closing the pipe) before the wait, or the child
    // never sees EOF.
    let fed = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()),
        None => Ok(()),
    };

    if let Err(err) = fed {
        let _ = child.kill();
        let _ = child.wait();
        return Err(ToolError::Failed(err.to_string()));
    }

    let status = child.wait().map_err(|e| ToolError::Failed(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        let program = command.get_program().to_string_lossy();
        Err(ToolError::Failed(format!("{program} failed ({status})")))
    }
}
