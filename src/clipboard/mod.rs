//! System clipboard access through external platform tools.
//!
//! No clipboard library bindings are used; everything goes through the
//! standard command-line tools of each platform (`pbpaste`/`pbcopy` on
//! macOS, `xclip`/`xsel`/`wl-clipboard` on Linux). [`SystemClipboard`]
//! picks the first working tool and is the only type most callers need.

mod error;
mod system;
mod tool;
pub mod tools;

pub use error::ClipboardError;
pub use system::SystemClipboard;
pub use tool::{ClipboardTool, ToolError, ToolKind};
pub use tools::platform_tools;
