//! clipcite - clipboard citation stripper
//!
//! E-reader copy features append a bibliographic citation to every piece of
//! text placed on the clipboard (`Author. Title (p. 42). Publisher. Kindle
//! Edition.`). clipcite watches the system clipboard and rewrites such
//! snapshots with the trailing citation removed, leaving the copied prose
//! untouched.
//!
//! # Module Structure
//!
//! - [`citation`] - the citation detection and removal engine
//! - [`clipboard`] - system clipboard access via platform tools
//! - [`watcher`] - the poll loop driving read-clean-write cycles
//! - [`config`] - TOML configuration file handling
//! - [`version`] - version string with embedded build metadata
//!
//! # Usage
//!
//! ```
//! use clipcite::citation::CitationStripper;
//!
//! let stripper = CitationStripper::new();
//! let text = "A memorable line.\n\nAuthor, Some. Book Title (p. 7). Kindle Edition.";
//! assert_eq!(stripper.clean(text), "A memorable line.");
//! ```

pub mod citation;
pub mod clipboard;
pub mod config;
pub mod version;
pub mod watcher;

pub use citation::CitationStripper;
pub use config::Config;
