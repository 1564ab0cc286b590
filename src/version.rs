//! Version string assembly from build-time metadata.
//!
//! The build script embeds the short git commit hash (dev builds only) and
//! the build date; this module formats them into the string shown by
//! `clipcite --version`.

use std::sync::LazyLock;

/// Package version as declared in Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date embedded by the build script (`unknown` outside CI/git).
pub const BUILD_DATE: &str = env!("VERGEN_BUILD_DATE");

/// Long version string for `--version` output.
///
/// Dev builds include the short commit hash: `0.2.0 (1a2b3c4, built
/// 2026-08-22)`. Official builds (the `release` feature) omit it. The
/// string is assembled on first use and shared for the program lifetime.
pub fn long() -> &'static str {
    static LONG: LazyLock<String> = LazyLock::new(|| match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if sha != "unknown" => {
            format!("{} ({}, built {})", PKG_VERSION, sha, BUILD_DATE)
        }
        _ => format!("{} (built {})", PKG_VERSION, BUILD_DATE),
    });
    &LONG
}
