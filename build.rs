//! Build script for clipcite - embeds git commit hash and build info
//!
//! When the `release` feature is NOT set (default dev builds):
//! - Emits `VERGEN_GIT_SHA` environment variable with the commit hash
//! - Emits `VERGEN_BUILD_DATE` environment variable with the build date
//!
//! When the `release` feature IS set (CI/official builds):
//! - Emits build date only (clean version string without git hash)

use std::env;

use vergen_gitcl::{BuildBuilder, Emitter, GitclBuilder};

fn emit_build_date() {
    let build = match BuildBuilder::default().build_date(true).build() {
        Ok(build) => build,
        Err(e) => {
            println!("cargo:warning=Failed to configure build info: {}", e);
            println!("cargo:rustc-env=VERGEN_BUILD_DATE=unknown");
            return;
        }
    };

    let emitted = Emitter::default()
        .add_instructions(&build)
        .and_then(|emitter| emitter.emit());

    if let Err(e) = emitted {
        println!("cargo:warning=Failed to get build info: {}", e);
        println!("cargo:rustc-env=VERGEN_BUILD_DATE=unknown");
    }
}

fn emit_git_sha() {
    // Use graceful fallback if git info is unavailable (e.g. source tarball)
    let git = match GitclBuilder::default().sha(true).build() {
        Ok(git) => git,
        Err(e) => {
            println!("cargo:warning=Failed to configure git info: {}", e);
            println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
            return;
        }
    };

    let emitted = Emitter::default()
        .add_instructions(&git)
        .and_then(|emitter| emitter.emit());

    if let Err(e) = emitted {
        println!("cargo:warning=Failed to get git info: {}", e);
        println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
    }
}

fn main() {
    emit_build_date();

    // Features reach build scripts as environment variables, not cfg.
    // For release builds, no git SHA is emitted (clean version string).
    if env::var("CARGO_FEATURE_RELEASE").is_err() {
        emit_git_sha();
    }
}
