//! Integration tests for top-level CLI behavior

use assert_cmd::Command;
use predicates::prelude::*;

fn clipcite() -> Command {
    Command::cargo_bin("clipcite").expect("binary exists")
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn help_lists_all_subcommands() {
    clipcite()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("watch")
                .and(predicate::str::contains("clean"))
                .and(predicate::str::contains("completions")),
        );
}

#[test]
fn version_flag_prints_package_version() {
    clipcite()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn long_version_reports_build_metadata() {
    clipcite()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("built"));
}

#[test]
fn no_subcommand_is_a_usage_error() {
    clipcite()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

// ============================================================================
// Shell Completion Tests
// ============================================================================

#[test]
fn completions_bash_mentions_subcommands() {
    clipcite()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("clipcite")
                .and(predicate::str::contains("watch"))
                .and(predicate::str::contains("clean")),
        );
}

#[test]
fn completions_zsh_mentions_subcommands() {
    clipcite()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clipcite").and(predicate::str::contains("watch")));
}

#[test]
fn completions_rejects_unknown_shell() {
    clipcite()
        .args(["completions", "tcsh"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
}
