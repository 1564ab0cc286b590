//! Integration tests for the clean command (CLI)

use crate::helpers::{run_clipcite, run_clipcite_stdin};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn clean_help_exits_0_and_shows_usage() {
    let (stdout, _stderr, exit_code) = run_clipcite(&["clean", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Clean a single piece of text"));
    assert!(stdout.contains("--check"));
    assert!(stdout.contains("[TEXT]"));
}

// ============================================================================
// Argument Input Tests
// ============================================================================

#[test]
fn clean_strips_citation_from_argument() {
    let text = "Text from book.\nAuthor. Title (p. 50). Publisher. Kindle Edition.";
    let (stdout, _stderr, exit_code) = run_clipcite(&["clean", text]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "Text from book.\n");
}

#[test]
fn clean_strips_inline_citation() {
    let text = "... a comment. Boswell, Dustin; Foucher, Trevor. The Art of Readable Code (p. 42). O'Reilly Media. Kindle Edition.";
    let (stdout, _stderr, exit_code) = run_clipcite(&["clean", text]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "... a comment.\n");
}

#[test]
fn clean_passes_plain_text_through() {
    let (stdout, _stderr, exit_code) = run_clipcite(&["clean", "no citation here"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "no citation here\n");
}

// ============================================================================
// Stdin Input Tests
// ============================================================================

#[test]
fn clean_reads_stdin_when_no_argument() {
    let text =
        "friends\r\n\r\nMark Michaelis. Essential C# 12.0 (Kindle Location 37). Kindle Edition.";
    let (stdout, _stderr, exit_code) = run_clipcite_stdin(&["clean"], text);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "friends\n");
}

#[test]
fn clean_keeps_existing_trailing_newline() {
    let (stdout, _stderr, exit_code) = run_clipcite_stdin(&["clean"], "plain text\n");

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "plain text\n");
}

#[test]
fn clean_empty_stdin_produces_empty_output() {
    let (stdout, _stderr, exit_code) = run_clipcite_stdin(&["clean"], "");

    assert_eq!(exit_code, 0);
    assert_eq!(stdout, "");
}

// ============================================================================
// Check Mode Tests
// ============================================================================

#[test]
fn check_exits_0_when_citation_removed() {
    let text = "quote\n\nAuthor, A. Title. Kindle Edition.";
    let (stdout, _stderr, exit_code) = run_clipcite(&["clean", "--check", text]);

    assert_eq!(exit_code, 0);
    assert!(stdout.is_empty());
}

#[test]
fn check_exits_1_when_nothing_to_remove() {
    let (stdout, _stderr, exit_code) = run_clipcite(&["clean", "--check", "plain text"]);

    assert_eq!(exit_code, 1);
    assert!(stdout.is_empty());
}

// ============================================================================
// CLI Parsing Tests
// ============================================================================

#[test]
fn unknown_flag_exits_2() {
    let (_stdout, stderr, exit_code) = run_clipcite(&["clean", "--bogus"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("unexpected argument"));
}
