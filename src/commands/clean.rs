//! Clean command handler

use std::io::Read;

use anyhow::{Context, Result};

use clipcite::CitationStripper;

/// Clean a single piece of text and print the result.
///
/// Reads from stdin when no argument is given. In check mode nothing is
/// printed; the exit code says whether a citation was removed.
#[cfg(not(tarpaulin_include))]
pub fn handle(text: Option<&str>, check: bool) -> Result<()> {
    let input = match text {
        Some(text) => text.to_string(),
        None => read_stdin()?,
    };

    let stripper = CitationStripper::new();
    let cleaned = stripper.clean(&input);
    let changed = cleaned != input;

    if check {
        if changed {
            return Ok(());
        }
        std::process::exit(1);
    }

    print!("{cleaned}");
    if !cleaned.is_empty() && !cleaned.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn read_stdin() -> Result<String> {
    if atty::is(atty::Stream::Stdin) {
        anyhow::bail!("No text given and stdin is a terminal. Pass TEXT or pipe input.");
    }

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    Ok(input)
}
