//! Detection and removal of trailing e-reader citations.
//!
//! When text is copied from a Kindle reader the clipboard payload ends with
//! an attribution block such as:
//!
//! ```text
//! Author, Name. Book Title (p. 42). Publisher. Kindle Edition.
//! ```
//!
//! [`CitationStripper`] removes exactly one such suffix per call and leaves
//! everything before it untouched. Text without a recognizable citation is
//! returned verbatim, so callers can detect a removal by comparing the
//! result against the input.
//!
//! Known limitation: the inline form (citation glued to the prose sentence
//! without a newline) is only recognized when the author segment opens with
//! a capitalized surname followed by a comma. Prose that happens to end in
//! `Kindle Edition.` without that shape is deliberately left alone.

mod rules;

use rules::CitationRule;

/// The literal every citation ends with. Useful as a cheap pre-check before
/// running the full rule table.
pub const KINDLE_MARKER: &str = "Kindle Edition.";

/// Separator characters discarded from the end of the kept prose.
const TRAILING_WHITESPACE: &[char] = &[' ', '\t', '\r', '\n'];

/// Removes a single trailing citation from copied text.
///
/// Construction is free after the first use anywhere in the process; the
/// rule table lives for the lifetime of the program.
pub struct CitationStripper {
    rules: &'static [CitationRule],
}

impl CitationStripper {
    pub fn new() -> Self {
        Self {
            rules: rules::table(),
        }
    }

    /// Strips the trailing citation, if any.
    ///
    /// Returns a subslice of `text` with the citation and the separator
    /// whitespace in front of it removed, or `text` itself when no rule
    /// produces a change. The first rule that matches and actually shortens
    /// the text wins; later rules are not consulted.
    pub fn clean<'a>(&self, text: &'a str) -> &'a str {
        if text.trim().is_empty() {
            return text;
        }
        for rule in self.rules {
            if let Some(end) = rule.prose_end(text) {
                let cleaned = text[..end].trim_end_matches(TRAILING_WHITESPACE);
                if cleaned != text {
                    tracing::debug!(
                        prefix = ?rule.prefix,
                        marker = ?rule.marker,
                        removed = text.len() - cleaned.len(),
                        "stripped trailing citation"
                    );
                    return cleaned;
                }
            }
        }
        text
    }

    /// True when `clean` would shorten the text.
    pub fn would_clean(&self, text: &str) -> bool {
        self.clean(text) != text
    }
}

impl Default for CitationStripper {
    fn default() -> Self {
        Self::new()
    }
}
