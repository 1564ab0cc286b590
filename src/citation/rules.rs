//! The ordered citation rule table.
//!
//! Six rules cover two independent axes: how the citation is separated from
//! the preceding prose (blank line, single line break, or inline after a
//! sentence terminator) and whether the title carries a parenthesized
//! page/location marker. Within each separation group the marker-bearing
//! rule runs first, and separation groups run most-specific first. The
//! table is compiled once at first use and never mutated.

use std::sync::LazyLock;

use regex::Regex;

/// How the citation is separated from the preceding prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NewlinePrefix {
    /// A blank line (two or more newline sequences) before the author.
    BlankLine,
    /// Exactly one newline sequence before the author.
    LineBreak,
    /// Appended to the prose sentence, after a period and whitespace.
    Inline,
}

/// Whether the rule requires a parenthesized page/location marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LocationMarker {
    Required,
    Omitted,
}

/// One immutable matcher in the table. Priority is positional: earlier
/// entries are more specific.
pub(crate) struct CitationRule {
    pub(crate) prefix: NewlinePrefix,
    pub(crate) marker: LocationMarker,
    pattern: Regex,
}

impl CitationRule {
    fn compile(prefix: NewlinePrefix, marker: LocationMarker) -> Self {
        let pattern = Regex::new(&pattern_for(prefix, marker))
            .expect("citation rule: hardcoded pattern is valid");
        Self {
            prefix,
            marker,
            pattern,
        }
    }

    /// Byte offset where the citation suffix begins, if this rule matches.
    ///
    /// The offset points at the author segment; separator characters in
    /// front of it are left for the caller's trailing-whitespace trim.
    pub(crate) fn prose_end(&self, text: &str) -> Option<usize> {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.name("cite"))
            .map(|m| m.start())
    }
}

/// Page references (`p. 42`, `pp. 12`, `pp. 7-9`) and device location
/// references (`Kindle Location 37`, `Kindle Locations 100-105`).
const LOCATION: &str = r"p\. \d+|pp\. \d+(?:-\d+)?|Kindle Location \d+|Kindle Locations \d+-\d+";

fn pattern_for(prefix: NewlinePrefix, marker: LocationMarker) -> String {
    // CR-LF and bare LF both count as one newline sequence.
    let separator = match prefix {
        NewlinePrefix::BlankLine => r"(?:\r?\n){2,}",
        NewlinePrefix::LineBreak => r"\r?\n",
        NewlinePrefix::Inline => r"\.\s+",
    };

    // Inline citations must open with a proper-cased surname and a comma;
    // the line start is anchor enough for the newline forms.
    let author = match prefix {
        NewlinePrefix::Inline => r"[A-Z][A-Za-z]*,[^\r\n]*?\. ",
        _ => r"[^\r\n]+?\. ",
    };

    let title = match marker {
        LocationMarker::Required => format!(r"[^\r\n]+? \((?:{LOCATION})\)\. "),
        LocationMarker::Omitted => r"[^\r\n]+?\. ".to_string(),
    };

    // Publisher is optional, segments never span lines, and the suffix must
    // run to the end of the text bar trailing whitespace.
    format!(r"{separator}(?P<cite>{author}{title}(?:[^\r\n]*?\. )?Kindle Edition\.)\s*$")
}

/// The fixed rule table, in evaluation order.
pub(crate) fn table() -> &'static [CitationRule] {
    static TABLE: LazyLock<Vec<CitationRule>> = LazyLock::new(|| {
        let mut rules = Vec::with_capacity(6);
        for prefix in [
            NewlinePrefix::BlankLine,
            NewlinePrefix::LineBreak,
            NewlinePrefix::Inline,
        ] {
            for marker in [LocationMarker::Required, LocationMarker::Omitted] {
                rules.push(CitationRule::compile(prefix, marker));
            }
        }
        rules
    });
    &TABLE
}
