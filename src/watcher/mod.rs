//! Clipboard watch loop.
//!
//! Polls the system clipboard at a fixed interval, runs changed text
//! through the citation stripper, and writes the cleaned version back.
//! Individual tool failures are counted and survived; only a platform
//! without any usable clipboard tool stops the loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crate::citation::CitationStripper;
use crate::clipboard::{ClipboardError, SystemClipboard};
use crate::config::WatchConfig;

/// Lowercase form of [`crate::citation::KINDLE_MARKER`], what
/// [`is_candidate`] scans for.
const CANDIDATE_MARKER: &str = "kindle edition.";

/// How often the sleep between polls re-checks the shutdown flag.
const SHUTDOWN_POLL: Duration = Duration::from_millis(100);

/// Runtime options for the watch loop.
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Time between clipboard polls.
    pub interval: Duration,
    /// Run the cheap marker scan before the full rule table.
    pub precheck: bool,
}

impl WatchOptions {
    pub fn from_config(config: &WatchConfig) -> Self {
        Self {
            // A zero interval would spin; clamp to something measurable.
            interval: Duration::from_millis(config.interval_ms.max(1)),
            precheck: config.precheck,
        }
    }
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self::from_config(&WatchConfig::default())
    }
}

/// What a single poll did.
#[derive(Debug)]
pub enum PollOutcome {
    /// Clipboard text was replaced with a cleaned version.
    Cleaned,
    /// Text changed but the rule table found no citation.
    NoCitation,
    /// Text changed but the marker pre-check ruled it out.
    NotCandidate,
    /// Same text as the previous poll.
    Unchanged,
    /// Clipboard holds no text content.
    NoText,
    /// A tool failed; counted, the loop keeps going.
    Failed,
    /// No tool will ever answer on this system; the loop must stop.
    Fatal(ClipboardError),
}

impl PollOutcome {
    /// Short human description for one-shot output.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Cleaned => "cleaned clipboard text",
            Self::NoCitation => "no citation found",
            Self::NotCandidate => "no citation marker present",
            Self::Unchanged => "clipboard unchanged",
            Self::NoText => "no text on clipboard",
            Self::Failed => "clipboard tool failed",
            Self::Fatal(_) => "no clipboard tool available",
        }
    }
}

/// Counters for one watch session.
#[derive(Debug, Clone)]
pub struct SessionStats {
    /// Total polls performed.
    pub polls: u64,
    /// Changed snapshots that went through the full rule table.
    pub candidates: u64,
    /// Snapshots rewritten with the citation removed.
    pub cleaned: u64,
    /// Read or write failures survived.
    pub errors: u64,
    started: Instant,
}

impl SessionStats {
    fn new() -> Self {
        Self {
            polls: 0,
            candidates: 0,
            cleaned: 0,
            errors: 0,
            started: Instant::now(),
        }
    }

    /// Time since the session started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// One-line session summary for shutdown output.
    pub fn summary(&self) -> String {
        format!(
            "{} polls, {} citations removed, {} errors in {}s",
            self.polls,
            self.cleaned,
            self.errors,
            self.elapsed().as_secs()
        )
    }
}

/// Watches the clipboard and strips citations as they appear.
pub struct Watcher {
    clipboard: SystemClipboard,
    stripper: CitationStripper,
    options: WatchOptions,
    last_seen: Option<String>,
    stats: SessionStats,
}

impl Watcher {
    /// Create a watcher over the real system clipboard.
    pub fn new(options: WatchOptions) -> Self {
        Self::with_clipboard(SystemClipboard::new(), options)
    }

    /// Create a watcher over a specific clipboard (for testing).
    pub fn with_clipboard(clipboard: SystemClipboard, options: WatchOptions) -> Self {
        Self {
            clipboard,
            stripper: CitationStripper::new(),
            options,
            last_seen: None,
            stats: SessionStats::new(),
        }
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Poll until `shutdown` becomes true.
    ///
    /// Returns the session counters on a clean stop, or the clipboard
    /// error when no tool can answer at all.
    pub fn run(&mut self, shutdown: &AtomicBool) -> Result<SessionStats, ClipboardError> {
        tracing::info!(
            interval_ms = self.options.interval.as_millis() as u64,
            precheck = self.options.precheck,
            "watching clipboard"
        );

        while !shutdown.load(Ordering::SeqCst) {
            if let PollOutcome::Fatal(err) = self.poll_once() {
                return Err(err);
            }
            self.sleep_interruptibly(shutdown);
        }

        tracing::info!(summary = %self.stats.summary(), "watch session ended");
        Ok(self.stats.clone())
    }

    /// Read the clipboard once and clean it if needed.
    pub fn poll_once(&mut self) -> PollOutcome {
        self.stats.polls += 1;

        let text = match self.clipboard.read() {
            Ok(Some(text)) => text,
            Ok(None) => return PollOutcome::NoText,
            Err(err @ (ClipboardError::UnsupportedPlatform | ClipboardError::NoToolAvailable)) => {
                return PollOutcome::Fatal(err);
            }
            Err(err) => {
                self.stats.errors += 1;
                tracing::warn!(%err, "clipboard read failed");
                return PollOutcome::Failed;
            }
        };

        if self.last_seen.as_deref() == Some(text.as_str()) {
            return PollOutcome::Unchanged;
        }

        if self.options.precheck && !is_candidate(&text) {
            self.last_seen = Some(text);
            return PollOutcome::NotCandidate;
        }
        self.stats.candidates += 1;

        let cleaned = self.stripper.clean(&text);
        if cleaned == text {
            self.last_seen = Some(text);
            return PollOutcome::NoCitation;
        }
        let cleaned = cleaned.to_string();

        match self.clipboard.write(&cleaned) {
            Ok(tool) => {
                self.stats.cleaned += 1;
                tracing::info!(
                    tool = tool.name(),
                    removed = text.len() - cleaned.len(),
                    "cleaned clipboard text"
                );
                self.last_seen = Some(cleaned);
                PollOutcome::Cleaned
            }
            Err(err) => {
                self.stats.errors += 1;
                tracing::warn!(%err, "clipboard write failed");
                // last_seen stays untouched so the next poll retries.
                PollOutcome::Failed
            }
        }
    }

    fn sleep_interruptibly(&self, shutdown: &AtomicBool) {
        let mut remaining = self.options.interval;
        while !remaining.is_zero() && !shutdown.load(Ordering::SeqCst) {
            let slice = remaining.min(SHUTDOWN_POLL);
            thread::sleep(slice);
            remaining = remaining.saturating_sub(slice);
        }
    }
}

/// Cheap screen applied before the rule table: without the closing
/// literal somewhere in the text, no rule can match. Case-insensitive
/// on purpose so near-misses still reach the table for a proper verdict.
pub fn is_candidate(text: &str) -> bool {
    text.to_lowercase().contains(CANDIDATE_MARKER)
}
