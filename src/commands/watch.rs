//! Watch command handler

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use clipcite::watcher::{PollOutcome, WatchOptions, Watcher};
use clipcite::Config;

/// Run the clipboard watch loop until interrupted.
///
/// CLI flags override the corresponding config file settings.
#[cfg(not(tarpaulin_include))]
pub fn handle(interval: Option<u64>, once: bool, no_precheck: bool) -> Result<()> {
    let config = Config::load()?;
    let mut options = WatchOptions::from_config(&config.watch);
    if let Some(ms) = interval {
        options.interval = Duration::from_millis(ms.max(1));
    }
    if no_precheck {
        options.precheck = false;
    }

    let mut watcher = Watcher::new(options);

    if once {
        return match watcher.poll_once() {
            PollOutcome::Fatal(err) => Err(err.into()),
            outcome => {
                println!("{}", outcome.describe());
                Ok(())
            }
        };
    }

    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            shutdown.store(true, Ordering::SeqCst);
        })
        .context("Failed to install Ctrl-C handler")?;
    }

    let stats = watcher.run(&shutdown)?;
    println!("Session: {}", stats.summary());
    Ok(())
}
