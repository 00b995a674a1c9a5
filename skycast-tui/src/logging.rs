//! Tracing setup
//!
//! The terminal belongs to the UI, so logs only go to a file, and only when
//! one is configured.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tui_dispatch::{Action, ActionSummary, Middleware};

/// Build the filter: `RUST_LOG` if set, otherwise `default_directive`.
pub fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install a global subscriber writing to `path` (appending).
pub fn init_file_logging(path: &Path, default_directive: &str) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter(default_directive))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}

/// Logs each dispatched action by its summary, so forecast payloads stay
/// out of the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionLogMiddleware;

impl<A: Action + ActionSummary> Middleware<A> for ActionLogMiddleware {
    fn before(&mut self, _action: &A) {}

    fn after(&mut self, action: &A, state_changed: bool) {
        // Ticks would drown out everything else
        if action.name() == "Tick" {
            return;
        }
        tracing::debug!(
            action = %action.summary(),
            state_changed,
            "Action processed"
        );
    }
}
