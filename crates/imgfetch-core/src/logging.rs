//! Tracing setup for the CLI.
//!
//! Diagnostics go to a log file under the XDG state dir so they never mix
//! with the user-facing stdout lines. When the file cannot be opened the
//! subscriber writes to stderr instead.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,imgfetch=debug";

/// Initializes the global tracing subscriber.
///
/// Returns the log file path when one was opened, or `None` when logging
/// fell back to stderr. Call once, before any other work.
pub fn init() -> Option<PathBuf> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (writer, log_path) = match open_log_file() {
        Ok((file, path)) => (BoxMakeWriter::new(Mutex::new(file)), Some(path)),
        Err(_) => (BoxMakeWriter::new(std::io::stderr), None),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    if let Some(path) = &log_path {
        tracing::info!("logging to {}", path.display());
    }
    log_path
}

/// Opens (appending) `~/.local/state/imgfetch/imgfetch.log`, creating
/// parent directories as needed.
fn open_log_file() -> Result<(fs::File, PathBuf)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgfetch")?;
    let path = xdg_dirs.place_state_file("imgfetch.log")?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;
    Ok((file, path))
}
