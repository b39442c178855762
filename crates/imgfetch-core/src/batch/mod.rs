//! Batch driver: parse a URL list and fetch each one sequentially.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::fetcher::{self, FetchOutcome};
use crate::transport::Transport;

/// Splits a comma-separated URL list into an ordered sequence of URLs.
///
/// Whitespace around each piece is trimmed and empty pieces are discarded.
/// Input duplicates are kept; they collide later at the fetcher's
/// duplicate-filename check.
pub fn parse_url_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Fetches every URL in `urls` into `dest_dir`, one at a time, in input
/// order. A URL's failure never stops the ones after it.
///
/// The destination directory is created if absent; that is the only step
/// that can return an error.
pub fn run_batch(
    transport: &dyn Transport,
    urls: &[String],
    dest_dir: &Path,
) -> Result<Vec<FetchOutcome>> {
    fs::create_dir_all(dest_dir).with_context(|| {
        format!(
            "failed to create destination directory: {}",
            dest_dir.display()
        )
    })?;

    let mut outcomes = Vec::with_capacity(urls.len());
    for url in urls {
        let outcome = fetcher::fetch(transport, url, dest_dir);
        tracing::debug!(url = %url, outcome = ?outcome, "fetch finished");
        outcomes.push(outcome);
    }
    Ok(outcomes)
}
