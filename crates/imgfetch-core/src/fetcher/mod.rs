//! Per-URL fetch-and-save operation.
//!
//! One GET, one content-type check, one duplicate check, one write. Every
//! failure is folded into the returned [`FetchOutcome`]; nothing here aborts
//! a batch.

use std::fs;
use std::path::{Path, PathBuf};

use crate::filename;
use crate::transport::{Transport, TransportError};

/// Why a URL was skipped without writing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The response's Content-Type did not look like an image (or was
    /// absent). The body is discarded.
    NotAnImage { content_type: Option<String> },
    /// A file with the derived name already exists in the destination.
    /// Existing files are never overwritten.
    Duplicate { filename: String },
}

/// Terminal error for a single URL.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport failure or non-2xx status. Not retried.
    #[error("network error: {0}")]
    Network(#[from] TransportError),
    /// Any other failure during processing, e.g. the filesystem write.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Tagged result of attempting one URL.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Body written to `path` as a new file.
    Saved { filename: String, path: PathBuf },
    /// Nothing written; see the reason.
    Skipped(SkipReason),
    /// The attempt failed; the error is terminal for this URL only.
    Failed(FetchError),
}

/// Fetches `url` and saves the body under `dest_dir` if it is a novel image.
///
/// The caller is responsible for `dest_dir` existing; see
/// [`crate::batch::run_batch`].
pub fn fetch(transport: &dyn Transport, url: &str, dest_dir: &Path) -> FetchOutcome {
    let response = match transport.fetch(url) {
        Ok(r) => r,
        Err(e) => return FetchOutcome::Failed(FetchError::Network(e)),
    };

    if !is_image(response.content_type.as_deref()) {
        tracing::debug!(url, content_type = ?response.content_type, "response is not an image");
        return FetchOutcome::Skipped(SkipReason::NotAnImage {
            content_type: response.content_type,
        });
    }

    let name = filename::derive_filename(url);
    let path = dest_dir.join(&name);
    if path.exists() {
        return FetchOutcome::Skipped(SkipReason::Duplicate { filename: name });
    }

    match fs::write(&path, &response.body) {
        Ok(()) => {
            tracing::info!(url, path = %path.display(), "saved image");
            FetchOutcome::Saved {
                filename: name,
                path,
            }
        }
        Err(e) => FetchOutcome::Failed(FetchError::Io(e)),
    }
}

/// An image response is anything whose Content-Type contains "image"
/// (matched case-insensitively). No header means not an image.
fn is_image(content_type: Option<&str>) -> bool {
    content_type.map_or(false, |ct| ct.to_ascii_lowercase().contains("image"))
}
