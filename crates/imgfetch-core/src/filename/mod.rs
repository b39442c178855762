//! Filename derivation from URLs.
//!
//! Takes the final segment of a URL's path as the local filename, sanitized
//! for Linux filesystems, with a fixed fallback when the URL yields nothing
//! usable.

mod path;
mod sanitize;

pub use path::final_path_segment;
pub use sanitize::sanitize_filename;

/// Fallback filename when the URL path has no final segment.
pub const DEFAULT_FILENAME: &str = "downloaded_image.jpg";

/// Derives the filename under which a fetched image is stored.
///
/// Uses the final segment of the URL path (the text after the last `/`).
/// A URL whose path ends in `/`, has no path, or does not parse derives the
/// fallback [`DEFAULT_FILENAME`], as does a segment that sanitizes to
/// nothing usable.
///
/// # Examples
///
/// - `derive_filename("https://example.com/pics/cat.png")` → `"cat.png"`
/// - `derive_filename("https://example.com/pics/")` → `"downloaded_image.jpg"`
pub fn derive_filename(url: &str) -> String {
    let raw = match final_path_segment(url) {
        Some(s) => s,
        None => return DEFAULT_FILENAME.to_string(),
    };

    let sanitized = sanitize_filename(&raw);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        DEFAULT_FILENAME.to_string()
    } else {
        sanitized
    }
}
