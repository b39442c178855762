//! Content-Type extraction from raw response header lines.

/// Extracts the `Content-Type` value from collected header lines.
///
/// When the transfer followed redirects, the callback sees the header blocks
/// of every hop; each block opens with an `HTTP/...` status line, so the
/// capture is reset on those and the final response's value wins.
pub(crate) fn content_type_from_headers(lines: &[String]) -> Option<String> {
    let mut content_type = None;

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            content_type = None;
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                content_type = Some(value.trim().to_string());
            }
        }
    }

    content_type
}
