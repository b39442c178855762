//! Final path segment extraction.

/// Extracts the final path segment of a URL (the text after the last `/`).
///
/// Returns `None` if the URL cannot be parsed or the segment is empty —
/// including paths that end in `/` — so the caller can apply the fallback
/// name. Query strings and fragments are not part of the path and never
/// leak into the segment.
pub fn final_path_segment(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let path = parsed.path();
    let segment = path.rsplit('/').next().unwrap_or("");
    if segment.is_empty() || segment == "." || segment == ".." {
        return None;
    }
    Some(segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal() {
        assert_eq!(
            final_path_segment("https://example.com/a/b/photo.jpg").as_deref(),
            Some("photo.jpg")
        );
        assert_eq!(
            final_path_segment("https://example.com/single").as_deref(),
            Some("single")
        );
    }

    #[test]
    fn trailing_slash_is_empty_segment() {
        assert_eq!(final_path_segment("https://example.com/a/b/"), None);
        assert_eq!(final_path_segment("https://example.com/"), None);
    }

    #[test]
    fn bare_host() {
        assert_eq!(final_path_segment("https://example.com"), None);
    }

    #[test]
    fn with_query_and_fragment() {
        assert_eq!(
            final_path_segment("https://example.com/pic.png?token=abc#top").as_deref(),
            Some("pic.png")
        );
    }

    #[test]
    fn unparseable() {
        assert_eq!(final_path_segment("::not-a-url::"), None);
        assert_eq!(final_path_segment(""), None);
    }
}
