//! Linux-safe filename sanitization.

/// Sanitizes a candidate filename for safe use on Linux.
///
/// - Replaces NUL, `/`, `\`, whitespace, and control characters with `_`
/// - Trims leading/trailing spaces, dots, and underscores
/// - Collapses consecutive underscores
/// - Limits length to 255 bytes (Linux NAME_MAX)
pub fn sanitize_filename(name: &str) -> String {
    const NAME_MAX: usize = 255;

    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;

    for c in name.chars() {
        // Literal underscores join the collapse run, so replaced characters
        // next to them never produce doubles.
        let underscore = c == '_'
            || c == '\0'
            || c == '/'
            || c == '\\'
            || c == ' '
            || c == '\t'
            || c.is_control();
        if underscore {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(c);
            prev_underscore = false;
        }
    }

    let trimmed = out.trim_matches(|c| c == ' ' || c == '\t' || c == '.' || c == '_');

    if trimmed.len() > NAME_MAX {
        let mut take = NAME_MAX;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}
