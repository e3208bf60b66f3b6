/// Truncate a string to at most `max_bytes` bytes at a character boundary.
pub fn truncate_to_char_boundary(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) && end > 0 {
        end -= 1;
    }
    &s[..end]
}

/// Upper bound on how much of an error body ends up in an `AiError::Api`.
pub(crate) const MAX_ERROR_BODY_BYTES: usize = 2048;

pub(crate) fn error_body_preview(body: &str) -> String {
    let trimmed = body.trim();
    let preview = truncate_to_char_boundary(trimmed, MAX_ERROR_BODY_BYTES);
    if preview.len() < trimmed.len() {
        format!("{preview}...")
    } else {
        preview.to_string()
    }
}
