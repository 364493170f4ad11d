//! String utilities for the domain layer.

/// Shorten text for log lines and previews, appending `...` when cut.
///
/// `max_len` counts bytes, but the cut always lands on a UTF-8 character
/// boundary.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}
