//! Shared scanning for single-marker tagged spans (`^x^`, `~x~`).
//!
//! A span opens with exactly one marker character and closes at the next
//! one. Ordinary whitespace before the closer rejects the match, so
//! `a ^ b ^ c` stays plain text. Marker runs of length two never open or
//! close a span here; they are left for the double-marker extensions
//! (`~~` delete). The scanners also refuse to open right after a marker
//! character, so re-firing inside a double run matches nothing.

/// Returns the span interior and the total number of bytes consumed,
/// markers included. Markers are ASCII, so the consumed length is
/// `interior + 2`.
pub(crate) fn scan_marker_span(input: &str, marker: char) -> Option<(String, usize)> {
    let rest = input.strip_prefix(marker)?;
    if rest.starts_with(marker) {
        return None;
    }

    let mut close_at = None;
    for (idx, ch) in rest.char_indices() {
        if ch == marker {
            close_at = Some(idx);
            break;
        }
        if ch.is_whitespace() {
            return None;
        }
    }

    let close_at = close_at?;
    if rest[close_at + 1..].starts_with(marker) {
        // The closer belongs to a double-marker run (`~x~~`), not to us.
        return None;
    }
    Some((rest[..close_at].to_string(), close_at + 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_tight_span() {
        assert_eq!(scan_marker_span("^2^ rest", '^'), Some(("2".to_string(), 3)));
    }

    #[test]
    fn rejects_whitespace_inside() {
        assert_eq!(scan_marker_span("^a b^", '^'), None);
    }

    #[test]
    fn rejects_unclosed_span() {
        assert_eq!(scan_marker_span("^abc", '^'), None);
    }

    #[test]
    fn rejects_empty_and_doubled_marker() {
        assert_eq!(scan_marker_span("^^", '^'), None);
        assert_eq!(scan_marker_span("~~strike~~", '~'), None);
    }

    #[test]
    fn rejects_closer_from_a_double_run() {
        assert_eq!(scan_marker_span("~struck~~", '~'), None);
        assert_eq!(scan_marker_span("^x^^", '^'), None);
    }

    #[test]
    fn line_break_counts_as_whitespace() {
        assert_eq!(scan_marker_span("~a\nb~", '~'), None);
    }
}
