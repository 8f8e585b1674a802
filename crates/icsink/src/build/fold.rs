//! Content line folding (RFC 5545 §3.1).

/// Maximum physical line length in octets (not characters).
const MAX_LINE_OCTETS: usize = 75;

/// Folds a content line and appends it to `out`, without a line terminator.
///
/// Lines longer than 75 octets are split by inserting CRLF plus a single
/// space; the space counts against the continuation line's limit. Splits
/// happen only at UTF-8 character boundaries.
pub fn fold_into(line: &str, out: &mut String) {
    if line.len() <= MAX_LINE_OCTETS {
        out.push_str(line);
        return;
    }

    let mut remaining = MAX_LINE_OCTETS;
    for c in line.chars() {
        let width = c.len_utf8();
        if width > remaining {
            out.push_str("\r\n ");
            remaining = MAX_LINE_OCTETS - 1;
        }
        out.push(c);
        remaining -= width;
    }
}

/// Folds a content line, returning the folded text.
#[must_use]
pub fn fold_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    fold_into(line, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_line_unchanged() {
        let line = "SUMMARY:Standup";
        assert_eq!(fold_line(line), line);
    }

    #[test]
    fn exactly_75_octets_unchanged() {
        let line = "X".repeat(75);
        assert_eq!(fold_line(&line), line);
    }

    #[test]
    fn long_line_folds_at_75() {
        let folded = fold_line(&"X".repeat(80));
        let first: String = folded.chars().take_while(|&c| c != '\r').collect();
        assert_eq!(first.len(), 75);
        assert!(folded.contains("\r\n "));
    }

    #[test]
    fn continuation_lines_fit_with_prefix() {
        let folded = fold_line(&"X".repeat(400));
        for segment in folded.split("\r\n").skip(1) {
            // The leading space is part of the segment here.
            assert!(segment.len() <= MAX_LINE_OCTETS);
            assert!(segment.starts_with(' '));
        }
    }

    #[test]
    fn folds_at_utf8_boundaries() {
        // Multi-byte characters must not be split.
        let line = format!("DESCRIPTION:{}", "\u{65e5}".repeat(40));
        let folded = fold_line(&line);
        for segment in folded.split("\r\n ") {
            assert!(segment.is_char_boundary(segment.len()));
            assert!(segment.len() <= MAX_LINE_OCTETS);
        }
    }
}
