//! Text and parameter value escaping (RFC 5545 §3.3.11, RFC 6868).

/// Escapes a TEXT value per RFC 5545 §3.3.11.
///
/// Backslash, semicolon and comma are backslash-escaped; LF becomes `\n`.
/// Bare CR cannot appear inside a content line and is dropped.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Escapes a parameter value, quoting it when necessary.
///
/// Caret-encodes `^`, DQUOTE and newlines per RFC 6868, then wraps the
/// value in DQUOTEs if it contains `:`, `;` or `,`.
#[must_use]
pub fn escape_param_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '^' => encoded.push_str("^^"),
            '"' => encoded.push_str("^'"),
            '\n' => encoded.push_str("^n"),
            '\r' => {}
            _ => encoded.push(c),
        }
    }
    if encoded.contains([':', ';', ',']) {
        format!("\"{encoded}\"")
    } else {
        encoded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(escape_text("Team meeting"), "Team meeting");
    }

    #[test]
    fn special_characters_escaped() {
        assert_eq!(
            escape_text("a;b,c\\d\ne"),
            "a\\;b\\,c\\\\d\\ne"
        );
    }

    #[test]
    fn crlf_collapses_to_escaped_newline() {
        assert_eq!(escape_text("line1\r\nline2"), "line1\\nline2");
    }

    #[test]
    fn param_value_plain() {
        assert_eq!(escape_param_value("Europe/Paris"), "Europe/Paris");
    }

    #[test]
    fn param_value_quoted_when_reserved() {
        assert_eq!(
            escape_param_value("mailto:jane@example.com"),
            "\"mailto:jane@example.com\""
        );
    }

    #[test]
    fn param_value_caret_encoded() {
        assert_eq!(escape_param_value("say ^\"hi\""), "say ^^^'hi^'");
    }
}
