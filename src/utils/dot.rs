//! DOT format utilities for graph visualization.
//!
//! Node names are arbitrary strings once they are added through the API, so every name
//! that ends up in a DOT document goes through [`escape_dot`] first.

/// Escapes a string for use inside a double-quoted DOT identifier or label.
///
/// Quotes and backslashes are escaped, line breaks become `\n` and carriage returns are
/// dropped.
#[must_use]
pub fn escape_dot(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_dot_plain() {
        assert_eq!(escape_dot("A"), "A");
    }

    #[test]
    fn test_escape_dot_quotes_and_backslashes() {
        assert_eq!(escape_dot("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape_dot("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_escape_dot_line_breaks() {
        assert_eq!(escape_dot("line1\r\nline2"), "line1\\nline2");
    }
}
