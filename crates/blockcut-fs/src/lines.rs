//! Splitting text into lines without losing terminators.

/// Splits `content` into lines, each keeping its trailing `\n`.
///
/// A `\r\n` terminator stays attached to its line, and a final line without
/// a terminator is returned as-is, so concatenating the result always
/// reproduces `content` byte for byte. Empty input yields no lines.
///
/// # Example
/// ```
/// use blockcut_fs::split_lines;
///
/// assert_eq!(split_lines("a\r\nb\nc"), vec!["a\r\n", "b\n", "c"]);
/// ```
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split_inclusive('\n').collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input_has_no_lines() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_keeps_terminators() {
        assert_eq!(split_lines("a\nb\n"), vec!["a\n", "b\n"]);
    }

    #[test]
    fn test_unterminated_last_line() {
        assert_eq!(split_lines("a\nb"), vec!["a\n", "b"]);
    }

    #[test]
    fn test_blank_lines_survive() {
        let content = "\n\nx\n\n";
        let lines = split_lines(content);
        assert_eq!(lines, vec!["\n", "\n", "x\n", "\n"]);
        assert_eq!(lines.concat(), content);
    }
}
