//! Whitespace normalization applied to extracted text before splitting

use regex::Regex;
use std::sync::OnceLock;

fn whitespace_run() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("static pattern is valid"))
}

/// Collapse whitespace runs and trim the result
///
/// A run holding two or more newlines becomes a single blank line (`"\n\n"`);
/// any other run becomes one space. Both decisions are made on the original
/// run, so paragraph breaks survive the single-space collapse.
///
/// ```
/// use chunkwise_core::clean;
///
/// assert_eq!(clean("  one\t two \n\n\n three  "), "one two\n\nthree");
/// ```
pub fn clean(text: &str) -> String {
    whitespace_run()
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let run = &caps[0];
            if run.bytes().filter(|&b| b == b'\n').count() >= 2 {
                "\n\n"
            } else {
                " "
            }
        })
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   \n\t \r\n  "), "");
    }

    #[test]
    fn test_collapses_spaces_and_single_newlines() {
        assert_eq!(clean("Hello   world"), "Hello world");
        assert_eq!(clean("line one\nline two"), "line one line two");
        assert_eq!(clean("tab\t\tseparated"), "tab separated");
        assert_eq!(clean("crlf\r\nline"), "crlf line");
    }

    #[test]
    fn test_preserves_paragraph_breaks() {
        assert_eq!(clean("para one\n\npara two"), "para one\n\npara two");
        assert_eq!(clean("para one \n \n\n  para two"), "para one\n\npara two");
        assert_eq!(clean("a\r\n\r\nb"), "a\n\nb");
    }

    #[test]
    fn test_trims_edges() {
        assert_eq!(clean("\n\n  leading and trailing \n\n"), "leading and trailing");
    }

    #[test]
    fn test_unicode_whitespace() {
        // U+00A0 NO-BREAK SPACE and U+3000 IDEOGRAPHIC SPACE are whitespace
        assert_eq!(clean("a\u{00A0}\u{00A0}b\u{3000}c"), "a b c");
        assert_eq!(clean("これは テスト です"), "これは テスト です");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "",
            "plain",
            "  many   spaces \n\n\n and \n lines  ",
            "x\n \n y\n\nz",
        ];
        for input in inputs {
            let once = clean(input);
            assert_eq!(clean(&once), once, "not idempotent for {input:?}");
        }
    }
}
