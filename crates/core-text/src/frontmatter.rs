//! Leading frontmatter detection.
//!
//! A document carries frontmatter when it opens (after optional whitespace) with a `---`
//! fence, one or more newlines, arbitrary content, and a closing `---` fence at the start
//! of a later line. The boundary reported is the number of lines before the closing fence:
//! lines `1..=boundary` belong to the metadata block and the closing fence line is the first
//! line measured past it.
//!
//! Line breaks are counted as `Buffer` counts them: LF, CR and CRLF (one break each).

use regex::Regex;
use std::sync::OnceLock;

const FRONTMATTER: &str = r"^\s*---\n+[\s\S]*?\n---";

fn frontmatter_regex() -> &'static Regex {
    static FRONTMATTER_REGEX: OnceLock<Regex> = OnceLock::new();
    FRONTMATTER_REGEX.get_or_init(|| Regex::new(FRONTMATTER).expect("Invalid frontmatter regex"))
}

/// Lines preceding the closing frontmatter fence, or `None` when the text has no leading block.
pub fn detect_frontmatter(text: &str) -> Option<usize> {
    let found = frontmatter_regex().find(text)?;
    // The match ends on the closing fence, so every break inside it precedes that line.
    Some(count_line_breaks(&text[..found.end()]))
}

fn count_line_breaks(text: &str) -> usize {
    let mut bytes = text.bytes().peekable();
    let mut breaks = 0;
    while let Some(b) = bytes.next() {
        match b {
            b'\n' => breaks += 1,
            b'\r' if bytes.peek() != Some(&b'\n') => breaks += 1,
            _ => {}
        }
    }
    breaks
}
