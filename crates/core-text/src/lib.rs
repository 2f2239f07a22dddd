//! Read-only document view consumed by the status formatter.
//!
//! The formatter never owns text. Hosts hand it something implementing [`Document`]
//! (line count, character length and an offset -> line lookup) for the duration of a
//! single render call. [`Buffer`] is the rope-backed implementation used by hosts that
//! keep their own copy of the text, and by the test suites.
//!
//! Conventions:
//! - Offsets are character (not byte) offsets into the whole document.
//! - Line numbers are 1-indexed; columns are 0-indexed character counts from line start.
//! - An empty document still has one (empty) line.
//! - Lines break on LF, CR and CRLF only; Unicode line and paragraph separators are text.

use anyhow::Result;
use ropey::Rope;

pub mod frontmatter;
pub mod width;

pub use frontmatter::detect_frontmatter;
pub use width::{ColumnMeasure, TextMeasure, display_width, egc_width};

/// Result of an offset -> line lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineInfo {
    /// 1-indexed line number.
    pub number: usize,
    /// Character offset of the first character of the line.
    pub start: usize,
}

/// Minimal document surface the status formatter needs from a text buffer.
pub trait Document {
    /// Total number of lines (always >= 1).
    fn line_count(&self) -> usize;
    /// Total length in characters.
    fn len_chars(&self) -> usize;
    /// Line containing `offset`. Offsets past the end resolve to the last line.
    fn line_at(&self, offset: usize) -> LineInfo;
}

impl<T: Document + ?Sized> Document for &T {
    fn line_count(&self) -> usize {
        (**self).line_count()
    }
    fn len_chars(&self) -> usize {
        (**self).len_chars()
    }
    fn line_at(&self, offset: usize) -> LineInfo {
        (**self).line_at(offset)
    }
}

/// A text buffer backed by a `ropey::Rope`.
#[derive(Clone)]
pub struct Buffer {
    rope: Rope,
    pub name: String,
}

impl Buffer {
    /// Construct a buffer from an in-memory string slice.
    pub fn from_str(name: impl Into<String>, content: &str) -> Result<Self> {
        Ok(Self {
            rope: Rope::from_str(content),
            name: name.into(),
        })
    }

    /// Requested 0-based line as an owned `String`, including its line break if present.
    pub fn line(&self, idx: usize) -> Option<String> {
        if idx < self.rope.len_lines() {
            Some(self.rope.line(idx).to_string())
        } else {
            None
        }
    }

    /// Character length of a 0-based line, excluding its line break.
    pub fn line_char_len(&self, idx: usize) -> usize {
        if idx >= self.rope.len_lines() {
            return 0;
        }
        let line = self.rope.line(idx);
        let mut len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len -= 1;
        }
        if len > 0 && line.char(len - 1) == '\r' {
            len -= 1;
        }
        len
    }

    /// Whole document as a `String`.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Character offset for a 1-indexed line and 0-indexed column, clamped to the document.
    pub fn offset_of(&self, line_number: usize, column: usize) -> usize {
        let last = self.rope.len_lines().saturating_sub(1);
        let idx = line_number.saturating_sub(1).min(last);
        self.rope.line_to_char(idx) + column.min(self.line_char_len(idx))
    }

    /// Lines before the closing fence of a leading frontmatter block, if the buffer starts
    /// with one.
    pub fn frontmatter_boundary(&self) -> Option<usize> {
        detect_frontmatter(&self.text())
    }
}

impl Document for Buffer {
    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn line_at(&self, offset: usize) -> LineInfo {
        let offset = offset.min(self.rope.len_chars());
        let idx = self.rope.char_to_line(offset);
        LineInfo {
            number: idx + 1,
            start: self.rope.line_to_char(idx),
        }
    }
}
