//! Selection facts derived from raw document offsets.
//!
//! Every render pass starts from the host's selection ranges (anchor/head character
//! offsets) and a read-only [`Document`]. Each range is resolved once into an immutable
//! [`CursorRecord`]; records are folded, in the order the host supplied them, into a
//! [`SelectionAggregate`] carrying the running highlight totals.
//!
//! Invariants:
//! - `highlighted_lines >= 1` for every record (a plain cursor spans its own line).
//! - Highlight counts use min/max so a backward drag (`anchor > head`) never goes negative
//!   and swapping anchor/head leaves both counts unchanged.
//! - Line numbers lie in `[1, doc_line_count]`.
//! - Records never borrow from the document; nothing outlives the call that built it.

use core_text::Document;

/// Raw selection as reported by the host editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    pub anchor: usize,
    pub head: usize,
}

impl SelectionRange {
    pub fn new(anchor: usize, head: usize) -> Self {
        Self { anchor, head }
    }

    /// Plain cursor (degenerate range) at `offset`.
    pub fn cursor(offset: usize) -> Self {
        Self {
            anchor: offset,
            head: offset,
        }
    }

    pub fn from(&self) -> usize {
        self.anchor.min(self.head)
    }

    pub fn to(&self) -> usize {
        self.anchor.max(self.head)
    }

    /// Returns true for a plain cursor (anchor == head).
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }
}

/// Which end of a selection to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Anchor,
    Head,
}

/// Per-selection facts observed at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorRecord {
    doc_line_count: usize,
    doc_char_count: usize,
    anchor_line: usize,
    anchor_char: usize,
    head_line: usize,
    head_char: usize,
    highlighted_chars: usize,
    highlighted_lines: usize,
    frontmatter_boundary: Option<usize>,
}

impl CursorRecord {
    /// Resolve `range` against `doc`. Offsets beyond the document are clamped to its end.
    pub fn build<D>(range: SelectionRange, doc: &D, frontmatter_boundary: Option<usize>) -> Self
    where
        D: Document + ?Sized,
    {
        let doc_line_count = doc.line_count().max(1);
        let doc_char_count = doc.len_chars();
        let anchor = range.anchor.min(doc_char_count);
        let head = range.head.min(doc_char_count);

        let resolve = |offset: usize| {
            let info = doc.line_at(offset);
            let line = info.number.clamp(1, doc_line_count);
            (line, offset.saturating_sub(info.start))
        };
        let (anchor_line, anchor_char) = resolve(anchor);
        let (head_line, head_char) = resolve(head);

        Self {
            doc_line_count,
            doc_char_count,
            anchor_line,
            anchor_char,
            head_line,
            head_char,
            highlighted_chars: anchor.max(head) - anchor.min(head),
            highlighted_lines: anchor_line.abs_diff(head_line) + 1,
            frontmatter_boundary,
        }
    }

    pub fn doc_line_count(&self) -> usize {
        self.doc_line_count
    }

    pub fn doc_char_count(&self) -> usize {
        self.doc_char_count
    }

    pub fn anchor_line(&self) -> usize {
        self.anchor_line
    }

    pub fn anchor_char(&self) -> usize {
        self.anchor_char
    }

    pub fn head_line(&self) -> usize {
        self.head_line
    }

    pub fn head_char(&self) -> usize {
        self.head_char
    }

    /// Characters covered by the selection; 0 for a plain cursor.
    pub fn highlighted_chars(&self) -> usize {
        self.highlighted_chars
    }

    /// Lines touched by the selection, counting both endpoint lines.
    pub fn highlighted_lines(&self) -> usize {
        self.highlighted_lines
    }

    /// Closing fence line of the document's frontmatter, when the host detected one.
    pub fn frontmatter_boundary(&self) -> Option<usize> {
        self.frontmatter_boundary
    }

    /// 1-indexed line of the requested endpoint.
    pub fn line(&self, endpoint: Endpoint) -> usize {
        match endpoint {
            Endpoint::Anchor => self.anchor_line,
            Endpoint::Head => self.head_line,
        }
    }

    /// 0-indexed column of the requested endpoint.
    pub fn column(&self, endpoint: Endpoint) -> usize {
        match endpoint {
            Endpoint::Anchor => self.anchor_char,
            Endpoint::Head => self.head_char,
        }
    }

    /// Returns true when nothing is highlighted (plain cursor).
    pub fn is_cursor(&self) -> bool {
        self.highlighted_chars == 0
    }
}

/// Ordered records for one render pass plus running highlight totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionAggregate {
    cursors: Vec<CursorRecord>,
    total_highlighted_chars: usize,
    total_highlighted_lines: usize,
}

impl SelectionAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build one record per range, preserving the supplied order.
    pub fn from_ranges<D>(
        doc: &D,
        ranges: &[SelectionRange],
        frontmatter_boundary: Option<usize>,
    ) -> Self
    where
        D: Document + ?Sized,
    {
        ranges
            .iter()
            .map(|r| CursorRecord::build(*r, doc, frontmatter_boundary))
            .collect()
    }

    pub fn push(&mut self, cursor: CursorRecord) {
        self.total_highlighted_chars += cursor.highlighted_chars;
        self.total_highlighted_lines += cursor.highlighted_lines;
        self.cursors.push(cursor);
    }

    pub fn cursors(&self) -> &[CursorRecord] {
        &self.cursors
    }

    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    /// Sum of `highlighted_chars` across all records.
    pub fn total_highlighted_chars(&self) -> usize {
        self.total_highlighted_chars
    }

    /// Sum of `highlighted_lines` across all records (plain cursors contribute 1 each).
    pub fn total_highlighted_lines(&self) -> usize {
        self.total_highlighted_lines
    }

    /// Document line count as observed by the first record.
    pub fn doc_line_count(&self) -> Option<usize> {
        self.cursors.first().map(CursorRecord::doc_line_count)
    }
}

impl FromIterator<CursorRecord> for SelectionAggregate {
    fn from_iter<I: IntoIterator<Item = CursorRecord>>(iter: I) -> Self {
        let mut agg = SelectionAggregate::new();
        for cursor in iter {
            agg.push(cursor);
        }
        agg
    }
}
