//! Status text composition.
//!
//! Two-stage pipeline:
//! 1. `compose_status` decides the shape of the output (single cursor, cursor list, or
//!    `"N cursors"` collapse, plus the selection totals suffix) and produces an ordered
//!    vector of `StatusSegment` items.
//! 2. `format_status` renders those segments into the final string.
//!
//! `render_status` is the composition of both and the call hosts normally make. Every call
//! is a pure function of (selections, document snapshot, configuration); nothing is cached
//! between calls, so repeated calls with identical inputs produce identical text.
//!
//! Shape rules:
//! * `numberCursors == 0` (or no selections) renders nothing.
//! * One selection renders its position with the document total and no line annotation.
//! * Up to `numberCursors` selections render each position with totals suppressed, joined by
//!   the cursor separator; in row/column mode the document total follows once at the end when
//!   the pattern carries `ct`.
//! * More selections collapse to `"{count} cursors"`.
//! * Any highlighted characters append ` (X selected / Y lines)`, or the single form for
//!   whichever of the two counts is enabled.

use crate::pattern::Pattern;
use crate::wordy;
use core_config::{SelectionMode, StatusConfig};
use core_state::{CursorRecord, Endpoint, SelectionAggregate, SelectionRange};
use core_text::{Buffer, Document};
use std::fmt::Write as _;
use tracing::trace;

/// Discrete status segments (order-sensitive).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSegment<'a> {
    /// One rendered cursor or selection.
    Cursor(String),
    /// Separator between list entries.
    Separator(&'a str),
    /// Trailing document line count after a multi-cursor list.
    DocumentTotal(usize),
    /// Too many cursors to list; carries the count.
    Collapsed(usize),
    /// Highlight totals; `None` for a count that is switched off.
    SelectionTotals {
        chars: Option<usize>,
        lines: Option<usize>,
    },
}

/// Per-call rendering context: configuration with option selectors already resolved.
struct CursorRenderer<'a> {
    cfg: &'a StatusConfig,
    pattern: Pattern<'a>,
    range_separator: &'a str,
    cursor_line_pattern: &'a str,
}

impl<'a> CursorRenderer<'a> {
    fn new(cfg: &'a StatusConfig) -> Self {
        let eff = cfg.effective();
        Self {
            cfg,
            pattern: Pattern::new(eff.display_pattern),
            range_separator: eff.range_separator,
            cursor_line_pattern: eff.cursor_line_pattern,
        }
    }

    /// Row/column rendering of one selection.
    fn position(
        &self,
        cursor: &CursorRecord,
        annotate_lines: bool,
        suppress_total: bool,
    ) -> String {
        let mut value = match (self.cfg.selection_mode, cursor.is_cursor()) {
            (SelectionMode::Begin, _) => {
                self.pattern.render(cursor, Endpoint::Anchor, suppress_total)
            }
            (SelectionMode::End, _) | (SelectionMode::Full, true) => {
                self.pattern.render(cursor, Endpoint::Head, suppress_total)
            }
            (SelectionMode::Full, false) => {
                let mut range = self.pattern.render(cursor, Endpoint::Anchor, true);
                range.push_str(self.range_separator);
                range.push_str(&self.pattern.render(cursor, Endpoint::Head, suppress_total));
                range
            }
        };
        if annotate_lines && self.cfg.display_cursor_lines && cursor.highlighted_lines() > 1 {
            value.push(' ');
            value.push_str(&self.cursor_line_pattern.replacen(
                "lc",
                &cursor.highlighted_lines().to_string(),
                1,
            ));
        }
        value
    }

    /// Percent/word rendering of one selection.
    fn wordy(&self, cursor: &CursorRecord) -> String {
        match (self.cfg.selection_mode, cursor.is_cursor()) {
            (SelectionMode::Begin, _) => wordy::describe(cursor, Endpoint::Anchor, self.cfg),
            (SelectionMode::End, _) | (SelectionMode::Full, true) => {
                wordy::describe(cursor, Endpoint::Head, self.cfg)
            }
            (SelectionMode::Full, false) => {
                let mut range = wordy::describe(cursor, Endpoint::Anchor, self.cfg);
                range.push_str(self.range_separator);
                range.push_str(&wordy::describe(cursor, Endpoint::Head, self.cfg));
                range
            }
        }
    }

    fn single(&self, cursor: &CursorRecord) -> String {
        if self.cfg.wordy_display {
            self.wordy(cursor)
        } else {
            self.position(cursor, false, false)
        }
    }

    fn listed(&self, cursor: &CursorRecord) -> String {
        if self.cfg.wordy_display {
            self.wordy(cursor)
        } else {
            self.position(cursor, true, true)
        }
    }
}

/// Produce ordered segments representing the status text.
pub fn compose_status<'a>(
    selections: &SelectionAggregate,
    cfg: &'a StatusConfig,
) -> Vec<StatusSegment<'a>> {
    let count = selections.len();
    trace!(
        target: "render.status",
        cursors = count,
        wordy = cfg.wordy_display,
        limit = cfg.number_cursors,
        "compose_status"
    );
    let mut out = Vec::new();
    if cfg.number_cursors == 0 || count == 0 {
        return out;
    }

    let renderer = CursorRenderer::new(cfg);
    let separator = cfg.effective().cursor_separator;
    if count == 1 {
        out.push(StatusSegment::Cursor(renderer.single(&selections.cursors()[0])));
    } else if count <= cfg.number_cursors as usize {
        out.reserve(count * 2 + 2);
        for (i, cursor) in selections.cursors().iter().enumerate() {
            if i > 0 {
                out.push(StatusSegment::Separator(separator));
            }
            out.push(StatusSegment::Cursor(renderer.listed(cursor)));
        }
        if !cfg.wordy_display
            && renderer.pattern.has_total()
            && let Some(total) = selections.doc_line_count()
        {
            out.push(StatusSegment::Separator(separator));
            out.push(StatusSegment::DocumentTotal(total));
        }
    } else {
        out.push(StatusSegment::Collapsed(count));
    }

    if selections.total_highlighted_chars() != 0
        && (cfg.display_char_count || cfg.display_total_lines)
    {
        out.push(StatusSegment::SelectionTotals {
            chars: cfg
                .display_char_count
                .then(|| selections.total_highlighted_chars()),
            lines: cfg
                .display_total_lines
                .then(|| selections.total_highlighted_lines()),
        });
    }
    out
}

/// Render ordered status segments into the final string.
pub fn format_status(segments: &[StatusSegment<'_>]) -> String {
    let mut s = String::with_capacity(32);
    for seg in segments {
        match seg {
            StatusSegment::Cursor(text) => s.push_str(text),
            StatusSegment::Separator(sep) => s.push_str(sep),
            StatusSegment::DocumentTotal(total) => {
                let _ = write!(s, "{total}");
            }
            StatusSegment::Collapsed(count) => {
                let _ = write!(s, "{count} cursors");
            }
            StatusSegment::SelectionTotals { chars, lines } => {
                let _ = match (chars, lines) {
                    (Some(c), Some(l)) => write!(s, " ({c} selected / {l} lines)"),
                    (Some(c), None) => write!(s, " ({c} selected)"),
                    (None, Some(l)) => write!(s, " ({l} lines)"),
                    (None, None) => Ok(()),
                };
            }
        }
    }
    s
}

/// Status text for a prepared selection aggregate.
pub fn render_status(selections: &SelectionAggregate, cfg: &StatusConfig) -> String {
    format_status(&compose_status(selections, cfg))
}

/// Status text straight from host inputs: any document view, its selections (in document
/// order) and the frontmatter boundary the host detected, if any.
pub fn render_document<D>(
    doc: &D,
    ranges: &[SelectionRange],
    frontmatter_boundary: Option<usize>,
    cfg: &StatusConfig,
) -> String
where
    D: Document + ?Sized,
{
    render_status(
        &SelectionAggregate::from_ranges(doc, ranges, frontmatter_boundary),
        cfg,
    )
}

/// Status text for a `Buffer`. Frontmatter is only scanned for when a wordy display
/// measures past it.
pub fn render_buffer(buffer: &Buffer, ranges: &[SelectionRange], cfg: &StatusConfig) -> String {
    let boundary = if cfg.wordy_display && cfg.frontmatter_excluded_from_percent {
        buffer.frontmatter_boundary()
    } else {
        None
    };
    render_document(buffer, ranges, boundary, cfg)
}
