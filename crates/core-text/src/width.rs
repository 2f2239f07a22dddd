//! Display width measurement.
//!
//! Status padding rounds the rendered width of the status text up to a configured step.
//! How wide the text actually is depends on the host (font metrics for a GUI, cells for a
//! terminal), so the formatter only talks to the [`TextMeasure`] trait. [`ColumnMeasure`]
//! is the terminal-cell implementation built on grapheme segmentation.
//!
//! Invariants:
//! - Width decisions for a grapheme cluster flow through `egc_width`.
//! - A single cluster is never reported wider than two cells.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Injected width service. Implementations must be pure for a given input.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> u32;
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> u32,
{
    fn measure(&self, text: &str) -> u32 {
        self(text)
    }
}

/// Measures text in terminal cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnMeasure;

impl TextMeasure for ColumnMeasure {
    fn measure(&self, text: &str) -> u32 {
        display_width(text)
    }
}

/// Terminal cell width of one extended grapheme cluster.
pub fn egc_width(egc: &str) -> u16 {
    if egc.is_empty() {
        return 0;
    }
    UnicodeWidthStr::width(egc).min(2) as u16
}

/// Sum of cluster widths across `text`.
pub fn display_width(text: &str) -> u32 {
    text.graphemes(true).map(|g| u32::from(egc_width(g))).sum()
}
