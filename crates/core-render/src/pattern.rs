//! Display pattern mini-language.
//!
//! A pattern is decorative text containing up to three tokens:
//! * `ch` - 0-indexed column of the rendered endpoint.
//! * `ln` - 1-indexed line of the rendered endpoint.
//! * `ct` - document line count.
//!
//! Token detection for the total-elision shapes is case-insensitive; substitution is
//! literal and case-sensitive, first occurrence only. The total is resolved before the
//! position tokens because the elision rule depends on where `ct` sits in the unsubstituted
//! template:
//! * middle (`ch ... ct ... ln`) - never elided, removing it would break the text around it.
//! * begin (`ct ... ch ... ln`) - everything before the first position token is dropped.
//! * end (`ch ... ln ... ct`) - everything after the last position token is dropped.
//!
//! Elision only applies when the caller asks for the total to be suppressed (the anchor of
//! a two-ended range, or every entry of a multi-cursor list). A template that contains `ct`
//! but fits none of the shapes keeps its total. A template with no tokens at all renders as
//! the same constant for every cursor.

use core_state::{CursorRecord, Endpoint};
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

const MIDDLE_SHAPE: &str = r"(?i)^.*(ln|ch).*?ct.*?(ln|ch).*";
const BEGIN_SHAPE: &str = r"(?i)^.*ct.*((ln|ch).*?(ln|ch).*)";
const END_SHAPE: &str = r"(?i)(.*(ln|ch).*?(ln|ch)).*?ct.*$";

const TOTAL: &str = "ct";
const COLUMN: &str = "ch";
const LINE: &str = "ln";

fn shape_regex(cell: &'static OnceLock<Regex>, pattern: &'static str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("Invalid pattern shape regex"))
}

fn middle_shape() -> &'static Regex {
    static MIDDLE: OnceLock<Regex> = OnceLock::new();
    shape_regex(&MIDDLE, MIDDLE_SHAPE)
}

fn begin_shape() -> &'static Regex {
    static BEGIN: OnceLock<Regex> = OnceLock::new();
    shape_regex(&BEGIN, BEGIN_SHAPE)
}

fn end_shape() -> &'static Regex {
    static END: OnceLock<Regex> = OnceLock::new();
    shape_regex(&END, END_SHAPE)
}

/// Where the total token sits relative to the two position tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalShape {
    /// `ct` between the position tokens.
    Middle,
    /// `ct` before both position tokens.
    Begin,
    /// `ct` after both position tokens.
    End,
    /// No elidable total (absent, or fewer than two position tokens).
    Fixed,
}

impl TotalShape {
    pub fn classify(template: &str) -> Self {
        if middle_shape().is_match(template) {
            TotalShape::Middle
        } else if begin_shape().is_match(template) {
            TotalShape::Begin
        } else if end_shape().is_match(template) {
            TotalShape::End
        } else {
            TotalShape::Fixed
        }
    }
}

/// A template classified once and reused for every cursor of a render pass.
#[derive(Debug, Clone)]
pub struct Pattern<'a> {
    template: &'a str,
    elided: Cow<'a, str>,
    shape: TotalShape,
}

impl<'a> Pattern<'a> {
    pub fn new(template: &'a str) -> Self {
        let shape = TotalShape::classify(template);
        let elided = match shape {
            TotalShape::Begin => begin_shape().replace(template, "${1}"),
            TotalShape::End => end_shape().replace(template, "${1}"),
            TotalShape::Middle | TotalShape::Fixed => Cow::Borrowed(template),
        };
        Self {
            template,
            elided,
            shape,
        }
    }

    pub fn template(&self) -> &'a str {
        self.template
    }

    pub fn shape(&self) -> TotalShape {
        self.shape
    }

    /// Returns true when the template carries a literal `ct` token.
    pub fn has_total(&self) -> bool {
        self.template.contains(TOTAL)
    }

    /// Render `endpoint` of `record`, eliding the total when asked and the shape allows it.
    pub fn render(
        &self,
        record: &CursorRecord,
        endpoint: Endpoint,
        suppress_total: bool,
    ) -> String {
        let elide = suppress_total && matches!(self.shape, TotalShape::Begin | TotalShape::End);
        let with_total = if elide {
            self.elided.to_string()
        } else {
            self.template
                .replacen(TOTAL, &record.doc_line_count().to_string(), 1)
        };
        with_total
            .replacen(COLUMN, &record.column(endpoint).to_string(), 1)
            .replacen(LINE, &record.line(endpoint).to_string(), 1)
    }
}

/// One-shot rendering of `template` for `endpoint` of `record`.
pub fn render(
    template: &str,
    record: &CursorRecord,
    endpoint: Endpoint,
    suppress_total: bool,
) -> String {
    Pattern::new(template).render(record, endpoint, suppress_total)
}
