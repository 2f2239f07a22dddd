//! Status text rendering.
//!
//! Turns a set of resolved selections plus a `StatusConfig` into the one-line text shown in
//! the host's status bar. Each call is stateless; hosts call again on every cursor move or
//! view change and replace the previous text.
//!
//! Exposed Components:
//! - `pattern`: the `ch` / `ln` / `ct` display template and its total-elision shapes.
//! - `wordy`: percent-through-document and the fuzzy word bands.
//! - `status`: multi-cursor aggregation (list, collapse, totals suffix) via
//!   `compose_status` + `format_status`.
//! - `padding`: width rounding through an injected `TextMeasure`.

pub mod padding;
pub mod pattern;
pub mod status;
pub mod wordy;

pub use padding::{StatusLine, padded_width, render_padded};
pub use pattern::{Pattern, TotalShape};
pub use status::{
    StatusSegment, compose_status, format_status, render_buffer, render_document, render_status,
};
pub use wordy::{percent_of_document, word_for};
