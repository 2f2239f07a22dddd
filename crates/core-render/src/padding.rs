//! Status width rounding.
//!
//! With padding on, the widget width is the measured text width rounded up to the next
//! multiple of the padding step. Text that already lands on a multiple gets an extra third
//! of a step so neighbouring widgets never sit flush against it. The host decides how the
//! width is applied; this module only computes it.

use crate::status::render_status;
use core_config::StatusConfig;
use core_state::SelectionAggregate;
use core_text::TextMeasure;

/// Rendered status text plus the width the host should reserve for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    /// `None` when padding is off, the step is 0, or there is no text.
    pub width: Option<u32>,
}

/// Round `measured` up to a multiple of `step`. `None` for a zero step.
pub fn padded_width(measured: u32, step: u32) -> Option<u32> {
    if step == 0 {
        return None;
    }
    let rounded = measured.div_ceil(step) * step;
    if rounded == measured {
        Some(measured + step.div_ceil(3))
    } else {
        Some(rounded)
    }
}

/// Render the status text and, when padding is enabled, its padded width.
pub fn render_padded(
    selections: &SelectionAggregate,
    cfg: &StatusConfig,
    measure: &dyn TextMeasure,
) -> StatusLine {
    let text = render_status(selections, cfg);
    let width = if cfg.status_bar_padding && !text.is_empty() {
        padded_width(measure.measure(&text), cfg.effective().padding_step)
    } else {
        None
    };
    StatusLine { text, width }
}
