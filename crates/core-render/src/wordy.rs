//! Percent-through-document and fuzzy word bands.
//!
//! `percent_of_document` maps a 1-indexed line onto `[0, 100]`, first line 0 and last line
//! 100. A single-line document is always at the top. When a frontmatter boundary `f` is
//! supplied the block is skipped: line `f + 1` counts as the first line.
//!
//! Rounding is half-up: `f64::EPSILON` is added to the ratio before scaling so `x.5`
//! results land on the upper integer regardless of float representation.

use core_config::{FuzzyAmount, StatusConfig};
use core_state::{CursorRecord, Endpoint};
use tracing::trace;

/// Top/bottom fuzz width for `FuzzyAmount::LowFuzzyPercent`.
pub const LOW_FUZZY_PERCENT: u8 = 10;
/// Top/bottom fuzz width for `FuzzyAmount::HighFuzzyPercent`.
pub const HIGH_FUZZY_PERCENT: u8 = 20;

pub fn percent_of_document(
    line: usize,
    doc_line_count: usize,
    frontmatter_boundary: Option<usize>,
) -> u8 {
    let skipped = frontmatter_boundary.unwrap_or(0);
    let span = doc_line_count.saturating_sub(1 + skipped);
    if span == 0 {
        return 0;
    }
    let position = line.saturating_sub(1 + skipped);
    let ratio = position as f64 / span as f64;
    ((ratio + f64::EPSILON) * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Word (or percent text) for `percent` under `mode`.
pub fn word_for(percent: u8, mode: FuzzyAmount) -> String {
    let percent = percent.min(100);
    let (top, bottom) = match mode {
        FuzzyAmount::VeryWordy => return very_wordy(percent).to_string(),
        FuzzyAmount::LittleWordy => return little_wordy(percent).to_string(),
        FuzzyAmount::StrictPercent => (0, 100),
        FuzzyAmount::LowFuzzyPercent => (LOW_FUZZY_PERCENT, 100 - LOW_FUZZY_PERCENT),
        FuzzyAmount::HighFuzzyPercent => (HIGH_FUZZY_PERCENT, 100 - HIGH_FUZZY_PERCENT),
        FuzzyAmount::OnlyPercent => return format!("{percent}%"),
    };
    if percent <= top {
        "top".to_string()
    } else if percent >= bottom {
        "bottom".to_string()
    } else {
        format!("{percent}%")
    }
}

// Fifths: 0-19, 20-39, 40-59, 60-79, 80-100.
fn very_wordy(percent: u8) -> &'static str {
    match (percent / 20) * 20 {
        0 => "top",
        20 => "near top",
        40 => "middle",
        60 => "near bottom",
        _ => "bottom",
    }
}

// Thirds: 0-32, 33-65, 66-100.
fn little_wordy(percent: u8) -> &'static str {
    match (percent / 33) * 33 {
        0 => "top",
        33 => "middle",
        _ => "bottom",
    }
}

/// Wordy text for one endpoint of `record`.
///
/// With frontmatter exclusion on and a boundary known, an endpoint inside the block yields
/// the configured frontmatter phrase and the percentage is measured past the block.
pub fn describe(record: &CursorRecord, endpoint: Endpoint, cfg: &StatusConfig) -> String {
    let boundary = if cfg.frontmatter_excluded_from_percent {
        record.frontmatter_boundary()
    } else {
        None
    };
    let line = record.line(endpoint);
    if let Some(f) = boundary
        && line <= f
    {
        trace!(target: "render.wordy", line, boundary = f, "inside_frontmatter");
        return cfg.effective().frontmatter_phrase.to_string();
    }
    let percent = percent_of_document(line, record.doc_line_count(), boundary);
    word_for(percent, cfg.fuzzy_amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_config::FrontmatterPhrase;
    use core_state::SelectionRange;
    use core_text::Buffer;

    #[test]
    fn document_edges() {
        assert_eq!(percent_of_document(1, 1, None), 0);
        assert_eq!(percent_of_document(1, 100, None), 0);
        assert_eq!(percent_of_document(100, 100, None), 100);
        assert_eq!(percent_of_document(2, 2, None), 100);
    }

    #[test]
    fn rounds_half_up() {
        // 1/200 = 0.005 -> 0.5% -> 1
        assert_eq!(percent_of_document(2, 201, None), 1);
        // 1/8 = 12.5% -> 13
        assert_eq!(percent_of_document(2, 9, None), 13);
        assert_eq!(percent_of_document(50, 100, None), 49);
    }

    #[test]
    fn frontmatter_offset_shifts_first_line() {
        // Boundary 4: line 5 is the first body line, line 14 the last.
        assert_eq!(percent_of_document(5, 14, Some(4)), 0);
        assert_eq!(percent_of_document(14, 14, Some(4)), 100);
        assert_eq!(percent_of_document(9, 13, Some(4)), 50);
        // Body of a single line.
        assert_eq!(percent_of_document(5, 5, Some(4)), 0);
    }

    #[test]
    fn very_wordy_bands() {
        let got: Vec<String> = [0, 19, 20, 39, 40, 59, 60, 79, 80, 99, 100]
            .iter()
            .map(|p| word_for(*p, FuzzyAmount::VeryWordy))
            .collect();
        assert_eq!(
            got,
            vec![
                "top", "top", "near top", "near top", "middle", "middle", "near bottom",
                "near bottom", "bottom", "bottom", "bottom"
            ]
        );
    }

    #[test]
    fn little_wordy_bands() {
        assert_eq!(word_for(32, FuzzyAmount::LittleWordy), "top");
        assert_eq!(word_for(33, FuzzyAmount::LittleWordy), "middle");
        assert_eq!(word_for(65, FuzzyAmount::LittleWordy), "middle");
        assert_eq!(word_for(66, FuzzyAmount::LittleWordy), "bottom");
        assert_eq!(word_for(99, FuzzyAmount::LittleWordy), "bottom");
        assert_eq!(word_for(100, FuzzyAmount::LittleWordy), "bottom");
    }

    #[test]
    fn percent_modes() {
        assert_eq!(word_for(0, FuzzyAmount::StrictPercent), "top");
        assert_eq!(word_for(1, FuzzyAmount::StrictPercent), "1%");
        assert_eq!(word_for(100, FuzzyAmount::StrictPercent), "bottom");
        assert_eq!(word_for(10, FuzzyAmount::LowFuzzyPercent), "top");
        assert_eq!(word_for(11, FuzzyAmount::LowFuzzyPercent), "11%");
        assert_eq!(word_for(90, FuzzyAmount::LowFuzzyPercent), "bottom");
        assert_eq!(word_for(20, FuzzyAmount::HighFuzzyPercent), "top");
        assert_eq!(word_for(79, FuzzyAmount::HighFuzzyPercent), "79%");
        assert_eq!(word_for(80, FuzzyAmount::HighFuzzyPercent), "bottom");
        assert_eq!(word_for(0, FuzzyAmount::OnlyPercent), "0%");
        assert_eq!(word_for(100, FuzzyAmount::OnlyPercent), "100%");
    }

    #[test]
    fn frontmatter_phrase_overrides_inside_block() {
        let text = "---\ntitle: a\n---\nbody one\nbody two\nbody three";
        let buf = Buffer::from_str("fm", text).unwrap();
        let boundary = buf.frontmatter_boundary();
        assert_eq!(boundary, Some(2));
        let at = |line: usize| {
            CursorRecord::build(SelectionRange::cursor(buf.offset_of(line, 0)), &buf, boundary)
        };

        let mut cfg = StatusConfig {
            wordy_display: true,
            frontmatter_excluded_from_percent: true,
            frontmatter_string: FrontmatterPhrase::Preamble,
            ..StatusConfig::default()
        };
        assert_eq!(describe(&at(1), Endpoint::Head, &cfg), "preamble");
        assert_eq!(describe(&at(2), Endpoint::Head, &cfg), "preamble");
        // Closing fence is the first measured line.
        assert_eq!(describe(&at(3), Endpoint::Head, &cfg), "top");
        // 1 / 3 -> 33%
        assert_eq!(describe(&at(4), Endpoint::Head, &cfg), "33%");
        assert_eq!(describe(&at(6), Endpoint::Head, &cfg), "bottom");

        cfg.frontmatter_excluded_from_percent = false;
        // Whole-document measurement: line 2 of 6 -> 20%.
        assert_eq!(describe(&at(2), Endpoint::Head, &cfg), "20%");
    }
}
