//! Property tests for percent bands and render purity.

use core_config::{FuzzyAmount, SelectionMode, StatusConfig};
use core_render::{percent_of_document, render_buffer, word_for};
use core_state::SelectionRange;
use core_text::Buffer;
use proptest::prelude::*;

const VERY_WORDY: [&str; 5] = ["top", "near top", "middle", "near bottom", "bottom"];
const LITTLE_WORDY: [&str; 3] = ["top", "middle", "bottom"];

fn band(words: &[&str], word: &str) -> usize {
    words
        .iter()
        .position(|w| *w == word)
        .unwrap_or_else(|| panic!("unexpected word {word:?}"))
}

fn numbered(lines: usize) -> Buffer {
    let text: Vec<String> = (1..=lines).map(|i| format!("entry {i}")).collect();
    Buffer::from_str("prop", &text.join("\n")).unwrap()
}

#[test]
fn every_percent_has_a_band() {
    for p in 0..=100u8 {
        band(&VERY_WORDY, &word_for(p, FuzzyAmount::VeryWordy));
        band(&LITTLE_WORDY, &word_for(p, FuzzyAmount::LittleWordy));
    }
}

proptest! {
    #[test]
    fn first_and_last_line(n in 2usize..10_000) {
        prop_assert_eq!(percent_of_document(1, n, None), 0);
        prop_assert_eq!(percent_of_document(n, n, None), 100);
        prop_assert_eq!(percent_of_document(1, 1, None), 0);
    }

    #[test]
    fn percent_grows_with_line(n in 1usize..2_000, a in 1usize..2_000, b in 1usize..2_000) {
        let (lo, hi) = (a.min(b).min(n), a.max(b).min(n));
        prop_assert!(percent_of_document(lo, n, None) <= percent_of_document(hi, n, None));
    }

    #[test]
    fn body_percent_in_range(boundary in 0usize..50, body in 1usize..500, offset in 0usize..500) {
        let n = boundary + body;
        let line = boundary + 1 + offset.min(body - 1);
        let p = percent_of_document(line, n, Some(boundary));
        prop_assert!(p <= 100);
        if offset == 0 {
            prop_assert_eq!(p, 0);
        }
    }

    #[test]
    fn word_bands_monotonic(a in 0u8..=100, b in 0u8..=100) {
        let (lo, hi) = (a.min(b), a.max(b));
        prop_assert!(
            band(&VERY_WORDY, &word_for(lo, FuzzyAmount::VeryWordy))
                <= band(&VERY_WORDY, &word_for(hi, FuzzyAmount::VeryWordy))
        );
        prop_assert!(
            band(&LITTLE_WORDY, &word_for(lo, FuzzyAmount::LittleWordy))
                <= band(&LITTLE_WORDY, &word_for(hi, FuzzyAmount::LittleWordy))
        );
    }

    // Identical inputs render identical text.
    #[test]
    fn render_is_idempotent(
        offsets in proptest::collection::vec((0usize..3_000, 0usize..3_000), 0..6),
        limit in 0u32..5,
        wordy in any::<bool>(),
        mode in 0usize..3,
    ) {
        let buf = numbered(300);
        let ranges: Vec<SelectionRange> =
            offsets.iter().map(|(a, h)| SelectionRange::new(*a, *h)).collect();
        let cfg = StatusConfig {
            number_cursors: limit,
            wordy_display: wordy,
            selection_mode: SelectionMode::ALL[mode],
            display_cursor_lines: true,
            ..StatusConfig::default()
        };
        let first = render_buffer(&buf, &ranges, &cfg);
        let second = render_buffer(&buf, &ranges, &cfg);
        prop_assert_eq!(first, second);
    }

    // More selections than the limit always collapse.
    #[test]
    fn collapse_above_limit(count in 2usize..8, limit in 1u32..8) {
        let buf = numbered(50);
        let ranges: Vec<SelectionRange> =
            (0..count).map(|i| SelectionRange::cursor(i * 8)).collect();
        let cfg = StatusConfig { number_cursors: limit, ..StatusConfig::default() };
        let out = render_buffer(&buf, &ranges, &cfg);
        if count > limit as usize {
            prop_assert_eq!(out, format!("{count} cursors"));
        } else {
            prop_assert!(!out.contains("cursors"));
            prop_assert!(out.ends_with(" / 50"));
        }
    }
}
