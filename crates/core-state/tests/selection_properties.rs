//! Property-based tests for cursor record derivation.

use core_state::{CursorRecord, SelectionAggregate, SelectionRange};
use core_text::{Buffer, Document};
use proptest::prelude::*;

fn numbered(lines: usize) -> Buffer {
    let text: Vec<String> = (1..=lines).map(|i| format!("row {i} text")).collect();
    Buffer::from_str("prop", &text.join("\n")).unwrap()
}

proptest! {
    // Highlighted lines always cover both endpoint lines and never drop below one.
    #[test]
    fn highlighted_lines_match_endpoint_distance(
        lines in 1usize..200,
        a in 0usize..4000,
        h in 0usize..4000,
    ) {
        let buf = numbered(lines);
        let rec = CursorRecord::build(SelectionRange::new(a, h), &buf, None);
        prop_assert!(rec.highlighted_lines() >= 1);
        prop_assert_eq!(rec.highlighted_lines(), rec.anchor_line().abs_diff(rec.head_line()) + 1);
        prop_assert!(rec.head_line() >= 1 && rec.head_line() <= buf.line_count());
        prop_assert!(rec.anchor_line() >= 1 && rec.anchor_line() <= buf.line_count());
    }

    // Swapping anchor and head leaves both highlight counts unchanged.
    #[test]
    fn reversal_preserves_counts(lines in 1usize..200, a in 0usize..4000, h in 0usize..4000) {
        let buf = numbered(lines);
        let forward = CursorRecord::build(SelectionRange::new(a, h), &buf, None);
        let backward = CursorRecord::build(SelectionRange::new(h, a), &buf, None);
        prop_assert_eq!(forward.highlighted_lines(), backward.highlighted_lines());
        prop_assert_eq!(forward.highlighted_chars(), backward.highlighted_chars());
        prop_assert_eq!(forward.anchor_line(), backward.head_line());
        prop_assert_eq!(forward.anchor_char(), backward.head_char());
    }

    // Aggregate totals are the plain sums of the per-record counts.
    #[test]
    fn aggregate_totals_are_sums(
        offsets in proptest::collection::vec((0usize..2000, 0usize..2000), 1..12),
    ) {
        let buf = numbered(120);
        let ranges: Vec<SelectionRange> =
            offsets.iter().map(|(a, h)| SelectionRange::new(*a, *h)).collect();
        let agg = SelectionAggregate::from_ranges(&buf, &ranges, None);
        prop_assert_eq!(agg.len(), ranges.len());
        let chars: usize = agg.cursors().iter().map(|c| c.highlighted_chars()).sum();
        let lines: usize = agg.cursors().iter().map(|c| c.highlighted_lines()).sum();
        prop_assert_eq!(agg.total_highlighted_chars(), chars);
        prop_assert_eq!(agg.total_highlighted_lines(), lines);
    }
}
