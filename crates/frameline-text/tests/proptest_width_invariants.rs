//! Property-based invariants for width measurement, truncation, and
//! segmentation.
//!
//! 1. Styling never changes measured width.
//! 2. Styled truncation never exceeds the requested width.
//! 3. Truncation keeps a prefix of the visible text.
//! 4. Segmenting yields one unit per grapheme, each carrying the styling.

use frameline_text::{display_width, graphemes, segment, strip_ansi, truncate_styled};

use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("a"),
            Just("Z"),
            Just(" "),
            Just("─"),
            Just("\u{4E16}"),
            Just("e\u{0301}"),
            Just("\u{1F600}"),
        ],
        0..12,
    )
    .prop_map(|parts| parts.concat())
}

fn arb_sgr() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("\x1b[1m".to_string()),
        (30u8..38).prop_map(|c| format!("\x1b[{c}m")),
        (0u8..=255).prop_map(|c| format!("\x1b[48;5;{c}m")),
        (any::<u8>(), any::<u8>(), any::<u8>())
            .prop_map(|(r, g, b)| format!("\x1b[38;2;{r};{g};{b}m")),
    ]
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn styling_does_not_change_width(text in arb_text(), sgr in arb_sgr()) {
        let styled = format!("{sgr}{text}\x1b[0m");
        prop_assert_eq!(display_width(&styled), display_width(&text));
    }

    #[test]
    fn truncation_fits(text in arb_text(), sgr in arb_sgr(), max in 0usize..16) {
        let styled = format!("{sgr}{text}\x1b[0m");
        let cut = truncate_styled(&styled, max);
        prop_assert!(display_width(&cut) <= max);
        prop_assert!(display_width(&cut) <= display_width(&text));
    }

    #[test]
    fn truncation_is_a_visible_prefix(text in arb_text(), max in 0usize..16) {
        let cut = truncate_styled(&text, max);
        prop_assert!(text.starts_with(cut.as_str()));
    }

    #[test]
    fn segment_count_matches_graphemes(text in arb_text(), sgr in arb_sgr()) {
        let styled = format!("{sgr}{text}\x1b[0m");
        let units = segment(&styled);
        prop_assert_eq!(units.len(), graphemes(&text).count());
        for unit in &units {
            prop_assert!(unit.starts_with(sgr.as_str()));
            prop_assert!(unit.ends_with("\x1b[0m"));
        }
        let rejoined: String = units.iter().map(|u| strip_ansi(u).into_owned()).collect();
        prop_assert_eq!(rejoined, text);
    }
}
