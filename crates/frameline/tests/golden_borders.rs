#![forbid(unsafe_code)]

//! Golden renders of decorated borders.
//!
//! Every case renders an empty body padded to a fixed width with the normal
//! border, so only the edges differ.
//!
//! Run:
//!   cargo test -p frameline --test golden_borders

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use frameline::prelude::*;

fn render(block: &Block, width: usize) -> String {
    block.render_with(&BodyLines::from_text("").with_min_width(width), &PlainStyler)
}

fn status(_: usize, _: &str) -> String {
    "STATUS".to_string()
}

// ============================================================================
// Top edge
// ============================================================================

#[test]
fn all_three_slots_truncated() {
    let block = Block::bordered(Border::NORMAL)
        .decoration(Decoration::new(BorderSide::Top, Alignment::Left, "LeftLeftLeftLeft"))
        .decoration(Decoration::new(
            BorderSide::Top,
            Alignment::Center,
            "CenterCenterCenter",
        ))
        .decoration(Decoration::new(
            BorderSide::Top,
            Alignment::Right,
            "RightRightRightRight",
        ));
    assert_eq!(
        render(&block, 16),
        "┌LeftL─Cent─Right┐\n│                │\n└────────────────┘"
    );
}

#[test]
fn top_left_literal_title() {
    let block = Block::bordered(Border::NORMAL)
        .decoration(Decoration::new(BorderSide::Top, Alignment::Left, "TITLE"));
    assert_eq!(
        render(&block, 10),
        "┌TITLE─────┐\n│          │\n└──────────┘"
    );
}

#[test]
fn top_left_lazy_title() {
    let block = Block::bordered(Border::NORMAL).decoration(Decoration::lazy(
        BorderSide::Top,
        Alignment::Left,
        || "TITLE".to_string(),
    ));
    assert_eq!(
        render(&block, 10),
        "┌TITLE─────┐\n│          │\n└──────────┘"
    );
}

#[test]
fn top_left_very_long_title() {
    let block = Block::bordered(Border::NORMAL).decoration(Decoration::lazy(
        BorderSide::Top,
        Alignment::Left,
        || "TitleTitleTitle".to_string(),
    ));
    assert_eq!(
        render(&block, 10),
        "┌TitleTitle┐\n│          │\n└──────────┘"
    );
}

#[test]
fn top_left_sized_title() {
    let block = Block::bordered(Border::NORMAL).decoration(Decoration::sized(
        BorderSide::Top,
        Alignment::Left,
        |_, _| "TITLE".to_string(),
    ));
    assert_eq!(
        render(&block, 10),
        "┌TITLE─────┐\n│          │\n└──────────┘"
    );
}

#[test]
fn top_center_title() {
    let block = Block::bordered(Border::NORMAL).decoration(Decoration::sized(
        BorderSide::Top,
        Alignment::Center,
        |_, _| "TITLE".to_string(),
    ));
    assert_eq!(
        render(&block, 10),
        "┌──TITLE───┐\n│          │\n└──────────┘"
    );
    assert_eq!(
        render(&block, 11),
        "┌───TITLE───┐\n│           │\n└───────────┘"
    );
}

#[test]
fn top_right_title() {
    let block = Block::bordered(Border::NORMAL).decoration(Decoration::sized(
        BorderSide::Top,
        Alignment::Right,
        |_, _| "TITLE".to_string(),
    ));
    assert_eq!(
        render(&block, 10),
        "┌─────TITLE┐\n│          │\n└──────────┘"
    );
}

// ============================================================================
// Bottom edge
// ============================================================================

#[test]
fn bottom_left_status() {
    let block = Block::bordered(Border::NORMAL).decoration(Decoration::sized(
        BorderSide::Bottom,
        Alignment::Left,
        status,
    ));
    assert_eq!(
        render(&block, 10),
        "┌──────────┐\n│          │\n└STATUS────┘"
    );
}

#[test]
fn bottom_center_status() {
    let block = Block::bordered(Border::NORMAL).decoration(Decoration::sized(
        BorderSide::Bottom,
        Alignment::Center,
        status,
    ));
    assert_eq!(
        render(&block, 10),
        "┌──────────┐\n│          │\n└──STATUS──┘"
    );
    assert_eq!(
        render(&block, 11),
        "┌───────────┐\n│           │\n└──STATUS───┘"
    );
}

#[test]
fn bottom_right_status() {
    let block = Block::bordered(Border::NORMAL).decoration(Decoration::sized(
        BorderSide::Bottom,
        Alignment::Right,
        status,
    ));
    assert_eq!(
        render(&block, 10),
        "┌──────────┐\n│          │\n└────STATUS┘"
    );
}

#[test]
fn bottom_right_padded_with_fill() {
    let block = Block::bordered(Border::NORMAL).decoration(Decoration::sized(
        BorderSide::Bottom,
        Alignment::Right,
        |_, fill| format!("│STATUS│{fill}"),
    ));
    assert_eq!(
        render(&block, 12),
        "┌────────────┐\n│            │\n└───│STATUS│─┘"
    );
}

// ============================================================================
// Plain borders
// ============================================================================

#[test]
fn border_with_width() {
    let block = Block::bordered(Border::NORMAL);
    assert_eq!(
        render(&block, 10),
        "┌──────────┐\n│          │\n└──────────┘"
    );
}

#[test]
fn border_sized_to_body() {
    let block = Block::bordered(Border::NORMAL);
    assert_eq!(
        block.render_with(&BodyLines::from_text("HELLO"), &PlainStyler),
        "┌─────┐\n│HELLO│\n└─────┘"
    );
}

#[test]
fn preset_by_name() {
    let border = Border::preset("rounded").expect("known preset");
    let block = Block::bordered(border);
    assert_eq!(render(&block, 2), "╭──╮\n│  │\n╰──╯");
    assert!(Border::preset("wavy").is_err());
}

#[test]
fn hidden_border_keeps_layout() {
    let block = Block::new().border_type(BorderType::Hidden);
    assert_eq!(render(&block, 2), "    \n    \n    ");
}

// ============================================================================
// Vertical edges
// ============================================================================

#[test]
fn vertical_title_and_row_counter() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let block = Block::bordered(Border::NORMAL)
        .decoration(Decoration::new(BorderSide::Left, Alignment::MIDDLE, "AB"))
        .decoration(Decoration::per_row(
            BorderSide::Right,
            move |row: usize, height: usize, current: &str| {
                seen.fetch_add(1, Ordering::SeqCst);
                if row + 1 == height {
                    "v".to_string()
                } else {
                    current.to_string()
                }
            },
        ));
    let body = BodyLines::from_text("1\n2\n3\n4");
    assert_eq!(
        block.render_with(&body, &PlainStyler),
        "┌─┐\n│1│\nA2│\nB3│\n│4v\n└─┘"
    );
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[test]
fn styled_vertical_decoration_is_split_per_row() {
    let block = Block::bordered(Border::NORMAL).decoration(Decoration::new(
        BorderSide::Left,
        Alignment::TOP,
        "\x1b[41mab\x1b[0m",
    ));
    let body = BodyLines::from_text("x\ny\nz");
    assert_eq!(
        block.render_with(&body, &PlainStyler),
        "┌─┐\n\x1b[41ma\x1b[0mx│\n\x1b[41mb\x1b[0my│\n│z│\n└─┘"
    );
}
