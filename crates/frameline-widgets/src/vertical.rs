//! Left and right edge rendering.
//!
//! A vertical edge is a column of one-glyph rows, one per body line.
//! Decorations overwrite rows: the top slot from the first row down, the
//! middle slot centered on its width, the bottom slot reserving its width
//! above the last row. Each decoration character takes its own row.

use frameline_text::{display_width, segment, truncate_styled};

use crate::allocate::allocate;
use crate::decoration::SideDecorations;

/// One row per body line, cycling through the codepoints of `fill`.
///
/// ```
/// use frameline_widgets::vertical_fill;
///
/// assert_eq!(vertical_fill("│", 2), vec!["│", "│"]);
/// assert_eq!(vertical_fill("ab", 3), vec!["a", "b", "a"]);
/// ```
#[must_use]
pub fn vertical_fill(fill: &str, height: usize) -> Vec<String> {
    let fill = if fill.is_empty() { " " } else { fill };
    fill.chars().cycle().take(height).map(String::from).collect()
}

/// Overlay decorations on a vertical edge.
///
/// Slots are evaluated against `(height, fill)`, fitted to the height with
/// [`allocate`], truncated, and split into one styled unit per row. The
/// middle slot starts at `(height - m) / 2` and the bottom slot at
/// `height - b`, where `m` and `b` are the allocated display widths, so a
/// wide glyph reserves as many rows as it has columns. Units that would fall
/// past the last row are dropped. A unit keeps its own display width. If the side has a
/// per-row transform, it then runs on every row; its output is cut back to
/// the width the row had before the call.
#[must_use]
pub fn render_vertical_edge(
    mut rows: Vec<String>,
    fill: &str,
    decorations: &SideDecorations,
) -> Vec<String> {
    let height = rows.len();
    let [top, middle, bottom] = decorations.evaluate(height, fill);

    let (t, m, b) = allocate(
        display_width(&top),
        display_width(&middle),
        display_width(&bottom),
        height,
    );
    let top = segment(&truncate_styled(&top, t));
    let middle = segment(&truncate_styled(&middle, m));
    let bottom = segment(&truncate_styled(&bottom, b));

    overwrite(&mut rows, 0, top);
    overwrite(&mut rows, (height - m) / 2, middle);
    overwrite(&mut rows, height - b, bottom);

    if let Some(transform) = decorations.transform() {
        for (i, row) in rows.iter_mut().enumerate() {
            let width = display_width(row);
            let next = transform.transform(i, height, row);
            *row = truncate_styled(&next, width);
        }
    }

    rows
}

fn overwrite(rows: &mut [String], start: usize, units: Vec<String>) {
    for (row, unit) in rows.iter_mut().skip(start).zip(units) {
        *row = unit;
    }
}
