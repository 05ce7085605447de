//! Top and bottom edge rendering.

use frameline_text::{char_width, display_width, truncate_styled};

use crate::allocate::allocate;
use crate::decoration::SideDecorations;

/// Render a plain horizontal edge: `left`, then the codepoints of `fill`
/// repeated until they cover `width` columns, then `right`.
///
/// A fill with no visible glyph draws spaces. A wide fill glyph may overshoot
/// `width` by its extra columns.
///
/// ```
/// use frameline_widgets::render_horizontal_edge;
///
/// assert_eq!(render_horizontal_edge("┌", "─", "┐", 4), "┌────┐");
/// assert_eq!(render_horizontal_edge("+", "-=", "+", 5), "+-=-=-+");
/// assert_eq!(render_horizontal_edge("", "", "", 3), "   ");
/// ```
#[must_use]
pub fn render_horizontal_edge(left: &str, fill: &str, right: &str, width: usize) -> String {
    let fill = visible_fill(fill);
    let mut out = String::with_capacity(left.len() + right.len() + width * fill.len());
    out.push_str(left);
    let glyphs: Vec<char> = fill.chars().collect();
    let mut covered = 0;
    let mut i = 0;
    while covered < width {
        let ch = glyphs[i % glyphs.len()];
        out.push(ch);
        covered += char_width(ch);
        i += 1;
    }
    out.push_str(right);
    out
}

/// Render a horizontal edge carrying up to three decorations.
///
/// The slots are evaluated against `(width, fill)`, fitted with
/// [`allocate`], and truncated to their share. The left decoration starts
/// right after the left corner, the center one at `(width - c) / 2`, and the
/// right one ends just before the right corner. Gaps are filled with the
/// first codepoint of `fill`. Corners and each fill run go through `paint`;
/// decoration text is emitted verbatim so it keeps its own styling.
///
/// The result always spans exactly `width` columns between the corners.
pub fn render_decorated_horizontal_edge<P>(
    left: &str,
    fill: &str,
    right: &str,
    width: usize,
    decorations: &SideDecorations,
    paint: P,
) -> String
where
    P: Fn(&str) -> String,
{
    let fill = visible_fill(fill);
    let [left_text, center_text, right_text] = decorations.evaluate(width, fill);

    let (l, c, r) = allocate(
        display_width(&left_text),
        display_width(&center_text),
        display_width(&right_text),
        width,
    );
    let left_text = truncate_styled(&left_text, l);
    let center_text = truncate_styled(&center_text, c);
    let right_text = truncate_styled(&right_text, r);
    let (l, c, r) = (
        display_width(&left_text),
        display_width(&center_text),
        display_width(&right_text),
    );

    let glyph = FillGlyph::first_of(fill);
    let mut out = String::new();
    out.push_str(&paint(left));

    out.push_str(&left_text);
    let mut cursor = l;

    if c > 0 {
        let center_start = (width - c) / 2;
        glyph.push_run(&mut out, center_start.saturating_sub(cursor), &paint);
        out.push_str(&center_text);
        cursor = cursor.max(center_start) + c;
    }

    let right_start = width - r;
    glyph.push_run(&mut out, right_start.saturating_sub(cursor), &paint);
    out.push_str(&right_text);

    out.push_str(&paint(right));
    out
}

fn visible_fill(fill: &str) -> &str {
    if fill.chars().any(|ch| char_width(ch) > 0) {
        fill
    } else {
        " "
    }
}

/// A single fill codepoint and its width.
struct FillGlyph {
    text: String,
    width: usize,
}

impl FillGlyph {
    fn first_of(fill: &str) -> Self {
        match fill.chars().find(|&ch| char_width(ch) > 0) {
            Some(ch) => Self {
                text: ch.to_string(),
                width: char_width(ch),
            },
            None => Self {
                text: " ".to_string(),
                width: 1,
            },
        }
    }

    /// Append a styled run exactly `cols` columns wide. Columns a wide glyph
    /// cannot cover are padded with spaces.
    fn push_run<P>(&self, out: &mut String, cols: usize, paint: &P)
    where
        P: Fn(&str) -> String,
    {
        if cols == 0 {
            return;
        }
        let mut run = self.text.repeat(cols / self.width);
        run.push_str(&" ".repeat(cols % self.width));
        out.push_str(&paint(&run));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoration::{Alignment, DecorationContent};

    fn plain(s: &str) -> String {
        s.to_string()
    }

    fn decorated(slots: &[(Alignment, &str)], width: usize) -> String {
        let mut side = SideDecorations::default();
        for &(alignment, text) in slots {
            side.insert(alignment, text.into());
        }
        render_decorated_horizontal_edge("┌", "─", "┐", width, &side, plain)
    }

    #[test]
    fn plain_edge_cycles_fill() {
        assert_eq!(render_horizontal_edge("<", "ab", ">", 5), "<ababa>");
    }

    #[test]
    fn plain_edge_zero_width() {
        assert_eq!(render_horizontal_edge("┌", "─", "┐", 0), "┌┐");
    }

    #[test]
    fn plain_edge_invisible_fill_is_space() {
        assert_eq!(render_horizontal_edge("", "\u{200B}", "", 2), "  ");
    }

    #[test]
    fn plain_edge_wide_fill_counts_each_glyph() {
        assert_eq!(render_horizontal_edge("", "中", "", 4), "中中");
        assert_eq!(render_horizontal_edge("", "中-", "", 4), "中-中");
    }

    #[test]
    fn left_title() {
        assert_eq!(decorated(&[(Alignment::Left, "TITLE")], 10), "┌TITLE─────┐");
    }

    #[test]
    fn long_title_is_truncated() {
        assert_eq!(
            decorated(&[(Alignment::Left, "TitleTitleTitle")], 10),
            "┌TitleTitle┐"
        );
    }

    #[test]
    fn center_title_odd_and_even() {
        assert_eq!(decorated(&[(Alignment::Center, "TITLE")], 10), "┌──TITLE───┐");
        assert_eq!(decorated(&[(Alignment::Center, "TITLE")], 11), "┌───TITLE───┐");
    }

    #[test]
    fn right_title() {
        assert_eq!(decorated(&[(Alignment::Right, "TITLE")], 10), "┌─────TITLE┐");
    }

    #[test]
    fn all_three_truncated() {
        assert_eq!(
            decorated(
                &[
                    (Alignment::Left, "LeftLeftLeftLeft"),
                    (Alignment::Center, "CenterCenterCenter"),
                    (Alignment::Right, "RightRightRightRight"),
                ],
                16
            ),
            "┌LeftL─Cent─Right┐"
        );
    }

    #[test]
    fn sized_content_sees_width_and_fill() {
        let mut side = SideDecorations::default();
        side.insert(
            Alignment::Right,
            DecorationContent::sized(|_, fill| format!("│STATUS│{fill}")),
        );
        let out = render_decorated_horizontal_edge("└", "─", "┘", 12, &side, plain);
        assert_eq!(out, "└───│STATUS│─┘");
    }

    #[test]
    fn empty_decorations_degrade_to_fill() {
        assert_eq!(decorated(&[(Alignment::Center, "")], 4), "┌────┐");
    }

    #[test]
    fn fill_runs_are_painted_once_each() {
        let mut side = SideDecorations::default();
        side.insert(Alignment::Center, "AB".into());
        let out = render_decorated_horizontal_edge("┌", "─", "┐", 6, &side, |s: &str| {
            format!("[{s}]")
        });
        assert_eq!(out, "[┌][──]AB[──][┐]");
    }

    #[test]
    fn wide_fill_is_padded_to_exact_width() {
        let mut side = SideDecorations::default();
        side.insert(Alignment::Left, "X".into());
        let out = render_decorated_horizontal_edge("", "中", "", 4, &side, plain);
        assert_eq!(out, "X中 ");
        assert_eq!(display_width(&out), 4);
    }

    #[test]
    fn styled_title_keeps_escapes() {
        let title = "\x1b[1mTITLE\x1b[0m";
        let out = decorated(&[(Alignment::Left, title)], 8);
        assert_eq!(out, "┌\x1b[1mTITLE\x1b[0m───┐");
    }

    #[test]
    fn zero_width_edge_has_only_corners() {
        assert_eq!(decorated(&[(Alignment::Center, "TITLE")], 0), "┌┐");
    }
}
