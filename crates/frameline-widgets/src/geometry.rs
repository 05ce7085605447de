//! Which glyphs a border actually draws for a given side mask.

use std::borrow::Cow;

use crate::borders::{Border, Borders};

const BLANK: Cow<'static, str> = Cow::Borrowed(" ");

/// Resolve the glyphs drawn for `sides`.
///
/// Enabled edges with no fill glyph draw a space. A corner is kept only when
/// both of its adjoining edges are enabled (an empty one then draws a space)
/// and is cut to its first codepoint. All other corners are cleared.
///
/// ```
/// use frameline_widgets::{Border, Borders, resolve};
///
/// let b = resolve(Borders::TOP | Borders::LEFT, &Border::NORMAL);
/// assert_eq!(b.top_left, "┌");
/// assert_eq!(b.top_right, "");
/// assert_eq!(b.bottom_left, "");
/// ```
#[must_use]
pub fn resolve(sides: Borders, border: &Border) -> Border {
    let mut b = border.clone();
    let (top, right, bottom, left) = (
        sides.contains(Borders::TOP),
        sides.contains(Borders::RIGHT),
        sides.contains(Borders::BOTTOM),
        sides.contains(Borders::LEFT),
    );

    for (enabled, edge) in [
        (top, &mut b.top),
        (right, &mut b.right),
        (bottom, &mut b.bottom),
        (left, &mut b.left),
    ] {
        if enabled && edge.is_empty() {
            *edge = BLANK;
        }
    }

    for (enabled, corner) in [
        (top && left, &mut b.top_left),
        (top && right, &mut b.top_right),
        (bottom && left, &mut b.bottom_left),
        (bottom && right, &mut b.bottom_right),
    ] {
        if !enabled {
            *corner = Cow::Borrowed("");
        } else if corner.is_empty() {
            *corner = BLANK;
        } else {
            *corner = first_codepoint(std::mem::take(corner));
        }
    }

    b
}

fn first_codepoint(glyph: Cow<'static, str>) -> Cow<'static, str> {
    let end = glyph.chars().next().map_or(0, char::len_utf8);
    if end == glyph.len() {
        return glyph;
    }
    match glyph {
        Cow::Borrowed(s) => Cow::Borrowed(&s[..end]),
        Cow::Owned(s) => Cow::Owned(s[..end].to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_masks() -> impl Iterator<Item = Borders> {
        (0u8..16).map(Borders::from_bits_truncate)
    }

    #[test]
    fn corners_need_both_neighbours() {
        for mask in all_masks() {
            let b = resolve(mask, &Border::NORMAL);
            let expect = |a: Borders, c: Borders| mask.contains(a) && mask.contains(c);
            assert_eq!(!b.top_left.is_empty(), expect(Borders::TOP, Borders::LEFT), "{mask:?}");
            assert_eq!(!b.top_right.is_empty(), expect(Borders::TOP, Borders::RIGHT), "{mask:?}");
            assert_eq!(
                !b.bottom_left.is_empty(),
                expect(Borders::BOTTOM, Borders::LEFT),
                "{mask:?}"
            );
            assert_eq!(
                !b.bottom_right.is_empty(),
                expect(Borders::BOTTOM, Borders::RIGHT),
                "{mask:?}"
            );
        }
    }

    #[test]
    fn empty_enabled_glyphs_become_spaces() {
        let b = resolve(Borders::ALL, &Border::default());
        for glyph in [
            &b.top, &b.right, &b.bottom, &b.left, &b.top_left, &b.top_right, &b.bottom_left,
            &b.bottom_right,
        ] {
            assert_eq!(glyph, " ");
        }
    }

    #[test]
    fn disabled_edges_keep_their_fill() {
        let b = resolve(Borders::TOP, &Border::NORMAL);
        assert_eq!(b.left, "│");
        assert_eq!(b.top, "─");
    }

    #[test]
    fn corners_cut_to_first_codepoint() {
        let border = Border {
            top_left: "你好".into(),
            top_right: "😀Happy".into(),
            bottom_left: "ñoño".into(),
            bottom_right: "T".into(),
            ..Border::NORMAL
        };
        let b = resolve(Borders::ALL, &border);
        assert_eq!(b.top_left, "你");
        assert_eq!(b.top_right, "😀");
        assert_eq!(b.bottom_left, "ñ");
        assert_eq!(b.bottom_right, "T");
    }

    #[test]
    fn owned_corner_is_cut_too() {
        let border = Border {
            top_left: Cow::Owned("Hello".to_string()),
            ..Border::NORMAL
        };
        assert_eq!(resolve(Borders::ALL, &border).top_left, "H");
    }
}
