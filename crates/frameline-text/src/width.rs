#![forbid(unsafe_code)]

//! Shared display width helpers for measurement and rendering.
//!
//! Every width in Frameline is computed here so body lines, border glyphs,
//! and decorations agree on column counts. A grapheme cluster occupies the
//! width of its widest codepoint: a base character followed by combining
//! marks is as wide as the base, and a wide emoji followed by a variation
//! selector is as wide as the emoji.
//!
//! Ambiguous-width characters are treated as double-width when
//! `FRAMELINE_CJK_WIDTH=1` is set, or when `LC_CTYPE`/`LANG` names a CJK
//! locale. The policy is read once per process.

use std::sync::OnceLock;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use crate::ansi::strip_ansi;

#[inline]
fn env_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[inline]
fn is_cjk_locale(locale: &str) -> bool {
    let lower = locale.trim().to_ascii_lowercase();
    lower.starts_with("ja") || lower.starts_with("zh") || lower.starts_with("ko")
}

/// Compute the CJK width policy using a custom environment lookup.
///
/// `FRAMELINE_CJK_WIDTH` wins when present; otherwise the locale from
/// `LC_CTYPE` (then `LANG`) decides.
#[must_use]
pub fn cjk_width_from_env<F>(get_env: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = get_env("FRAMELINE_CJK_WIDTH") {
        return env_flag(&value);
    }
    if let Some(locale) = get_env("LC_CTYPE").or_else(|| get_env("LANG")) {
        return is_cjk_locale(&locale);
    }
    false
}

/// Cached CJK width policy for this process.
#[inline]
pub fn cjk_width_enabled() -> bool {
    static CJK_WIDTH: OnceLock<bool> = OnceLock::new();
    *CJK_WIDTH.get_or_init(|| cjk_width_from_env(|key| std::env::var(key).ok()))
}

/// Fast-path width for pure printable ASCII.
#[inline]
#[must_use]
pub fn ascii_width(text: &str) -> Option<usize> {
    if text.bytes().all(|b| (0x20..=0x7E).contains(&b)) {
        Some(text.len())
    } else {
        None
    }
}

#[inline]
fn is_zero_width_codepoint(c: char) -> bool {
    let u = c as u32;
    matches!(u, 0x0000..=0x001F | 0x007F..=0x009F)
        || matches!(u, 0x0300..=0x036F | 0x1AB0..=0x1AFF | 0x1DC0..=0x1DFF | 0x20D0..=0x20FF)
        || matches!(u, 0xFE20..=0xFE2F)
        || matches!(u, 0xFE00..=0xFE0F | 0xE0100..=0xE01EF)
        || matches!(
            u,
            0x00AD | 0x034F | 0x180E | 0x200B | 0x200C | 0x200D | 0x200E | 0x200F | 0x2060 | 0xFEFF
        )
        || matches!(u, 0x202A..=0x202E | 0x2066..=0x2069 | 0x206A..=0x206F)
}

/// Width of a single Unicode scalar in terminal cells.
#[inline]
#[must_use]
pub fn char_width(ch: char) -> usize {
    if ch.is_ascii() {
        return if (' '..='~').contains(&ch) { 1 } else { 0 };
    }
    if is_zero_width_codepoint(ch) {
        return 0;
    }
    if cjk_width_enabled() {
        ch.width_cjk().unwrap_or(0)
    } else {
        ch.width().unwrap_or(0)
    }
}

/// Width of a single grapheme cluster: the widest of its codepoints.
#[inline]
#[must_use]
pub fn grapheme_width(grapheme: &str) -> usize {
    if let Some(width) = ascii_width(grapheme) {
        return width.min(1);
    }
    grapheme.chars().map(char_width).max().unwrap_or(0)
}

/// Width of a string in terminal cells, ignoring escape sequences.
///
/// # Example
/// ```
/// use frameline_text::display_width;
///
/// assert_eq!(display_width(""), 0);
/// assert_eq!(display_width("box"), 3);
/// assert_eq!(display_width("\u{4F60}\u{597D}"), 4);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// ```
#[must_use]
pub fn display_width(text: &str) -> usize {
    match text.len() {
        0 => 0,
        1 => text.chars().next().map_or(0, char_width),
        _ => {
            if let Some(width) = ascii_width(text) {
                return width;
            }
            let visible = strip_ansi(text);
            visible.graphemes(true).map(grapheme_width).sum()
        }
    }
}

/// The widest grapheme found across a set of glyph strings.
///
/// Border glyphs occupy a fixed column slot, so an edge is as wide as the
/// widest glyph among its corner and fill strings, not their sum.
///
/// # Example
/// ```
/// use frameline_text::max_glyph_width;
///
/// assert_eq!(max_glyph_width(&["┌", "─", "┐"]), 1);
/// assert_eq!(max_glyph_width(&["123456789"]), 1);
/// assert_eq!(max_glyph_width(&["", "\u{4E16}"]), 2);
/// assert_eq!(max_glyph_width(&[]), 0);
/// ```
#[must_use]
pub fn max_glyph_width(parts: &[&str]) -> usize {
    parts
        .iter()
        .map(|part| widest_grapheme(part))
        .max()
        .unwrap_or(0)
}

fn widest_grapheme(part: &str) -> usize {
    match part.len() {
        0 => 0,
        1 => display_width(part),
        _ => strip_ansi(part)
            .graphemes(true)
            .map(grapheme_width)
            .max()
            .unwrap_or(0),
    }
}

/// Iterate over grapheme clusters in a string.
#[inline]
pub fn graphemes(text: &str) -> impl Iterator<Item = &str> {
    text.graphemes(true)
}

/// Truncate unstyled text to fit within a maximum display width.
///
/// Returns the longest prefix that fits and its width. Never splits a
/// grapheme cluster.
///
/// # Example
/// ```
/// use frameline_text::truncate_to_width_with_info;
///
/// let (text, width) = truncate_to_width_with_info("\u{4F60}\u{597D}", 3);
/// assert_eq!(text, "\u{4F60}");
/// assert_eq!(width, 2);
/// ```
#[must_use]
pub fn truncate_to_width_with_info(text: &str, max_width: usize) -> (&str, usize) {
    let mut byte_end = 0;
    let mut current_width = 0;

    for grapheme in text.graphemes(true) {
        let width = grapheme_width(grapheme);
        if current_width + width > max_width {
            break;
        }
        current_width += width;
        byte_end += grapheme.len();
    }

    (&text[..byte_end], current_width)
}
