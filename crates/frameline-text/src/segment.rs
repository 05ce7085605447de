#![forbid(unsafe_code)]

//! Per-character segmentation of styled strings.
//!
//! A vertical border places one character per row, so a decoration like
//! `ESC[41mLEFT ESC[0m` has to become four separately styled units. Each unit
//! is the leading escape run, one grapheme, and the trailing escape run.

use unicode_segmentation::UnicodeSegmentation;

use crate::ansi::{Token, has_escapes, tokens};

/// Split `s` into one renderable unit per visible grapheme.
///
/// Unstyled input yields plain graphemes. Styled input is treated as a
/// uniformly styled payload: every unit repeats the escapes found before the
/// first visible character and after the last one. Escapes that appear
/// between visible characters are carried into every later unit, so a style
/// switch inside the payload still applies from that character on.
///
/// # Example
/// ```
/// use frameline_text::segment;
///
/// assert_eq!(segment("abc"), vec!["a", "b", "c"]);
/// assert_eq!(
///     segment("\x1b[41mab\x1b[0m"),
///     vec!["\x1b[41ma\x1b[0m", "\x1b[41mb\x1b[0m"]
/// );
/// assert!(segment("").is_empty());
/// ```
#[must_use]
pub fn segment(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    if !has_escapes(s) {
        return s.graphemes(true).map(str::to_owned).collect();
    }

    let parts: Vec<Token<'_>> = tokens(s).collect();
    let Some(first) = parts.iter().position(Token::is_text) else {
        return Vec::new();
    };
    let last = parts.iter().rposition(Token::is_text).unwrap_or(first);

    let mut prefix: String = parts[..first].iter().map(Token::as_str).collect();
    let suffix: String = parts[last + 1..].iter().map(Token::as_str).collect();

    let mut units = Vec::new();
    for part in &parts[first..=last] {
        match part {
            Token::Escape(seq) => prefix.push_str(seq),
            Token::Text(text) => {
                units.extend(
                    text.graphemes(true)
                        .map(|grapheme| format!("{prefix}{grapheme}{suffix}")),
                );
            }
        }
    }
    units
}
