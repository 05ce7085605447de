#![forbid(unsafe_code)]

//! Escape sequence scanning.
//!
//! Styled strings interleave visible text with terminal escape sequences.
//! This module splits them into [`Token`]s so callers can measure, strip, or
//! truncate the visible text while passing the escapes through untouched.
//!
//! Recognized sequences:
//! - CSI: `ESC [` ... final byte (0x40-0x7E), which covers SGR styling
//! - OSC: `ESC ]` ... BEL or ST (`ESC \`), e.g. hyperlinks
//! - DCS/PM/APC: `ESC P` / `ESC ^` / `ESC _` ... ST
//! - Two-character sequences: `ESC` + one byte

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation;

use crate::width::{grapheme_width, truncate_to_width_with_info};

const ESC: u8 = 0x1B;

/// A run of a styled string: either one escape sequence or visible text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A complete escape sequence, including the leading `ESC`.
    Escape(&'a str),
    /// Visible text between escape sequences.
    Text(&'a str),
}

impl<'a> Token<'a> {
    /// The raw slice this token covers.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        match *self {
            Token::Escape(s) | Token::Text(s) => s,
        }
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Token::Text(_))
    }
}

/// Iterator over the [`Token`]s of a string.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.src.as_bytes();
        let start = self.pos;
        if start >= bytes.len() {
            return None;
        }

        if bytes[start] == ESC {
            let end = skip_escape_sequence(bytes, start);
            self.pos = end;
            return Some(Token::Escape(&self.src[start..end]));
        }

        // ESC is a single-byte ASCII character, so splitting at ESC positions
        // never breaks a UTF-8 sequence.
        let end = bytes[start..]
            .iter()
            .position(|&b| b == ESC)
            .map_or(bytes.len(), |offset| start + offset);
        self.pos = end;
        Some(Token::Text(&self.src[start..end]))
    }
}

/// Split a string into escape and text tokens.
///
/// # Example
/// ```
/// use frameline_text::{Token, tokens};
///
/// let parts: Vec<Token> = tokens("\x1b[1mhi\x1b[0m").collect();
/// assert_eq!(
///     parts,
///     vec![Token::Escape("\x1b[1m"), Token::Text("hi"), Token::Escape("\x1b[0m")]
/// );
/// ```
pub fn tokens(s: &str) -> Tokens<'_> {
    Tokens { src: s, pos: 0 }
}

/// Whether the string contains any escape byte.
#[inline]
#[must_use]
pub fn has_escapes(s: &str) -> bool {
    s.as_bytes().contains(&ESC)
}

/// Strip escape sequences from a string.
///
/// Returns `Cow::Borrowed` when no escape sequences are present.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !has_escapes(s) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for token in tokens(s) {
        if let Token::Text(text) = token {
            result.push_str(text);
        }
    }
    Cow::Owned(result)
}

/// Truncate a styled string to at most `max_width` visible columns.
///
/// Trailing columns are discarded without an ellipsis. A grapheme that would
/// straddle the limit is dropped whole. Every escape sequence is kept, even
/// past the cut, so styling opened by the string is still closed by it.
///
/// # Example
/// ```
/// use frameline_text::truncate_styled;
///
/// assert_eq!(truncate_styled("\x1b[7mSTATUS\x1b[0m", 3), "\x1b[7mSTA\x1b[0m");
/// assert_eq!(truncate_styled("\u{4E16}\u{754C}", 3), "\u{4E16}");
/// ```
#[must_use]
pub fn truncate_styled(s: &str, max_width: usize) -> String {
    if !has_escapes(s) {
        return truncate_to_width_with_info(s, max_width).0.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut used = 0;
    let mut cut = false;

    for token in tokens(s) {
        match token {
            Token::Escape(seq) => out.push_str(seq),
            Token::Text(_) if cut => {}
            Token::Text(text) => {
                for grapheme in text.graphemes(true) {
                    let width = grapheme_width(grapheme);
                    if used + width > max_width {
                        cut = true;
                        break;
                    }
                    used += width;
                    out.push_str(grapheme);
                }
            }
        }
    }

    out
}

/// Returns the byte index after the escape sequence starting at `pos`.
fn skip_escape_sequence(bytes: &[u8], pos: usize) -> usize {
    let next = pos + 1;
    if next >= bytes.len() {
        return bytes.len();
    }

    match bytes[next] {
        b'[' => skip_csi(bytes, next + 1),
        b']' | b'P' | b'^' | b'_' => skip_string_terminated(bytes, next + 1),
        // Never split a multi-byte scalar after a stray ESC.
        b if b >= 0x80 => next,
        _ => next + 1,
    }
}

/// CSI: parameter bytes (0x30-0x3F), intermediate bytes (0x20-0x2F),
/// final byte (0x40-0x7E).
fn skip_csi(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos;
    while i < bytes.len() {
        let b = bytes[i];
        if (0x40..=0x7E).contains(&b) {
            return i + 1;
        }
        if !(0x20..=0x7E).contains(&b) {
            return i;
        }
        i += 1;
    }
    bytes.len()
}

/// OSC/DCS/PM/APC: terminated by BEL or ST (`ESC \`).
fn skip_string_terminated(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos;
    while i < bytes.len() {
        match bytes[i] {
            0x07 => return i + 1,
            ESC if i + 1 < bytes.len() && bytes[i + 1] == b'\\' => return i + 2,
            _ => i += 1,
        }
    }
    bytes.len()
}
