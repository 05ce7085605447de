#![forbid(unsafe_code)]

//! Text measurement primitives for Frameline.
//!
//! # Role in Frameline
//! `frameline-text` is the leaf crate every other crate measures text with.
//! Border glyphs, decoration strings, and body lines all go through the same
//! width function so the columns of a bordered block never drift apart.
//!
//! # This crate provides
//! - [`width`]: grapheme-cluster display width and the CJK width policy.
//! - [`ansi`]: escape sequence scanning, stripping, and styled truncation.
//! - [`segment`]: splitting a styled string into independently styled
//!   per-character units.
//!
//! # Example
//! ```
//! use frameline_text::{display_width, segment, truncate_styled};
//!
//! assert_eq!(display_width("\x1b[1mhi\x1b[0m"), 2);
//! assert_eq!(truncate_styled("TitleTitle", 5), "Title");
//! assert_eq!(segment("ab"), vec!["a", "b"]);
//! ```

/// Escape sequence scanning, stripping, and styled truncation.
pub mod ansi;
/// Per-character segmentation of styled strings.
pub mod segment;
/// Display width of graphemes and strings.
pub mod width;

pub use ansi::{Token, has_escapes, strip_ansi, tokens, truncate_styled};
pub use segment::segment;
pub use width::{
    ascii_width, char_width, cjk_width_enabled, cjk_width_from_env, display_width,
    grapheme_width, graphemes, max_glyph_width, truncate_to_width_with_info,
};
