#![forbid(unsafe_code)]

//! Frameline public facade crate.
//!
//! Re-exports the border engine, its styling collaborator, and the text
//! measurement it is built on, plus a prelude for everyday use.
//!
//! # Example
//! ```
//! use frameline::prelude::*;
//!
//! let block = Block::bordered(Border::NORMAL)
//!     .decoration(Decoration::new(BorderSide::Top, Alignment::Center, "TITLE"));
//! let body = BodyLines::from_text("").with_min_width(10);
//! assert_eq!(
//!     block.render_with(&body, &PlainStyler),
//!     "┌──TITLE───┐\n│          │\n└──────────┘"
//! );
//! ```

// --- Text re-exports -------------------------------------------------------

pub use frameline_text::{display_width, segment, strip_ansi, truncate_styled};

// --- Style re-exports ------------------------------------------------------

pub use frameline_style::{
    Ansi16, BorderStyler, Color, ColorProfile, PlainStyler, Rgb, SgrStyler,
};

// --- Widget re-exports -----------------------------------------------------

pub use frameline_widgets::{
    Alignment, Block, BodyLines, Border, BorderError, BorderSide, BorderType, Borders, Decoration,
    DecorationContent, Result, RowTransform, allocate,
};

/// Everyday imports.
pub mod prelude {
    pub use crate::{
        Alignment, Ansi16, Block, BodyLines, Border, BorderSide, BorderStyler, BorderType,
        Borders, Color, ColorProfile, Decoration, PlainStyler, SgrStyler,
    };

    pub use crate::{style, text, widgets};
}

pub use frameline_style as style;
pub use frameline_text as text;
pub use frameline_widgets as widgets;
