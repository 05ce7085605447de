#![forbid(unsafe_code)]

//! Decorated border layout for Frameline.
//!
//! # Role in Frameline
//! `frameline-widgets` draws borders around rectangles of text. It decides
//! which glyphs a side mask needs, fits titles and status text into the top
//! and bottom edges, places per-row decorations on the left and right edges,
//! and assembles the result line by line.
//!
//! # This crate provides
//! - [`Border`] glyph records, presets, and [`Borders`] side masks.
//! - [`Decoration`] content placed at an [`Alignment`] on a [`BorderSide`].
//! - [`allocate`], the width fitting used by both edge renderers.
//! - [`render_horizontal_edge`], [`render_decorated_horizontal_edge`], and
//!   [`render_vertical_edge`].
//! - [`Block`], the assembler, and [`BodyLines`], its input.
//!
//! Rendering never fails. The only errors are [`BorderError`]s from parsing
//! names into configuration values.

pub mod allocate;
pub mod block;
pub mod body;
pub mod borders;
pub mod decoration;
pub mod edge;
pub mod error;
pub mod geometry;
pub mod vertical;

pub use allocate::allocate;
pub use block::Block;
pub use body::BodyLines;
pub use borders::{Border, BorderSide, BorderType, Borders};
pub use decoration::{Alignment, Decoration, DecorationContent, RowTransform, SideDecorations};
pub use edge::{render_decorated_horizontal_edge, render_horizontal_edge};
pub use error::{BorderError, Result};
pub use geometry::resolve;
pub use vertical::{render_vertical_edge, vertical_fill};
