//! Border decorations: titles, status text, and per-row transforms.
//!
//! A decoration is a `(side, alignment, content)` triple. Each side has three
//! slots, one per [`Alignment`], plus (for left and right) a single per-row
//! transform applied after the slots are drawn. Decorations carry no state of
//! their own; closures are re-evaluated on every render, so they can reflect
//! live external state.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::borders::BorderSide;
use crate::error::{BorderError, Result};

/// Placement of a decoration along an edge.
///
/// On vertical edges the same three slots read top/middle/bottom, available
/// as [`Alignment::TOP`], [`Alignment::MIDDLE`], and [`Alignment::BOTTOM`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// First rows of a left or right edge.
    pub const TOP: Self = Self::Left;
    /// Rows centered on a left or right edge.
    pub const MIDDLE: Self = Self::Center;
    /// Last rows of a left or right edge.
    pub const BOTTOM: Self = Self::Right;

    #[must_use]
    pub const fn slot(self) -> usize {
        self as usize
    }
}

impl FromStr for Alignment {
    type Err = BorderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "top" | "start" => Ok(Self::Left),
            "center" | "centre" | "middle" => Ok(Self::Center),
            "right" | "bottom" | "end" => Ok(Self::Right),
            _ => Err(BorderError::unknown_alignment(s)),
        }
    }
}

/// Rewrites one row of a vertical edge.
///
/// Called with the row index, the edge height, and the row's current string.
/// The result is truncated back to the row's original width.
pub trait RowTransform: Send + Sync {
    /// Return the new content of row `row` out of `height`.
    fn transform(&self, row: usize, height: usize, current: &str) -> String;
}

impl<F> RowTransform for F
where
    F: Fn(usize, usize, &str) -> String + Send + Sync,
{
    fn transform(&self, row: usize, height: usize, current: &str) -> String {
        self(row, height, current)
    }
}

type LazyFn = dyn Fn() -> String + Send + Sync;
type SizedFn = dyn Fn(usize, &str) -> String + Send + Sync;

/// What a decoration draws.
#[derive(Clone)]
pub enum DecorationContent {
    /// Fixed text.
    Literal(String),
    /// Text produced on each render.
    Lazy(Arc<LazyFn>),
    /// Text computed from the edge length and the edge's fill glyph.
    Sized(Arc<SizedFn>),
    /// Per-row rewrite of a vertical edge. Ignored on top and bottom edges.
    PerRow(Arc<dyn RowTransform>),
}

impl DecorationContent {
    pub fn lazy<F>(f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self::Lazy(Arc::new(f))
    }

    pub fn sized<F>(f: F) -> Self
    where
        F: Fn(usize, &str) -> String + Send + Sync + 'static,
    {
        Self::Sized(Arc::new(f))
    }

    pub fn per_row<T>(t: T) -> Self
    where
        T: RowTransform + 'static,
    {
        Self::PerRow(Arc::new(t))
    }

    /// Produce the decoration text for an edge of `length` cells drawn with
    /// `fill`. Per-row transforms produce no text.
    #[must_use]
    pub fn evaluate(&self, length: usize, fill: &str) -> String {
        match self {
            Self::Literal(text) => text.clone(),
            Self::Lazy(f) => f(),
            Self::Sized(f) => f(length, fill),
            Self::PerRow(_) => String::new(),
        }
    }
}

impl fmt::Debug for DecorationContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::Lazy(_) => f.write_str("Lazy(..)"),
            Self::Sized(_) => f.write_str("Sized(..)"),
            Self::PerRow(_) => f.write_str("PerRow(..)"),
        }
    }
}

impl From<&str> for DecorationContent {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_string())
    }
}

impl From<String> for DecorationContent {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}

/// A decoration attached to one side of a border.
///
/// # Example
/// ```
/// use frameline_widgets::{Alignment, BorderSide, Decoration};
///
/// let title = Decoration::new(BorderSide::Top, Alignment::Center, " Title ");
/// let status = Decoration::sized(BorderSide::Bottom, Alignment::Right, |width, fill| {
///     format!("{width}{fill}")
/// });
/// assert_eq!(title.side(), BorderSide::Top);
/// assert_eq!(status.alignment(), Alignment::Right);
/// ```
#[derive(Debug, Clone)]
pub struct Decoration {
    side: BorderSide,
    alignment: Alignment,
    content: DecorationContent,
}

impl Decoration {
    pub fn new(side: BorderSide, alignment: Alignment, content: impl Into<DecorationContent>) -> Self {
        Self {
            side,
            alignment,
            content: content.into(),
        }
    }

    pub fn lazy<F>(side: BorderSide, alignment: Alignment, f: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self::new(side, alignment, DecorationContent::lazy(f))
    }

    pub fn sized<F>(side: BorderSide, alignment: Alignment, f: F) -> Self
    where
        F: Fn(usize, &str) -> String + Send + Sync + 'static,
    {
        Self::new(side, alignment, DecorationContent::sized(f))
    }

    /// A per-row transform for a vertical side. The alignment is irrelevant.
    pub fn per_row<T>(side: BorderSide, t: T) -> Self
    where
        T: RowTransform + 'static,
    {
        Self::new(side, Alignment::TOP, DecorationContent::per_row(t))
    }

    #[must_use]
    pub fn side(&self) -> BorderSide {
        self.side
    }

    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    #[must_use]
    pub fn content(&self) -> &DecorationContent {
        &self.content
    }

    #[must_use]
    pub fn into_parts(self) -> (BorderSide, Alignment, DecorationContent) {
        (self.side, self.alignment, self.content)
    }
}

/// The decorations of one side.
#[derive(Debug, Clone, Default)]
pub struct SideDecorations {
    slots: [Option<DecorationContent>; 3],
    transform: Option<Arc<dyn RowTransform>>,
}

impl SideDecorations {
    /// Place content in its slot, replacing what was there. A per-row
    /// transform replaces the side's previous transform instead.
    pub fn insert(&mut self, alignment: Alignment, content: DecorationContent) {
        match content {
            DecorationContent::PerRow(t) => self.transform = Some(t),
            other => self.slots[alignment.slot()] = Some(other),
        }
    }

    #[must_use]
    pub fn slot(&self, alignment: Alignment) -> Option<&DecorationContent> {
        self.slots[alignment.slot()].as_ref()
    }

    #[must_use]
    pub fn transform(&self) -> Option<&dyn RowTransform> {
        self.transform.as_deref()
    }

    /// True when at least one slot is filled.
    #[must_use]
    pub fn has_slots(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }

    /// True when no slot is filled and no transform is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none) && self.transform.is_none()
    }

    /// Evaluate the three slots against an edge, in slot order.
    #[must_use]
    pub fn evaluate(&self, length: usize, fill: &str) -> [String; 3] {
        [Alignment::Left, Alignment::Center, Alignment::Right]
            .map(|a| self.slot(a).map(|c| c.evaluate(length, fill)).unwrap_or_default())
    }
}

impl fmt::Debug for dyn RowTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RowTransform")
    }
}
