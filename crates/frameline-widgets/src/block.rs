#![forbid(unsafe_code)]

//! The border assembler.
//!
//! A [`Block`] holds a border configuration and draws it around a
//! [`BodyLines`] rectangle: top edge, one left and right glyph per body line,
//! bottom edge. Rendering is pure; the same block can be rendered any number
//! of times and re-evaluates its decorations each time.

use frameline_style::{BorderStyler, Color, SgrStyler};
use tracing::{debug_span, trace};

use crate::body::BodyLines;
use crate::borders::{Border, BorderSide, BorderType, Borders};
use crate::decoration::{Decoration, DecorationContent, SideDecorations};
use crate::edge::{render_decorated_horizontal_edge, render_horizontal_edge};
use crate::geometry::resolve;
use crate::vertical::{render_vertical_edge, vertical_fill};

/// A bordered block.
///
/// # Example
/// ```
/// use frameline_style::PlainStyler;
/// use frameline_widgets::{Alignment, BodyLines, Block, Border, BorderSide, Decoration};
///
/// let block = Block::bordered(Border::ROUNDED)
///     .decoration(Decoration::new(BorderSide::Top, Alignment::Left, "Hi"));
/// let out = block.render_with(&BodyLines::from_text("body"), &PlainStyler);
/// assert_eq!(out, "╭Hi──╮\n│body│\n╰────╯");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Block {
    border: Border,
    sides: Option<Borders>,
    foreground: [Option<Color>; 4],
    background: [Option<Color>; 4],
    decorations: [SideDecorations; 4],
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    /// A block drawing `border` on every side.
    pub fn bordered(border: Border) -> Self {
        Self::default().border(border)
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn border_type(self, border_type: BorderType) -> Self {
        self.border(border_type.to_border())
    }

    /// Set the drawn sides explicitly.
    pub fn borders(mut self, borders: Borders) -> Self {
        self.sides = Some(borders);
        self
    }

    /// Turn one side on or off. The first call switches the block from
    /// implicit sides to an explicit mask starting empty.
    pub fn border_side(mut self, side: BorderSide, enabled: bool) -> Self {
        let mut sides = self.sides.unwrap_or(Borders::NONE);
        sides.set(Borders::from_side(side), enabled);
        self.sides = Some(sides);
        self
    }

    pub fn border_top(self, enabled: bool) -> Self {
        self.border_side(BorderSide::Top, enabled)
    }

    pub fn border_right(self, enabled: bool) -> Self {
        self.border_side(BorderSide::Right, enabled)
    }

    pub fn border_bottom(self, enabled: bool) -> Self {
        self.border_side(BorderSide::Bottom, enabled)
    }

    pub fn border_left(self, enabled: bool) -> Self {
        self.border_side(BorderSide::Left, enabled)
    }

    /// Foreground color of every side.
    pub fn border_foreground(mut self, color: impl Into<Color>) -> Self {
        self.foreground = [Some(color.into()); 4];
        self
    }

    /// Background color of every side.
    pub fn border_background(mut self, color: impl Into<Color>) -> Self {
        self.background = [Some(color.into()); 4];
        self
    }

    pub fn side_foreground(mut self, side: BorderSide, color: impl Into<Color>) -> Self {
        self.foreground[side.as_index()] = Some(color.into());
        self
    }

    pub fn side_background(mut self, side: BorderSide, color: impl Into<Color>) -> Self {
        self.background[side.as_index()] = Some(color.into());
        self
    }

    /// Attach a decoration, replacing whatever occupied its slot.
    pub fn decoration(mut self, decoration: Decoration) -> Self {
        let (side, alignment, content) = decoration.into_parts();
        if side.is_horizontal() && matches!(content, DecorationContent::PerRow(_)) {
            trace!(?side, "per-row transform ignored on horizontal side");
            return self;
        }
        self.decorations[side.as_index()].insert(alignment, content);
        self
    }

    #[must_use]
    pub fn border_glyphs(&self) -> &Border {
        &self.border
    }

    #[must_use]
    pub fn decorations(&self, side: BorderSide) -> &SideDecorations {
        &self.decorations[side.as_index()]
    }

    /// The sides that will be drawn. Without an explicit mask a non-empty
    /// border draws all four.
    #[must_use]
    pub fn enabled_sides(&self) -> Borders {
        match self.sides {
            Some(sides) => sides,
            None if self.border.is_empty() => Borders::NONE,
            None => Borders::ALL,
        }
    }

    /// Columns taken by the left and right borders.
    #[must_use]
    pub fn horizontal_border_size(&self) -> usize {
        let sides = self.enabled_sides();
        let mut size = 0;
        if sides.has(BorderSide::Left) {
            size += self.border.left_size();
        }
        if sides.has(BorderSide::Right) {
            size += self.border.right_size();
        }
        size
    }

    /// Rows taken by the top and bottom borders.
    #[must_use]
    pub fn vertical_border_size(&self) -> usize {
        let sides = self.enabled_sides();
        let mut size = 0;
        if sides.has(BorderSide::Top) {
            size += self.border.top_size();
        }
        if sides.has(BorderSide::Bottom) {
            size += self.border.bottom_size();
        }
        size
    }

    /// `(horizontal, vertical)` border sizes.
    #[must_use]
    pub fn frame_size(&self) -> (usize, usize) {
        (self.horizontal_border_size(), self.vertical_border_size())
    }

    /// Render with colors styled for the terminal described by the
    /// environment.
    #[must_use]
    pub fn render(&self, body: &BodyLines) -> String {
        self.render_with(body, &SgrStyler::from_env())
    }

    /// Split `text` into body lines and render it.
    #[must_use]
    pub fn render_text(&self, text: &str) -> String {
        self.render(&BodyLines::from_text(text))
    }

    /// Render around `body`, styling border glyphs with `styler`.
    ///
    /// Returns the body lines joined by newlines when no side is drawn.
    #[must_use]
    pub fn render_with<S>(&self, body: &BodyLines, styler: &S) -> String
    where
        S: BorderStyler + ?Sized,
    {
        let sides = self.enabled_sides();
        let _span = debug_span!(
            "border_render",
            width = body.width(),
            height = body.height(),
            sides = sides.bits()
        )
        .entered();

        if sides.is_empty() || self.border.is_empty() {
            return body.lines().join("\n");
        }

        let b = resolve(sides, &self.border);
        let width = body.width();
        let height = body.height();
        let mut out = String::new();

        if sides.has(BorderSide::Top) {
            out.push_str(&self.horizontal_edge(
                BorderSide::Top,
                [&*b.top_left, &*b.top, &*b.top_right],
                width,
                styler,
            ));
            out.push('\n');
        }

        let left = sides
            .has(BorderSide::Left)
            .then(|| self.vertical_edge(BorderSide::Left, &b.left, height));
        let right = sides
            .has(BorderSide::Right)
            .then(|| self.vertical_edge(BorderSide::Right, &b.right, height));

        for (i, line) in body.lines().iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            if let Some(glyph) = left.as_ref().and_then(|rows| rows.get(i)) {
                out.push_str(&self.paint(styler, BorderSide::Left, glyph));
            }
            out.push_str(line);
            if let Some(glyph) = right.as_ref().and_then(|rows| rows.get(i)) {
                out.push_str(&self.paint(styler, BorderSide::Right, glyph));
            }
        }

        if sides.has(BorderSide::Bottom) {
            out.push('\n');
            out.push_str(&self.horizontal_edge(
                BorderSide::Bottom,
                [&*b.bottom_left, &*b.bottom, &*b.bottom_right],
                width,
                styler,
            ));
        }

        out
    }

    fn horizontal_edge<S>(
        &self,
        side: BorderSide,
        [left, fill, right]: [&str; 3],
        width: usize,
        styler: &S,
    ) -> String
    where
        S: BorderStyler + ?Sized,
    {
        let decorations = &self.decorations[side.as_index()];
        if decorations.has_slots() {
            render_decorated_horizontal_edge(left, fill, right, width, decorations, |text| {
                self.paint(styler, side, text)
            })
        } else {
            self.paint(styler, side, &render_horizontal_edge(left, fill, right, width))
        }
    }

    fn vertical_edge(&self, side: BorderSide, fill: &str, height: usize) -> Vec<String> {
        let rows = vertical_fill(fill, height);
        let decorations = &self.decorations[side.as_index()];
        if decorations.is_empty() {
            rows
        } else {
            render_vertical_edge(rows, fill, decorations)
        }
    }

    fn paint<S>(&self, styler: &S, side: BorderSide, text: &str) -> String
    where
        S: BorderStyler + ?Sized,
    {
        let i = side.as_index();
        styler.style(text, self.foreground[i], self.background[i])
    }
}
